use super::*;

/// Tests that an author row blocks deleting its researcher.
///
/// Expected: Err with researcher and author row kept
#[tokio::test]
async fn is_blocked_by_author_rows() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, researcher, author) = factory::helpers::create_authorship(db).await?;

    let repo = ResearcherRepository::new(db);
    let result = repo.delete(researcher.id).await;

    assert!(result.is_err());
    assert!(repo.exists(researcher.id).await?);
    assert!(entity::prelude::Author::find_by_id(author.id)
        .one(db)
        .await?
        .is_some());

    Ok(())
}

/// Tests deleting a researcher without authorship rows.
///
/// Expected: Ok(1)
#[tokio::test]
async fn deletes_unreferenced_researcher() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let researcher = factory::create_researcher(db).await?;

    let repo = ResearcherRepository::new(db);

    assert_eq!(repo.delete(researcher.id).await?, 1);
    assert!(!repo.exists(researcher.id).await?);

    Ok(())
}
