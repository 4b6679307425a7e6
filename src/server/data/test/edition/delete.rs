use super::*;

/// Tests that deleting an edition cascades to its articles only.
///
/// Expected: Ok(1), the edition's article removed, the sibling edition's article kept
#[tokio::test]
async fn cascades_to_articles() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (conference, edition, _) = factory::helpers::create_article_with_dependencies(db).await?;
    let sibling = factory::create_edition(db, conference.id).await?;
    let kept = factory::create_article(db, sibling.id).await?;

    let repo = EditionRepository::new(db);

    assert_eq!(repo.delete(edition.id).await?, 1);
    assert!(!repo.exists(edition.id).await?);
    assert_eq!(entity::prelude::Article::find().count(db).await?, 1);
    assert!(entity::prelude::Article::find_by_id(kept.id)
        .one(db)
        .await?
        .is_some());

    Ok(())
}
