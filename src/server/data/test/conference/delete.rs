use super::*;

/// Tests that deleting a conference cascades to its editions and their articles.
///
/// Expected: Ok(1) with no editions or articles left
#[tokio::test]
async fn cascades_to_editions_and_articles() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (conference, edition, _) = factory::helpers::create_article_with_dependencies(db).await?;
    factory::create_edition(db, conference.id).await?;
    let other = factory::create_conference(db).await?;
    factory::create_edition(db, other.id).await?;

    let repo = ConferenceRepository::new(db);
    let deleted = repo.delete(conference.id).await?;

    assert_eq!(deleted, 1);
    assert!(entity::prelude::Edition::find_by_id(edition.id)
        .one(db)
        .await?
        .is_none());
    assert_eq!(entity::prelude::Edition::find().count(db).await?, 1);
    assert_eq!(entity::prelude::Article::find().count(db).await?, 0);

    Ok(())
}

/// Tests deleting an unknown conference.
///
/// Expected: Ok(0)
#[tokio::test]
async fn reports_zero_rows_for_nonexistent_conference() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ConferenceRepository::new(db);

    assert_eq!(repo.delete(42).await?, 0);

    Ok(())
}

/// Tests that the cascade stops at articles still credited to a researcher.
///
/// Expected: Err with the conference still present
#[tokio::test]
async fn is_blocked_by_authored_articles() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (article, _, _) = factory::helpers::create_authorship(db).await?;
    let edition = entity::prelude::Edition::find_by_id(article.edition_id)
        .one(db)
        .await?
        .unwrap();

    let repo = ConferenceRepository::new(db);
    let result = repo.delete(edition.conference_id).await;

    assert!(result.is_err());
    assert!(repo.exists(edition.conference_id).await?);

    Ok(())
}
