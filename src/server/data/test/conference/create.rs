use super::*;

/// Tests creating a conference.
///
/// Verifies that the repository inserts the row and returns it with a generated ID.
///
/// Expected: Ok with conference created
#[tokio::test]
async fn creates_conference() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ConferenceRepository::new(db);
    let conference = repo
        .create(ConferenceParam {
            name: "RustConf".to_string(),
        })
        .await?;

    assert!(conference.id > 0);
    assert_eq!(conference.name, "RustConf");

    let stored = entity::prelude::Conference::find_by_id(conference.id)
        .one(db)
        .await?;
    assert_eq!(stored.map(|c| c.name), Some("RustConf".to_string()));

    Ok(())
}

/// Tests existence checks for present and absent conferences.
///
/// Expected: true for a created conference, false for an unknown ID
#[tokio::test]
async fn reports_existence() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let conference = factory::create_conference(db).await?;
    let repo = ConferenceRepository::new(db);

    assert!(repo.exists(conference.id).await?);
    assert!(!repo.exists(conference.id + 100).await?);

    Ok(())
}
