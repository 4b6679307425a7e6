use super::*;

/// Tests creating an edition for an existing conference.
///
/// Expected: Ok with every field persisted
#[tokio::test]
async fn creates_edition() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let conference = factory::create_conference(db).await?;

    let repo = EditionRepository::new(db);
    let edition = repo
        .create(EditionParam {
            conference_id: conference.id,
            year: 2025,
            date: date(2025, 9, 2),
            city: "Utrecht".to_string(),
        })
        .await?;

    assert_eq!(edition.conference_id, conference.id);
    assert_eq!(edition.year, 2025);
    assert_eq!(edition.date, date(2025, 9, 2));
    assert_eq!(edition.city, "Utrecht");

    Ok(())
}

/// Tests that the foreign key rejects an unknown conference.
///
/// Expected: Err with no edition row written
#[tokio::test]
async fn fails_for_nonexistent_conference() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = EditionRepository::new(db);
    let result = repo
        .create(EditionParam {
            conference_id: 999,
            year: 2025,
            date: date(2025, 9, 2),
            city: "Utrecht".to_string(),
        })
        .await;

    assert!(result.is_err());
    assert_eq!(entity::prelude::Edition::find().count(db).await?, 0);

    Ok(())
}
