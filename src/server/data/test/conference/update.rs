use super::*;

/// Tests replacing a conference name.
///
/// Expected: Ok with the new name persisted
#[tokio::test]
async fn updates_name() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let conference = factory::create_conference(db).await?;

    let repo = ConferenceRepository::new(db);
    let updated = repo
        .update(
            conference.id,
            ConferenceParam {
                name: "Renamed".to_string(),
            },
        )
        .await?;

    assert_eq!(updated.id, conference.id);
    assert_eq!(updated.name, "Renamed");

    Ok(())
}

/// Tests updating an unknown conference.
///
/// Expected: Err(RecordNotFound) and existing rows untouched
#[tokio::test]
async fn fails_for_nonexistent_conference() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::create_conference(db).await?;

    let repo = ConferenceRepository::new(db);
    let result = repo
        .update(
            existing.id + 100,
            ConferenceParam {
                name: "Ghost".to_string(),
            },
        )
        .await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));
    let stored = repo.find_by_id(existing.id).await?.unwrap();
    assert_eq!(stored.name, existing.name);

    Ok(())
}
