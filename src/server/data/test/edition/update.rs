use super::*;

/// Tests full replacement, including moving the edition to another conference.
///
/// Expected: Ok with every field replaced
#[tokio::test]
async fn replaces_all_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_conference(db).await?;
    let second = factory::create_conference(db).await?;
    let edition = factory::create_edition(db, first.id).await?;

    let repo = EditionRepository::new(db);
    let updated = repo
        .update(
            edition.id,
            EditionParam {
                conference_id: second.id,
                year: 2030,
                date: date(2030, 1, 31),
                city: "Oslo".to_string(),
            },
        )
        .await?;

    assert_eq!(updated.id, edition.id);
    assert_eq!(updated.conference_id, second.id);
    assert_eq!(updated.year, 2030);
    assert_eq!(updated.date, date(2030, 1, 31));
    assert_eq!(updated.city, "Oslo");

    Ok(())
}

/// Tests updating an unknown edition.
///
/// Expected: Err(RecordNotFound)
#[tokio::test]
async fn fails_for_nonexistent_edition() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let conference = factory::create_conference(db).await?;

    let repo = EditionRepository::new(db);
    let result = repo
        .update(
            77,
            EditionParam {
                conference_id: conference.id,
                year: 2030,
                date: date(2030, 1, 31),
                city: "Oslo".to_string(),
            },
        )
        .await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}
