use super::*;

/// Tests creating and then replacing a researcher.
///
/// Expected: Ok with every field persisted, then replaced
#[tokio::test]
async fn creates_and_updates_researcher() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ResearcherRepository::new(db);
    let researcher = repo
        .create(ResearcherParam {
            name: "Grace".to_string(),
            surname: "Hopper".to_string(),
            second_surname: "Murray".to_string(),
            university: "Yale University".to_string(),
        })
        .await?;

    assert_eq!(researcher.second_surname, "Murray");

    let updated = repo
        .update(
            researcher.id,
            ResearcherParam {
                name: "Grace".to_string(),
                surname: "Hopper".to_string(),
                second_surname: "Brewster".to_string(),
                university: "Vassar College".to_string(),
            },
        )
        .await?;

    assert_eq!(updated.id, researcher.id);
    assert_eq!(updated.second_surname, "Brewster");
    assert_eq!(updated.university, "Vassar College");

    Ok(())
}

/// Tests updating an unknown researcher.
///
/// Expected: Err(RecordNotFound)
#[tokio::test]
async fn update_fails_for_nonexistent_researcher() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ResearcherRepository::new(db);
    let result = repo
        .update(
            5,
            ResearcherParam {
                name: "Grace".to_string(),
                surname: "Hopper".to_string(),
                second_surname: "Brewster".to_string(),
                university: "Vassar College".to_string(),
            },
        )
        .await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}
