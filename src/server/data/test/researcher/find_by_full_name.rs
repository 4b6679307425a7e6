use super::*;

/// Tests exact full-name lookup.
///
/// Expected: the researcher whose three name parts all match
#[tokio::test]
async fn finds_exact_match() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let target = factory::researcher::ResearcherFactory::new(db)
        .name("Ada")
        .surname("Lovelace")
        .second_surname("Byron")
        .build()
        .await?;
    factory::researcher::ResearcherFactory::new(db)
        .name("Ada")
        .surname("Lovelace")
        .second_surname("King")
        .build()
        .await?;

    let repo = ResearcherRepository::new(db);
    let found = repo
        .find_by_full_name(&FullNameParam {
            name: "Ada".to_string(),
            surname: "Lovelace".to_string(),
            second_surname: "Byron".to_string(),
        })
        .await?;

    assert_eq!(found.map(|r| r.id), Some(target.id));

    Ok(())
}

/// Tests that partial names do not match.
///
/// Expected: Ok(None)
#[tokio::test]
async fn ignores_partial_matches() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::researcher::ResearcherFactory::new(db)
        .name("Ada")
        .surname("Lovelace")
        .second_surname("Byron")
        .build()
        .await?;

    let repo = ResearcherRepository::new(db);
    let found = repo
        .find_by_full_name(&FullNameParam {
            name: "Ada".to_string(),
            surname: "Love".to_string(),
            second_surname: "Byron".to_string(),
        })
        .await?;

    assert!(found.is_none());

    Ok(())
}
