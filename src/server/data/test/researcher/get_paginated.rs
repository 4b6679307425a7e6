use super::*;

async fn seed(db: &sea_orm::DatabaseConnection) -> Result<(), DbErr> {
    factory::researcher::ResearcherFactory::new(db)
        .name("Alan")
        .surname("Turing")
        .second_surname("Stoney")
        .university("University of Manchester")
        .build()
        .await?;
    factory::researcher::ResearcherFactory::new(db)
        .name("Alonzo")
        .surname("Church")
        .second_surname("Stoney")
        .university("Princeton University")
        .build()
        .await?;
    factory::researcher::ResearcherFactory::new(db)
        .name("Barbara")
        .surname("Liskov")
        .second_surname("Huberman")
        .university("MIT")
        .build()
        .await?;
    Ok(())
}

/// Tests each substring filter.
///
/// Expected: matches per column, ordered by ID
#[tokio::test]
async fn filters_each_column_by_substring() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    seed(db).await?;

    let repo = ResearcherRepository::new(db);

    let by_name = repo
        .get_paginated(ResearcherFilter::NameContains("Al".to_string()), all())
        .await?;
    let by_surname = repo
        .get_paginated(ResearcherFilter::SurnameContains("Lis".to_string()), all())
        .await?;
    let by_second = repo
        .get_paginated(
            ResearcherFilter::SecondSurnameContains("Stoney".to_string()),
            all(),
        )
        .await?;
    let by_university = repo
        .get_paginated(
            ResearcherFilter::UniversityContains("University".to_string()),
            all(),
        )
        .await?;

    assert_eq!(
        by_name.iter().map(|r| r.name.as_str()).collect::<Vec<_>>(),
        vec!["Alan", "Alonzo"]
    );
    assert_eq!(by_surname.len(), 1);
    assert_eq!(by_surname[0].name, "Barbara");
    assert_eq!(by_second.len(), 2);
    assert_eq!(by_university.len(), 2);

    Ok(())
}

/// Tests that unfiltered listing honours the page size.
///
/// Expected: two researchers on the first page, one on the second
#[tokio::test]
async fn paginates_all_researchers() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    seed(db).await?;

    let repo = ResearcherRepository::new(db);

    let first = repo
        .get_paginated(ResearcherFilter::All, PageParam { index: 0, size: 2 })
        .await?;
    let second = repo
        .get_paginated(ResearcherFilter::All, PageParam { index: 1, size: 2 })
        .await?;

    assert_eq!(first.len(), 2);
    assert_eq!(second.len(), 1);

    Ok(())
}
