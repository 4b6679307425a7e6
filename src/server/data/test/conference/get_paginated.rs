use super::*;

/// Tests that pages are sliced in ID order.
///
/// Expected: second page of size 2 holds the third and fourth conferences
#[tokio::test]
async fn returns_requested_page_in_id_order() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let mut ids = Vec::new();
    for _ in 0..5 {
        ids.push(factory::create_conference(db).await?.id);
    }

    let repo = ConferenceRepository::new(db);
    let conferences = repo.get_paginated(ConferenceFilter::All, page(1, 2)).await?;

    let returned: Vec<i32> = conferences.iter().map(|c| c.id).collect();
    assert_eq!(returned, vec![ids[2], ids[3]]);

    Ok(())
}

/// Tests substring filtering by name.
///
/// Expected: only conferences whose name contains the fragment
#[tokio::test]
async fn filters_by_name_substring() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::conference::ConferenceFactory::new(db)
        .name("International Rust Summit")
        .build()
        .await?;
    factory::conference::ConferenceFactory::new(db)
        .name("Rust Nation")
        .build()
        .await?;
    factory::conference::ConferenceFactory::new(db)
        .name("PyCon")
        .build()
        .await?;

    let repo = ConferenceRepository::new(db);
    let conferences = repo
        .get_paginated(ConferenceFilter::NameContains("Rust".to_string()), page(0, 10))
        .await?;

    assert_eq!(conferences.len(), 2);
    assert!(conferences.iter().all(|c| c.name.contains("Rust")));

    Ok(())
}

/// Tests a page past the last row.
///
/// Expected: Ok with an empty vector
#[tokio::test]
async fn returns_empty_page_past_end() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_conference(db).await?;

    let repo = ConferenceRepository::new(db);
    let conferences = repo.get_paginated(ConferenceFilter::All, page(3, 10)).await?;

    assert!(conferences.is_empty());

    Ok(())
}
