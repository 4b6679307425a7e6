use super::*;

async fn seed(db: &sea_orm::DatabaseConnection) -> Result<(), DbErr> {
    let conference = factory::create_conference(db).await?;
    for (year, day, city) in [
        (2019, date(2019, 5, 1), "Lisbon"),
        (2021, date(2021, 6, 1), "Berlin"),
        (2023, date(2023, 7, 1), "New Berlin"),
        (2025, date(2025, 8, 1), "Madrid"),
    ] {
        factory::edition::EditionFactory::new(db, conference.id)
            .year(year)
            .date(day)
            .city(city)
            .build()
            .await?;
    }
    Ok(())
}

/// Tests filtering by exact year.
///
/// Expected: the single 2021 edition
#[tokio::test]
async fn filters_by_year() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    seed(db).await?;

    let repo = EditionRepository::new(db);
    let editions = repo.get_paginated(EditionFilter::Year(2021), all()).await?;

    assert_eq!(editions.len(), 1);
    assert_eq!(editions[0].city, "Berlin");

    Ok(())
}

/// Tests that the year range includes both bounds.
///
/// Expected: editions from 2021, 2023 and 2025
#[tokio::test]
async fn filters_by_inclusive_year_range() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    seed(db).await?;

    let repo = EditionRepository::new(db);
    let editions = repo
        .get_paginated(EditionFilter::YearBetween { start: 2021, end: 2025 }, all())
        .await?;

    let years: Vec<i32> = editions.iter().map(|e| e.year).collect();
    assert_eq!(years, vec![2021, 2023, 2025]);

    Ok(())
}

/// Tests substring filtering by city.
///
/// Expected: both Berlin editions
#[tokio::test]
async fn filters_by_city_substring() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    seed(db).await?;

    let repo = EditionRepository::new(db);
    let editions = repo
        .get_paginated(EditionFilter::CityContains("Berlin".to_string()), all())
        .await?;

    assert_eq!(editions.len(), 2);

    Ok(())
}

/// Tests filtering by exact date.
///
/// Expected: the Madrid edition only
#[tokio::test]
async fn filters_by_date() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    seed(db).await?;

    let repo = EditionRepository::new(db);
    let editions = repo
        .get_paginated(EditionFilter::Date(date(2025, 8, 1)), all())
        .await?;

    assert_eq!(editions.len(), 1);
    assert_eq!(editions[0].city, "Madrid");

    Ok(())
}
