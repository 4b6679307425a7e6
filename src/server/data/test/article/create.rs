use super::*;

/// Tests creating an article in an existing edition.
///
/// Expected: Ok with title and edition persisted
#[tokio::test]
async fn creates_article() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let conference = factory::create_conference(db).await?;
    let edition = factory::create_edition(db, conference.id).await?;

    let repo = ArticleRepository::new(db);
    let article = repo
        .create(ArticleParam {
            edition_id: edition.id,
            title: "Ownership types in practice".to_string(),
        })
        .await?;

    assert_eq!(article.edition_id, edition.id);
    assert_eq!(article.title, "Ownership types in practice");
    assert!(repo.exists(article.id).await?);

    Ok(())
}

/// Tests pagination over articles.
///
/// Expected: first page of size 2 holds the two oldest articles
#[tokio::test]
async fn paginates_articles() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, edition, first) = factory::helpers::create_article_with_dependencies(db).await?;
    let second = factory::create_article(db, edition.id).await?;
    factory::create_article(db, edition.id).await?;

    let repo = ArticleRepository::new(db);
    let articles = repo.get_paginated(PageParam { index: 0, size: 2 }).await?;

    let ids: Vec<i32> = articles.iter().map(|a| a.id).collect();
    assert_eq!(ids, vec![first.id, second.id]);

    Ok(())
}
