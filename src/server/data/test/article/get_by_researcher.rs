use super::*;

/// Tests collecting the articles credited to one researcher.
///
/// Expected: exactly the researcher's articles, each once
#[tokio::test]
async fn returns_only_authored_articles() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, edition, first) = factory::helpers::create_article_with_dependencies(db).await?;
    let second = factory::create_article(db, edition.id).await?;
    let unrelated = factory::create_article(db, edition.id).await?;
    let researcher = factory::create_researcher(db).await?;
    let other = factory::create_researcher(db).await?;

    factory::create_author(db, first.id, researcher.id).await?;
    factory::create_author(db, second.id, researcher.id).await?;
    factory::create_author(db, second.id, researcher.id).await?;
    factory::create_author(db, unrelated.id, other.id).await?;

    let repo = ArticleRepository::new(db);
    let articles = repo.get_by_researcher(researcher.id).await?;

    let mut ids: Vec<i32> = articles.iter().map(|a| a.id).collect();
    ids.sort();
    assert_eq!(ids, vec![first.id, second.id]);

    Ok(())
}

/// Tests a researcher without authorship rows.
///
/// Expected: Ok with an empty vector
#[tokio::test]
async fn returns_empty_for_researcher_without_articles() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::helpers::create_authorship(db).await?;
    let researcher = factory::create_researcher(db).await?;

    let repo = ArticleRepository::new(db);

    assert!(repo.get_by_researcher(researcher.id).await?.is_empty());

    Ok(())
}
