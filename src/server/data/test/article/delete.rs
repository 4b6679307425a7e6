use super::*;

/// Tests deleting an article without authors.
///
/// Expected: Ok(1) and the row gone
#[tokio::test]
async fn deletes_unreferenced_article() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, article) = factory::helpers::create_article_with_dependencies(db).await?;

    let repo = ArticleRepository::new(db);

    assert_eq!(repo.delete(article.id).await?, 1);
    assert!(repo.find_by_id(article.id).await?.is_none());

    Ok(())
}

/// Tests that an author row blocks deleting its article.
///
/// Expected: Err with both the article and the author row kept
#[tokio::test]
async fn is_blocked_by_author_rows() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (article, _, author) = factory::helpers::create_authorship(db).await?;

    let repo = ArticleRepository::new(db);
    let result = repo.delete(article.id).await;

    assert!(result.is_err());
    assert!(repo.exists(article.id).await?);
    assert!(entity::prelude::Author::find_by_id(author.id)
        .one(db)
        .await?
        .is_some());
    assert_eq!(entity::prelude::Author::find().count(db).await?, 1);

    Ok(())
}
