use crate::server::{
    data::author::AuthorRepository,
    model::{author::AuthorParam, page::PageParam},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

/// Tests creating an authorship link.
///
/// Expected: Ok with both references persisted
#[tokio::test]
async fn creates_author() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, article) = factory::helpers::create_article_with_dependencies(db).await?;
    let researcher = factory::create_researcher(db).await?;

    let repo = AuthorRepository::new(db);
    let author = repo
        .create(AuthorParam {
            article_id: article.id,
            researcher_id: researcher.id,
        })
        .await?;

    assert_eq!(author.article_id, article.id);
    assert_eq!(author.researcher_id, researcher.id);

    Ok(())
}

/// Tests that the foreign keys reject a link to a missing researcher.
///
/// Expected: Err
#[tokio::test]
async fn create_fails_for_nonexistent_researcher() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, article) = factory::helpers::create_article_with_dependencies(db).await?;

    let repo = AuthorRepository::new(db);
    let result = repo
        .create(AuthorParam {
            article_id: article.id,
            researcher_id: 404,
        })
        .await;

    assert!(result.is_err());

    Ok(())
}

/// Tests re-pointing and then deleting a link.
///
/// Expected: update replaces the researcher, delete removes the row
#[tokio::test]
async fn updates_and_deletes_author() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (article, _, author) = factory::helpers::create_authorship(db).await?;
    let replacement = factory::create_researcher(db).await?;

    let repo = AuthorRepository::new(db);
    let updated = repo
        .update(
            author.id,
            AuthorParam {
                article_id: article.id,
                researcher_id: replacement.id,
            },
        )
        .await?;

    assert_eq!(updated.researcher_id, replacement.id);
    assert_eq!(repo.delete(author.id).await?, 1);
    assert!(repo.find_by_id(author.id).await?.is_none());
    assert!(repo
        .get_paginated(PageParam { index: 0, size: 10 })
        .await?
        .is_empty());

    Ok(())
}
