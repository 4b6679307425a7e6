use super::*;

/// Tests replacing title and edition.
///
/// Expected: Ok with both fields replaced
#[tokio::test]
async fn replaces_title_and_edition() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (conference, _, article) = factory::helpers::create_article_with_dependencies(db).await?;
    let other_edition = factory::create_edition(db, conference.id).await?;

    let repo = ArticleRepository::new(db);
    let updated = repo
        .update(
            article.id,
            ArticleParam {
                edition_id: other_edition.id,
                title: "Revised title".to_string(),
            },
        )
        .await?;

    assert_eq!(updated.edition_id, other_edition.id);
    assert_eq!(updated.title, "Revised title");

    Ok(())
}

/// Tests moving an article to an edition that does not exist.
///
/// Expected: Err with the stored article unchanged
#[tokio::test]
async fn rejects_unknown_edition() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, edition, article) = factory::helpers::create_article_with_dependencies(db).await?;

    let repo = ArticleRepository::new(db);
    let result = repo
        .update(
            article.id,
            ArticleParam {
                edition_id: edition.id + 100,
                title: "Revised title".to_string(),
            },
        )
        .await;

    assert!(result.is_err());
    let stored = repo.find_by_id(article.id).await?.unwrap();
    assert_eq!(stored.edition_id, edition.id);

    Ok(())
}
