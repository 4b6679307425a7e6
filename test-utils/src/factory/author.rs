//! Author factory for creating authorship links between articles and researchers.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates an author row linking an article to a researcher.
///
/// # Arguments
/// - `db` - Database connection
/// - `article_id` - Authored article
/// - `researcher_id` - Researcher credited on the article
///
/// # Returns
/// - `Ok(entity::author::Model)` - Created author entity
/// - `Err(DbErr)` - Database error during insert, including missing references
pub async fn create_author(
    db: &DatabaseConnection,
    article_id: i32,
    researcher_id: i32,
) -> Result<entity::author::Model, DbErr> {
    entity::author::ActiveModel {
        article_id: ActiveValue::Set(article_id),
        researcher_id: ActiveValue::Set(researcher_id),
        ..Default::default()
    }
    .insert(db)
    .await
}
