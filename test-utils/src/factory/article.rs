//! Article factory for creating test article entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test articles with customizable fields.
pub struct ArticleFactory<'a> {
    db: &'a DatabaseConnection,
    edition_id: i32,
    title: String,
}

impl<'a> ArticleFactory<'a> {
    /// Creates a new ArticleFactory with default title `"Article {id}"`.
    pub fn new(db: &'a DatabaseConnection, edition_id: i32) -> Self {
        Self {
            db,
            edition_id,
            title: format!("Article {}", next_id()),
        }
    }

    /// Sets the article title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Builds and inserts the article entity into the database.
    pub async fn build(self) -> Result<entity::article::Model, DbErr> {
        entity::article::ActiveModel {
            edition_id: ActiveValue::Set(self.edition_id),
            title: ActiveValue::Set(self.title),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an article with default values in the given edition.
pub async fn create_article(
    db: &DatabaseConnection,
    edition_id: i32,
) -> Result<entity::article::Model, DbErr> {
    ArticleFactory::new(db, edition_id).build().await
}
