//! Conference factory for creating test conference entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test conferences with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let conference = ConferenceFactory::new(&db)
///     .name("RustConf")
///     .build()
///     .await?;
/// ```
pub struct ConferenceFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
}

impl<'a> ConferenceFactory<'a> {
    /// Creates a new ConferenceFactory with default name `"Conference {id}"`.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            name: format!("Conference {}", next_id()),
        }
    }

    /// Sets the name for the conference.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Builds and inserts the conference entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::conference::Model)` - Created conference entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::conference::Model, DbErr> {
        entity::conference::ActiveModel {
            name: ActiveValue::Set(self.name),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a conference with default values.
///
/// Shorthand for `ConferenceFactory::new(db).build().await`.
pub async fn create_conference(db: &DatabaseConnection) -> Result<entity::conference::Model, DbErr> {
    ConferenceFactory::new(db).build().await
}
