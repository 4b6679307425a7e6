//! Edition factory for creating test edition entities.

use crate::factory::helpers::next_id;
use chrono::NaiveDate;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test editions with customizable fields.
///
/// Defaults:
/// - year: `2024`
/// - date: `2024-06-15`
/// - city: `"City {id}"`
pub struct EditionFactory<'a> {
    db: &'a DatabaseConnection,
    conference_id: i32,
    year: i32,
    date: NaiveDate,
    city: String,
}

impl<'a> EditionFactory<'a> {
    /// Creates a new EditionFactory for the given conference.
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `conference_id` - Conference the edition belongs to
    pub fn new(db: &'a DatabaseConnection, conference_id: i32) -> Self {
        Self {
            db,
            conference_id,
            year: 2024,
            date: NaiveDate::from_ymd_opt(2024, 6, 15).unwrap_or_default(),
            city: format!("City {}", next_id()),
        }
    }

    /// Sets the edition year.
    pub fn year(mut self, year: i32) -> Self {
        self.year = year;
        self
    }

    /// Sets the edition date.
    pub fn date(mut self, date: NaiveDate) -> Self {
        self.date = date;
        self
    }

    /// Sets the hosting city.
    pub fn city(mut self, city: impl Into<String>) -> Self {
        self.city = city.into();
        self
    }

    /// Builds and inserts the edition entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::edition::Model)` - Created edition entity
    /// - `Err(DbErr)` - Database error during insert, including a missing conference
    pub async fn build(self) -> Result<entity::edition::Model, DbErr> {
        entity::edition::ActiveModel {
            conference_id: ActiveValue::Set(self.conference_id),
            year: ActiveValue::Set(self.year),
            date: ActiveValue::Set(self.date),
            city: ActiveValue::Set(self.city),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an edition with default values for the given conference.
pub async fn create_edition(
    db: &DatabaseConnection,
    conference_id: i32,
) -> Result<entity::edition::Model, DbErr> {
    EditionFactory::new(db, conference_id).build().await
}
