//! Researcher factory for creating test researcher entities.

use crate::factory::helpers::next_letters;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test researchers with customizable fields.
///
/// Default name parts are built from letters only so they pass name validation
/// when round-tripped through the service layer.
pub struct ResearcherFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    surname: String,
    second_surname: String,
    university: String,
}

impl<'a> ResearcherFactory<'a> {
    /// Creates a new ResearcherFactory with unique default names.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let suffix = next_letters();
        Self {
            db,
            name: format!("Name{}", suffix),
            surname: format!("Surname{}", suffix),
            second_surname: format!("Second{}", suffix),
            university: format!("University {}", suffix),
        }
    }

    /// Sets the first name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the surname.
    pub fn surname(mut self, surname: impl Into<String>) -> Self {
        self.surname = surname.into();
        self
    }

    /// Sets the second surname.
    pub fn second_surname(mut self, second_surname: impl Into<String>) -> Self {
        self.second_surname = second_surname.into();
        self
    }

    /// Sets the university.
    pub fn university(mut self, university: impl Into<String>) -> Self {
        self.university = university.into();
        self
    }

    /// Builds and inserts the researcher entity into the database.
    pub async fn build(self) -> Result<entity::researcher::Model, DbErr> {
        entity::researcher::ActiveModel {
            name: ActiveValue::Set(self.name),
            surname: ActiveValue::Set(self.surname),
            second_surname: ActiveValue::Set(self.second_surname),
            university: ActiveValue::Set(self.university),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a researcher with default values.
pub async fn create_researcher(db: &DatabaseConnection) -> Result<entity::researcher::Model, DbErr> {
    ResearcherFactory::new(db).build().await
}
