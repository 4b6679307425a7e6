use sea_orm::DatabaseConnection;

use crate::server::{
    data::{conference::ConferenceRepository, edition::EditionRepository},
    error::{AppError, ErrorContext},
    model::{
        edition::{Edition, EditionFilter, EditionParam},
        page::PageParam,
    },
};

pub struct EditionService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EditionService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates an edition after checking its conference exists
    ///
    /// # Returns
    /// - `Ok(Edition)`: The created edition
    /// - `Err(AppError::NotFound)`: Referenced conference does not exist, nothing persisted
    pub async fn create(&self, param: EditionParam) -> Result<Edition, AppError> {
        self.ensure_conference(param.conference_id, "creating edition")
            .await?;

        EditionRepository::new(self.db)
            .create(param)
            .await
            .during("creating edition")
    }

    /// Replaces every mutable field of an existing edition
    pub async fn update(&self, id: i32, param: EditionParam) -> Result<Edition, AppError> {
        let repo = EditionRepository::new(self.db);

        if !repo.exists(id).await.during("updating edition")? {
            return Err(not_found(id));
        }
        self.ensure_conference(param.conference_id, "updating edition")
            .await?;

        repo.update(id, param)
            .await
            .during_or_missing("updating edition", || not_found(id))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Edition, AppError> {
        EditionRepository::new(self.db)
            .find_by_id(id)
            .await
            .during("retrieving edition")?
            .ok_or_else(|| not_found(id))
    }

    /// Deletes an edition and, through the foreign key cascade, its articles
    pub async fn delete(&self, id: i32) -> Result<Edition, AppError> {
        let repo = EditionRepository::new(self.db);

        let edition = repo
            .find_by_id(id)
            .await
            .during("deleting edition")?
            .ok_or_else(|| not_found(id))?;

        repo.delete(id).await.during("deleting edition")?;

        Ok(edition)
    }

    pub async fn get_paginated(
        &self,
        filter: EditionFilter,
        page: PageParam,
    ) -> Result<Vec<Edition>, AppError> {
        EditionRepository::new(self.db)
            .get_paginated(filter, page)
            .await
            .during("retrieving editions")
    }

    async fn ensure_conference(&self, id: i32, action: &'static str) -> Result<(), AppError> {
        if ConferenceRepository::new(self.db)
            .exists(id)
            .await
            .during(action)?
        {
            Ok(())
        } else {
            Err(AppError::NotFound("Conference not found".to_string()))
        }
    }
}

fn not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Edition with id {} not found", id))
}
