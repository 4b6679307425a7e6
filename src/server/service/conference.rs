use sea_orm::DatabaseConnection;

use crate::server::{
    data::conference::ConferenceRepository,
    error::{AppError, ErrorContext},
    model::{
        conference::{Conference, ConferenceFilter, ConferenceParam},
        page::PageParam,
    },
};

pub struct ConferenceService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ConferenceService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new conference
    pub async fn create(&self, param: ConferenceParam) -> Result<Conference, AppError> {
        let repo = ConferenceRepository::new(self.db);

        repo.create(param).await.during("creating conference")
    }

    /// Replaces every mutable field of an existing conference
    pub async fn update(&self, id: i32, param: ConferenceParam) -> Result<Conference, AppError> {
        let repo = ConferenceRepository::new(self.db);

        if !repo.exists(id).await.during("updating conference")? {
            return Err(not_found(id));
        }

        repo.update(id, param)
            .await
            .during_or_missing("updating conference", || not_found(id))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Conference, AppError> {
        let repo = ConferenceRepository::new(self.db);

        repo.find_by_id(id)
            .await
            .during("retrieving conference")?
            .ok_or_else(|| not_found(id))
    }

    /// Deletes a conference together with its editions and their articles
    ///
    /// # Returns
    /// - `Ok(Conference)`: The conference as it was before deletion
    /// - `Err(AppError::NotFound)`: No conference with that ID
    /// - `Err(AppError::Persistence)`: The cascade was blocked, e.g. by authorship rows
    pub async fn delete(&self, id: i32) -> Result<Conference, AppError> {
        let repo = ConferenceRepository::new(self.db);

        let conference = repo
            .find_by_id(id)
            .await
            .during("deleting conference")?
            .ok_or_else(|| not_found(id))?;

        repo.delete(id).await.during("deleting conference")?;

        Ok(conference)
    }

    pub async fn get_paginated(
        &self,
        filter: ConferenceFilter,
        page: PageParam,
    ) -> Result<Vec<Conference>, AppError> {
        let repo = ConferenceRepository::new(self.db);

        repo.get_paginated(filter, page)
            .await
            .during("retrieving conferences")
    }
}

fn not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Conference with id {} not found", id))
}
