use sea_orm::DatabaseConnection;

use crate::server::{
    data::researcher::ResearcherRepository,
    error::{AppError, ErrorContext},
    model::{
        page::PageParam,
        researcher::{Researcher, ResearcherFilter, ResearcherParam},
    },
};

pub struct ResearcherService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ResearcherService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, param: ResearcherParam) -> Result<Researcher, AppError> {
        ResearcherRepository::new(self.db)
            .create(param)
            .await
            .during("creating researcher")
    }

    pub async fn update(&self, id: i32, param: ResearcherParam) -> Result<Researcher, AppError> {
        let repo = ResearcherRepository::new(self.db);

        if !repo.exists(id).await.during("updating researcher")? {
            return Err(not_found(id));
        }

        repo.update(id, param)
            .await
            .during_or_missing("updating researcher", || not_found(id))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Researcher, AppError> {
        ResearcherRepository::new(self.db)
            .find_by_id(id)
            .await
            .during("retrieving researcher")?
            .ok_or_else(|| not_found(id))
    }

    /// Deletes a researcher. Blocked while any author row references them.
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let repo = ResearcherRepository::new(self.db);

        if !repo.exists(id).await.during("deleting researcher")? {
            return Err(not_found(id));
        }

        repo.delete(id).await.during("deleting researcher")?;

        Ok(())
    }

    pub async fn get_paginated(
        &self,
        filter: ResearcherFilter,
        page: PageParam,
    ) -> Result<Vec<Researcher>, AppError> {
        ResearcherRepository::new(self.db)
            .get_paginated(filter, page)
            .await
            .during("retrieving researchers")
    }
}

fn not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Researcher with id {} not found", id))
}
