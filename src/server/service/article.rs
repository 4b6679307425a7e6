use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        article::ArticleRepository, edition::EditionRepository,
        researcher::ResearcherRepository,
    },
    error::{AppError, ErrorContext},
    model::{
        article::{Article, ArticleParam},
        page::PageParam,
        researcher::FullNameParam,
    },
};

pub struct ArticleService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ArticleService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates an article in an existing edition
    pub async fn create(&self, param: ArticleParam) -> Result<Article, AppError> {
        self.ensure_edition(param.edition_id, "creating article")
            .await?;

        ArticleRepository::new(self.db)
            .create(param)
            .await
            .during("creating article")
    }

    /// Replaces title and edition of an existing article
    pub async fn update(&self, id: i32, param: ArticleParam) -> Result<Article, AppError> {
        let repo = ArticleRepository::new(self.db);

        if !repo.exists(id).await.during("updating article")? {
            return Err(not_found(id));
        }
        self.ensure_edition(param.edition_id, "updating article")
            .await?;

        repo.update(id, param)
            .await
            .during_or_missing("updating article", || not_found(id))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Article, AppError> {
        ArticleRepository::new(self.db)
            .find_by_id(id)
            .await
            .during("retrieving article")?
            .ok_or_else(|| not_found(id))
    }

    /// Deletes an article. Blocked while any author row references it.
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let repo = ArticleRepository::new(self.db);

        if !repo.exists(id).await.during("deleting article")? {
            return Err(not_found(id));
        }

        repo.delete(id).await.during("deleting article")?;

        Ok(())
    }

    pub async fn get_paginated(&self, page: PageParam) -> Result<Vec<Article>, AppError> {
        ArticleRepository::new(self.db)
            .get_paginated(page)
            .await
            .during("retrieving articles")
    }

    /// Gets every article credited to the researcher with exactly this full name
    ///
    /// # Returns
    /// - `Ok(Vec<Article>)`: The researcher's articles, possibly empty
    /// - `Err(AppError::NotFound)`: No researcher has that full name
    pub async fn get_by_researcher_full_name(
        &self,
        full_name: &FullNameParam,
    ) -> Result<Vec<Article>, AppError> {
        let researcher = ResearcherRepository::new(self.db)
            .find_by_full_name(full_name)
            .await
            .during("retrieving articles")?
            .ok_or_else(|| AppError::NotFound("Researcher not found".to_string()))?;

        ArticleRepository::new(self.db)
            .get_by_researcher(researcher.id)
            .await
            .during("retrieving articles")
    }

    async fn ensure_edition(&self, id: i32, action: &'static str) -> Result<(), AppError> {
        if EditionRepository::new(self.db)
            .exists(id)
            .await
            .during(action)?
        {
            Ok(())
        } else {
            Err(AppError::NotFound("Edition not found".to_string()))
        }
    }
}

fn not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Article with id {} not found", id))
}
