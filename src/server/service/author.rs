use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        article::ArticleRepository, author::AuthorRepository, researcher::ResearcherRepository,
    },
    error::{AppError, ErrorContext},
    model::{
        author::{Author, AuthorParam},
        page::PageParam,
    },
};

pub struct AuthorService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuthorService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Links an existing article to an existing researcher
    ///
    /// # Returns
    /// - `Ok(Author)`: The created authorship row
    /// - `Err(AppError::NotFound)`: "Article not found" or "Researcher not found"
    pub async fn create(&self, param: AuthorParam) -> Result<Author, AppError> {
        self.ensure_references(&param, "creating author").await?;

        AuthorRepository::new(self.db)
            .create(param)
            .await
            .during("creating author")
    }

    pub async fn update(&self, id: i32, param: AuthorParam) -> Result<Author, AppError> {
        let repo = AuthorRepository::new(self.db);

        if repo.find_by_id(id).await.during("updating author")?.is_none() {
            return Err(not_found(id));
        }
        self.ensure_references(&param, "updating author").await?;

        repo.update(id, param)
            .await
            .during_or_missing("updating author", || not_found(id))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Author, AppError> {
        AuthorRepository::new(self.db)
            .find_by_id(id)
            .await
            .during("retrieving author")?
            .ok_or_else(|| not_found(id))
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let repo = AuthorRepository::new(self.db);

        if repo.find_by_id(id).await.during("deleting author")?.is_none() {
            return Err(not_found(id));
        }

        repo.delete(id).await.during("deleting author")?;

        Ok(())
    }

    pub async fn get_paginated(&self, page: PageParam) -> Result<Vec<Author>, AppError> {
        AuthorRepository::new(self.db)
            .get_paginated(page)
            .await
            .during("retrieving authors")
    }

    async fn ensure_references(
        &self,
        param: &AuthorParam,
        action: &'static str,
    ) -> Result<(), AppError> {
        if !ArticleRepository::new(self.db)
            .exists(param.article_id)
            .await
            .during(action)?
        {
            return Err(AppError::NotFound("Article not found".to_string()));
        }

        if !ResearcherRepository::new(self.db)
            .exists(param.researcher_id)
            .await
            .during(action)?
        {
            return Err(AppError::NotFound("Researcher not found".to_string()));
        }

        Ok(())
    }
}

fn not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Author with id {} not found", id))
}
