//! Author data repository for authorship links.

use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryOrder,
};

use crate::server::model::{
    author::{Author, AuthorParam},
    page::PageParam,
};

pub struct AuthorRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuthorRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, param: AuthorParam) -> Result<Author, DbErr> {
        let entity = entity::author::ActiveModel {
            article_id: ActiveValue::Set(param.article_id),
            researcher_id: ActiveValue::Set(param.researcher_id),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Author::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Author>, DbErr> {
        let entity = entity::prelude::Author::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Author::from_entity))
    }

    pub async fn get_paginated(&self, page: PageParam) -> Result<Vec<Author>, DbErr> {
        let entities = entity::prelude::Author::find()
            .order_by_asc(entity::author::Column::Id)
            .paginate(self.db, page.size)
            .fetch_page(page.index)
            .await?;

        Ok(entities.into_iter().map(Author::from_entity).collect())
    }

    /// Points an author row at a different article and researcher.
    ///
    /// # Returns
    /// - `Ok(Author)` - The updated link
    /// - `Err(DbErr::RecordNotFound)` - No author exists with the specified ID
    pub async fn update(&self, id: i32, param: AuthorParam) -> Result<Author, DbErr> {
        let author = entity::prelude::Author::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Author with id {} not found",
                id
            )))?;

        let mut active_model: entity::author::ActiveModel = author.into();
        active_model.article_id = ActiveValue::Set(param.article_id);
        active_model.researcher_id = ActiveValue::Set(param.researcher_id);

        let entity = active_model.update(self.db).await?;

        Ok(Author::from_entity(entity))
    }

    pub async fn delete(&self, id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Author::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
