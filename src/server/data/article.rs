//! Article data repository for database operations.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, RelationTrait,
};

use crate::server::model::{
    article::{Article, ArticleParam},
    page::PageParam,
};

/// Repository providing database operations for articles.
pub struct ArticleRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ArticleRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, param: ArticleParam) -> Result<Article, DbErr> {
        let entity = entity::article::ActiveModel {
            edition_id: ActiveValue::Set(param.edition_id),
            title: ActiveValue::Set(param.title),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Article::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Article>, DbErr> {
        let entity = entity::prelude::Article::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Article::from_entity))
    }

    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Article::find()
            .filter(entity::article::Column::Id.eq(id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Gets one page of articles ordered by ID.
    pub async fn get_paginated(&self, page: PageParam) -> Result<Vec<Article>, DbErr> {
        let entities = entity::prelude::Article::find()
            .order_by_asc(entity::article::Column::Id)
            .paginate(self.db, page.size)
            .fetch_page(page.index)
            .await?;

        Ok(entities.into_iter().map(Article::from_entity).collect())
    }

    /// Gets every article a researcher is credited on, joining through author rows.
    ///
    /// An article linked to the same researcher more than once is returned once.
    ///
    /// # Arguments
    /// - `researcher_id` - ID of the credited researcher
    ///
    /// # Returns
    /// - `Ok(Vec<Article>)` - Authored articles ordered by ID, possibly empty
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_researcher(&self, researcher_id: i32) -> Result<Vec<Article>, DbErr> {
        let entities = entity::prelude::Article::find()
            .join(
                sea_orm::JoinType::InnerJoin,
                entity::article::Relation::Author.def(),
            )
            .filter(entity::author::Column::ResearcherId.eq(researcher_id))
            .distinct()
            .order_by_asc(entity::article::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Article::from_entity).collect())
    }

    /// Replaces the title and edition of an article.
    ///
    /// # Returns
    /// - `Ok(Article)` - The updated article
    /// - `Err(DbErr::RecordNotFound)` - No article exists with the specified ID
    /// - `Err(DbErr)` - Other database error during update
    pub async fn update(&self, id: i32, param: ArticleParam) -> Result<Article, DbErr> {
        let article = entity::prelude::Article::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Article with id {} not found",
                id
            )))?;

        let mut active_model: entity::article::ActiveModel = article.into();
        active_model.edition_id = ActiveValue::Set(param.edition_id);
        active_model.title = ActiveValue::Set(param.title);

        let entity = active_model.update(self.db).await?;

        Ok(Article::from_entity(entity))
    }

    /// Deletes an article.
    ///
    /// Author rows referencing the article are not cascaded; while one exists the
    /// store rejects the delete with a foreign key violation.
    pub async fn delete(&self, id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Article::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
