//! Conference data repository for database operations.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::{
    conference::{Conference, ConferenceFilter, ConferenceParam},
    page::PageParam,
};

/// Repository providing database operations for conferences.
pub struct ConferenceRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ConferenceRepository<'a> {
    /// Creates a new ConferenceRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new conference.
    ///
    /// # Returns
    /// - `Ok(Conference)` - The created conference with generated ID
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, param: ConferenceParam) -> Result<Conference, DbErr> {
        let entity = entity::conference::ActiveModel {
            name: ActiveValue::Set(param.name),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Conference::from_entity(entity))
    }

    /// Finds a conference by ID.
    ///
    /// # Returns
    /// - `Ok(Some(Conference))` - Conference found
    /// - `Ok(None)` - No conference with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Conference>, DbErr> {
        let entity = entity::prelude::Conference::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(Conference::from_entity))
    }

    /// Checks whether a conference with the given ID exists.
    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Conference::find()
            .filter(entity::conference::Column::Id.eq(id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Gets one page of conferences matching `filter`, ordered by ID.
    ///
    /// # Arguments
    /// - `filter` - Selection to apply
    /// - `page` - Zero-based page index and size
    ///
    /// # Returns
    /// - `Ok(Vec<Conference>)` - Conferences on the requested page, possibly empty
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_paginated(
        &self,
        filter: ConferenceFilter,
        page: PageParam,
    ) -> Result<Vec<Conference>, DbErr> {
        let condition = match filter {
            ConferenceFilter::All => Condition::all(),
            ConferenceFilter::NameContains(name) => {
                Condition::all().add(entity::conference::Column::Name.contains(name))
            }
        };

        let entities = entity::prelude::Conference::find()
            .filter(condition)
            .order_by_asc(entity::conference::Column::Id)
            .paginate(self.db, page.size)
            .fetch_page(page.index)
            .await?;

        Ok(entities.into_iter().map(Conference::from_entity).collect())
    }

    /// Replaces every mutable field of a conference.
    ///
    /// # Returns
    /// - `Ok(Conference)` - The updated conference
    /// - `Err(DbErr::RecordNotFound)` - No conference exists with the specified ID
    /// - `Err(DbErr)` - Other database error during update
    pub async fn update(&self, id: i32, param: ConferenceParam) -> Result<Conference, DbErr> {
        let conference = entity::prelude::Conference::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Conference with id {} not found",
                id
            )))?;

        let mut active_model: entity::conference::ActiveModel = conference.into();
        active_model.name = ActiveValue::Set(param.name);

        let entity = active_model.update(self.db).await?;

        Ok(Conference::from_entity(entity))
    }

    /// Deletes a conference. Its editions, and their articles, are removed by the
    /// CASCADE foreign keys.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of conference rows deleted (0 when it didn't exist)
    /// - `Err(DbErr)` - Database error, including a blocked cascade
    pub async fn delete(&self, id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Conference::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
