//! Edition data repository for database operations.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::{
    edition::{Edition, EditionFilter, EditionParam},
    page::PageParam,
};

/// Repository providing database operations for conference editions.
pub struct EditionRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EditionRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new edition.
    ///
    /// # Returns
    /// - `Ok(Edition)` - The created edition with generated ID
    /// - `Err(DbErr)` - Database error, including a foreign key violation when the
    ///   conference does not exist
    pub async fn create(&self, param: EditionParam) -> Result<Edition, DbErr> {
        let entity = entity::edition::ActiveModel {
            conference_id: ActiveValue::Set(param.conference_id),
            year: ActiveValue::Set(param.year),
            date: ActiveValue::Set(param.date),
            city: ActiveValue::Set(param.city),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Edition::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Edition>, DbErr> {
        let entity = entity::prelude::Edition::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Edition::from_entity))
    }

    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Edition::find()
            .filter(entity::edition::Column::Id.eq(id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Gets one page of editions matching `filter`, ordered by ID.
    ///
    /// # Arguments
    /// - `filter` - Year, year range, city substring or exact date selection
    /// - `page` - Zero-based page index and size
    ///
    /// # Returns
    /// - `Ok(Vec<Edition>)` - Editions on the requested page, possibly empty
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_paginated(
        &self,
        filter: EditionFilter,
        page: PageParam,
    ) -> Result<Vec<Edition>, DbErr> {
        use entity::edition::Column;

        let condition = match filter {
            EditionFilter::All => Condition::all(),
            EditionFilter::Year(year) => Condition::all().add(Column::Year.eq(year)),
            EditionFilter::YearBetween { start, end } => {
                Condition::all().add(Column::Year.between(start, end))
            }
            EditionFilter::CityContains(city) => Condition::all().add(Column::City.contains(city)),
            EditionFilter::Date(date) => Condition::all().add(Column::Date.eq(date)),
        };

        let entities = entity::prelude::Edition::find()
            .filter(condition)
            .order_by_asc(Column::Id)
            .paginate(self.db, page.size)
            .fetch_page(page.index)
            .await?;

        Ok(entities.into_iter().map(Edition::from_entity).collect())
    }

    /// Replaces every mutable field of an edition, including its conference.
    ///
    /// # Returns
    /// - `Ok(Edition)` - The updated edition
    /// - `Err(DbErr::RecordNotFound)` - No edition exists with the specified ID
    /// - `Err(DbErr)` - Other database error during update
    pub async fn update(&self, id: i32, param: EditionParam) -> Result<Edition, DbErr> {
        let edition = entity::prelude::Edition::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Edition with id {} not found",
                id
            )))?;

        let mut active_model: entity::edition::ActiveModel = edition.into();
        active_model.conference_id = ActiveValue::Set(param.conference_id);
        active_model.year = ActiveValue::Set(param.year);
        active_model.date = ActiveValue::Set(param.date);
        active_model.city = ActiveValue::Set(param.city);

        let entity = active_model.update(self.db).await?;

        Ok(Edition::from_entity(entity))
    }

    /// Deletes an edition. Its articles are removed by the CASCADE foreign key.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of edition rows deleted
    /// - `Err(DbErr)` - Database error, including an article still referenced by an author
    pub async fn delete(&self, id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Edition::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
