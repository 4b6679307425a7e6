//! Researcher data repository for database operations.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::{
    page::PageParam,
    researcher::{FullNameParam, Researcher, ResearcherFilter, ResearcherParam},
};

/// Repository providing database operations for researchers.
pub struct ResearcherRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ResearcherRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, param: ResearcherParam) -> Result<Researcher, DbErr> {
        let entity = entity::researcher::ActiveModel {
            name: ActiveValue::Set(param.name),
            surname: ActiveValue::Set(param.surname),
            second_surname: ActiveValue::Set(param.second_surname),
            university: ActiveValue::Set(param.university),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Researcher::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Researcher>, DbErr> {
        let entity = entity::prelude::Researcher::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(Researcher::from_entity))
    }

    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Researcher::find()
            .filter(entity::researcher::Column::Id.eq(id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Finds the researcher whose three name parts match exactly.
    ///
    /// When several researchers share a full name the one with the lowest ID wins.
    ///
    /// # Returns
    /// - `Ok(Some(Researcher))` - Matching researcher
    /// - `Ok(None)` - Nobody has that full name
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_full_name(
        &self,
        full_name: &FullNameParam,
    ) -> Result<Option<Researcher>, DbErr> {
        use entity::researcher::Column;

        let entity = entity::prelude::Researcher::find()
            .filter(Column::Name.eq(full_name.name.as_str()))
            .filter(Column::Surname.eq(full_name.surname.as_str()))
            .filter(Column::SecondSurname.eq(full_name.second_surname.as_str()))
            .order_by_asc(Column::Id)
            .one(self.db)
            .await?;

        Ok(entity.map(Researcher::from_entity))
    }

    /// Gets one page of researchers matching `filter`, ordered by ID.
    ///
    /// # Arguments
    /// - `filter` - Substring selection on one of the name parts or the university
    /// - `page` - Zero-based page index and size
    pub async fn get_paginated(
        &self,
        filter: ResearcherFilter,
        page: PageParam,
    ) -> Result<Vec<Researcher>, DbErr> {
        use entity::researcher::Column;

        let condition = match filter {
            ResearcherFilter::All => Condition::all(),
            ResearcherFilter::NameContains(name) => Condition::all().add(Column::Name.contains(name)),
            ResearcherFilter::SurnameContains(surname) => {
                Condition::all().add(Column::Surname.contains(surname))
            }
            ResearcherFilter::SecondSurnameContains(second_surname) => {
                Condition::all().add(Column::SecondSurname.contains(second_surname))
            }
            ResearcherFilter::UniversityContains(university) => {
                Condition::all().add(Column::University.contains(university))
            }
        };

        let entities = entity::prelude::Researcher::find()
            .filter(condition)
            .order_by_asc(Column::Id)
            .paginate(self.db, page.size)
            .fetch_page(page.index)
            .await?;

        Ok(entities.into_iter().map(Researcher::from_entity).collect())
    }

    /// Replaces every mutable field of a researcher.
    ///
    /// # Returns
    /// - `Ok(Researcher)` - The updated researcher
    /// - `Err(DbErr::RecordNotFound)` - No researcher exists with the specified ID
    pub async fn update(&self, id: i32, param: ResearcherParam) -> Result<Researcher, DbErr> {
        let researcher = entity::prelude::Researcher::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Researcher with id {} not found",
                id
            )))?;

        let mut active_model: entity::researcher::ActiveModel = researcher.into();
        active_model.name = ActiveValue::Set(param.name);
        active_model.surname = ActiveValue::Set(param.surname);
        active_model.second_surname = ActiveValue::Set(param.second_surname);
        active_model.university = ActiveValue::Set(param.university);

        let entity = active_model.update(self.db).await?;

        Ok(Researcher::from_entity(entity))
    }

    /// Deletes a researcher. Blocked by the store while an author row references them.
    pub async fn delete(&self, id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Researcher::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
