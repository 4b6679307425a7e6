//! Domain model and params for conference editions.

use chrono::NaiveDate;

use crate::{
    model::edition::{EditionDto, EditionInputDto},
    server::{
        error::{validation::ValidationErrors, AppError},
        util::validate::FieldValidator,
    },
};

#[derive(Debug, Clone, PartialEq)]
pub struct Edition {
    pub id: i32,
    pub conference_id: i32,
    pub year: i32,
    pub date: NaiveDate,
    pub city: String,
}

impl Edition {
    pub fn from_entity(entity: entity::edition::Model) -> Self {
        Self {
            id: entity.id,
            conference_id: entity.conference_id,
            year: entity.year,
            date: entity.date,
            city: entity.city,
        }
    }

    pub fn into_dto(self) -> EditionDto {
        EditionDto {
            id: self.id,
            ref_conference: self.conference_id,
            year: self.year,
            date: self.date,
            city: self.city,
        }
    }
}

/// Validated mutable fields of an edition.
#[derive(Debug, Clone)]
pub struct EditionParam {
    pub conference_id: i32,
    pub year: i32,
    pub date: NaiveDate,
    pub city: String,
}

impl EditionParam {
    pub fn from_dto(dto: EditionInputDto) -> Result<Self, ValidationErrors> {
        let mut v = FieldValidator::new();
        let conference_id = v.required("ref_conference", "Id of conference", dto.ref_conference);
        let year = v.required("year", "Year", dto.year);
        let date = v.required("date", "Date", dto.date);
        let city = v.text("city", "City", dto.city, 3..=64);

        let (Some(conference_id), Some(year), Some(date)) = (conference_id, year, date) else {
            return Err(v.into_errors());
        };
        v.finish()?;

        Ok(Self {
            conference_id,
            year,
            date,
            city,
        })
    }
}

/// Selection applied to paginated edition queries.
#[derive(Debug, Clone)]
pub enum EditionFilter {
    All,
    Year(i32),
    /// Inclusive on both ends.
    YearBetween { start: i32, end: i32 },
    CityContains(String),
    Date(NaiveDate),
}

impl EditionFilter {
    /// Builds a date filter from a `yyyy-MM-dd` path segment.
    pub fn parse_date(raw: &str) -> Result<Self, AppError> {
        NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .map(Self::Date)
            .map_err(|e| AppError::BadRequest(format!("Error parsing date: {}", e)))
    }
}
