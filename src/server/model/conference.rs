//! Domain model and params for conferences.

use crate::{
    model::conference::{ConferenceDto, ConferenceInputDto},
    server::{error::validation::ValidationErrors, util::validate::FieldValidator},
};

#[derive(Debug, Clone, PartialEq)]
pub struct Conference {
    pub id: i32,
    pub name: String,
}

impl Conference {
    pub fn from_entity(entity: entity::conference::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
        }
    }

    pub fn into_dto(self) -> ConferenceDto {
        ConferenceDto {
            id: self.id,
            name: self.name,
        }
    }
}

/// Validated mutable fields of a conference, used for both create and full update.
#[derive(Debug, Clone)]
pub struct ConferenceParam {
    pub name: String,
}

impl ConferenceParam {
    pub fn from_dto(dto: ConferenceInputDto) -> Result<Self, ValidationErrors> {
        let mut v = FieldValidator::new();
        let name = v.text("name", "Name", dto.name, 3..=128);
        v.finish()?;

        Ok(Self { name })
    }
}

/// Selection applied to paginated conference queries.
#[derive(Debug, Clone)]
pub enum ConferenceFilter {
    All,
    NameContains(String),
}
