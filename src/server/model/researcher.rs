//! Domain model and params for researchers.
//!
//! Name parts are limited to 3–64 characters without digits or whitespace; the
//! university allows 3–128 characters.

use crate::{
    model::researcher::{ResearcherDto, ResearcherInputDto},
    server::{error::validation::ValidationErrors, util::validate::FieldValidator},
};

#[derive(Debug, Clone, PartialEq)]
pub struct Researcher {
    pub id: i32,
    pub name: String,
    pub surname: String,
    pub second_surname: String,
    pub university: String,
}

impl Researcher {
    pub fn from_entity(entity: entity::researcher::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            surname: entity.surname,
            second_surname: entity.second_surname,
            university: entity.university,
        }
    }

    pub fn into_dto(self) -> ResearcherDto {
        ResearcherDto {
            id: self.id,
            name: self.name,
            surname: self.surname,
            second_surname: self.second_surname,
            university: self.university,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ResearcherParam {
    pub name: String,
    pub surname: String,
    pub second_surname: String,
    pub university: String,
}

impl ResearcherParam {
    pub fn from_dto(dto: ResearcherInputDto) -> Result<Self, ValidationErrors> {
        let mut v = FieldValidator::new();
        let name = v.name_part("name", "Name", dto.name, 3..=64);
        let surname = v.name_part("surname", "Surname", dto.surname, 3..=64);
        let second_surname =
            v.name_part("secSurname", "Second surname", dto.second_surname, 3..=64);
        let university = v.text("university", "University", dto.university, 3..=128);
        v.finish()?;

        Ok(Self {
            name,
            surname,
            second_surname,
            university,
        })
    }
}

/// Exact full name identifying a single researcher.
#[derive(Debug, Clone)]
pub struct FullNameParam {
    pub name: String,
    pub surname: String,
    pub second_surname: String,
}

/// Selection applied to paginated researcher queries. All variants match substrings.
#[derive(Debug, Clone)]
pub enum ResearcherFilter {
    All,
    NameContains(String),
    SurnameContains(String),
    SecondSurnameContains(String),
    UniversityContains(String),
}
