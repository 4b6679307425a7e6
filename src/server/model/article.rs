use crate::{
    model::article::{ArticleDto, ArticleInputDto},
    server::{error::validation::ValidationErrors, util::validate::FieldValidator},
};

#[derive(Debug, Clone, PartialEq)]
pub struct Article {
    pub id: i32,
    pub edition_id: i32,
    pub title: String,
}

impl Article {
    pub fn from_entity(entity: entity::article::Model) -> Self {
        Self {
            id: entity.id,
            edition_id: entity.edition_id,
            title: entity.title,
        }
    }

    pub fn into_dto(self) -> ArticleDto {
        ArticleDto {
            id: self.id,
            title: self.title,
            ref_edition: self.edition_id,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ArticleParam {
    pub edition_id: i32,
    pub title: String,
}

impl ArticleParam {
    pub fn from_dto(dto: ArticleInputDto) -> Result<Self, ValidationErrors> {
        let mut v = FieldValidator::new();
        let title = v.text("title", "Title", dto.title, 3..=256);
        let edition_id = v.required("ref_edition", "Id of edition", dto.ref_edition);

        let Some(edition_id) = edition_id else {
            return Err(v.into_errors());
        };
        v.finish()?;

        Ok(Self { edition_id, title })
    }
}
