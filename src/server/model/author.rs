use crate::{
    model::author::{AuthorDto, AuthorInputDto},
    server::{error::validation::ValidationErrors, util::validate::FieldValidator},
};

/// Authorship link between an article and a researcher.
#[derive(Debug, Clone, PartialEq)]
pub struct Author {
    pub id: i32,
    pub article_id: i32,
    pub researcher_id: i32,
}

impl Author {
    pub fn from_entity(entity: entity::author::Model) -> Self {
        Self {
            id: entity.id,
            article_id: entity.article_id,
            researcher_id: entity.researcher_id,
        }
    }

    pub fn into_dto(self) -> AuthorDto {
        AuthorDto {
            id: self.id,
            ref_article: self.article_id,
            ref_researcher: self.researcher_id,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AuthorParam {
    pub article_id: i32,
    pub researcher_id: i32,
}

impl AuthorParam {
    pub fn from_dto(dto: AuthorInputDto) -> Result<Self, ValidationErrors> {
        let mut v = FieldValidator::new();
        let article_id = v.required("ref_article", "Id of article", dto.ref_article);
        let researcher_id = v.required("ref_researcher", "Id of researcher", dto.ref_researcher);

        match (article_id, researcher_id) {
            (Some(article_id), Some(researcher_id)) => Ok(Self {
                article_id,
                researcher_id,
            }),
            _ => Err(v.into_errors()),
        }
    }
}
