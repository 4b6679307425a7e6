use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AuthorDto {
    pub id: i32,
    pub ref_article: i32,
    pub ref_researcher: i32,
}

/// Payload for creating or replacing an authorship link.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct AuthorInputDto {
    #[serde(default)]
    pub ref_article: Option<i32>,
    #[serde(default)]
    pub ref_researcher: Option<i32>,
}
