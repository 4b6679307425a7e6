use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ArticleDto {
    pub id: i32,
    pub title: String,
    pub ref_edition: i32,
}

/// Payload for creating or replacing an article.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct ArticleInputDto {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub ref_edition: Option<i32>,
}
