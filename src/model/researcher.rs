use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ResearcherDto {
    pub id: i32,
    pub name: String,
    pub surname: String,
    #[serde(rename = "secSurname")]
    pub second_surname: String,
    pub university: String,
}

/// Payload for creating or replacing a researcher.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct ResearcherInputDto {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub surname: Option<String>,
    #[serde(default, rename = "secSurname")]
    pub second_surname: Option<String>,
    #[serde(default)]
    pub university: Option<String>,
}
