use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ConferenceDto {
    pub id: i32,
    pub name: String,
}

/// Payload for creating or replacing a conference.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct ConferenceInputDto {
    #[serde(default)]
    pub name: Option<String>,
}
