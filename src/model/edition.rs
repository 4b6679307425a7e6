use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct EditionDto {
    pub id: i32,
    pub ref_conference: i32,
    pub year: i32,
    pub date: NaiveDate,
    pub city: String,
}

/// Payload for creating or replacing an edition. `date` uses `yyyy-MM-dd`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct EditionInputDto {
    #[serde(default)]
    pub ref_conference: Option<i32>,
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub city: Option<String>,
}
