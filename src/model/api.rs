use axum::http::StatusCode;
use serde::{Deserialize, Serialize, Serializer};
use utoipa::ToSchema;

/// Uniform envelope wrapping every response body.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ApiResponse<T> {
    pub message: String,
    pub success: bool,
    pub data: Option<T>,
    /// Upper-case status name such as `OK` or `NOT_FOUND`.
    #[serde(serialize_with = "serialize_status")]
    #[schema(value_type = String, example = "OK")]
    pub status: StatusCode,
}

impl<T> ApiResponse<T> {
    pub fn new(status: StatusCode, success: bool, message: impl Into<String>, data: Option<T>) -> Self {
        Self {
            message: message.into(),
            success,
            data,
            status,
        }
    }

    /// Successful response carrying `data`.
    pub fn success(status: StatusCode, message: impl Into<String>, data: T) -> Self {
        Self::new(status, true, message, Some(data))
    }

    /// Failed response without data.
    pub fn failure(status: StatusCode, message: impl Into<String>) -> Self {
        Self::new(status, false, message, None)
    }
}

/// Per-field validation failure reported in the `data` of a 400 response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FieldErrorDto {
    pub field: String,
    pub message: String,
}

/// Envelope returned by failed requests.
pub type ErrorResponse = ApiResponse<Vec<FieldErrorDto>>;

fn serialize_status<S: Serializer>(status: &StatusCode, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&status_name(*status))
}

/// Converts a status code to its upper snake case reason, e.g. `404` to `NOT_FOUND`.
pub fn status_name(status: StatusCode) -> String {
    status
        .canonical_reason()
        .map(|reason| reason.to_uppercase().replace([' ', '-'], "_"))
        .unwrap_or_else(|| status.as_str().to_string())
}
