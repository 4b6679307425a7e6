//! Error types and HTTP response handling.
//!
//! `AppError` is the top-level error returned by controllers and services. It wraps
//! domain-specific errors and implements `IntoResponse`, rendering every failure in the
//! same `{ message, success, data, status }` envelope used by successful responses.

pub mod auth;
pub mod config;
pub mod validation;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::DbErr;
use serde::Serialize;
use thiserror::Error;

use crate::{
    model::api::{ApiResponse, ErrorResponse},
    server::error::{auth::AuthError, config::ConfigError, validation::ValidationErrors},
};

/// Top-level application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup. Results in 500.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Authentication error, delegated to `AuthError::into_response()`.
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// Database error without operation context.
    ///
    /// Results in 400 with a message derived from the error category.
    #[error(transparent)]
    DbErr(#[from] DbErr),

    /// Database error raised while performing a named operation.
    ///
    /// Produced by [`ErrorContext::during`]. Results in 400 with message
    /// `"Error <action>: <detail>"`.
    #[error("Error {action}: {source}")]
    Persistence {
        action: &'static str,
        #[source]
        source: DbErr,
    },

    /// Payload failed field validation. Results in 400 listing each field error.
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationErrors),

    /// Resource not found. Results in 404 with the provided message.
    #[error("{0}")]
    NotFound(String),

    /// Invalid request. Results in 400 with the provided message.
    #[error("{0}")]
    BadRequest(String),

    /// Internal server error. The message is logged, the client receives a generic one.
    #[error("{0}")]
    InternalError(String),
}

/// Attaches the operation being performed to database errors.
///
/// Errors other than [`AppError::DbErr`] pass through untouched, so not-found and
/// validation outcomes keep their own status codes.
pub trait ErrorContext<T> {
    fn during(self, action: &'static str) -> Result<T, AppError>;

    /// Like [`during`](Self::during), but `DbErr::RecordNotFound` becomes `missing()`.
    ///
    /// Covers a row removed between the existence check and the write.
    fn during_or_missing(
        self,
        action: &'static str,
        missing: impl FnOnce() -> AppError,
    ) -> Result<T, AppError>;
}

impl<T> ErrorContext<T> for Result<T, AppError> {
    fn during(self, action: &'static str) -> Result<T, AppError> {
        self.map_err(|err| match err {
            AppError::DbErr(source) => AppError::Persistence { action, source },
            other => other,
        })
    }

    fn during_or_missing(
        self,
        action: &'static str,
        missing: impl FnOnce() -> AppError,
    ) -> Result<T, AppError> {
        self.map_err(|err| match err {
            AppError::DbErr(DbErr::RecordNotFound(_)) => missing(),
            AppError::DbErr(source) => AppError::Persistence { action, source },
            other => other,
        })
    }
}

impl<T> ErrorContext<T> for Result<T, DbErr> {
    fn during(self, action: &'static str) -> Result<T, AppError> {
        self.map_err(|source| AppError::Persistence { action, source })
    }

    fn during_or_missing(
        self,
        action: &'static str,
        missing: impl FnOnce() -> AppError,
    ) -> Result<T, AppError> {
        self.map_err(|source| match source {
            DbErr::RecordNotFound(_) => missing(),
            source => AppError::Persistence { action, source },
        })
    }
}

/// Classifies a database error into the detail reported to clients.
///
/// Constraint violations report "Data integrity violation", driver and connection
/// failures report "Persistence error", and anything else echoes the error text.
pub fn describe_db_err(err: &DbErr) -> String {
    if err.sql_err().is_some() {
        return "Data integrity violation".to_string();
    }

    match err {
        DbErr::Conn(_) | DbErr::Exec(_) | DbErr::Query(_) => "Persistence error".to_string(),
        other => other.to_string(),
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        (self.status, Json(self)).into_response()
    }
}

/// Converts application errors into enveloped HTTP responses.
///
/// # Returns
/// - 400 Bad Request - `BadRequest`, `Validation`, `DbErr` and `Persistence`
/// - 404 Not Found - `NotFound`
/// - 500 Internal Server Error - `ConfigErr` and `InternalError`
/// - Variable - `AuthErr`, delegated to `AuthError::into_response()`
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::AuthErr(err) => err.into_response(),
            Self::NotFound(msg) => ErrorResponse::failure(StatusCode::NOT_FOUND, msg).into_response(),
            Self::BadRequest(msg) => {
                ErrorResponse::failure(StatusCode::BAD_REQUEST, msg).into_response()
            }
            Self::Validation(errors) => ErrorResponse::new(
                StatusCode::BAD_REQUEST,
                false,
                "Validation failed",
                Some(errors.into_dto()),
            )
            .into_response(),
            Self::DbErr(err) => {
                tracing::warn!("Database error: {}", err);
                ErrorResponse::failure(StatusCode::BAD_REQUEST, describe_db_err(&err))
                    .into_response()
            }
            Self::Persistence { action, source } => {
                tracing::warn!("Database error while {}: {}", action, source);
                let message = format!("Error {}: {}", action, describe_db_err(&source));
                ErrorResponse::failure(StatusCode::BAD_REQUEST, message).into_response()
            }
            Self::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                ErrorResponse::failure(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
                    .into_response()
            }
            Self::ConfigErr(err) => {
                tracing::error!("{}", err);
                ErrorResponse::failure(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
                    .into_response()
            }
        }
    }
}
