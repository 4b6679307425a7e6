use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::model::api::ErrorResponse;

const UNAUTHORIZED_MESSAGE: &str = "You are not authorized to access this resource";

#[derive(Error, Debug)]
pub enum AuthError {
    /// Email unknown or password mismatch. Both cases share one message.
    #[error("Invalid login credentials")]
    InvalidCredentials,

    /// Request to a protected route carried no bearer token.
    #[error("Missing bearer token")]
    MissingToken,

    /// Bearer token failed signature, issuer or expiry validation.
    #[error("Invalid token: {0}")]
    InvalidToken(#[source] jsonwebtoken::errors::Error),

    /// Token is valid but its subject no longer exists.
    #[error("Token subject {0} does not exist")]
    UnknownSubject(String),

    /// Signing a new token failed.
    #[error("Failed to create token: {0}")]
    TokenCreation(#[source] jsonwebtoken::errors::Error),

    /// Hashing or verifying a password failed.
    #[error("Password hashing failed: {0}")]
    PasswordHash(#[from] bcrypt::BcryptError),

    /// The blocking task running a password hash panicked or was cancelled.
    #[error("Password hashing task failed: {0}")]
    HashTask(#[from] tokio::task::JoinError),
}

/// Converts authentication errors into HTTP responses.
///
/// - `InvalidCredentials` → 401 with "Invalid login credentials"
/// - `MissingToken` / `InvalidToken` / `UnknownSubject` → 401 with a generic message
/// - `TokenCreation` / `PasswordHash` / `HashTask` → 500, cause logged server-side
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::InvalidCredentials => {
                ErrorResponse::failure(StatusCode::UNAUTHORIZED, self.to_string()).into_response()
            }
            Self::MissingToken | Self::InvalidToken(_) | Self::UnknownSubject(_) => {
                tracing::debug!("Rejected request: {}", self);
                ErrorResponse::failure(StatusCode::UNAUTHORIZED, UNAUTHORIZED_MESSAGE)
                    .into_response()
            }
            Self::TokenCreation(_) | Self::PasswordHash(_) | Self::HashTask(_) => {
                tracing::error!("{}", self);
                ErrorResponse::failure(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
                    .into_response()
            }
        }
    }
}
