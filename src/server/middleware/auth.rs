use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header, request::Parts, HeaderMap},
    middleware::Next,
    response::Response,
};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::Role,
    service::auth::token::JwtManager,
    state::AppState,
};

/// Path prefixes reachable without a token.
const PUBLIC_PREFIXES: [&str; 3] = ["/api/auth/", "/swagger-ui", "/api-docs"];

/// Identity resolved from a valid bearer token, stored in request extensions.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthenticatedUser {
    pub id: i32,
    pub email: String,
    pub role: Role,
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    jwt: &'a JwtManager,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, jwt: &'a JwtManager) -> Self {
        Self { db, jwt }
    }

    /// Resolves the user behind the request's bearer token.
    ///
    /// # Returns
    /// - `Ok(AuthenticatedUser)` - Token valid and its subject still exists
    /// - `Err(AppError::AuthErr)` - Missing or invalid token, or unknown subject
    /// - `Err(AppError::DbErr)` - Database error while loading the user
    pub async fn authenticate(&self, headers: &HeaderMap) -> Result<AuthenticatedUser, AppError> {
        let token = extract_bearer_token(headers).ok_or(AuthError::MissingToken)?;
        let claims = self.jwt.validate_token(token)?;

        let Some(user) = UserRepository::new(self.db)
            .find_by_email(&claims.sub)
            .await?
        else {
            return Err(AuthError::UnknownSubject(claims.sub).into());
        };

        Ok(AuthenticatedUser {
            id: user.id,
            email: user.email,
            role: user.role,
        })
    }
}

/// Rejects requests to protected paths that do not carry a valid bearer token.
///
/// On success the resolved [`AuthenticatedUser`] is inserted into the request
/// extensions for handlers to extract.
pub async fn require_auth(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    if is_public_path(request.uri().path()) {
        return Ok(next.run(request).await);
    }

    let user = AuthGuard::new(&state.db, &state.jwt)
        .authenticate(request.headers())
        .await?;

    request.extensions_mut().insert(user);

    Ok(next.run(request).await)
}

impl<S> FromRequestParts<S> for AuthenticatedUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .ok_or_else(|| AuthError::MissingToken.into())
    }
}

pub fn is_public_path(path: &str) -> bool {
    PUBLIC_PREFIXES
        .iter()
        .any(|prefix| path.starts_with(prefix))
}

pub fn extract_bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|token| !token.is_empty())
}
