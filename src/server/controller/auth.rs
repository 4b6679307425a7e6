use axum::{extract::State, http::StatusCode, response::IntoResponse};

use crate::{
    model::{
        api::{ApiResponse, ErrorResponse},
        auth::{LoginDto, RegisterDto, TokenDto},
    },
    server::{
        controller::extract::JsonBody,
        error::AppError,
        model::user::{LoginParam, RegisterUserParam},
        service::auth::AuthService,
        state::AppState,
    },
};

/// Tag for grouping authentication endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Register a new user and return a bearer token.
///
/// Public endpoint. The password is stored as a bcrypt hash.
///
/// # Returns
/// - `201 Created` - Token for the new user
/// - `400 Bad Request` - Validation failed or email already registered
#[utoipa::path(
    post,
    path = "/api/auth/register",
    tag = AUTH_TAG,
    security(()),
    request_body = RegisterDto,
    responses(
        (status = 201, description = "User registered", body = ApiResponse<TokenDto>),
        (status = 400, description = "Invalid registration data", body = ErrorResponse)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<RegisterDto>,
) -> Result<impl IntoResponse, AppError> {
    let param = RegisterUserParam::from_dto(payload)?;

    let token = AuthService::new(&state.db, &state.jwt, &state.password_hasher)
        .register(param)
        .await?;

    Ok(ApiResponse::success(
        StatusCode::CREATED,
        "User registered successfully",
        TokenDto { token },
    ))
}

/// Exchange email and password for a bearer token.
///
/// Unknown emails and wrong passwords both answer 401 "Invalid login credentials".
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    security(()),
    request_body = LoginDto,
    responses(
        (status = 200, description = "User logged in", body = ApiResponse<TokenDto>),
        (status = 400, description = "Missing email or password", body = ErrorResponse),
        (status = 401, description = "Invalid login credentials", body = ErrorResponse)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let param = LoginParam::from_dto(payload)?;

    let token = AuthService::new(&state.db, &state.jwt, &state.password_hasher)
        .login(param)
        .await?;

    Ok(ApiResponse::success(
        StatusCode::OK,
        "User logged in successfully",
        TokenDto { token },
    ))
}
