use axum::{extract::State, http::StatusCode, response::IntoResponse};

use crate::{
    model::{
        api::{ApiResponse, ErrorResponse},
        conference::{ConferenceDto, ConferenceInputDto},
    },
    server::{
        controller::{
            extract::{JsonBody, PathParam, QueryParam},
            page_response,
            param::PaginationParam,
            EmptyPage,
        },
        error::AppError,
        middleware::auth::AuthenticatedUser,
        model::{
            conference::{Conference, ConferenceFilter, ConferenceParam},
            page::PageBase,
        },
        service::conference::ConferenceService,
        state::AppState,
    },
};

/// Tag for grouping conference endpoints in OpenAPI documentation
pub static CONFERENCE_TAG: &str = "conference";

const FOUND: &str = "Conferences retrieved successfully";

const EMPTY_ALL: EmptyPage = EmptyPage {
    message: "No conferences found",
    success: true,
    empty_list: false,
};

const EMPTY_BY_NAME: EmptyPage = EmptyPage {
    message: "No conferences found",
    success: true,
    empty_list: true,
};

/// Create a new conference.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `user` - Caller resolved from the bearer token
/// - `payload` - Conference name
///
/// # Returns
/// - `201 Created` - The created conference
/// - `400 Bad Request` - Validation failed or malformed body
/// - `401 Unauthorized` - Missing or invalid token
#[utoipa::path(
    post,
    path = "/api/conference/",
    tag = CONFERENCE_TAG,
    request_body = ConferenceInputDto,
    responses(
        (status = 201, description = "Conference created", body = ApiResponse<ConferenceDto>),
        (status = 400, description = "Invalid conference data", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse)
    ),
)]
pub async fn create_conference(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    JsonBody(payload): JsonBody<ConferenceInputDto>,
) -> Result<impl IntoResponse, AppError> {
    let param = ConferenceParam::from_dto(payload)?;

    let conference = ConferenceService::new(&state.db).create(param).await?;

    tracing::info!("{} created conference {}", user.email, conference.id);

    Ok(ApiResponse::success(
        StatusCode::CREATED,
        "Conference created successfully",
        conference.into_dto(),
    ))
}

/// Replace the name of an existing conference.
///
/// # Returns
/// - `200 OK` - The updated conference
/// - `400 Bad Request` - Validation failed
/// - `404 Not Found` - No conference with that ID
#[utoipa::path(
    put,
    path = "/api/conference/{id}",
    tag = CONFERENCE_TAG,
    params(("id" = i32, Path, description = "Conference ID")),
    request_body = ConferenceInputDto,
    responses(
        (status = 200, description = "Conference updated", body = ApiResponse<ConferenceDto>),
        (status = 400, description = "Invalid conference data", body = ErrorResponse),
        (status = 404, description = "Conference not found", body = ErrorResponse)
    ),
)]
pub async fn update_conference(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    PathParam(id): PathParam<i32>,
    JsonBody(payload): JsonBody<ConferenceInputDto>,
) -> Result<impl IntoResponse, AppError> {
    let param = ConferenceParam::from_dto(payload)?;

    let conference = ConferenceService::new(&state.db).update(id, param).await?;

    tracing::info!("{} updated conference {}", user.email, id);

    Ok(ApiResponse::success(
        StatusCode::OK,
        "Conference updated successfully",
        conference.into_dto(),
    ))
}

/// Delete a conference along with its editions and their articles.
///
/// Responds with the deleted conference. Fails with 400 when an article of one of
/// its editions still has authors.
#[utoipa::path(
    delete,
    path = "/api/conference/{id}",
    tag = CONFERENCE_TAG,
    params(("id" = i32, Path, description = "Conference ID")),
    responses(
        (status = 200, description = "Conference deleted", body = ApiResponse<ConferenceDto>),
        (status = 400, description = "Delete blocked by authorship records", body = ErrorResponse),
        (status = 404, description = "Conference not found", body = ErrorResponse)
    ),
)]
pub async fn delete_conference(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    PathParam(id): PathParam<i32>,
) -> Result<impl IntoResponse, AppError> {
    let conference = ConferenceService::new(&state.db).delete(id).await?;

    tracing::info!("{} deleted conference {}", user.email, id);

    Ok(ApiResponse::success(
        StatusCode::OK,
        "Conference deleted successfully",
        conference.into_dto(),
    ))
}

#[utoipa::path(
    get,
    path = "/api/conference/getByID/{id}",
    tag = CONFERENCE_TAG,
    params(("id" = i32, Path, description = "Conference ID")),
    responses(
        (status = 200, description = "Conference found", body = ApiResponse<ConferenceDto>),
        (status = 404, description = "Conference not found", body = ErrorResponse)
    ),
)]
pub async fn get_conference_by_id(
    State(state): State<AppState>,
    PathParam(id): PathParam<i32>,
) -> Result<impl IntoResponse, AppError> {
    let conference = ConferenceService::new(&state.db).get_by_id(id).await?;

    Ok(ApiResponse::success(
        StatusCode::OK,
        "Conference retrieved successfully",
        conference.into_dto(),
    ))
}

/// Get one page of conferences ordered by ID. Pages start at 1.
#[utoipa::path(
    get,
    path = "/api/conference/getAll",
    tag = CONFERENCE_TAG,
    params(PaginationParam),
    responses(
        (status = 200, description = "Conferences found", body = ApiResponse<Vec<ConferenceDto>>),
        (status = 400, description = "Invalid pagination", body = ErrorResponse),
        (status = 404, description = "Empty page, data is null", body = ApiResponse<Vec<ConferenceDto>>)
    ),
)]
pub async fn get_all_conferences(
    State(state): State<AppState>,
    QueryParam(pagination): QueryParam<PaginationParam>,
) -> Result<impl IntoResponse, AppError> {
    list(&state, ConferenceFilter::All, pagination, &EMPTY_ALL).await
}

/// Get one page of conferences whose name contains `name`.
#[utoipa::path(
    get,
    path = "/api/conference/getByName/{name}",
    tag = CONFERENCE_TAG,
    params(
        ("name" = String, Path, description = "Substring of the conference name"),
        PaginationParam
    ),
    responses(
        (status = 200, description = "Conferences found", body = ApiResponse<Vec<ConferenceDto>>),
        (status = 404, description = "Empty page, data is an empty list", body = ApiResponse<Vec<ConferenceDto>>)
    ),
)]
pub async fn get_conferences_by_name(
    State(state): State<AppState>,
    PathParam(name): PathParam<String>,
    QueryParam(pagination): QueryParam<PaginationParam>,
) -> Result<impl IntoResponse, AppError> {
    list(
        &state,
        ConferenceFilter::NameContains(name),
        pagination,
        &EMPTY_BY_NAME,
    )
    .await
}

async fn list(
    state: &AppState,
    filter: ConferenceFilter,
    pagination: PaginationParam,
    empty: &EmptyPage,
) -> Result<ApiResponse<Vec<ConferenceDto>>, AppError> {
    let page = pagination.into_page(PageBase::One)?;

    let conferences = ConferenceService::new(&state.db)
        .get_paginated(filter, page)
        .await?;

    Ok(page_response(
        conferences.into_iter().map(Conference::into_dto).collect(),
        FOUND,
        empty,
    ))
}
