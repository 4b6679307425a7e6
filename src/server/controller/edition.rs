use axum::{extract::State, http::StatusCode, response::IntoResponse};

use crate::{
    model::{
        api::{ApiResponse, ErrorResponse},
        edition::{EditionDto, EditionInputDto},
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
            edition::{Edition, EditionFilter, EditionParam},
            page::PageBase,
        },
        service::edition::EditionService,
        state::AppState,
    },
};

/// Tag for grouping edition endpoints in OpenAPI documentation
pub static EDITION_TAG: &str = "edition";

const EMPTY: EmptyPage = EmptyPage {
    message: "No editions found",
    success: true,
    empty_list: true,
};

/// Create an edition of an existing conference.
///
/// # Returns
/// - `201 Created` - The created edition
/// - `400 Bad Request` - Validation failed
/// - `404 Not Found` - "Conference not found"
#[utoipa::path(
    post,
    path = "/api/edition/",
    tag = EDITION_TAG,
    request_body = EditionInputDto,
    responses(
        (status = 201, description = "Edition created", body = ApiResponse<EditionDto>),
        (status = 400, description = "Invalid edition data", body = ErrorResponse),
        (status = 404, description = "Conference not found", body = ErrorResponse)
    ),
)]
pub async fn create_edition(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    JsonBody(payload): JsonBody<EditionInputDto>,
) -> Result<impl IntoResponse, AppError> {
    let param = EditionParam::from_dto(payload)?;

    let edition = EditionService::new(&state.db).create(param).await?;

    tracing::info!(
        "{} created edition {} of conference {}",
        user.email,
        edition.id,
        edition.conference_id
    );

    Ok(ApiResponse::success(
        StatusCode::CREATED,
        "Edition created successfully",
        edition.into_dto(),
    ))
}

/// Replace every field of an existing edition.
#[utoipa::path(
    put,
    path = "/api/edition/{id}",
    tag = EDITION_TAG,
    params(("id" = i32, Path, description = "Edition ID")),
    request_body = EditionInputDto,
    responses(
        (status = 200, description = "Edition updated", body = ApiResponse<EditionDto>),
        (status = 400, description = "Invalid edition data", body = ErrorResponse),
        (status = 404, description = "Edition or conference not found", body = ErrorResponse)
    ),
)]
pub async fn update_edition(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    PathParam(id): PathParam<i32>,
    JsonBody(payload): JsonBody<EditionInputDto>,
) -> Result<impl IntoResponse, AppError> {
    let param = EditionParam::from_dto(payload)?;

    let edition = EditionService::new(&state.db).update(id, param).await?;

    tracing::info!("{} updated edition {}", user.email, id);

    Ok(ApiResponse::success(
        StatusCode::OK,
        "Edition updated successfully",
        edition.into_dto(),
    ))
}

/// Delete an edition and its articles, responding with the deleted edition.
#[utoipa::path(
    delete,
    path = "/api/edition/{id}",
    tag = EDITION_TAG,
    params(("id" = i32, Path, description = "Edition ID")),
    responses(
        (status = 200, description = "Edition deleted", body = ApiResponse<EditionDto>),
        (status = 400, description = "Delete blocked by authorship records", body = ErrorResponse),
        (status = 404, description = "Edition not found", body = ErrorResponse)
    ),
)]
pub async fn delete_edition(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    PathParam(id): PathParam<i32>,
) -> Result<impl IntoResponse, AppError> {
    let edition = EditionService::new(&state.db).delete(id).await?;

    tracing::info!("{} deleted edition {}", user.email, id);

    Ok(ApiResponse::success(
        StatusCode::OK,
        "Edition deleted successfully",
        edition.into_dto(),
    ))
}

#[utoipa::path(
    get,
    path = "/api/edition/getByID/{id}",
    tag = EDITION_TAG,
    params(("id" = i32, Path, description = "Edition ID")),
    responses(
        (status = 200, description = "Edition found", body = ApiResponse<EditionDto>),
        (status = 404, description = "Edition not found", body = ErrorResponse)
    ),
)]
pub async fn get_edition_by_id(
    State(state): State<AppState>,
    PathParam(id): PathParam<i32>,
) -> Result<impl IntoResponse, AppError> {
    let edition = EditionService::new(&state.db).get_by_id(id).await?;

    Ok(ApiResponse::success(
        StatusCode::OK,
        "Edition retrieved successfully",
        edition.into_dto(),
    ))
}

/// Get one page of editions ordered by ID. Pages start at 0.
#[utoipa::path(
    get,
    path = "/api/edition/getAll",
    tag = EDITION_TAG,
    params(PaginationParam),
    responses(
        (status = 200, description = "Editions found", body = ApiResponse<Vec<EditionDto>>),
        (status = 404, description = "Empty page", body = ApiResponse<Vec<EditionDto>>)
    ),
)]
pub async fn get_all_editions(
    State(state): State<AppState>,
    QueryParam(pagination): QueryParam<PaginationParam>,
) -> Result<impl IntoResponse, AppError> {
    list(&state, EditionFilter::All, pagination).await
}

#[utoipa::path(
    get,
    path = "/api/edition/getByYear/{year}",
    tag = EDITION_TAG,
    params(("year" = i32, Path, description = "Edition year"), PaginationParam),
    responses(
        (status = 200, description = "Editions found", body = ApiResponse<Vec<EditionDto>>),
        (status = 404, description = "Empty page", body = ApiResponse<Vec<EditionDto>>)
    ),
)]
pub async fn get_editions_by_year(
    State(state): State<AppState>,
    PathParam(year): PathParam<i32>,
    QueryParam(pagination): QueryParam<PaginationParam>,
) -> Result<impl IntoResponse, AppError> {
    list(&state, EditionFilter::Year(year), pagination).await
}

/// Get editions held between two years, both inclusive.
#[utoipa::path(
    get,
    path = "/api/edition/getBetweenYears/{start}/{end}",
    tag = EDITION_TAG,
    params(
        ("start" = i32, Path, description = "First year"),
        ("end" = i32, Path, description = "Last year"),
        PaginationParam
    ),
    responses(
        (status = 200, description = "Editions found", body = ApiResponse<Vec<EditionDto>>),
        (status = 404, description = "Empty page", body = ApiResponse<Vec<EditionDto>>)
    ),
)]
pub async fn get_editions_between_years(
    State(state): State<AppState>,
    PathParam((start, end)): PathParam<(i32, i32)>,
    QueryParam(pagination): QueryParam<PaginationParam>,
) -> Result<impl IntoResponse, AppError> {
    list(&state, EditionFilter::YearBetween { start, end }, pagination).await
}

#[utoipa::path(
    get,
    path = "/api/edition/getByCity/{city}",
    tag = EDITION_TAG,
    params(("city" = String, Path, description = "Substring of the city"), PaginationParam),
    responses(
        (status = 200, description = "Editions found", body = ApiResponse<Vec<EditionDto>>),
        (status = 404, description = "Empty page", body = ApiResponse<Vec<EditionDto>>)
    ),
)]
pub async fn get_editions_by_city(
    State(state): State<AppState>,
    PathParam(city): PathParam<String>,
    QueryParam(pagination): QueryParam<PaginationParam>,
) -> Result<impl IntoResponse, AppError> {
    list(&state, EditionFilter::CityContains(city), pagination).await
}

/// Get editions held on a date given as `yyyy-MM-dd`.
///
/// # Returns
/// - `200 OK` - Matching editions
/// - `400 Bad Request` - "Error parsing date: ..."
/// - `404 Not Found` - Empty page
#[utoipa::path(
    get,
    path = "/api/edition/getByDate/{date}",
    tag = EDITION_TAG,
    params(("date" = String, Path, description = "Date as yyyy-MM-dd"), PaginationParam),
    responses(
        (status = 200, description = "Editions found", body = ApiResponse<Vec<EditionDto>>),
        (status = 400, description = "Unparseable date", body = ErrorResponse),
        (status = 404, description = "Empty page", body = ApiResponse<Vec<EditionDto>>)
    ),
)]
pub async fn get_editions_by_date(
    State(state): State<AppState>,
    PathParam(date): PathParam<String>,
    QueryParam(pagination): QueryParam<PaginationParam>,
) -> Result<impl IntoResponse, AppError> {
    let filter = EditionFilter::parse_date(&date)?;

    list(&state, filter, pagination).await
}

async fn list(
    state: &AppState,
    filter: EditionFilter,
    pagination: PaginationParam,
) -> Result<ApiResponse<Vec<EditionDto>>, AppError> {
    let page = pagination.into_page(PageBase::Zero)?;

    let editions = EditionService::new(&state.db)
        .get_paginated(filter, page)
        .await?;

    Ok(page_response(
        editions.into_iter().map(Edition::into_dto).collect(),
        "Editions retrieved successfully",
        &EMPTY,
    ))
}
