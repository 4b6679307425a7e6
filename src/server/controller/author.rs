use axum::{extract::State, http::StatusCode, response::IntoResponse};

use crate::{
    model::{
        api::{ApiResponse, ErrorResponse},
        author::{AuthorDto, AuthorInputDto},
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
            author::{Author, AuthorParam},
            page::PageBase,
        },
        service::author::AuthorService,
        state::AppState,
    },
};

/// Tag for grouping authorship endpoints in OpenAPI documentation
pub static AUTHOR_TAG: &str = "author";

const EMPTY: EmptyPage = EmptyPage {
    message: "Authors not found",
    success: false,
    empty_list: false,
};

/// Credit a researcher on an article.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `user` - Caller resolved from the bearer token
/// - `payload` - Article and researcher IDs
///
/// # Returns
/// - `201 Created` - The created authorship record
/// - `400 Bad Request` - Validation failed
/// - `404 Not Found` - "Article not found" or "Researcher not found"
#[utoipa::path(
    post,
    path = "/api/author/",
    tag = AUTHOR_TAG,
    request_body = AuthorInputDto,
    responses(
        (status = 201, description = "Author created", body = ApiResponse<AuthorDto>),
        (status = 400, description = "Invalid author data", body = ErrorResponse),
        (status = 404, description = "Article or researcher not found", body = ErrorResponse)
    ),
)]
pub async fn create_author(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    JsonBody(payload): JsonBody<AuthorInputDto>,
) -> Result<impl IntoResponse, AppError> {
    let param = AuthorParam::from_dto(payload)?;

    let author = AuthorService::new(&state.db).create(param).await?;

    tracing::info!(
        "{} credited researcher {} on article {}",
        user.email,
        author.researcher_id,
        author.article_id
    );

    Ok(ApiResponse::success(
        StatusCode::CREATED,
        "Author created successfully",
        author.into_dto(),
    ))
}

#[utoipa::path(
    put,
    path = "/api/author/{id}",
    tag = AUTHOR_TAG,
    params(("id" = i32, Path, description = "Author ID")),
    request_body = AuthorInputDto,
    responses(
        (status = 200, description = "Author updated", body = ApiResponse<AuthorDto>),
        (status = 400, description = "Invalid author data", body = ErrorResponse),
        (status = 404, description = "Author, article or researcher not found", body = ErrorResponse)
    ),
)]
pub async fn update_author(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    PathParam(id): PathParam<i32>,
    JsonBody(payload): JsonBody<AuthorInputDto>,
) -> Result<impl IntoResponse, AppError> {
    let param = AuthorParam::from_dto(payload)?;

    let author = AuthorService::new(&state.db).update(id, param).await?;

    tracing::info!("{} updated author {}", user.email, id);

    Ok(ApiResponse::success(
        StatusCode::OK,
        "Author updated successfully",
        author.into_dto(),
    ))
}

#[utoipa::path(
    delete,
    path = "/api/author/{id}",
    tag = AUTHOR_TAG,
    params(("id" = i32, Path, description = "Author ID")),
    responses(
        (status = 200, description = "Author deleted, data is null", body = ApiResponse<AuthorDto>),
        (status = 404, description = "Author not found", body = ErrorResponse)
    ),
)]
pub async fn delete_author(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    PathParam(id): PathParam<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthorService::new(&state.db).delete(id).await?;

    tracing::info!("{} deleted author {}", user.email, id);

    Ok(ApiResponse::<AuthorDto>::new(
        StatusCode::OK,
        true,
        "Author deleted successfully",
        None,
    ))
}

#[utoipa::path(
    get,
    path = "/api/author/getByID/{id}",
    tag = AUTHOR_TAG,
    params(("id" = i32, Path, description = "Author ID")),
    responses(
        (status = 200, description = "Author found", body = ApiResponse<AuthorDto>),
        (status = 404, description = "Author not found", body = ErrorResponse)
    ),
)]
pub async fn get_author_by_id(
    State(state): State<AppState>,
    PathParam(id): PathParam<i32>,
) -> Result<impl IntoResponse, AppError> {
    let author = AuthorService::new(&state.db).get_by_id(id).await?;

    Ok(ApiResponse::success(
        StatusCode::OK,
        "Author retrieved successfully",
        author.into_dto(),
    ))
}

/// Get one page of authorship records ordered by ID. Pages start at 0.
#[utoipa::path(
    get,
    path = "/api/author/getAll",
    tag = AUTHOR_TAG,
    params(PaginationParam),
    responses(
        (status = 200, description = "Authors found", body = ApiResponse<Vec<AuthorDto>>),
        (status = 404, description = "Empty page", body = ErrorResponse)
    ),
)]
pub async fn get_all_authors(
    State(state): State<AppState>,
    QueryParam(pagination): QueryParam<PaginationParam>,
) -> Result<impl IntoResponse, AppError> {
    let page = pagination.into_page(PageBase::Zero)?;

    let authors = AuthorService::new(&state.db).get_paginated(page).await?;

    Ok(page_response(
        authors.into_iter().map(Author::into_dto).collect(),
        "Authors retrieved successfully",
        &EMPTY,
    ))
}
