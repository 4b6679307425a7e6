use axum::{extract::State, http::StatusCode, response::IntoResponse};

use crate::{
    model::{
        api::{ApiResponse, ErrorResponse},
        article::{ArticleDto, ArticleInputDto},
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
            article::{Article, ArticleParam},
            page::PageBase,
        },
        service::article::ArticleService,
        state::AppState,
    },
};

/// Tag for grouping article endpoints in OpenAPI documentation
pub static ARTICLE_TAG: &str = "article";

const EMPTY: EmptyPage = EmptyPage {
    message: "No articles found",
    success: false,
    empty_list: false,
};

/// Create an article in an existing edition.
///
/// # Returns
/// - `201 Created` - The created article
/// - `400 Bad Request` - Validation failed
/// - `404 Not Found` - "Edition not found"
#[utoipa::path(
    post,
    path = "/api/article/",
    tag = ARTICLE_TAG,
    request_body = ArticleInputDto,
    responses(
        (status = 201, description = "Article created", body = ApiResponse<ArticleDto>),
        (status = 400, description = "Invalid article data", body = ErrorResponse),
        (status = 404, description = "Edition not found", body = ErrorResponse)
    ),
)]
pub async fn create_article(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    JsonBody(payload): JsonBody<ArticleInputDto>,
) -> Result<impl IntoResponse, AppError> {
    let param = ArticleParam::from_dto(payload)?;

    let article = ArticleService::new(&state.db).create(param).await?;

    tracing::info!("{} created article {}", user.email, article.id);

    Ok(ApiResponse::success(
        StatusCode::CREATED,
        "Article created successfully",
        article.into_dto(),
    ))
}

#[utoipa::path(
    put,
    path = "/api/article/{id}",
    tag = ARTICLE_TAG,
    params(("id" = i32, Path, description = "Article ID")),
    request_body = ArticleInputDto,
    responses(
        (status = 200, description = "Article updated", body = ApiResponse<ArticleDto>),
        (status = 400, description = "Invalid article data", body = ErrorResponse),
        (status = 404, description = "Article or edition not found", body = ErrorResponse)
    ),
)]
pub async fn update_article(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    PathParam(id): PathParam<i32>,
    JsonBody(payload): JsonBody<ArticleInputDto>,
) -> Result<impl IntoResponse, AppError> {
    let param = ArticleParam::from_dto(payload)?;

    let article = ArticleService::new(&state.db).update(id, param).await?;

    tracing::info!("{} updated article {}", user.email, id);

    Ok(ApiResponse::success(
        StatusCode::OK,
        "Article updated successfully",
        article.into_dto(),
    ))
}

/// Delete an article. Refused with 400 while authorship records reference it.
#[utoipa::path(
    delete,
    path = "/api/article/{id}",
    tag = ARTICLE_TAG,
    params(("id" = i32, Path, description = "Article ID")),
    responses(
        (status = 200, description = "Article deleted, data is null", body = ApiResponse<ArticleDto>),
        (status = 400, description = "Delete blocked by authorship records", body = ErrorResponse),
        (status = 404, description = "Article not found", body = ErrorResponse)
    ),
)]
pub async fn delete_article(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    PathParam(id): PathParam<i32>,
) -> Result<impl IntoResponse, AppError> {
    ArticleService::new(&state.db).delete(id).await?;

    tracing::info!("{} deleted article {}", user.email, id);

    Ok(ApiResponse::<ArticleDto>::new(
        StatusCode::OK,
        true,
        "Article deleted successfully",
        None,
    ))
}

#[utoipa::path(
    get,
    path = "/api/article/getByID/{id}",
    tag = ARTICLE_TAG,
    params(("id" = i32, Path, description = "Article ID")),
    responses(
        (status = 200, description = "Article found", body = ApiResponse<ArticleDto>),
        (status = 404, description = "Article not found", body = ErrorResponse)
    ),
)]
pub async fn get_article_by_id(
    State(state): State<AppState>,
    PathParam(id): PathParam<i32>,
) -> Result<impl IntoResponse, AppError> {
    let article = ArticleService::new(&state.db).get_by_id(id).await?;

    Ok(ApiResponse::success(
        StatusCode::OK,
        "Article retrieved successfully",
        article.into_dto(),
    ))
}

/// Get one page of articles ordered by ID. Pages start at 0.
#[utoipa::path(
    get,
    path = "/api/article/getAll",
    tag = ARTICLE_TAG,
    params(PaginationParam),
    responses(
        (status = 200, description = "Articles found", body = ApiResponse<Vec<ArticleDto>>),
        (status = 400, description = "Invalid pagination", body = ErrorResponse),
        (status = 404, description = "Empty page", body = ErrorResponse)
    ),
)]
pub async fn get_all_articles(
    State(state): State<AppState>,
    QueryParam(pagination): QueryParam<PaginationParam>,
) -> Result<impl IntoResponse, AppError> {
    let page = pagination.into_page(PageBase::Zero)?;

    let articles = ArticleService::new(&state.db).get_paginated(page).await?;

    Ok(page_response(
        articles.into_iter().map(Article::into_dto).collect(),
        "Articles retrieved successfully",
        &EMPTY,
    ))
}
