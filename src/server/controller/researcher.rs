use axum::{extract::State, http::StatusCode, response::IntoResponse};

use crate::{
    model::{
        api::{ApiResponse, ErrorResponse},
        article::ArticleDto,
        researcher::{ResearcherDto, ResearcherInputDto},
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
            article::Article,
            page::PageBase,
            researcher::{FullNameParam, Researcher, ResearcherFilter, ResearcherParam},
        },
        service::{article::ArticleService, researcher::ResearcherService},
        state::AppState,
    },
};

/// Tag for grouping researcher endpoints in OpenAPI documentation
pub static RESEARCHER_TAG: &str = "researcher";

const EMPTY: EmptyPage = EmptyPage {
    message: "No researchers found",
    success: true,
    empty_list: false,
};

const NO_ARTICLES: EmptyPage = EmptyPage {
    message: "No articles found",
    success: true,
    empty_list: false,
};

/// Create a researcher.
///
/// Name parts must be 3 to 64 characters without digits or whitespace, the
/// university 3 to 128 characters.
#[utoipa::path(
    post,
    path = "/api/researcher/",
    tag = RESEARCHER_TAG,
    request_body = ResearcherInputDto,
    responses(
        (status = 201, description = "Researcher created", body = ApiResponse<ResearcherDto>),
        (status = 400, description = "Invalid researcher data", body = ErrorResponse)
    ),
)]
pub async fn create_researcher(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    JsonBody(payload): JsonBody<ResearcherInputDto>,
) -> Result<impl IntoResponse, AppError> {
    let param = ResearcherParam::from_dto(payload)?;

    let researcher = ResearcherService::new(&state.db).create(param).await?;

    tracing::info!("{} created researcher {}", user.email, researcher.id);

    Ok(ApiResponse::success(
        StatusCode::CREATED,
        "Researcher created successfully",
        researcher.into_dto(),
    ))
}

#[utoipa::path(
    put,
    path = "/api/researcher/{id}",
    tag = RESEARCHER_TAG,
    params(("id" = i32, Path, description = "Researcher ID")),
    request_body = ResearcherInputDto,
    responses(
        (status = 200, description = "Researcher updated", body = ApiResponse<ResearcherDto>),
        (status = 400, description = "Invalid researcher data", body = ErrorResponse),
        (status = 404, description = "Researcher not found", body = ErrorResponse)
    ),
)]
pub async fn update_researcher(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    PathParam(id): PathParam<i32>,
    JsonBody(payload): JsonBody<ResearcherInputDto>,
) -> Result<impl IntoResponse, AppError> {
    let param = ResearcherParam::from_dto(payload)?;

    let researcher = ResearcherService::new(&state.db).update(id, param).await?;

    tracing::info!("{} updated researcher {}", user.email, id);

    Ok(ApiResponse::success(
        StatusCode::OK,
        "Researcher updated successfully",
        researcher.into_dto(),
    ))
}

/// Delete a researcher. Refused with 400 while authorship records reference them.
#[utoipa::path(
    delete,
    path = "/api/researcher/{id}",
    tag = RESEARCHER_TAG,
    params(("id" = i32, Path, description = "Researcher ID")),
    responses(
        (status = 200, description = "Researcher deleted, data is null", body = ApiResponse<ResearcherDto>),
        (status = 400, description = "Delete blocked by authorship records", body = ErrorResponse),
        (status = 404, description = "Researcher not found", body = ErrorResponse)
    ),
)]
pub async fn delete_researcher(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    PathParam(id): PathParam<i32>,
) -> Result<impl IntoResponse, AppError> {
    ResearcherService::new(&state.db).delete(id).await?;

    tracing::info!("{} deleted researcher {}", user.email, id);

    Ok(ApiResponse::<ResearcherDto>::new(
        StatusCode::OK,
        true,
        "Researcher deleted successfully",
        None,
    ))
}

#[utoipa::path(
    get,
    path = "/api/researcher/getByID/{id}",
    tag = RESEARCHER_TAG,
    params(("id" = i32, Path, description = "Researcher ID")),
    responses(
        (status = 200, description = "Researcher found", body = ApiResponse<ResearcherDto>),
        (status = 404, description = "Researcher not found", body = ErrorResponse)
    ),
)]
pub async fn get_researcher_by_id(
    State(state): State<AppState>,
    PathParam(id): PathParam<i32>,
) -> Result<impl IntoResponse, AppError> {
    let researcher = ResearcherService::new(&state.db).get_by_id(id).await?;

    Ok(ApiResponse::success(
        StatusCode::OK,
        "Researcher found",
        researcher.into_dto(),
    ))
}

/// Get one page of researchers ordered by ID. Pages start at 1.
#[utoipa::path(
    get,
    path = "/api/researcher/getAll",
    tag = RESEARCHER_TAG,
    params(PaginationParam),
    responses(
        (status = 200, description = "Researchers found", body = ApiResponse<Vec<ResearcherDto>>),
        (status = 404, description = "Empty page", body = ApiResponse<Vec<ResearcherDto>>)
    ),
)]
pub async fn get_all_researchers(
    State(state): State<AppState>,
    QueryParam(pagination): QueryParam<PaginationParam>,
) -> Result<impl IntoResponse, AppError> {
    list(&state, ResearcherFilter::All, pagination).await
}

#[utoipa::path(
    get,
    path = "/api/researcher/getByName/{name}",
    tag = RESEARCHER_TAG,
    params(("name" = String, Path, description = "Substring of the name"), PaginationParam),
    responses(
        (status = 200, description = "Researchers found", body = ApiResponse<Vec<ResearcherDto>>),
        (status = 404, description = "Empty page", body = ApiResponse<Vec<ResearcherDto>>)
    ),
)]
pub async fn get_researchers_by_name(
    State(state): State<AppState>,
    PathParam(name): PathParam<String>,
    QueryParam(pagination): QueryParam<PaginationParam>,
) -> Result<impl IntoResponse, AppError> {
    list(&state, ResearcherFilter::NameContains(name), pagination).await
}

#[utoipa::path(
    get,
    path = "/api/researcher/getBySurname/{surname}",
    tag = RESEARCHER_TAG,
    params(("surname" = String, Path, description = "Substring of the surname"), PaginationParam),
    responses(
        (status = 200, description = "Researchers found", body = ApiResponse<Vec<ResearcherDto>>),
        (status = 404, description = "Empty page", body = ApiResponse<Vec<ResearcherDto>>)
    ),
)]
pub async fn get_researchers_by_surname(
    State(state): State<AppState>,
    PathParam(surname): PathParam<String>,
    QueryParam(pagination): QueryParam<PaginationParam>,
) -> Result<impl IntoResponse, AppError> {
    list(&state, ResearcherFilter::SurnameContains(surname), pagination).await
}

#[utoipa::path(
    get,
    path = "/api/researcher/getBySecSurname/{secSurname}",
    tag = RESEARCHER_TAG,
    params(
        ("secSurname" = String, Path, description = "Substring of the second surname"),
        PaginationParam
    ),
    responses(
        (status = 200, description = "Researchers found", body = ApiResponse<Vec<ResearcherDto>>),
        (status = 404, description = "Empty page", body = ApiResponse<Vec<ResearcherDto>>)
    ),
)]
pub async fn get_researchers_by_second_surname(
    State(state): State<AppState>,
    PathParam(second_surname): PathParam<String>,
    QueryParam(pagination): QueryParam<PaginationParam>,
) -> Result<impl IntoResponse, AppError> {
    list(
        &state,
        ResearcherFilter::SecondSurnameContains(second_surname),
        pagination,
    )
    .await
}

#[utoipa::path(
    get,
    path = "/api/researcher/getByUniversity/{university}",
    tag = RESEARCHER_TAG,
    params(
        ("university" = String, Path, description = "Substring of the university"),
        PaginationParam
    ),
    responses(
        (status = 200, description = "Researchers found", body = ApiResponse<Vec<ResearcherDto>>),
        (status = 404, description = "Empty page", body = ApiResponse<Vec<ResearcherDto>>)
    ),
)]
pub async fn get_researchers_by_university(
    State(state): State<AppState>,
    PathParam(university): PathParam<String>,
    QueryParam(pagination): QueryParam<PaginationParam>,
) -> Result<impl IntoResponse, AppError> {
    list(
        &state,
        ResearcherFilter::UniversityContains(university),
        pagination,
    )
    .await
}

/// Get every article credited to the researcher with exactly this full name.
///
/// # Returns
/// - `200 OK` - The researcher's articles
/// - `404 Not Found` - "Researcher not found", or "No articles found" with success true
#[utoipa::path(
    get,
    path = "/api/researcher/getAllArticlesFromResearcherCompleteName/{name}/{surname}/{secSurname}",
    tag = RESEARCHER_TAG,
    params(
        ("name" = String, Path, description = "Exact name"),
        ("surname" = String, Path, description = "Exact surname"),
        ("secSurname" = String, Path, description = "Exact second surname")
    ),
    responses(
        (status = 200, description = "Articles found", body = ApiResponse<Vec<ArticleDto>>),
        (status = 404, description = "Researcher or articles not found", body = ApiResponse<Vec<ArticleDto>>)
    ),
)]
pub async fn get_articles_by_researcher_full_name(
    State(state): State<AppState>,
    PathParam((name, surname, second_surname)): PathParam<(String, String, String)>,
) -> Result<impl IntoResponse, AppError> {
    let full_name = FullNameParam {
        name,
        surname,
        second_surname,
    };

    let articles = ArticleService::new(&state.db)
        .get_by_researcher_full_name(&full_name)
        .await?;

    Ok(page_response(
        articles.into_iter().map(Article::into_dto).collect(),
        "Articles retrieved successfully",
        &NO_ARTICLES,
    ))
}

async fn list(
    state: &AppState,
    filter: ResearcherFilter,
    pagination: PaginationParam,
) -> Result<ApiResponse<Vec<ResearcherDto>>, AppError> {
    let page = pagination.into_page(PageBase::One)?;

    let researchers = ResearcherService::new(&state.db)
        .get_paginated(filter, page)
        .await?;

    Ok(page_response(
        researchers.into_iter().map(Researcher::into_dto).collect(),
        "Researchers retrieved successfully",
        &EMPTY,
    ))
}
