//! Route table and OpenAPI document.

use axum::{http::StatusCode, middleware, response::IntoResponse, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    model::api::ErrorResponse,
    server::{
        controller::{
            article::{self, ARTICLE_TAG},
            auth::{self, AUTH_TAG},
            author::{self, AUTHOR_TAG},
            conference::{self, CONFERENCE_TAG},
            edition::{self, EDITION_TAG},
            researcher::{self, RESEARCHER_TAG},
        },
        middleware::auth::require_auth,
        state::AppState,
    },
};

/// Registers the bearer token scheme referenced by every protected operation.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "Conference catalog API",
        description = "Conferences, editions, articles, researchers and authorship records."
    ),
    security(("bearer_auth" = [])),
    tags(
        (name = AUTH_TAG, description = "Registration and login"),
        (name = CONFERENCE_TAG, description = "Research conferences"),
        (name = EDITION_TAG, description = "Yearly editions of a conference"),
        (name = ARTICLE_TAG, description = "Articles presented at an edition"),
        (name = RESEARCHER_TAG, description = "Researchers and their articles"),
        (name = AUTHOR_TAG, description = "Links between articles and researchers")
    )
)]
pub struct ApiDoc;

/// Builds the application router.
///
/// Every `/api` route except `/api/auth/*` sits behind [`require_auth`]. Swagger UI
/// is served at `/swagger-ui` with the document at `/api-docs/openapi.json`.
pub fn router(state: AppState) -> Router {
    let (api_router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(auth::register))
        .routes(routes!(auth::login))
        .routes(routes!(conference::create_conference))
        .routes(routes!(conference::update_conference))
        .routes(routes!(conference::delete_conference))
        .routes(routes!(conference::get_conference_by_id))
        .routes(routes!(conference::get_all_conferences))
        .routes(routes!(conference::get_conferences_by_name))
        .routes(routes!(edition::create_edition))
        .routes(routes!(edition::update_edition))
        .routes(routes!(edition::delete_edition))
        .routes(routes!(edition::get_edition_by_id))
        .routes(routes!(edition::get_all_editions))
        .routes(routes!(edition::get_editions_by_year))
        .routes(routes!(edition::get_editions_between_years))
        .routes(routes!(edition::get_editions_by_city))
        .routes(routes!(edition::get_editions_by_date))
        .routes(routes!(article::create_article))
        .routes(routes!(article::update_article))
        .routes(routes!(article::delete_article))
        .routes(routes!(article::get_article_by_id))
        .routes(routes!(article::get_all_articles))
        .routes(routes!(researcher::create_researcher))
        .routes(routes!(researcher::update_researcher))
        .routes(routes!(researcher::delete_researcher))
        .routes(routes!(researcher::get_researcher_by_id))
        .routes(routes!(researcher::get_all_researchers))
        .routes(routes!(researcher::get_researchers_by_name))
        .routes(routes!(researcher::get_researchers_by_surname))
        .routes(routes!(researcher::get_researchers_by_second_surname))
        .routes(routes!(researcher::get_researchers_by_university))
        .routes(routes!(researcher::get_articles_by_researcher_full_name))
        .routes(routes!(author::create_author))
        .routes(routes!(author::update_author))
        .routes(routes!(author::delete_author))
        .routes(routes!(author::get_author_by_id))
        .routes(routes!(author::get_all_authors))
        .split_for_parts();

    api_router
        .fallback(fallback)
        .layer(middleware::from_fn_with_state(state.clone(), require_auth))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn fallback() -> impl IntoResponse {
    ErrorResponse::failure(StatusCode::NOT_FOUND, "Resource not found")
}
