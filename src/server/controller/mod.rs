//! HTTP request handlers.
//!
//! Controllers convert request DTOs into validated params, call the matching
//! service and wrap the outcome in the `{ message, success, data, status }` envelope.
//! Every handler carries a `#[utoipa::path]` annotation collected by the router.

pub mod article;
pub mod auth;
pub mod author;
pub mod conference;
pub mod edition;
pub mod extract;
pub mod param;
pub mod researcher;

#[cfg(test)]
mod test;

use axum::http::StatusCode;

use crate::model::api::ApiResponse;

/// How a list endpoint reports an empty page.
///
/// Empty pages are always 404, but message, success flag and whether `data` is
/// `[]` or `null` differ per endpoint.
#[derive(Debug, Clone, Copy)]
pub struct EmptyPage {
    pub message: &'static str,
    pub success: bool,
    pub empty_list: bool,
}

/// Wraps a page of results, switching to the endpoint's empty-page shape when needed.
pub fn page_response<T>(items: Vec<T>, found: &str, empty: &EmptyPage) -> ApiResponse<Vec<T>> {
    if items.is_empty() {
        let data = empty.empty_list.then(Vec::new);
        return ApiResponse::new(StatusCode::NOT_FOUND, empty.success, empty.message, data);
    }

    ApiResponse::success(StatusCode::OK, found, items)
}
