use serde::Deserialize;
use utoipa::IntoParams;

use crate::server::{
    error::AppError,
    model::page::{PageBase, PageParam},
};

/// `page` and `size` query parameters shared by every list endpoint.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PaginationParam {
    /// Page index. Zero- or one-based depending on the endpoint.
    pub page: Option<i64>,
    /// Items per page (default: 10, at most 1000)
    pub size: Option<i64>,
}

impl PaginationParam {
    pub fn into_page(self, base: PageBase) -> Result<PageParam, AppError> {
        PageParam::new(base, self.page, self.size)
    }
}
