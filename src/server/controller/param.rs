//! Query parameters and request extractors shared by controllers.

use std::convert::Infallible;

use axum::{extract::FromRequestParts, http::request::Parts};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::server::{model::pagination::PageRequest, util::hateoas::RequestOrigin};

/// `page` and `pageSize` query parameters.
///
/// Missing or non-positive values fall back to page 1 and 10 items. Sizes above 100
/// are capped.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct PaginationParam {
    /// One-based page number (default: 1)
    pub page: Option<i64>,
    /// Items per page (default: 10, at most 100)
    pub page_size: Option<i64>,
}

impl PaginationParam {
    pub fn into_page_request(self) -> PageRequest {
        PageRequest::new(self.page, self.page_size)
    }
}

/// Maintenance listing query: pagination plus an optional status filter.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct MaintenanceListParam {
    /// `Open` or `Completed`, case-insensitive. Unknown values are ignored.
    pub status: Option<String>,
    /// One-based page number (default: 1)
    pub page: Option<i64>,
    /// Items per page (default: 10, at most 100)
    pub page_size: Option<i64>,
}

impl<S> FromRequestParts<S> for RequestOrigin
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(RequestOrigin::from_request(&parts.headers, &parts.uri))
    }
}
