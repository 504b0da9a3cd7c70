use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Navigation link attached to a paged listing.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct PageLinkDto {
    /// Link relation: `self`, `prev` or `next`
    pub rel: String,
    pub href: String,
    pub method: String,
}

/// One page of a listing with its HATEOAS navigation links.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PageDto<T> {
    pub items: Vec<T>,
    /// One-based page number
    pub page: u64,
    pub page_size: u64,
    /// Total number of items across all pages
    pub total: u64,
    pub links: Vec<PageLinkDto>,
}
