//! HATEOAS navigation links for paged listings.
//!
//! Link generation is a pure function of the request origin, the listing route and the
//! normalized page descriptor. The origin is passed in explicitly so the builder never
//! touches request or global state.

use axum::http::{header, HeaderMap, Uri};

/// Path prefix shared by every versioned API route.
pub const API_PREFIX: &str = "/api/v1";

const FORWARDED_PROTO: &str = "x-forwarded-proto";
const FORWARDED_HOST: &str = "x-forwarded-host";

/// Relation of a navigation link to the current page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkRelation {
    Current,
    Previous,
    Next,
}

impl LinkRelation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Current => "self",
            Self::Previous => "prev",
            Self::Next => "next",
        }
    }
}

/// A single navigation link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLink {
    pub rel: LinkRelation,
    pub href: String,
    pub method: &'static str,
}

/// Scheme and host the client used to reach the API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestOrigin {
    pub scheme: String,
    pub host: String,
}

impl RequestOrigin {
    pub fn new(scheme: impl Into<String>, host: impl Into<String>) -> Self {
        Self {
            scheme: scheme.into(),
            host: host.into(),
        }
    }

    /// Resolves the origin from request headers.
    ///
    /// Proxy headers (`X-Forwarded-Proto`, `X-Forwarded-Host`) take precedence over the
    /// `Host` header and the request URI. Falls back to `http` and `localhost` when nothing
    /// usable is present.
    ///
    /// # Arguments
    /// - `headers` - Request headers
    /// - `uri` - Request URI, only absolute-form URIs carry a scheme or authority
    ///
    /// # Returns
    /// - `RequestOrigin` - Resolved scheme and host
    pub fn from_request(headers: &HeaderMap, uri: &Uri) -> Self {
        let scheme = first_header_value(headers, FORWARDED_PROTO)
            .or_else(|| uri.scheme_str().map(str::to_string))
            .unwrap_or_else(|| "http".to_string());

        let host = first_header_value(headers, FORWARDED_HOST)
            .or_else(|| first_header_value(headers, header::HOST.as_str()))
            .or_else(|| uri.authority().map(|a| a.to_string()))
            .unwrap_or_else(|| "localhost".to_string());

        Self { scheme, host }
    }
}

fn first_header_value(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(',').next())
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}

/// Builds the navigation links for one page of a listing.
///
/// Always emits `self`. Emits `prev` when `(page - 1) * page_size > 0` and `next` when
/// `page * page_size < total`. Every link uses `GET` and carries the `page` and
/// `pageSize` query parameters.
///
/// Expects normalized input (`page >= 1`, `page_size >= 1`).
///
/// # Arguments
/// - `origin` - Scheme and host of the current request
/// - `route` - Listing route name below the API prefix, e.g. `motorcycles`
/// - `page` - One-based page number
/// - `page_size` - Items per page
/// - `total` - Total items across all pages
///
/// # Returns
/// - `Vec<PageLink>` - Links ordered `self`, `prev`, `next`
pub fn build_links(
    origin: &RequestOrigin,
    route: &str,
    page: u64,
    page_size: u64,
    total: u64,
) -> Vec<PageLink> {
    let link = |rel: LinkRelation, target_page: u64| PageLink {
        rel,
        href: format!(
            "{}://{}{}/{}?page={}&pageSize={}",
            origin.scheme, origin.host, API_PREFIX, route, target_page, page_size
        ),
        method: "GET",
    };

    let mut links = vec![link(LinkRelation::Current, page)];

    if page.saturating_sub(1).saturating_mul(page_size) > 0 {
        links.push(link(LinkRelation::Previous, page - 1));
    }

    if page.saturating_mul(page_size) < total {
        links.push(link(LinkRelation::Next, page + 1));
    }

    links
}
