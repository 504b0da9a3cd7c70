//! Page request and page result types shared by every listing.

use crate::{
    model::pagination::{PageDto, PageLinkDto},
    server::util::hateoas::{build_links, RequestOrigin},
};

pub const DEFAULT_PAGE: u64 = 1;
pub const DEFAULT_PAGE_SIZE: u64 = 10;
pub const MAX_PAGE_SIZE: u64 = 100;

/// Normalized page descriptor with a one-based page number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u64,
    pub page_size: u64,
}

impl PageRequest {
    /// Normalizes raw query values.
    ///
    /// Missing or non-positive `page` becomes 1. Missing or non-positive `page_size`
    /// becomes 10, and larger sizes are capped at 100.
    ///
    /// # Arguments
    /// - `page` - Requested one-based page number
    /// - `page_size` - Requested items per page
    ///
    /// # Returns
    /// - `PageRequest` - Page descriptor with both values at least 1
    pub fn new(page: Option<i64>, page_size: Option<i64>) -> Self {
        let page = match page {
            Some(p) if p >= 1 => p as u64,
            _ => DEFAULT_PAGE,
        };
        let page_size = match page_size {
            Some(s) if s >= 1 => (s as u64).min(MAX_PAGE_SIZE),
            _ => DEFAULT_PAGE_SIZE,
        };

        Self { page, page_size }
    }

    /// Zero-based page index used by the database paginator.
    pub fn index(&self) -> u64 {
        self.page - 1
    }

    /// Number of items before this page, `None` when it does not fit in a `u64`.
    pub fn offset(&self) -> Option<u64> {
        self.index().checked_mul(self.page_size)
    }

    /// Whether this page starts before the end of a listing with `total` items.
    ///
    /// Pages past the end hold no items, so callers skip the fetch for them.
    pub fn starts_within(&self, total: u64) -> bool {
        self.offset().is_some_and(|offset| offset < total)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// One page of domain items together with the total count across all pages.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: u64,
    pub page_size: u64,
    pub total: u64,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, request: PageRequest, total: u64) -> Self {
        Self {
            items,
            page: request.page,
            page_size: request.page_size,
            total,
        }
    }

    /// Converts every item while keeping the page metadata.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            page: self.page,
            page_size: self.page_size,
            total: self.total,
        }
    }

    /// Converts the page into its DTO with navigation links.
    ///
    /// # Arguments
    /// - `origin` - Scheme and host of the current request
    /// - `route` - Listing route name used in link hrefs
    ///
    /// # Returns
    /// - `PageDto<T>` - Items, metadata and `self`/`prev`/`next` links
    pub fn into_dto(self, origin: &RequestOrigin, route: &str) -> PageDto<T> {
        let links = build_links(origin, route, self.page, self.page_size, self.total)
            .into_iter()
            .map(|link| PageLinkDto {
                rel: link.rel.as_str().to_string(),
                href: link.href,
                method: link.method.to_string(),
            })
            .collect();

        PageDto {
            items: self.items,
            page: self.page,
            page_size: self.page_size,
            total: self.total,
            links,
        }
    }
}
