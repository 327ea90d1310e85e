//! Pagination types for list endpoints.

use serde::{Deserialize, Serialize};

/// Default page size.
const DEFAULT_PAGE_SIZE: u64 = 20;
/// Maximum page size.
const MAX_PAGE_SIZE: u64 = 100;

/// Request parameters for paginated queries.
///
/// Pages are 0-based, matching the query parameters of the HTTP API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageRequest {
    /// Page number (0-based).
    #[serde(default)]
    pub page: u64,
    /// Number of items per page.
    #[serde(default = "default_page_size")]
    pub size: u64,
}

impl PageRequest {
    /// Create a new page request, clamping the size to the allowed range.
    pub fn new(page: u64, size: u64) -> Self {
        Self {
            page,
            size: size.clamp(1, MAX_PAGE_SIZE),
        }
    }

    /// Calculate the SQL `OFFSET` value.
    ///
    /// Both `page` and `size` are client-supplied, so the product is
    /// saturated into `i64` range instead of trusted to fit.
    pub fn offset(&self) -> u64 {
        self.page
            .checked_mul(self.size)
            .unwrap_or(u64::MAX)
            .min(i64::MAX as u64)
    }

    /// Return the SQL `LIMIT` value.
    pub fn limit(&self) -> u64 {
        self.size
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 0,
            size: DEFAULT_PAGE_SIZE,
        }
    }
}

fn default_page_size() -> u64 {
    DEFAULT_PAGE_SIZE
}

/// Paginated response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageResponse<T> {
    /// The items on this page.
    pub items: Vec<T>,
    /// Current page number (0-based).
    pub page: u64,
    /// Number of items per page.
    pub size: u64,
    /// Total number of items across all pages.
    pub total_items: u64,
    /// Total number of pages.
    pub total_pages: u64,
}

impl<T> PageResponse<T> {
    /// Create a new paginated response.
    pub fn new(items: Vec<T>, page: &PageRequest, total_items: u64) -> Self {
        let total_pages = if total_items == 0 {
            0
        } else {
            total_items.div_ceil(page.size)
        };
        Self {
            items,
            page: page.page,
            size: page.size,
            total_items,
            total_pages,
        }
    }

    /// Map the items of this page into another type.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> PageResponse<U> {
        PageResponse {
            items: self.items.into_iter().map(f).collect(),
            page: self.page,
            size: self.size,
            total_items: self.total_items,
            total_pages: self.total_pages,
        }
    }
}
