use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::shared::constants::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub message: Option<String>,
    pub meta: Option<Meta>,
    pub errors: Option<Vec<String>>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct Meta {
    pub total: i64,
}

impl<T> ApiResponse<T> {
    pub fn success(data: Option<T>, message: Option<String>, meta: Option<Meta>) -> Self {
        Self {
            success: true,
            data,
            message,
            meta,
            errors: None,
        }
    }

    pub fn error(message: Option<String>, errors: Option<Vec<String>>) -> ApiResponse<()> {
        ApiResponse {
            success: false,
            data: None,
            message,
            meta: None,
            errors,
        }
    }
}

// =============================================================================
// PAGINATION
// =============================================================================

/// Standard pagination query parameters for all list endpoints.
#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct PaginationQuery {
    /// Page number (1-indexed, default: 1)
    #[serde(default = "default_page")]
    #[param(minimum = 1)]
    pub page: i64,

    /// Number of items per page (default: 12, max: 100)
    #[serde(default = "default_page_size")]
    #[param(minimum = 1, maximum = 100)]
    pub page_size: i64,
}

fn default_page() -> i64 {
    1
}

fn default_page_size() -> i64 {
    DEFAULT_PAGE_SIZE
}

impl Default for PaginationQuery {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl PaginationQuery {
    /// Calculate SQL OFFSET from page number. `page` comes straight off
    /// the query string, so the arithmetic saturates instead of
    /// overflowing on absurd values.
    pub fn offset(&self) -> i64 {
        self.page.max(1).saturating_sub(1).saturating_mul(self.limit())
    }

    /// Get clamped page_size (respects MAX_PAGE_SIZE)
    pub fn limit(&self) -> i64 {
        self.page_size.clamp(1, MAX_PAGE_SIZE)
    }
}

/// Pagination metadata returned alongside paged listings
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PaginationMeta {
    pub page: i64,
    pub page_size: i64,
    pub total: i64,
    pub total_pages: i64,
}

impl PaginationMeta {
    pub fn new(page: i64, page_size: i64, total: i64) -> Self {
        let clamped_page_size = page_size.clamp(1, MAX_PAGE_SIZE);
        let total_pages = total_pages(total, clamped_page_size);
        Self {
            page,
            page_size: clamped_page_size,
            total,
            total_pages,
        }
    }
}

/// ceil(total / page_size); 0 when the result set is empty
pub fn total_pages(total: i64, page_size: i64) -> i64 {
    if total <= 0 || page_size <= 0 {
        return 0;
    }
    (total + page_size - 1) / page_size
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages_partial_last_page() {
        assert_eq!(total_pages(10, 9), 2);
    }

    #[test]
    fn test_total_pages_exact_fit() {
        assert_eq!(total_pages(9, 9), 1);
    }

    #[test]
    fn test_total_pages_empty() {
        assert_eq!(total_pages(0, 9), 0);
    }

    #[test]
    fn test_pagination_meta_clamps_page_size() {
        let meta = PaginationMeta::new(1, 500, 1000);
        assert_eq!(meta.page_size, MAX_PAGE_SIZE);
        assert_eq!(meta.total_pages, 10);
    }

    #[test]
    fn test_pagination_query_offset() {
        let query = PaginationQuery {
            page: 3,
            page_size: 9,
        };
        assert_eq!(query.offset(), 18);
        assert_eq!(query.limit(), 9);
    }

    #[test]
    fn test_pagination_query_offset_clamps_page() {
        let query = PaginationQuery {
            page: 0,
            page_size: 9,
        };
        assert_eq!(query.offset(), 0);
    }

    #[test]
    fn test_pagination_query_offset_saturates_on_huge_page() {
        let query = PaginationQuery {
            page: i64::MAX,
            page_size: 100,
        };
        assert_eq!(query.offset(), i64::MAX);
    }
}
