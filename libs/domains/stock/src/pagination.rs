use serde::Deserialize;
use utoipa::IntoParams;

use crate::error::{StockError, StockResult};

/// Service-wide pagination bounds, loaded once at startup.
#[derive(Debug, Clone, Copy)]
pub struct PaginationConfig {
    default_limit: i64,
    max_limit: i64,
}

impl PaginationConfig {
    /// Create a validated pagination configuration.
    ///
    /// Both limits must be positive and the default must not exceed the max.
    pub fn new(default_limit: i64, max_limit: i64) -> StockResult<Self> {
        if default_limit <= 0 {
            return Err(StockError::Validation(
                "default limit must be positive".to_string(),
            ));
        }
        if max_limit <= 0 {
            return Err(StockError::Validation(
                "max limit must be positive".to_string(),
            ));
        }
        if default_limit > max_limit {
            return Err(StockError::Validation(
                "default limit must not exceed max limit".to_string(),
            ));
        }

        Ok(Self {
            default_limit,
            max_limit,
        })
    }

    pub fn default_limit(&self) -> i64 {
        self.default_limit
    }

    pub fn max_limit(&self) -> i64 {
        self.max_limit
    }
}

/// A page request as the caller sent it.
///
/// Values may be out of bounds; call [`Pagination::normalized`] before use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: i64,
    pub limit: i64,
}

impl Pagination {
    pub fn new(page: i64, limit: i64) -> Self {
        Self { page, limit }
    }

    /// Clamp this request into the configured bounds.
    ///
    /// The clause order matters: an oversized limit is clamped to the max
    /// first, then a non-positive limit falls back to the default, then a
    /// non-positive page becomes 1. Normalizing twice yields the same result.
    pub fn normalized(self, config: &PaginationConfig) -> Self {
        let mut limit = self.limit;
        if limit > config.max_limit() {
            limit = config.max_limit();
        }
        if limit <= 0 {
            limit = config.default_limit();
        }

        let page = if self.page <= 0 { 1 } else { self.page };

        Self { page, limit }
    }

    /// Zero-based offset of the first row on this page.
    pub fn offset(&self) -> i64 {
        (self.page - 1) * self.limit
    }
}

/// Slice an in-memory collection down to the requested page.
///
/// Returns an empty vector when the offset is at or past the end.
pub fn paginate<T>(items: Vec<T>, pagination: &Pagination) -> Vec<T> {
    let offset = pagination.offset().max(0) as usize;
    if offset >= items.len() {
        return Vec::new();
    }

    items
        .into_iter()
        .skip(offset)
        .take(pagination.limit.max(0) as usize)
        .collect()
}

/// Pagination query parameters for list endpoints
#[derive(Debug, Clone, Copy, Deserialize, IntoParams)]
pub struct PageQuery {
    /// Page number, starting at 1
    #[serde(default = "default_page")]
    pub page: i64,
    /// Page size; 0 means the configured default
    #[serde(default)]
    pub limit: i64,
}

fn default_page() -> i64 {
    1
}

impl Default for PageQuery {
    fn default() -> Self {
        Self {
            page: default_page(),
            limit: 0,
        }
    }
}

impl From<PageQuery> for Pagination {
    fn from(query: PageQuery) -> Self {
        Self {
            page: query.page,
            limit: query.limit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> PaginationConfig {
        PaginationConfig::new(20, 100).unwrap()
    }

    #[test]
    fn test_config_rejects_bad_bounds() {
        assert!(PaginationConfig::new(0, 100).is_err());
        assert!(PaginationConfig::new(20, 0).is_err());
        assert!(PaginationConfig::new(200, 100).is_err());
        assert!(PaginationConfig::new(20, 20).is_ok());
    }

    #[test]
    fn test_normalize_fills_defaults() {
        let p = Pagination::new(0, 0).normalized(&config());
        assert_eq!(p, Pagination::new(1, 20));
    }

    #[test]
    fn test_normalize_clamps_oversized_limit() {
        let p = Pagination::new(2, 500).normalized(&config());
        assert_eq!(p, Pagination::new(2, 100));
    }

    #[test]
    fn test_normalize_negative_values() {
        let p = Pagination::new(-3, -10).normalized(&config());
        assert_eq!(p, Pagination::new(1, 20));
    }

    #[test]
    fn test_normalize_clamp_happens_before_default() {
        // An oversized limit must clamp to max, not fall through to the default
        let tight = PaginationConfig::new(5, 10).unwrap();
        let p = Pagination::new(1, 50).normalized(&tight);
        assert_eq!(p.limit, 10);
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let cfg = config();
        for (page, limit) in [(0, 0), (-5, 700), (3, 42), (1, 100)] {
            let once = Pagination::new(page, limit).normalized(&cfg);
            let twice = once.normalized(&cfg);
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn test_offset() {
        assert_eq!(Pagination::new(1, 20).offset(), 0);
        assert_eq!(Pagination::new(3, 20).offset(), 40);
    }

    #[test]
    fn test_paginate_windows() {
        let items: Vec<i32> = (1..=5).collect();

        assert_eq!(paginate(items.clone(), &Pagination::new(1, 2)), vec![1, 2]);
        assert_eq!(paginate(items.clone(), &Pagination::new(2, 2)), vec![3, 4]);
        assert_eq!(paginate(items.clone(), &Pagination::new(3, 2)), vec![5]);
    }

    #[test]
    fn test_paginate_past_end_is_empty() {
        let items: Vec<i32> = (1..=5).collect();
        assert!(paginate(items.clone(), &Pagination::new(4, 2)).is_empty());
        assert!(paginate(items, &Pagination::new(100, 50)).is_empty());
    }

    #[test]
    fn test_paginate_empty_input() {
        let items: Vec<i32> = Vec::new();
        assert!(paginate(items, &Pagination::new(1, 20)).is_empty());
    }
}
