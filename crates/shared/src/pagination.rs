//! Offset-based pagination helpers.

use serde::{Deserialize, Serialize};

/// Default page size when the client does not specify one.
pub const DEFAULT_LIMIT: i64 = 20;

/// Maximum page size a client may request.
pub const MAX_LIMIT: i64 = 100;

/// Query parameters for paginated listings.
#[derive(Debug, Clone, Copy, Deserialize, Default)]
pub struct PageParams {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

impl PageParams {
    /// Effective limit, clamped to `1..=MAX_LIMIT`.
    pub fn limit(&self) -> i64 {
        self.limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT)
    }

    /// Effective offset, never negative.
    pub fn offset(&self) -> i64 {
        self.offset.unwrap_or(0).max(0)
    }
}

/// Pagination block returned alongside list items.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    pub total: i64,
    pub limit: i64,
    pub offset: i64,
    pub has_more: bool,
}

impl PageInfo {
    /// Builds a page info block from the effective params, the total row
    /// count and the number of items actually returned.
    pub fn new(params: &PageParams, total: i64, returned: usize) -> Self {
        Self {
            total,
            limit: params.limit(),
            offset: params.offset(),
            has_more: params.offset() + (returned as i64) < total,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let params = PageParams::default();
        assert_eq!(params.limit(), DEFAULT_LIMIT);
        assert_eq!(params.offset(), 0);
    }

    #[test]
    fn test_limit_clamped_to_max() {
        let params = PageParams {
            limit: Some(10_000),
            offset: None,
        };
        assert_eq!(params.limit(), MAX_LIMIT);
    }

    #[test]
    fn test_limit_clamped_to_min() {
        let params = PageParams {
            limit: Some(0),
            offset: None,
        };
        assert_eq!(params.limit(), 1);
    }

    #[test]
    fn test_negative_offset_clamped() {
        let params = PageParams {
            limit: None,
            offset: Some(-5),
        };
        assert_eq!(params.offset(), 0);
    }

    #[test]
    fn test_page_info_has_more() {
        let params = PageParams {
            limit: Some(20),
            offset: Some(0),
        };
        let info = PageInfo::new(&params, 50, 20);
        assert!(info.has_more);
        assert_eq!(info.total, 50);
    }

    #[test]
    fn test_page_info_last_page() {
        let params = PageParams {
            limit: Some(20),
            offset: Some(40),
        };
        let info = PageInfo::new(&params, 50, 10);
        assert!(!info.has_more);
    }

    #[test]
    fn test_page_info_serializes_camel_case() {
        let params = PageParams::default();
        let info = PageInfo::new(&params, 3, 3);
        let json = serde_json::to_value(&info).unwrap();
        assert_eq!(json["hasMore"], false);
        assert_eq!(json["total"], 3);
    }
}
