//! Pagination wrappers shared by every list endpoint.

use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE_NUM: u32 = 1;
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Common search parameters: which page to fetch and how large it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageQuery {
    pub page_num: u32,
    pub page_size: u32,
}

impl PageQuery {
    pub fn new(page_num: u32, page_size: u32) -> Self {
        Self {
            page_num,
            page_size,
        }
    }

    /// Query for the page following this one.
    pub fn next(&self) -> Self {
        Self {
            page_num: self.page_num.saturating_add(1),
            page_size: self.page_size,
        }
    }
}

impl Default for PageQuery {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_NUM, DEFAULT_PAGE_SIZE)
    }
}

/// Pagination state as reported alongside a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationParams {
    pub page_num: u32,
    pub page_size: u32,
    pub total: u64,
}

/// One page of records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", bound(deserialize = "T: Deserialize<'de>"))]
pub struct Paginated<T> {
    #[serde(default = "Vec::new", deserialize_with = "crate::nullable::or_default")]
    pub records: Vec<T>,
    #[serde(default, deserialize_with = "crate::nullable::or_default")]
    pub page_num: u32,
    #[serde(default, deserialize_with = "crate::nullable::or_default")]
    pub page_size: u32,
    #[serde(default, deserialize_with = "crate::nullable::or_default")]
    pub total: u64,
}

impl<T> Default for Paginated<T> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            page_num: 0,
            page_size: 0,
            total: 0,
        }
    }
}

impl<T> Paginated<T> {
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn pagination(&self) -> PaginationParams {
        PaginationParams {
            page_num: self.page_num,
            page_size: self.page_size,
            total: self.total,
        }
    }

    /// Number of pages implied by `total` and `page_size` (zero when the page
    /// size is unknown).
    pub fn total_pages(&self) -> u64 {
        if self.page_size == 0 {
            return 0;
        }
        self.total.div_ceil(u64::from(self.page_size))
    }

    pub fn has_next_page(&self) -> bool {
        u64::from(self.page_num) < self.total_pages()
    }

    /// Convert the records while keeping the pagination fields.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Paginated<U> {
        Paginated {
            records: self.records.into_iter().map(f).collect(),
            page_num: self.page_num,
            page_size: self.page_size,
            total: self.total,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(page_num: u32, page_size: u32, total: u64) -> Paginated<u32> {
        Paginated {
            records: vec![1, 2, 3],
            page_num,
            page_size,
            total,
        }
    }

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(page(1, 10, 95).total_pages(), 10);
        assert_eq!(page(1, 10, 100).total_pages(), 10);
        assert_eq!(page(1, 10, 0).total_pages(), 0);
        assert_eq!(page(1, 0, 50).total_pages(), 0);
    }

    #[test]
    fn next_page_detection() {
        assert!(page(1, 10, 11).has_next_page());
        assert!(!page(2, 10, 11).has_next_page());
    }

    #[test]
    fn map_keeps_pagination() {
        let mapped = page(3, 10, 30).map(|n| n.to_string());
        assert_eq!(mapped.records, vec!["1", "2", "3"]);
        assert_eq!(mapped.pagination(), PaginationParams { page_num: 3, page_size: 10, total: 30 });
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let page: Paginated<u32> = serde_json::from_str(r#"{"records":[5]}"#).unwrap();
        assert_eq!(page.records, vec![5]);
        assert_eq!(page.total, 0);
        assert!(!page.has_next_page());
    }

    #[test]
    fn page_query_uses_camel_case() {
        let json = serde_json::to_value(PageQuery::default().next()).unwrap();
        assert_eq!(json, serde_json::json!({ "pageNum": 2, "pageSize": 20 }));
    }
}
