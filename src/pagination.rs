//! Page/limit pagination over an ordered collection.

use serde::Serialize;

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_LIMIT: u32 = 10;

/// Validated `page`/`limit` pair. Both are at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageQuery {
    pub page: u32,
    pub limit: u32,
}

impl Default for PageQuery {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl PageQuery {
    /// Index range of this page within a collection of `len` items, clamped to its bounds.
    pub fn range(&self, len: usize) -> std::ops::Range<usize> {
        let limit = self.limit as usize;
        let start = (self.page.saturating_sub(1) as usize).saturating_mul(limit).min(len);
        let end = start.saturating_add(limit).min(len);
        start..end
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    pub total_items: u64,
    pub items_per_page: u32,
    pub current_page: u32,
    pub total_pages: u64,
    pub has_next_page: bool,
    pub has_previous_page: bool,
}

impl PageMeta {
    pub fn new(total_items: u64, query: PageQuery) -> Self {
        let total_pages = total_items.div_ceil(u64::from(query.limit));
        Self {
            total_items,
            items_per_page: query.limit,
            current_page: query.page,
            total_pages,
            has_next_page: u64::from(query.page) < total_pages,
            has_previous_page: query.page > 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PagedResponse<T> {
    pub data: Vec<T>,
    pub meta: PageMeta,
}

impl<T: Clone> PagedResponse<T> {
    /// Slice one page out of the full collection. `totalItems` counts the whole collection.
    pub fn from_slice(items: &[T], query: PageQuery) -> Self {
        Self {
            data: items[query.range(items.len())].to_vec(),
            meta: PageMeta::new(items.len() as u64, query),
        }
    }
}
