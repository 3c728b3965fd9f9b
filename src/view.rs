//! Derived views over the roster: name filtering and page arithmetic.
//!
//! Everything here is recomputed from the full roster on demand. Pages are
//! 1-based to match what the pagination bar shows.

use crate::edit::EditSession;
use crate::model::Record;

/// Records shown per page when nothing else is configured.
pub const DEFAULT_PAGE_SIZE: usize = 3;

/// Transient view state of one editor session.
#[derive(Debug, Clone)]
pub struct ViewState {
    pub search_term: String,
    pub current_page: usize,
    pub editing: Option<EditSession>,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            search_term: String::new(),
            current_page: 1,
            editing: None,
        }
    }
}

/// Records whose name contains `term`, case-insensitively, in roster order.
pub fn filter_records<'a>(records: &'a [Record], term: &str) -> Vec<&'a Record> {
    let needle = term.to_lowercase();
    records
        .iter()
        .filter(|r| needle.is_empty() || r.name.to_lowercase().contains(&needle))
        .collect()
}

/// Number of pages needed for `len` items. Zero items need zero pages.
pub fn page_count(len: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    len.div_ceil(page_size)
}

/// Items `[size * (page - 1), size * page)` of `items`, clamped to bounds.
pub fn page_slice<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    if page == 0 || page_size == 0 {
        return &[];
    }
    let start = (page - 1).saturating_mul(page_size).min(items.len());
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}

/// Clamp a page number into `[1, max(1, page_count)]`.
pub fn clamp_page(page: usize, len: usize, page_size: usize) -> usize {
    let last = page_count(len, page_size).max(1);
    page.clamp(1, last)
}
