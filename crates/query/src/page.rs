//! Paginator.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total_pages: usize,
    pub total_items: usize,
}

/// `max(1, ceil(total_items / page_size))`. A zero page size counts as one.
pub fn total_pages(total_items: usize, page_size: usize) -> usize {
    total_items.div_ceil(page_size.max(1)).max(1)
}

/// Bring an out-of-range page back to the first page.
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    if page == 0 || page > total_pages { 1 } else { page }
}

/// Slice out 1-based `page`. Callers clamp first; an out-of-range page
/// yields no items rather than failing.
pub fn paginate<T: Clone>(records: &[T], page: usize, page_size: usize) -> Page<T> {
    let size = page_size.max(1);
    let start = page.saturating_sub(1).saturating_mul(size);
    let items = records
        .get(start..)
        .map(|rest| rest.iter().take(size).cloned().collect())
        .unwrap_or_default();
    Page { items, total_pages: total_pages(records.len(), size), total_items: records.len() }
}
