//! Roster query: filter → sort → paginate over an employee slice.
//! All three stages are pure; `run` chains them for one parameter set.

#![forbid(unsafe_code)]

use roster_core::{Employee, QueryParameters};
use serde::Serialize;
use tracing::debug;

pub mod filter;
pub mod page;
pub mod sort;

pub use filter::{filter, filter_with_stats, matches, FilterStats};
pub use page::{clamp_page, paginate, total_pages, Page};
pub use sort::sort;

/// What the presentation layer renders for one view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageResult {
    pub items: Vec<Employee>,
    /// Size of the filtered set.
    pub total_items: usize,
    pub total_pages: usize,
    /// Effective page after clamping.
    pub current_page: usize,
    pub items_per_page: usize,
    /// Size of the whole collection, filtered or not.
    pub collection_total: usize,
    pub stats: FilterStats,
}

impl PageResult {
    /// "Showing X of Y employees"
    pub fn summary(&self) -> String {
        format!("Showing {} of {} employees", self.total_items, self.collection_total)
    }
}

/// Evaluate one parameter set against a record slice. An out-of-range page
/// is answered with page 1.
pub fn run(records: &[Employee], params: &QueryParameters) -> PageResult {
    let started = std::time::Instant::now();
    let (matched, stats) = filter_with_stats(records, &params.filter);
    let ordered = sort(matched, &params.sort);

    let per_page = params.page.items_per_page.max(1);
    let pages = total_pages(ordered.len(), per_page);
    let current_page = clamp_page(params.page.current_page, pages);
    let page = paginate(&ordered, current_page, per_page);

    let out = PageResult {
        items: page.items.into_iter().cloned().collect(),
        total_items: page.total_items,
        total_pages: page.total_pages,
        current_page,
        items_per_page: per_page,
        collection_total: records.len(),
        stats,
    };
    metrics::histogram!("roster_pipeline_ms", started.elapsed().as_secs_f64() * 1_000.0);
    debug!(
        total = stats.total,
        after_department = stats.after_department,
        after_role = stats.after_role,
        after_search = stats.after_search,
        page = current_page,
        pages,
        "pipeline evaluated"
    );
    out
}
