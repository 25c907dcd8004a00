//! Filter engine.

use roster_core::{Employee, FilterCriteria};
use serde::Serialize;

/// Survivors after each filter stage, in evaluation order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterStats {
    pub total: usize,
    pub after_department: usize,
    pub after_role: usize,
    pub after_search: usize,
}

/// Records passing every criterion, in input order.
pub fn filter<'a, I>(records: I, criteria: &FilterCriteria) -> Vec<&'a Employee>
where
    I: IntoIterator<Item = &'a Employee>,
{
    filter_with_stats(records, criteria).0
}

pub fn filter_with_stats<'a, I>(records: I, criteria: &FilterCriteria) -> (Vec<&'a Employee>, FilterStats)
where
    I: IntoIterator<Item = &'a Employee>,
{
    let term = criteria.search_term.to_lowercase();
    let mut stats = FilterStats::default();
    let mut out = Vec::new();
    for e in records {
        stats.total += 1;
        if !criteria.department.matches(&e.department) { continue; }
        stats.after_department += 1;
        if !criteria.role.matches(&e.role) { continue; }
        stats.after_role += 1;
        if !text_matches(e, &term) { continue; }
        stats.after_search += 1;
        out.push(e);
    }
    (out, stats)
}

/// Single-record form of the matching rule.
pub fn matches(e: &Employee, criteria: &FilterCriteria) -> bool {
    criteria.department.matches(&e.department)
        && criteria.role.matches(&e.role)
        && text_matches(e, &criteria.search_term.to_lowercase())
}

// `term` must already be lowercased.
fn text_matches(e: &Employee, term: &str) -> bool {
    term.is_empty()
        || e.first_name.to_lowercase().contains(term)
        || e.last_name.to_lowercase().contains(term)
        || e.email.to_lowercase().contains(term)
}
