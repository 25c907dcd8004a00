//! View parameters: filter criteria, sort options, page settings.

use std::fmt;
use std::str::FromStr;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::{Department, Role, SortDirection, SortField};

/// Page size used when nothing else is configured.
pub const DEFAULT_ITEMS_PER_PAGE: usize = 6;

/// Selector over a closed value set: everything, or exactly one value.
///
/// Serialized as `"All"` or the value's name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Facet<T> {
    All,
    One(T),
}

impl<T> Default for Facet<T> {
    fn default() -> Self { Facet::All }
}

impl<T: PartialEq> Facet<T> {
    pub fn matches(&self, v: &T) -> bool {
        match self {
            Facet::All => true,
            Facet::One(want) => want == v,
        }
    }

    pub fn is_all(&self) -> bool { matches!(self, Facet::All) }
}

impl<T: fmt::Display> fmt::Display for Facet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Facet::All => f.write_str("All"),
            Facet::One(v) => v.fmt(f),
        }
    }
}

impl<T: FromStr> FromStr for Facet<T> {
    type Err = T::Err;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "All" { Ok(Facet::All) } else { s.parse().map(Facet::One) }
    }
}

impl<T: fmt::Display> Serialize for Facet<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de, T> Deserialize<'de> for Facet<T>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterCriteria {
    pub department: Facet<Department>,
    pub role: Facet<Role>,
    /// Case-insensitive substring over first name, last name and email.
    /// Empty means no text filter.
    pub search_term: String,
}

impl FilterCriteria {
    /// True when any criterion narrows the collection.
    pub fn is_active(&self) -> bool {
        !self.search_term.is_empty() || !self.department.is_all() || !self.role.is_all()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SortOptions {
    pub field: SortField,
    pub direction: SortDirection,
}

impl Default for SortOptions {
    fn default() -> Self {
        Self { field: SortField::FirstName, direction: SortDirection::Asc }
    }
}

impl SortOptions {
    /// Sort-control click: the active field flips direction, a new field
    /// starts ascending.
    pub fn toggle(&mut self, field: SortField) {
        if self.field == field {
            self.direction = self.direction.flipped();
        } else {
            self.field = field;
            self.direction = SortDirection::Asc;
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageSettings {
    /// 1-based.
    pub current_page: usize,
    pub items_per_page: usize,
}

impl Default for PageSettings {
    fn default() -> Self {
        Self { current_page: 1, items_per_page: DEFAULT_ITEMS_PER_PAGE }
    }
}

/// Everything that shapes the rendered page, kept as one value.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct QueryParameters {
    pub filter: FilterCriteria,
    pub sort: SortOptions,
    pub page: PageSettings,
}

/// Chained construction of filter criteria, mostly for callers and tests.
#[derive(Debug, Clone, Default)]
pub struct FilterCriteriaBuilder(FilterCriteria);

impl FilterCriteria {
    pub fn builder() -> FilterCriteriaBuilder { FilterCriteriaBuilder::default() }
}

impl FilterCriteriaBuilder {
    pub fn department(mut self, d: Department) -> Self { self.0.department = Facet::One(d); self }
    pub fn role(mut self, r: Role) -> Self { self.0.role = Facet::One(r); self }
    pub fn search(mut self, term: impl Into<String>) -> Self { self.0.search_term = term.into(); self }
    pub fn build(self) -> FilterCriteria { self.0 }
}
