//! Roster public API façade (in-process).
//!
//! This crate defines the surface a front end (CLI, GUI, web view) depends on:
//! one `Session` per user owns the record store and the view parameters and
//! keeps the rendered page consistent with both.

#![forbid(unsafe_code)]

use roster_core::{Employee, EmployeeFormData, FilterCriteria, QueryParameters, SortField, ValidationErrors};
use roster_store::StoreError;
use serde::{Deserialize, Serialize};

pub mod config;
pub mod session;

pub use config::SessionConfig;
pub use roster_query::{FilterStats, PageResult};
pub use session::{EmptyState, Session};

/// Errors a front end must handle. Neither is fatal.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, Serialize, Deserialize)]
pub enum DirectoryError {
    /// Form rejected; nothing was written. Route the field messages back to the form.
    #[error("validation: {0}")]
    Validation(ValidationErrors),
    /// The id is gone, typically deleted from another view. Treat as stale.
    #[error("not_found: {0}")]
    NotFound(String),
}

impl DirectoryError {
    pub fn validation_errors(&self) -> Option<&ValidationErrors> {
        match self {
            DirectoryError::Validation(v) => Some(v),
            DirectoryError::NotFound(_) => None,
        }
    }
}

impl From<StoreError> for DirectoryError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::Validation(v) => DirectoryError::Validation(v),
            StoreError::NotFound(id) => DirectoryError::NotFound(id),
        }
    }
}

pub type DirectoryResult<T> = Result<T, DirectoryError>;

/// Directory surface. Every mutator re-runs filter → sort → paginate before
/// returning, so `view()` is always current.
pub trait DirectoryApi {
    /// Evaluate an arbitrary parameter set against the current records
    /// without touching session state.
    fn list_page(&self, params: &QueryParameters) -> PageResult;

    /// The page for the session's own parameters.
    fn view(&self) -> &PageResult;

    fn create_employee(&mut self, data: &EmployeeFormData) -> DirectoryResult<Employee>;
    fn update_employee(&mut self, id: &str, data: &EmployeeFormData) -> DirectoryResult<Employee>;
    fn delete_employee(&mut self, id: &str) -> DirectoryResult<Employee>;

    fn set_filter(&mut self, criteria: FilterCriteria);
    /// Same field flips direction; a new field sorts ascending.
    fn set_sort(&mut self, field: SortField);
    fn set_page(&mut self, page: usize);
    /// Also returns to page 1.
    fn set_items_per_page(&mut self, n: usize);
    /// Clear every filter criterion and return to page 1.
    fn reset_filters(&mut self);
}
