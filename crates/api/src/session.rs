//! The orchestrator: owns records and view parameters, recomputes the page
//! after every change.

use roster_core::{seed, Employee, EmployeeFormData, FilterCriteria, PageSettings, QueryParameters, SortField};
use roster_query::{run, PageResult};
use roster_store::RecordStore;
use tokio::sync::watch;
use tracing::{debug, info};

use crate::{DirectoryApi, DirectoryResult, SessionConfig};

/// Why the current page has no rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyState {
    /// Records exist but none match the active filters.
    NoMatches,
    /// Nothing to filter in the first place.
    NoEmployees,
}

impl EmptyState {
    pub fn hint(&self) -> &'static str {
        match self {
            EmptyState::NoMatches => "Try adjusting your filters or search terms",
            EmptyState::NoEmployees => "Get started by adding your first employee",
        }
    }
}

pub struct Session {
    store: RecordStore,
    params: QueryParameters,
    view: PageResult,
}

impl Session {
    pub fn new(config: &SessionConfig) -> Self {
        let records = if config.seed { seed::employees() } else { Vec::new() };
        Self::with_records(records, config.items_per_page)
    }

    pub fn with_records(records: impl IntoIterator<Item = Employee>, items_per_page: usize) -> Self {
        let store = RecordStore::with_records(records);
        let params = QueryParameters {
            page: PageSettings { current_page: 1, items_per_page: items_per_page.max(1) },
            ..Default::default()
        };
        let view = run(store.all(), &params);
        info!(records = store.len(), items_per_page = params.page.items_per_page, "session: created");
        Self { store, params, view }
    }

    pub fn params(&self) -> &QueryParameters { &self.params }
    pub fn records(&self) -> &[Employee] { self.store.all() }
    pub fn get(&self, id: &str) -> Option<&Employee> { self.store.get(id) }

    /// Ticks once per record mutation.
    pub fn subscribe(&self) -> watch::Receiver<u64> { self.store.subscribe() }

    pub fn summary(&self) -> String { self.view.summary() }

    pub fn empty_state(&self) -> Option<EmptyState> {
        if !self.view.items.is_empty() {
            None
        } else if self.params.filter.is_active() {
            Some(EmptyState::NoMatches)
        } else {
            Some(EmptyState::NoEmployees)
        }
    }

    // Every trigger lands here. The pipeline clamps an out-of-range page to 1;
    // the clamped value becomes the session's page.
    fn recompute(&mut self, trigger: &'static str) {
        self.view = run(self.store.all(), &self.params);
        if self.view.current_page != self.params.page.current_page {
            debug!(
                from = self.params.page.current_page,
                to = self.view.current_page,
                total_pages = self.view.total_pages,
                trigger,
                "session: page out of range; reset"
            );
            self.params.page.current_page = self.view.current_page;
        }
        debug!(trigger, items = self.view.items.len(), total = self.view.total_items, "session: recomputed");
    }
}

impl DirectoryApi for Session {
    fn list_page(&self, params: &QueryParameters) -> PageResult { run(self.store.all(), params) }

    fn view(&self) -> &PageResult { &self.view }

    fn create_employee(&mut self, data: &EmployeeFormData) -> DirectoryResult<Employee> {
        let e = self.store.add(data)?;
        self.recompute("create");
        Ok(e)
    }

    fn update_employee(&mut self, id: &str, data: &EmployeeFormData) -> DirectoryResult<Employee> {
        let e = self.store.update(id, data)?;
        self.recompute("update");
        Ok(e)
    }

    fn delete_employee(&mut self, id: &str) -> DirectoryResult<Employee> {
        let e = self.store.remove(id)?;
        self.recompute("delete");
        Ok(e)
    }

    fn set_filter(&mut self, criteria: FilterCriteria) {
        self.params.filter = criteria;
        self.recompute("filter");
    }

    fn set_sort(&mut self, field: SortField) {
        self.params.sort.toggle(field);
        self.recompute("sort");
    }

    fn set_page(&mut self, page: usize) {
        self.params.page.current_page = page;
        self.recompute("page");
    }

    fn set_items_per_page(&mut self, n: usize) {
        self.params.page = PageSettings { current_page: 1, items_per_page: n.max(1) };
        self.recompute("items_per_page");
    }

    fn reset_filters(&mut self) {
        self.params.filter = FilterCriteria::default();
        self.params.page.current_page = 1;
        self.recompute("reset_filters");
    }
}
