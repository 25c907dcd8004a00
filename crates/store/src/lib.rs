//! Roster store: the authoritative in-RAM employee collection.

#![forbid(unsafe_code)]

use std::sync::Arc;

use roster_core::{validate, Employee, EmployeeFormData, EmployeeId};
use rustc_hash::FxHashMap;
use serde::Serialize;
use tokio::sync::watch;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("validation: {0}")]
    Validation(#[from] roster_core::ValidationErrors),
    #[error("not_found: {0}")]
    NotFound(EmployeeId),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Frozen view of the collection at one epoch.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DirectorySnapshot {
    pub epoch: u64,
    pub items: Vec<Employee>,
}

/// Owns the employee list. Every successful mutation bumps the epoch and
/// notifies subscribers.
pub struct RecordStore {
    epoch: u64,
    next_id: u64,
    items: Vec<Employee>,
    pos: FxHashMap<EmployeeId, usize>,
    epoch_tx: watch::Sender<u64>,
}

impl Default for RecordStore {
    fn default() -> Self { Self::new() }
}

impl RecordStore {
    pub fn new() -> Self {
        let (epoch_tx, _rx) = watch::channel(0u64);
        Self { epoch: 0, next_id: 1, items: Vec::new(), pos: FxHashMap::default(), epoch_tx }
    }

    /// Start from existing records (e.g. the seed roster). Records whose id is
    /// already present are skipped. Fresh ids continue after the largest
    /// numeric id seen.
    pub fn with_records(records: impl IntoIterator<Item = Employee>) -> Self {
        let mut me = Self::new();
        for e in records {
            if me.pos.contains_key(&e.id) {
                warn!(id = %e.id, "duplicate id in initial records; skipping");
                continue;
            }
            if let Ok(n) = e.id.parse::<u64>() {
                me.next_id = me.next_id.max(n.saturating_add(1));
            }
            me.pos.insert(e.id.clone(), me.items.len());
            me.items.push(e);
        }
        metrics::gauge!("roster_records", me.items.len() as f64);
        debug!(records = me.items.len(), next_id = me.next_id, "record store initialised");
        me
    }

    pub fn len(&self) -> usize { self.items.len() }
    pub fn is_empty(&self) -> bool { self.items.is_empty() }
    pub fn epoch(&self) -> u64 { self.epoch }

    /// Insertion-ordered read-only view.
    pub fn all(&self) -> &[Employee] { &self.items }

    pub fn get(&self, id: &str) -> Option<&Employee> {
        self.pos.get(id).map(|&i| &self.items[i])
    }

    pub fn add(&mut self, data: &EmployeeFormData) -> StoreResult<Employee> {
        let fields = validate(data).inspect_err(|errs| {
            metrics::counter!("roster_validation_failures_total", 1);
            warn!(errors = %errs, "add rejected");
        })?;
        let id = self.fresh_id();
        let e = Employee::from_fields(id.clone(), fields);
        self.pos.insert(id.clone(), self.items.len());
        self.items.push(e.clone());
        self.bump("add");
        info!(id = %id, name = %e.full_name(), "employee added");
        Ok(e)
    }

    pub fn update(&mut self, id: &str, data: &EmployeeFormData) -> StoreResult<Employee> {
        let Some(&i) = self.pos.get(id) else {
            warn!(id = %id, "update of unknown id");
            return Err(StoreError::NotFound(id.to_string()));
        };
        let fields = validate(data).inspect_err(|errs| {
            metrics::counter!("roster_validation_failures_total", 1);
            warn!(id = %id, errors = %errs, "update rejected");
        })?;
        self.items[i].assign(fields);
        let e = self.items[i].clone();
        self.bump("update");
        info!(id = %id, name = %e.full_name(), "employee updated");
        Ok(e)
    }

    /// Delete by id, handing back the removed record.
    pub fn remove(&mut self, id: &str) -> StoreResult<Employee> {
        let Some(i) = self.pos.remove(id) else {
            warn!(id = %id, "remove of unknown id");
            return Err(StoreError::NotFound(id.to_string()));
        };
        let e = self.items.remove(i);
        for (j, later) in self.items.iter().enumerate().skip(i) {
            self.pos.insert(later.id.clone(), j);
        }
        self.bump("remove");
        info!(id = %id, name = %e.full_name(), "employee removed");
        Ok(e)
    }

    pub fn freeze(&self) -> Arc<DirectorySnapshot> {
        Arc::new(DirectorySnapshot { epoch: self.epoch, items: self.items.clone() })
    }

    /// Epoch channel; ticks once per successful mutation.
    pub fn subscribe(&self) -> watch::Receiver<u64> { self.epoch_tx.subscribe() }

    fn fresh_id(&mut self) -> EmployeeId {
        // Skip anything taken by ids supplied at construction.
        loop {
            let id = self.next_id.to_string();
            self.next_id += 1;
            if !self.pos.contains_key(&id) {
                return id;
            }
        }
    }

    fn bump(&mut self, op: &'static str) {
        self.epoch = self.epoch.saturating_add(1);
        self.epoch_tx.send_replace(self.epoch);
        metrics::counter!("roster_mutations_total", 1, "op" => op);
        metrics::gauge!("roster_records", self.items.len() as f64);
    }
}
