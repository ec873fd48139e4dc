//! Persistence backends for the gate.
//!
//! Every backend implements [`GateStore`]. The admission and setup rules
//! live in `core` and reach the store as decision callbacks; a backend's
//! only job is to run those callbacks inside its own serialization point
//! and persist the outcome all-or-nothing.

pub mod file;
pub mod locator;
pub mod memory;
pub mod sqlite;

pub use file::FileStore;
pub use locator::StorageLocator;
pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

use crate::errors::AppResult;
use crate::models::{EventConfig, GateState, LedgerEntry};
use std::sync::Arc;

/// Decides an admission from the current event record.
///
/// Returning `Ok(entry)` commits `total := entry.running_total` and appends
/// `entry`; returning `Err` leaves the store untouched.
pub type AdmitDecision<'a> = &'a dyn Fn(&EventConfig) -> AppResult<LedgerEntry>;

/// Computes the next event record from the current one during setup.
pub type SetupDecision<'a> = &'a dyn Fn(&EventConfig) -> AppResult<EventConfig>;

pub trait GateStore: Send + Sync {
    /// Short backend label for logs and the dashboard.
    fn kind(&self) -> &'static str;

    /// Unlocked snapshot of the whole state. May be slightly stale.
    fn load(&self) -> AppResult<GateState>;

    fn load_event(&self) -> AppResult<EventConfig> {
        Ok(self.load()?.event)
    }

    /// Ledger in append order (oldest first).
    fn load_entries(&self) -> AppResult<Vec<LedgerEntry>> {
        Ok(self.load()?.entries)
    }

    /// Read, decide and write the event configuration under the store's lock.
    /// Implementations must never change `total` here.
    fn configure(&self, decide: SetupDecision<'_>) -> AppResult<EventConfig>;

    /// Read, decide and append under the store's lock.
    fn admit(&self, decide: AdmitDecision<'_>) -> AppResult<LedgerEntry>;

    /// Zero the event and clear the ledger in one step.
    fn reset(&self) -> AppResult<()>;
}

/// Open the backend named by `locator`.
pub fn open(locator: &StorageLocator) -> AppResult<Arc<dyn GateStore>> {
    let store: Arc<dyn GateStore> = match locator {
        StorageLocator::Memory => Arc::new(MemoryStore::new()),
        StorageLocator::File(path) => Arc::new(FileStore::new(path)),
        StorageLocator::Sqlite(path) => Arc::new(SqliteStore::new(path)),
    };
    tracing::debug!(backend = store.kind(), %locator, "storage opened");
    Ok(store)
}
