use super::gate::EventGate;
use crate::errors::AppResult;
use crate::models::{GateState, LedgerEntry};

impl EventGate {
    /// Ledger for the dashboard, most recent first.
    pub fn list_all(&self) -> AppResult<Vec<LedgerEntry>> {
        let mut entries = self.store().load_entries()?;
        entries.reverse();
        Ok(entries)
    }

    /// Ledger for export, oldest first.
    pub fn export_all(&self) -> AppResult<Vec<LedgerEntry>> {
        self.store().load_entries()
    }

    /// Event and ledger read together (oldest first), for the dashboard
    /// header and for persistence checks.
    pub fn snapshot(&self) -> AppResult<GateState> {
        self.store().load()
    }
}
