use super::{event_config::EventConfig, ledger_entry::LedgerEntry};
use serde::{Deserialize, Serialize};

/// Whole persisted state: the event record plus its ledger, oldest first.
///
/// This is the document the file backend writes and the value the memory
/// backend keeps behind its lock.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GateState {
    #[serde(default)]
    pub event: EventConfig,
    #[serde(default)]
    pub entries: Vec<LedgerEntry>,
}

impl GateState {
    /// Sum of `members` over the ledger; equals `event.total` in every valid state.
    pub fn ledger_total(&self) -> u64 {
        self.entries.iter().map(|e| u64::from(e.members)).sum()
    }

    /// Record an admitted entry: the total moves to the entry's running total.
    pub(crate) fn commit(&mut self, entry: LedgerEntry) {
        self.event.total = entry.running_total;
        self.entries.push(entry);
    }
}
