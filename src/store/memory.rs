use super::{AdmitDecision, GateStore, SetupDecision};
use crate::errors::AppResult;
use crate::models::{EventConfig, GateState, LedgerEntry};
use std::sync::Mutex;

/// Non-persistent store; state lives as long as the process.
#[derive(Debug, Default)]
pub struct MemoryStore {
    state: Mutex<GateState>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl GateStore for MemoryStore {
    fn kind(&self) -> &'static str {
        "memory"
    }

    fn load(&self) -> AppResult<GateState> {
        Ok(self.state.lock()?.clone())
    }

    fn configure(&self, decide: SetupDecision<'_>) -> AppResult<EventConfig> {
        let mut state = self.state.lock()?;
        let mut next = decide(&state.event)?;
        next.total = state.event.total;
        state.event = next.clone();
        Ok(next)
    }

    fn admit(&self, decide: AdmitDecision<'_>) -> AppResult<LedgerEntry> {
        let mut state = self.state.lock()?;
        let entry = decide(&state.event)?;
        state.commit(entry.clone());
        Ok(entry)
    }

    fn reset(&self) -> AppResult<()> {
        *self.state.lock()? = GateState::default();
        Ok(())
    }
}
