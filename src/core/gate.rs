use crate::errors::AppResult;
use crate::store::{self, GateStore, StorageLocator};
use std::sync::Arc;

/// Handle to the single event and its ledger.
///
/// Cheap to clone; every clone talks to the same store, so one `EventGate`
/// can be shared across threads serving independent check-ins.
#[derive(Clone)]
pub struct EventGate {
    store: Arc<dyn GateStore>,
}

impl EventGate {
    pub fn new(store: Arc<dyn GateStore>) -> Self {
        Self { store }
    }

    /// Open the backend named by `locator` and wrap it.
    pub fn open(locator: &StorageLocator) -> AppResult<Self> {
        Ok(Self::new(store::open(locator)?))
    }

    pub fn in_memory() -> Self {
        Self::new(Arc::new(store::MemoryStore::new()))
    }

    pub fn backend(&self) -> &'static str {
        self.store.kind()
    }

    pub(crate) fn store(&self) -> &dyn GateStore {
        self.store.as_ref()
    }
}

impl std::fmt::Debug for EventGate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventGate")
            .field("backend", &self.store.kind())
            .finish()
    }
}
