pub mod event_config;
pub mod gate_state;
pub mod ledger_entry;

pub use event_config::{EventConfig, EventSetup};
pub use gate_state::GateState;
pub use ledger_entry::{CheckInRequest, LedgerEntry};
