//! The admission core: the [`EventGate`] handle and the operations on it,
//! plus the CLI-facing logic built on top.

pub mod access;
pub mod admission;
pub mod config;
pub mod event_state;
pub mod export;
pub mod gate;
pub mod ledger;
pub mod log;

pub use access::{AdminSession, MemberSession};
pub use gate::EventGate;
