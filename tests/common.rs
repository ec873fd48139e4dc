#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use checkgate::store::{FileStore, MemoryStore, SqliteStore};
use checkgate::{EventGate, EventSetup};
use std::path::Path;
use std::sync::Arc;
use tempfile::TempDir;

/// Binary under test, isolated from the real home directory.
pub fn cg(home: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("checkgate");
    cmd.env("HOME", home).env_remove("RUST_LOG");
    cmd
}

pub fn memory_gate() -> EventGate {
    EventGate::new(Arc::new(MemoryStore::new()))
}

pub fn file_gate(dir: &TempDir) -> EventGate {
    EventGate::new(Arc::new(FileStore::new(dir.path().join("gate.json"))))
}

pub fn sqlite_gate(dir: &TempDir) -> EventGate {
    EventGate::new(Arc::new(SqliteStore::new(dir.path().join("gate.sqlite"))))
}

/// One gate per backend, each in its own temp dir (kept alive by the caller).
pub fn all_gates() -> Vec<(&'static str, EventGate, TempDir)> {
    let mem_dir = TempDir::new().expect("tempdir");
    let file_dir = TempDir::new().expect("tempdir");
    let sql_dir = TempDir::new().expect("tempdir");

    vec![
        ("memory", memory_gate(), mem_dir),
        ("file", file_gate(&file_dir), file_dir),
        ("sqlite", sqlite_gate(&sql_dir), sql_dir),
    ]
}

pub fn open_event(gate: &EventGate, name: &str, capacity: u32, password: &str) {
    gate.configure_and_activate(&EventSetup::new(name, capacity, password))
        .expect("configure event");
}

/// total == Σ members, every running total is the prefix sum, and
/// total never exceeds capacity.
pub fn assert_consistent(label: &str, store_state: &checkgate::GateState) {
    let ev = &store_state.event;
    assert!(ev.total <= ev.capacity, "[{label}] total above capacity");
    assert_eq!(
        u64::from(ev.total),
        store_state.ledger_total(),
        "[{label}] total differs from ledger sum"
    );

    let mut running = 0u32;
    for e in &store_state.entries {
        running += e.members;
        assert_eq!(e.running_total, running, "[{label}] bad running total");
    }
}

pub fn snapshot(gate: &EventGate) -> checkgate::GateState {
    gate.snapshot().expect("snapshot")
}
