mod common;
use checkgate::store::{FileStore, SqliteStore};
use checkgate::{AppError, CheckInRequest, EventConfig, EventGate, EventSetup};
use common::{assert_consistent, open_event, snapshot};
use std::sync::Arc;

fn fill(gate: &EventGate) {
    open_event(gate, "Meetup", 20, "pw1");
    for (name, cat, n) in [("Ann", "family", 4), ("Bo", "guest", 1), ("Cy, Jr.", "vip", 6)] {
        gate.attempt_check_in(&CheckInRequest::new(name, cat, n).expect("req"))
            .expect("admit");
    }
}

#[test]
fn test_file_store_round_trip() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("nested").join("gate.json");

    let gate = EventGate::new(Arc::new(FileStore::new(&path)));
    fill(&gate);
    let before = snapshot(&gate);

    let reopened = EventGate::new(Arc::new(FileStore::new(&path)));
    let after = snapshot(&reopened);

    assert_eq!(after, before);
    assert_consistent("file", &after);

    // The document is a typed GateState, not an ad hoc map.
    let raw = std::fs::read_to_string(&path).expect("read");
    let parsed: checkgate::GateState = serde_json::from_str(&raw).expect("parse");
    assert_eq!(parsed, before);
    assert!(!dir.path().join("nested").join("gate.json.tmp").exists());
}

#[test]
fn test_sqlite_store_round_trip() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("gate.sqlite");

    let gate = EventGate::new(Arc::new(SqliteStore::new(&path)));
    fill(&gate);
    let before = snapshot(&gate);
    drop(gate);

    let reopened = EventGate::new(Arc::new(SqliteStore::new(&path)));
    let after = snapshot(&reopened);

    assert_eq!(after, before);
    assert_consistent("sqlite", &after);
}

#[test]
fn test_missing_file_is_a_fresh_state() {
    let dir = tempfile::tempdir().expect("tempdir");
    let gate = EventGate::new(Arc::new(FileStore::new(dir.path().join("absent.json"))));

    assert_eq!(gate.try_get_event().expect("event"), EventConfig::default());
    assert!(gate.list_all().expect("list").is_empty());
}

#[test]
fn test_sqlite_heals_missing_tables() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("gate.sqlite");

    let gate = EventGate::new(Arc::new(SqliteStore::new(&path)));
    open_event(&gate, "Before", 5, "pw");

    {
        let conn = rusqlite::Connection::open(&path).expect("open");
        conn.execute_batch("DROP TABLE ledger; DROP TABLE event_state;")
            .expect("drop");
    }

    // First read heals the schema and reports the fresh state.
    assert_eq!(gate.try_get_event().expect("healed"), EventConfig::default());

    open_event(&gate, "After", 5, "pw");
    let e = gate
        .attempt_check_in(&CheckInRequest::new("Ann", "guest", 2).expect("req"))
        .expect("admit");
    assert_eq!(e.running_total, 2);
}

#[test]
fn test_sqlite_heals_a_blank_database() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("blank.sqlite");
    std::fs::File::create(&path).expect("touch");

    let gate = EventGate::new(Arc::new(SqliteStore::new(&path)));
    let e = gate.configure_and_activate(&EventSetup::new("Fresh", 3, "pw"));
    assert!(e.expect("setup").active);
}

#[test]
fn test_unreachable_sqlite_degrades_reads_and_fails_writes() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("missing").join("deeper").join("gate.sqlite");
    let gate = EventGate::new(Arc::new(SqliteStore::new(&path)));

    assert_eq!(gate.get_event(), EventConfig::default());
    assert!(matches!(
        gate.try_get_event(),
        Err(AppError::PersistenceUnavailable(_))
    ));
    assert!(matches!(
        gate.configure_and_activate(&EventSetup::new("X", 5, "pw")),
        Err(AppError::PersistenceUnavailable(_))
    ));
    assert!(matches!(
        gate.attempt_check_in(&CheckInRequest::new("Ann", "guest", 1).expect("req")),
        Err(AppError::PersistenceUnavailable(_))
    ));
    assert!(matches!(gate.reset(), Err(AppError::PersistenceUnavailable(_))));
}

#[test]
fn test_unreachable_file_degrades_reads_and_fails_writes() {
    let dir = tempfile::tempdir().expect("tempdir");
    let blocker = dir.path().join("not-a-dir");
    std::fs::write(&blocker, "x").expect("write");

    let gate = EventGate::new(Arc::new(FileStore::new(blocker.join("gate.json"))));

    assert_eq!(gate.get_event(), EventConfig::default());
    assert!(matches!(
        gate.configure_and_activate(&EventSetup::new("X", 5, "pw")),
        Err(AppError::PersistenceUnavailable(_))
    ));
}

#[test]
fn test_open_by_locator() {
    let dir = tempfile::tempdir().expect("tempdir");
    let json = format!("file:{}", dir.path().join("a.json").display());
    let sqlite = format!("sqlite://{}", dir.path().join("a.sqlite").display());

    for (raw, kind) in [("memory", "memory"), (json.as_str(), "file"), (sqlite.as_str(), "sqlite")] {
        let locator: checkgate::StorageLocator = raw.parse().expect("locator");
        let gate = EventGate::open(&locator).expect("open");
        assert_eq!(gate.backend(), kind);
    }
}
