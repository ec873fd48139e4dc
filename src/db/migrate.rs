use crate::errors::AppResult;
use rusqlite::{Connection, OptionalExtension, Result};

/// Ensure that the `log` table exists.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn table_exists(conn: &Connection, name: &str) -> Result<bool> {
    let mut stmt = conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name=?1")?;
    let exists: Option<String> = stmt.query_row([name], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

/// Singleton event row (id is always 1) and the ledger.
///
/// The CHECK on `total` is a last line of defence: the admission
/// transaction already refuses anything that would overflow.
fn create_gate_tables(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS event_state (
            id               INTEGER PRIMARY KEY CHECK (id = 1),
            active           INTEGER NOT NULL DEFAULT 0,
            name             TEXT    NOT NULL DEFAULT '',
            capacity         INTEGER NOT NULL DEFAULT 0 CHECK (capacity >= 0),
            member_password  TEXT    NOT NULL DEFAULT '',
            total            INTEGER NOT NULL DEFAULT 0 CHECK (total >= 0 AND total <= capacity)
        );

        CREATE TABLE IF NOT EXISTS ledger (
            id             INTEGER PRIMARY KEY AUTOINCREMENT,
            time           TEXT    NOT NULL,
            name           TEXT    NOT NULL,
            category       TEXT    NOT NULL,
            members        INTEGER NOT NULL CHECK (members > 0),
            running_total  INTEGER NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn ensure_event_row(conn: &Connection) -> Result<usize> {
    conn.execute("INSERT OR IGNORE INTO event_state (id) VALUES (1)", [])
}

fn mark_applied(conn: &Connection, target: &str, message: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        [target, message],
    )?;
    Ok(())
}

/// Public entry point: bring the schema up to date.
///
/// Safe to call on every start and again after tables went missing;
/// each step only acts on what is absent.
pub fn run_pending_migrations(conn: &Connection) -> AppResult<()> {
    // 1) Audit log first, so the steps below can record themselves
    ensure_log_table(conn)?;

    // 2) Gate tables
    let had_event = table_exists(conn, "event_state")?;
    let had_ledger = table_exists(conn, "ledger")?;

    if !had_event || !had_ledger {
        create_gate_tables(conn)?;
        mark_applied(conn, "gate_tables", "Created event_state and ledger tables")?;
        tracing::info!(had_event, had_ledger, "created gate tables");
    }

    // 3) Singleton row
    if ensure_event_row(conn)? > 0 {
        mark_applied(conn, "event_row", "Inserted inactive event record")?;
    }

    Ok(())
}
