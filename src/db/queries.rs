use crate::errors::{AppError, AppResult};
use crate::models::{EventConfig, LedgerEntry};
use chrono::{DateTime, Local};
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

pub fn map_event(row: &Row) -> Result<EventConfig> {
    Ok(EventConfig {
        active: row.get::<_, i64>("active")? != 0,
        name: row.get("name")?,
        capacity: row.get("capacity")?,
        member_password: row.get("member_password")?,
        total: row.get("total")?,
    })
}

pub fn map_entry(row: &Row) -> Result<LedgerEntry> {
    let time_str: String = row.get("time")?;

    let time = DateTime::parse_from_rfc3339(&time_str)
        .map(|dt| dt.with_timezone(&Local))
        .map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Text, Box::new(e))
        })?;

    Ok(LedgerEntry {
        time,
        name: row.get("name")?,
        category: row.get("category")?,
        members: row.get("members")?,
        running_total: row.get("running_total")?,
    })
}

/// Load the singleton event record. A missing row means the schema was
/// never (fully) initialized.
pub fn load_event(conn: &Connection) -> AppResult<EventConfig> {
    let mut stmt = conn.prepare_cached(
        "SELECT active, name, capacity, member_password, total
         FROM event_state WHERE id = 1",
    )?;

    stmt.query_row([], map_event)
        .optional()?
        .ok_or_else(|| AppError::SchemaNotInitialized("event_state row missing".into()))
}

/// Ledger in admission order (oldest first).
pub fn load_entries(conn: &Connection) -> AppResult<Vec<LedgerEntry>> {
    let mut stmt = conn.prepare_cached(
        "SELECT time, name, category, members, running_total
         FROM ledger ORDER BY id ASC",
    )?;

    let rows = stmt.query_map([], map_entry)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Overwrite configuration and the active flag. `total` is not touched.
pub fn update_config(conn: &Connection, ev: &EventConfig) -> AppResult<()> {
    conn.execute(
        "UPDATE event_state
         SET active = ?1, name = ?2, capacity = ?3, member_password = ?4
         WHERE id = 1",
        params![
            if ev.active { 1 } else { 0 },
            ev.name,
            ev.capacity,
            ev.member_password
        ],
    )?;
    Ok(())
}

/// Move `total` from `old` to `new`, but only if nobody else moved it and
/// the new value still fits. Exactly one row must change.
pub fn advance_total(conn: &Connection, old: u32, new: u32) -> AppResult<()> {
    let changed = conn.execute(
        "UPDATE event_state
         SET total = ?2
         WHERE id = 1 AND active = 1 AND total = ?1 AND ?2 <= capacity",
        params![old, new],
    )?;

    if changed != 1 {
        return Err(AppError::Db(rusqlite::Error::StatementChangedRows(changed)));
    }
    Ok(())
}

pub fn insert_entry(conn: &Connection, entry: &LedgerEntry) -> AppResult<()> {
    conn.execute(
        "INSERT INTO ledger (time, name, category, members, running_total)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            entry.time.to_rfc3339(),
            entry.name,
            entry.category,
            entry.members,
            entry.running_total,
        ],
    )?;
    Ok(())
}

/// Full reset: empty the ledger and zero the event record.
pub fn clear_all(conn: &Connection) -> AppResult<()> {
    conn.execute("DELETE FROM ledger", [])?;
    conn.execute(
        "UPDATE event_state
         SET active = 0, name = '', capacity = 0, member_password = '', total = 0
         WHERE id = 1",
        [],
    )?;
    Ok(())
}

/// One row of the audit log.
#[derive(Debug, Clone)]
pub struct LogRow {
    pub id: i64,
    pub date: String,
    pub operation: String,
    pub target: String,
    pub message: String,
}

pub fn load_log(conn: &Connection) -> AppResult<Vec<LogRow>> {
    let mut stmt = conn.prepare_cached(
        "SELECT id, date, operation, target, message FROM log ORDER BY id ASC",
    )?;

    let rows = stmt.query_map([], |row| {
        Ok(LogRow {
            id: row.get(0)?,
            date: row.get(1)?,
            operation: row.get(2)?,
            target: row.get::<_, Option<String>>(3)?.unwrap_or_default(),
            message: row.get(4)?,
        })
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}
