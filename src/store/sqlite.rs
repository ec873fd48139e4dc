use super::{AdmitDecision, GateStore, SetupDecision};
use crate::db::initialize::init_db;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::{AppError, AppResult};
use crate::models::{EventConfig, GateState, LedgerEntry};
use rusqlite::{ErrorCode, TransactionBehavior};
use std::path::PathBuf;
use std::sync::Mutex;

/// SQLite-backed store.
///
/// In-process writers queue on `pool`; other processes queue on the
/// database write lock taken by `BEGIN IMMEDIATE`, so the capacity check
/// and the write always happen inside one serialized transaction.
pub struct SqliteStore {
    path: PathBuf,
    pool: Mutex<Option<DbPool>>,
}

/// Sort raw SQLite failures into the gate's persistence taxonomy.
fn classify(err: rusqlite::Error) -> AppError {
    if let rusqlite::Error::SqliteFailure(ffi, msg) = &err {
        let text = msg.clone().unwrap_or_default();

        if text.contains("no such table") {
            return AppError::SchemaNotInitialized(text);
        }

        match ffi.code {
            ErrorCode::CannotOpen
            | ErrorCode::DatabaseBusy
            | ErrorCode::DatabaseLocked
            | ErrorCode::PermissionDenied
            | ErrorCode::SystemIoFailure
            | ErrorCode::NotADatabase => {
                let detail = if text.is_empty() { err.to_string() } else { text };
                return AppError::PersistenceUnavailable(detail);
            }
            _ => {}
        }
    }
    AppError::Db(err)
}

fn reclassify(err: AppError) -> AppError {
    match err {
        AppError::Db(e) => classify(e),
        other => other,
    }
}

impl SqliteStore {
    /// The connection is opened on first use, so a store can be built for
    /// an unreachable path and still answer with a degraded snapshot.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            pool: Mutex::new(None),
        }
    }

    /// Run `op` on the shared connection. If the tables are missing, the
    /// schema is created and `op` runs one more time; never more.
    fn with_pool<T>(&self, mut op: impl FnMut(&mut DbPool) -> AppResult<T>) -> AppResult<T> {
        let mut guard = self.pool.lock()?;

        if guard.is_none() {
            *guard = Some(DbPool::open(&self.path)?);
        }
        let Some(pool) = guard.as_mut() else {
            return Err(AppError::PersistenceUnavailable(
                self.path.display().to_string(),
            ));
        };

        match op(pool).map_err(reclassify) {
            Err(AppError::SchemaNotInitialized(reason)) => {
                tracing::warn!(path = %self.path.display(), %reason, "initializing missing schema");
                init_db(&pool.conn).map_err(reclassify)?;
                op(pool).map_err(reclassify)
            }
            other => other,
        }
    }
}

impl GateStore for SqliteStore {
    fn kind(&self) -> &'static str {
        "sqlite"
    }

    fn load(&self) -> AppResult<GateState> {
        self.with_pool(|pool| {
            let tx = pool.conn.transaction()?;
            let event = queries::load_event(&tx)?;
            let entries = queries::load_entries(&tx)?;
            tx.commit()?;
            Ok(GateState { event, entries })
        })
    }

    fn load_event(&self) -> AppResult<EventConfig> {
        self.with_pool(|pool| queries::load_event(&pool.conn))
    }

    fn load_entries(&self) -> AppResult<Vec<LedgerEntry>> {
        self.with_pool(|pool| queries::load_entries(&pool.conn))
    }

    fn configure(&self, decide: SetupDecision<'_>) -> AppResult<EventConfig> {
        self.with_pool(|pool| {
            let tx = pool
                .conn
                .transaction_with_behavior(TransactionBehavior::Immediate)?;

            let current = queries::load_event(&tx)?;
            let mut next = decide(&current)?;
            next.total = current.total;

            queries::update_config(&tx, &next)?;
            ttlog(
                &tx,
                "setup",
                &next.name,
                &format!("capacity {} (total {})", next.capacity, next.total),
            )?;

            tx.commit()?;
            Ok(next)
        })
    }

    fn admit(&self, decide: AdmitDecision<'_>) -> AppResult<LedgerEntry> {
        self.with_pool(|pool| {
            let tx = pool
                .conn
                .transaction_with_behavior(TransactionBehavior::Immediate)?;

            let event = queries::load_event(&tx)?;
            let entry = decide(&event)?;

            queries::advance_total(&tx, event.total, entry.running_total)?;
            queries::insert_entry(&tx, &entry)?;
            ttlog(
                &tx,
                "checkin",
                &event.name,
                &format!(
                    "{} ({}) +{} -> {}",
                    entry.name, entry.category, entry.members, entry.running_total
                ),
            )?;

            tx.commit()?;
            Ok(entry)
        })
    }

    fn reset(&self) -> AppResult<()> {
        self.with_pool(|pool| {
            let tx = pool
                .conn
                .transaction_with_behavior(TransactionBehavior::Immediate)?;

            let previous = queries::load_event(&tx)?;
            queries::clear_all(&tx)?;
            ttlog(&tx, "reset", &previous.name, "Ledger cleared, event deactivated")?;

            tx.commit()?;
            Ok(())
        })
    }
}
