//! Unified application error type.
//! The core (stores, admission, access gate) and the CLI all return
//! AppError so the boundary decides how each failure is shown.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // Admission outcomes
    // ---------------------------
    #[error("No event is currently active")]
    EventNotActive,

    #[error("Event '{event}' is full (capacity {capacity})")]
    CapacityExceeded { event: String, capacity: u32 },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    // ---------------------------
    // Persistence
    // ---------------------------
    #[error("Storage unavailable: {0}")]
    PersistenceUnavailable(String),

    #[error("Storage schema not initialized: {0}")]
    SchemaNotInitialized(String),

    #[error("Storage lock poisoned")]
    LockPoisoned,

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid storage locator: {0}")]
    InvalidStorage(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl AppError {
    /// True for the outcomes a member sees as a refusal rather than a fault.
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            AppError::EventNotActive | AppError::CapacityExceeded { .. }
        )
    }
}

impl<T> From<std::sync::PoisonError<T>> for AppError {
    fn from(_: std::sync::PoisonError<T>) -> Self {
        AppError::LockPoisoned
    }
}

pub type AppResult<T> = Result<T, AppError>;
