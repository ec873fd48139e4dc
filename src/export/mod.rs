// src/export/mod.rs

pub(crate) mod fs_utils;
pub mod json_csv;
mod model;

pub use json_csv::{CSV_HEADER, write_csv, write_json};
pub use model::EntryExport;

use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;

/// File name used when no `--file` is given.
pub const DEFAULT_EXPORT_FILE: &str = "event_entries.csv";

/// Shared completion message for exports.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}

#[derive(Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

pub(crate) use model::to_rows;
