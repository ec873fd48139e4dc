use super::gate::EventGate;
use crate::errors::AppResult;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::{ExportFormat, to_rows};
use crate::ui::messages::warning;
use std::path::Path;

pub struct ExportLogic;

impl ExportLogic {
    /// Export the ledger, oldest first, to `file`.
    ///
    /// - `format`: csv | json
    /// - `force`: overwrite an existing file without asking
    /// - `time_format`: chrono format for the Time column (local time)
    ///
    /// Returns the number of exported entries.
    pub fn export(
        gate: &EventGate,
        format: &ExportFormat,
        file: &Path,
        force: bool,
        time_format: &str,
    ) -> AppResult<usize> {
        ensure_writable(file, force)?;

        let entries = gate.export_all()?;
        if entries.is_empty() {
            warning("The ledger is empty: only the header will be written.");
        }

        let rows = to_rows(&entries, time_format)?;
        match format {
            ExportFormat::Csv => export_csv(&rows, file)?,
            ExportFormat::Json => export_json(&rows, file)?,
        }

        tracing::info!(
            format = format.as_str(),
            entries = rows.len(),
            file = %file.display(),
            "ledger exported"
        );
        Ok(rows.len())
    }
}
