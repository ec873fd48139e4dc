// src/export/json_csv.rs

use crate::errors::{AppError, AppResult};
use crate::export::{EntryExport, notify_export_success};
use crate::ui::messages::info;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Header written even when the ledger is empty.
pub const CSV_HEADER: [&str; 5] = ["Time", "Name", "Type", "Members", "Total"];

/// Write rows as CSV (header first) to any writer.
pub fn write_csv<W: Write>(writer: W, rows: &[EntryExport]) -> AppResult<()> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    wtr.write_record(CSV_HEADER)?;
    for item in rows {
        wtr.serialize(item)?;
    }

    wtr.flush()?;
    Ok(())
}

/// Write rows as a pretty-printed JSON array.
pub fn write_json<W: Write>(mut writer: W, rows: &[EntryExport]) -> AppResult<()> {
    serde_json::to_writer_pretty(&mut writer, rows)?;
    writer.write_all(b"\n")?;
    Ok(())
}

pub(crate) fn export_csv(rows: &[EntryExport], path: &Path) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    let file = File::create(path)
        .map_err(|e| AppError::Export(format!("cannot create {}: {e}", path.display())))?;
    write_csv(file, rows)?;

    notify_export_success("CSV", path);
    Ok(())
}

pub(crate) fn export_json(rows: &[EntryExport], path: &Path) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));

    let file = File::create(path)
        .map_err(|e| AppError::Export(format!("cannot create {}: {e}", path.display())))?;
    write_json(file, rows)?;

    notify_export_success("JSON", path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(name: &str, members: u32, total: u32) -> EntryExport {
        EntryExport {
            time: "2026-10-19 18:00:00".into(),
            name: name.into(),
            category: "guest".into(),
            members,
            total,
        }
    }

    #[test]
    fn csv_has_header_and_one_line_per_row() {
        let mut out = Vec::new();
        write_csv(&mut out, &[row("Ann", 2, 2), row("Bo, Jr.", 3, 5)]).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "Time,Name,Type,Members,Total");
        assert_eq!(lines[1], "2026-10-19 18:00:00,Ann,guest,2,2");
        assert_eq!(lines[2], "2026-10-19 18:00:00,\"Bo, Jr.\",guest,3,5");
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn empty_csv_still_has_header() {
        let mut out = Vec::new();
        write_csv(&mut out, &[]).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Time,Name,Type,Members,Total\n");
    }

    #[test]
    fn json_uses_column_names() {
        let mut out = Vec::new();
        write_json(&mut out, &[row("Ann", 2, 2)]).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("\"Type\": \"guest\""));
        assert!(text.contains("\"Total\": 2"));
    }
}
