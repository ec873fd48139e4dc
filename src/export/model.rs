// src/export/model.rs

use crate::errors::AppResult;
use crate::models::LedgerEntry;
use serde::Serialize;

/// Flat ledger row for CSV / JSON. Field names double as CSV headers.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct EntryExport {
    #[serde(rename = "Time")]
    pub time: String,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Type")]
    pub category: String,
    #[serde(rename = "Members")]
    pub members: u32,
    #[serde(rename = "Total")]
    pub total: u32,
}

impl EntryExport {
    pub fn from_entry(entry: &LedgerEntry, time_format: &str) -> AppResult<Self> {
        Ok(Self {
            time: entry.time_str(time_format)?,
            name: entry.name.clone(),
            category: entry.category.clone(),
            members: entry.members,
            total: entry.running_total,
        })
    }
}

pub(crate) fn to_rows(
    entries: &[LedgerEntry],
    time_format: &str,
) -> AppResult<Vec<EntryExport>> {
    entries
        .iter()
        .map(|e| EntryExport::from_entry(e, time_format))
        .collect()
}
