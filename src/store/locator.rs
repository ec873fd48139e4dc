use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Where the gate keeps its state, parsed from the `storage` config value
/// or the `--store` flag.
///
/// Accepted forms:
/// - `memory` (or an empty string)
/// - `file:PATH`, `file://PATH`, or a bare path ending in `.json`
/// - `sqlite:PATH`, `sqlite://PATH`, or a bare path ending in `.sqlite` / `.db`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageLocator {
    Memory,
    File(PathBuf),
    Sqlite(PathBuf),
}

impl StorageLocator {
    pub fn is_persistent(&self) -> bool {
        !matches!(self, StorageLocator::Memory)
    }

    pub fn sqlite_path(&self) -> Option<&PathBuf> {
        match self {
            StorageLocator::Sqlite(p) => Some(p),
            _ => None,
        }
    }
}

fn strip_scheme<'a>(s: &'a str, scheme: &str) -> Option<&'a str> {
    let rest = s.strip_prefix(scheme)?.strip_prefix(':')?;
    Some(rest.strip_prefix("//").unwrap_or(rest))
}

fn non_empty_path(raw: &str, original: &str) -> AppResult<PathBuf> {
    if raw.trim().is_empty() {
        return Err(AppError::InvalidStorage(format!(
            "'{}' has no path",
            original
        )));
    }
    Ok(expand_tilde(raw.trim()))
}

impl FromStr for StorageLocator {
    type Err = AppError;

    fn from_str(s: &str) -> AppResult<Self> {
        let s = s.trim();

        if s.is_empty() || s.eq_ignore_ascii_case("memory") {
            return Ok(StorageLocator::Memory);
        }
        if let Some(rest) = strip_scheme(s, "file") {
            return Ok(StorageLocator::File(non_empty_path(rest, s)?));
        }
        if let Some(rest) = strip_scheme(s, "sqlite") {
            return Ok(StorageLocator::Sqlite(non_empty_path(rest, s)?));
        }

        let lower = s.to_ascii_lowercase();
        if lower.ends_with(".json") {
            Ok(StorageLocator::File(expand_tilde(s)))
        } else if lower.ends_with(".sqlite") || lower.ends_with(".db") {
            Ok(StorageLocator::Sqlite(expand_tilde(s)))
        } else {
            Err(AppError::InvalidStorage(format!(
                "'{}' (use memory, file:PATH or sqlite:PATH)",
                s
            )))
        }
    }
}

impl fmt::Display for StorageLocator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageLocator::Memory => write!(f, "memory"),
            StorageLocator::File(p) => write!(f, "file:{}", p.display()),
            StorageLocator::Sqlite(p) => write!(f, "sqlite:{}", p.display()),
        }
    }
}
