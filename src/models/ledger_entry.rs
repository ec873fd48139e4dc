use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::fmt::Write;

/// One accepted check-in. Never edited once appended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerEntry {
    pub time: DateTime<Local>,
    pub name: String,
    pub category: String,
    pub members: u32,
    pub running_total: u32, // event total right after this admission
}

impl LedgerEntry {
    /// Render the timestamp with a chrono format string. An unknown
    /// specifier is a configuration error, not a panic.
    pub fn time_str(&self, format: &str) -> AppResult<String> {
        let mut out = String::new();
        write!(out, "{}", self.time.format(format))
            .map_err(|_| AppError::Config(format!("invalid time_format '{format}'")))?;
        Ok(out)
    }
}

/// A validated check-in submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckInRequest {
    pub name: String,
    pub category: String,
    pub members: u32,
}

impl CheckInRequest {
    pub fn new(name: &str, category: &str, members: u32) -> AppResult<Self> {
        let name = name.trim();
        let category = category.trim();

        if name.is_empty() {
            return Err(AppError::InvalidInput("name is required".into()));
        }
        if category.is_empty() {
            return Err(AppError::InvalidInput("type is required".into()));
        }
        if members == 0 {
            return Err(AppError::InvalidInput(
                "members must be a positive number".into(),
            ));
        }

        Ok(Self {
            name: name.to_string(),
            category: category.to_string(),
            members,
        })
    }

    /// Build a request from raw form-style input, where `members` is text.
    pub fn parse(name: &str, category: &str, members: &str) -> AppResult<Self> {
        let raw = members.trim();
        let count: i64 = raw
            .parse()
            .map_err(|_| AppError::InvalidInput(format!("members '{}' is not a number", raw)))?;

        if count <= 0 {
            return Err(AppError::InvalidInput(
                "members must be a positive number".into(),
            ));
        }

        let count = u32::try_from(count)
            .map_err(|_| AppError::InvalidInput(format!("members '{}' is too large", raw)))?;

        Self::new(name, category, count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry() -> LedgerEntry {
        LedgerEntry {
            time: Local::now(),
            name: "Ann".into(),
            category: "guest".into(),
            members: 2,
            running_total: 2,
        }
    }

    #[test]
    fn time_str_uses_the_given_format() {
        let e = entry();
        assert_eq!(e.time_str("%Y").unwrap(), e.time.format("%Y").to_string());
    }

    #[test]
    fn unknown_format_specifier_is_a_config_error() {
        assert!(matches!(entry().time_str("%Q"), Err(AppError::Config(_))));
    }

    #[test]
    fn parse_rejects_non_numeric_and_non_positive_members() {
        assert!(matches!(
            CheckInRequest::parse("Ann", "guest", "two"),
            Err(AppError::InvalidInput(_))
        ));
        assert!(matches!(
            CheckInRequest::parse("Ann", "guest", "0"),
            Err(AppError::InvalidInput(_))
        ));
        assert!(matches!(
            CheckInRequest::parse("Ann", "guest", "-3"),
            Err(AppError::InvalidInput(_))
        ));
    }

    #[test]
    fn parse_trims_fields() {
        let req = CheckInRequest::parse("  Ann ", " family ", " 3 ").unwrap();
        assert_eq!(req.name, "Ann");
        assert_eq!(req.category, "family");
        assert_eq!(req.members, 3);
    }

    #[test]
    fn missing_name_is_rejected() {
        assert!(matches!(
            CheckInRequest::new("   ", "guest", 1),
            Err(AppError::InvalidInput(_))
        ));
    }
}
