//! Formatting utilities used for CLI outputs.

use super::colors::{BOLD, RESET};

pub fn bold(s: &str) -> String {
    format!("{BOLD}{s}{RESET}")
}

/// `total/capacity (pct%)`, e.g. `8/10 (80%)`.
pub fn fill_summary(total: u32, capacity: u32) -> String {
    if capacity == 0 {
        return format!("{total}/0");
    }
    let pct = u64::from(total) * 100 / u64::from(capacity);
    format!("{total}/{capacity} ({pct}%)")
}
