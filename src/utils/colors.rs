/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";

pub const GREY: &str = "\x1b[90m";
pub const WHITE: &str = "\x1b[37m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const MAGENTA: &str = "\x1b[35m";

/// Fill level color for the dashboard:
/// full → red, 80% or more → yellow, otherwise green.
/// An event with no capacity is shown in grey.
pub fn color_for_fill(total: u32, capacity: u32) -> &'static str {
    if capacity == 0 {
        GREY
    } else if total >= capacity {
        RED
    } else if u64::from(total) * 5 >= u64::from(capacity) * 4 {
        YELLOW
    } else {
        GREEN
    }
}
