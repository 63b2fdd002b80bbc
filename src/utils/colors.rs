/// ANSI color helper utilities for terminal output.
use crate::models::DayStatus;

pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const CYAN: &str = "\x1b[36m";

/// OK → green, Overtime → cyan, Missing → red
pub fn color_for_status(status: DayStatus) -> &'static str {
    match status {
        DayStatus::Ok => GREEN,
        DayStatus::Overtime => CYAN,
        DayStatus::Missing => RED,
    }
}

/// Balance color:
/// \>0 → green
/// \<0 → red
/// 0 → reset
pub fn color_for_balance(value: f64) -> &'static str {
    if value > 0.0 {
        GREEN
    } else if value < 0.0 {
        RED
    } else {
        RESET
    }
}

/// Grey for zero-valued hour cells ("0", "0h"), unchanged otherwise.
pub fn color_for_hours(value: f64) -> &'static str {
    if value == 0.0 { GREY } else { RESET }
}
