//! Time utilities: parsing HH:MM, minute arithmetic across midnight.

use crate::errors::{AppError, AppResult};
use chrono::{NaiveTime, Timelike};
use regex::Regex;
use std::sync::LazyLock;

pub const MINUTES_PER_DAY: i64 = 24 * 60;

// Hour may be written with one digit ("9:30"), minutes always with two.
static CLOCK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-1]?[0-9]|2[0-3]):([0-5][0-9])$").unwrap());

/// Strict HH:MM (24-hour) parser.
pub fn parse_clock(t: &str) -> AppResult<NaiveTime> {
    let trimmed = t.trim();
    let caps = CLOCK_RE
        .captures(trimmed)
        .ok_or_else(|| AppError::InvalidTimeFormat(t.to_string()))?;

    let hour: u32 = caps[1]
        .parse()
        .map_err(|_| AppError::InvalidTimeFormat(t.to_string()))?;
    let minute: u32 = caps[2]
        .parse()
        .map_err(|_| AppError::InvalidTimeFormat(t.to_string()))?;

    NaiveTime::from_hms_opt(hour, minute, 0).ok_or_else(|| AppError::InvalidTimeFormat(t.to_string()))
}

pub fn is_valid_clock(t: &str) -> bool {
    CLOCK_RE.is_match(t.trim())
}

pub fn minutes_since_midnight(t: NaiveTime) -> i64 {
    (t.hour() * 60 + t.minute()) as i64
}

/// Minutes from `start` to `end`; an end before the start is read as the next day.
pub fn minutes_between(start: NaiveTime, end: NaiveTime) -> i64 {
    let diff = minutes_since_midnight(end) - minutes_since_midnight(start);
    if diff < 0 { diff + MINUTES_PER_DAY } else { diff }
}
