use crate::errors::AppResult;
use crate::utils::time::{minutes_between, parse_clock};

/// Decimal hours between two HH:MM wall-clock times.
///
/// An end time earlier than the start time is treated as crossing midnight,
/// so `compute_duration("22:00", "06:00")` is `8.0`. Equal times give `0.0`.
/// Fails with `InvalidTimeFormat` when either time is not a valid 24-hour HH:MM.
pub fn compute_duration(start_time: &str, end_time: &str) -> AppResult<f64> {
    let start = parse_clock(start_time)?;
    let end = parse_clock(end_time)?;

    Ok(minutes_between(start, end) as f64 / 60.0)
}
