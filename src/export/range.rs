// src/export/range.rs

use crate::errors::{AppError, AppResult};
use crate::utils::date::{month_last_day, parse_date};
use chrono::NaiveDate;

/// Parse --range / --period (year / month / day / intervallo) into inclusive bounds.
///
/// Supporta:
/// - YYYY
/// - YYYY-MM
/// - YYYY-MM-DD
/// - YYYY:YYYY
/// - YYYY-MM:YYYY-MM
/// - YYYY-MM-DD:YYYY-MM-DD
pub fn parse_range(r: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    let r = r.trim();
    let invalid = || AppError::InvalidDate(format!("invalid range '{r}'"));

    let Some((start_raw, end_raw)) = r.split_once(':') else {
        return period_bounds(r).ok_or_else(invalid);
    };

    let (start_raw, end_raw) = (start_raw.trim(), end_raw.trim());
    if start_raw.len() != end_raw.len() {
        return Err(AppError::InvalidDate(format!(
            "invalid range '{r}': start and end must have same format"
        )));
    }

    let (start, _) = period_bounds(start_raw).ok_or_else(invalid)?;
    let (_, end) = period_bounds(end_raw).ok_or_else(invalid)?;

    if start > end {
        return Err(AppError::InvalidDate(format!(
            "invalid range '{r}': start is after end"
        )));
    }

    Ok((start, end))
}

/// First and last day of a single YYYY / YYYY-MM / YYYY-MM-DD period.
fn period_bounds(p: &str) -> Option<(NaiveDate, NaiveDate)> {
    match p.len() {
        4 => {
            let y: i32 = p.parse().ok()?;
            Some((
                NaiveDate::from_ymd_opt(y, 1, 1)?,
                NaiveDate::from_ymd_opt(y, 12, 31)?,
            ))
        }
        7 => {
            let (y, m) = p.split_once('-')?;
            let y: i32 = y.parse().ok()?;
            let m: u32 = m.parse().ok()?;
            Some((NaiveDate::from_ymd_opt(y, m, 1)?, month_last_day(y, m)?))
        }
        10 => {
            let d = parse_date(p)?;
            Some((d, d))
        }
        _ => None,
    }
}
