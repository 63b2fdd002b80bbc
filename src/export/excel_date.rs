// src/export/excel_date.rs

use crate::utils::date::parse_date;
use crate::utils::time::{is_valid_clock, minutes_since_midnight, parse_clock};
use chrono::NaiveDate;

/// Prova a interpretare una stringa come data (YYYY-MM-DD) o ora (HH:MM),
/// restituendo il *seriale Excel* + formattazione numerica.
pub(crate) fn parse_to_excel_date(s: &str) -> Option<(&'static str, f64)> {
    if let Some(d) = parse_date(s) {
        return Some(("yyyy-mm-dd", date_to_excel_serial(d)?));
    }

    if is_valid_clock(s) {
        let t = parse_clock(s).ok()?;
        return Some(("hh:mm", minutes_since_midnight(t) as f64 / 1440.0));
    }

    None
}

fn date_to_excel_serial(d: NaiveDate) -> Option<f64> {
    let excel_epoch = NaiveDate::from_ymd_opt(1899, 12, 30)?;
    Some(d.signed_duration_since(excel_epoch).num_days() as f64)
}
