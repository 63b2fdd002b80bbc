//! Formatting utilities used for CLI and export outputs.

/// Decimal hours with at most `decimals` fraction digits, trailing zeros dropped.
///
/// `format_hours(9.0, 1)` → "9", `format_hours(2.5, 1)` → "2.5"
pub fn format_hours(hours: f64, decimals: usize) -> String {
    let s = format!("{:.*}", decimals, hours);
    let s = if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        s
    };
    // avoid printing "-0" for tiny negative rounding noise
    if s == "-0" { "0".to_string() } else { s }
}

/// Decimal hours as "HHh MMm", optionally with an explicit sign.
pub fn hours2readable(hours: f64, want_sign: bool) -> String {
    let mins = (hours * 60.0).round() as i64;
    let abs_m = mins.abs();

    let sign = if mins > 0 && want_sign {
        "+"
    } else if mins < 0 {
        "-"
    } else {
        ""
    };

    format!("{}{:02}h {:02}m", sign, abs_m / 60, abs_m % 60)
}

pub fn plural(n: usize, singular: &str, plural: &str) -> String {
    if n == 1 {
        format!("{n} {singular}")
    } else {
        format!("{n} {plural}")
    }
}
