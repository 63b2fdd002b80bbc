use chrono::NaiveDate;

/// Strict `YYYY-MM-DD` parser (zero-padded, ten characters).
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if s.len() != 10 {
        return None;
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// Weekday label for the `show_weekday` setting ("None", "Short", "Medium", "Long").
pub fn weekday_label(date: &str, mode: &str) -> Option<String> {
    let d = parse_date(date)?;
    match mode.to_ascii_lowercase().as_str() {
        "short" => Some(d.format("%a").to_string().chars().take(2).collect()),
        "medium" => Some(d.format("%a").to_string()),
        "long" => Some(d.format("%A").to_string()),
        _ => None,
    }
}

pub fn month_name(m: u32) -> &'static str {
    match m {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        12 => "December",
        _ => "",
    }
}

pub fn month_last_day(year: i32, month: u32) -> Option<NaiveDate> {
    let (ny, nm) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(ny, nm, 1)?.pred_opt()
}
