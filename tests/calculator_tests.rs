mod common;
use common::entry;

use rtimesheet::core::Core;
use rtimesheet::core::calculator::{DAILY_TARGET_HOURS, aggregate, classify_day, compute_duration};
use rtimesheet::errors::AppError;
use rtimesheet::models::{Aggregate, DayStatus};

#[test]
fn test_duration_same_day() {
    assert_eq!(compute_duration("09:00", "18:00").unwrap(), 9.0);
    assert_eq!(compute_duration("09:00", "20:00").unwrap(), 11.0);
    assert_eq!(compute_duration("10:00", "15:00").unwrap(), 5.0);
    assert_eq!(compute_duration("08:15", "08:45").unwrap(), 0.5);
    assert_eq!(compute_duration("12:00", "12:00").unwrap(), 0.0);
}

#[test]
fn test_duration_matches_minute_difference() {
    let samples = [
        ("00:00", "23:59"),
        ("07:05", "16:50"),
        ("9:30", "17:10"),
        ("13:00", "13:01"),
    ];

    for (s, e) in samples {
        let parse = |t: &str| {
            let (h, m) = t.split_once(':').unwrap();
            h.parse::<i64>().unwrap() * 60 + m.parse::<i64>().unwrap()
        };
        let expected = (parse(e) - parse(s)) as f64 / 60.0;
        assert_eq!(compute_duration(s, e).unwrap(), expected, "{s} → {e}");
    }
}

#[test]
fn test_duration_wraps_past_midnight() {
    assert_eq!(compute_duration("22:00", "06:00").unwrap(), 8.0);
    assert_eq!(compute_duration("23:30", "00:15").unwrap(), 0.75);
    // (1440 - (start - end)) / 60
    let expected = (1440 - (18 * 60 - 9 * 60)) as f64 / 60.0;
    assert_eq!(compute_duration("18:00", "09:00").unwrap(), expected);
}

#[test]
fn test_duration_equal_times_is_zero() {
    assert_eq!(compute_duration("09:00", "09:00").unwrap(), 0.0);
    assert_eq!(classify_day(0.0).status, DayStatus::Missing);
    assert_eq!(classify_day(0.0).due_time, DAILY_TARGET_HOURS);
}

#[test]
fn test_duration_rejects_malformed_times() {
    for bad in ["24:00", "12:60", "9", "09:5", "ab:cd", "", "09:00:00", "-1:00", "9.30"] {
        let res = compute_duration(bad, "18:00");
        assert!(
            matches!(res, Err(AppError::InvalidTimeFormat(ref s)) if s == bad),
            "expected InvalidTimeFormat for {bad:?}, got {res:?}"
        );
    }

    assert!(matches!(
        compute_duration("09:00", "25:10"),
        Err(AppError::InvalidTimeFormat(_))
    ));
}

#[test]
fn test_classify_exact_target() {
    let c = classify_day(DAILY_TARGET_HOURS);
    assert_eq!(c.overtime, 0.0);
    assert_eq!(c.due_time, 0.0);
    assert_eq!(c.status, DayStatus::Ok);
}

#[test]
fn test_classify_overtime_and_missing() {
    let c = classify_day(11.0);
    assert_eq!(c.overtime, 2.0);
    assert_eq!(c.due_time, 0.0);
    assert_eq!(c.status, DayStatus::Overtime);

    let c = classify_day(5.0);
    assert_eq!(c.overtime, 0.0);
    assert_eq!(c.due_time, 4.0);
    assert_eq!(c.status, DayStatus::Missing);

    let c = classify_day(0.0);
    assert_eq!(c.due_time, 9.0);
    assert_eq!(c.status, DayStatus::Missing);
}

#[test]
fn test_classify_exactly_one_side_positive() {
    let mut h = 0.0;
    while h <= 24.0 {
        let c = classify_day(h);
        if h == DAILY_TARGET_HOURS {
            assert_eq!((c.overtime, c.due_time), (0.0, 0.0));
        } else {
            assert!(
                (c.overtime > 0.0) ^ (c.due_time > 0.0),
                "hours {h}: overtime {} due {}",
                c.overtime,
                c.due_time
            );
        }
        h += 0.25;
    }
}

#[test]
fn test_scenario_ok_day() {
    let rec = Core::build_daily_record(&entry("2024-01-01", "09:00", "18:00")).unwrap();
    assert_eq!(rec.working_hours, 9.0);
    assert_eq!(rec.overtime, 0.0);
    assert_eq!(rec.due_time, 0.0);
    assert_eq!(rec.status, DayStatus::Ok);

    let totals = aggregate(std::slice::from_ref(&rec));
    assert_eq!(totals.total_required_hours, 9.0);
}

#[test]
fn test_scenario_overtime_day() {
    let rec = Core::build_daily_record(&entry("2024-01-02", "09:00", "20:00")).unwrap();
    assert_eq!(rec.working_hours, 11.0);
    assert_eq!(rec.overtime, 2.0);
    assert_eq!(rec.due_time, 0.0);
    assert_eq!(rec.status, DayStatus::Overtime);
}

#[test]
fn test_scenario_missing_day() {
    let rec = Core::build_daily_record(&entry("2024-01-03", "10:00", "15:00")).unwrap();
    assert_eq!(rec.working_hours, 5.0);
    assert_eq!(rec.overtime, 0.0);
    assert_eq!(rec.due_time, 4.0);
    assert_eq!(rec.status, DayStatus::Missing);
}

#[test]
fn test_scenario_two_days_aggregate() {
    let records = Core::build_daily_records(&[
        entry("2024-01-01", "09:00", "18:00"),
        entry("2024-01-02", "09:00", "20:00"),
    ])
    .unwrap();

    let totals = aggregate(&records);
    assert_eq!(totals.total_hours, 20.0);
    assert_eq!(totals.overtime_hours, 2.0);
    assert_eq!(totals.missing_hours, 0.0);
    assert_eq!(totals.total_working_days, 2);
    assert_eq!(totals.total_required_hours, 18.0);
}

#[test]
fn test_aggregate_empty_is_zero() {
    let totals = aggregate(&[]);
    assert_eq!(totals, Aggregate::default());
    assert_eq!(totals.total_hours, 0.0);
    assert_eq!(totals.total_working_days, 0);
    assert_eq!(totals.total_required_hours, 0.0);
}

#[test]
fn test_aggregate_is_idempotent_and_additive() {
    let records = Core::build_daily_records(&[
        entry("2024-02-01", "08:10", "17:25"),
        entry("2024-02-02", "09:20", "16:05"),
        entry("2024-02-03", "22:00", "07:40"),
        entry("2024-02-04", "07:55", "19:03"),
    ])
    .unwrap();

    let a = aggregate(&records);
    let b = aggregate(&records);

    assert_eq!(a.total_hours.to_bits(), b.total_hours.to_bits());
    assert_eq!(a.overtime_hours.to_bits(), b.overtime_hours.to_bits());
    assert_eq!(a.missing_hours.to_bits(), b.missing_hours.to_bits());
    assert_eq!(a, b);

    let sum: f64 = records.iter().map(|r| r.working_hours).sum();
    assert_eq!(a.total_hours, sum);
    assert_eq!(a.total_required_hours, records.len() as f64 * 9.0);

    for r in &records {
        assert!(!(r.overtime > 0.0 && r.due_time > 0.0));
    }
}

#[test]
fn test_build_record_rejects_bad_date() {
    let res = Core::build_daily_record(&entry("2024-13-01", "09:00", "18:00"));
    assert!(matches!(res, Err(AppError::InvalidDate(_))));

    let res = Core::build_daily_record(&entry("01/02/2024", "09:00", "18:00"));
    assert!(matches!(res, Err(AppError::InvalidDate(_))));
}

#[test]
fn test_build_record_strips_padding_from_fields() {
    let record = Core::build_daily_record(&entry(" 2024-01-02", " 9:00 ", "18:00\t")).unwrap();
    assert_eq!(record.entry.date, "2024-01-02");
    assert_eq!(record.entry.start_time, "9:00");
    assert_eq!(record.entry.end_time, "18:00");
    assert_eq!(record.working_hours, 9.0);
}

#[test]
fn test_build_records_fails_on_first_invalid_entry() {
    let res = Core::build_daily_records(&[
        entry("2024-01-01", "09:00", "18:00"),
        entry("2024-01-02", "9am", "18:00"),
        entry("2024-01-03", "09:00", "99:00"),
    ]);

    match res {
        Err(AppError::InvalidTimeFormat(s)) => assert_eq!(s, "9am"),
        other => panic!("unexpected result: {other:?}"),
    }
}
