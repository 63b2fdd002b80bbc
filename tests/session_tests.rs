mod common;
use common::{entry, sample_entries};

use rtimesheet::core::{PlainSummarizer, SessionState, Summarizer, TimesheetSession};
use rtimesheet::errors::{AppError, AppResult};
use rtimesheet::models::{AnalysisPayload, DayStatus};

struct FixedSummarizer(&'static str);

impl Summarizer for FixedSummarizer {
    fn summarize(&self, _payload: &AnalysisPayload) -> AppResult<String> {
        Ok(self.0.to_string())
    }
}

#[test]
fn test_new_session_starts_in_input() {
    let session = TimesheetSession::new(sample_entries());
    assert_eq!(session.state(), SessionState::Input);
    assert!(session.records().is_empty());
    assert_eq!(session.totals().total_working_days, 0);
}

#[test]
fn test_compute_moves_to_computed() {
    let mut session = TimesheetSession::new(sample_entries());
    session.compute().unwrap();

    assert_eq!(session.state(), SessionState::Computed);
    assert_eq!(session.records().len(), 3);
    assert_eq!(session.totals().total_hours, 25.0);
    assert_eq!(session.totals().total_required_hours, 27.0);
}

#[test]
fn test_compute_rejects_empty_timesheet() {
    let mut session = TimesheetSession::new(Vec::new());
    assert!(matches!(session.compute(), Err(AppError::EmptyInputSet)));
    assert_eq!(session.state(), SessionState::Input);
}

#[test]
fn test_edit_before_compute_is_invalid() {
    let mut session = TimesheetSession::new(sample_entries());
    assert!(matches!(
        session.begin_edit(0),
        Err(AppError::InvalidState(_))
    ));
}

#[test]
fn test_edit_recomputes_day_and_totals() {
    let mut session = TimesheetSession::computed(sample_entries()).unwrap();

    session.begin_edit(2).unwrap();
    assert_eq!(session.state(), SessionState::Edited { index: 2 });

    let rec = session.commit_edit("09:00", "19:30").unwrap().clone();
    assert_eq!(rec.working_hours, 10.5);
    assert_eq!(rec.overtime, 1.5);
    assert_eq!(rec.due_time, 0.0);
    assert_eq!(rec.status, DayStatus::Overtime);
    assert_eq!(rec.entry.start_time, "09:00");
    assert_eq!(rec.entry.end_time, "19:30");

    assert_eq!(session.state(), SessionState::Computed);
    let t = session.totals();
    assert_eq!(t.total_hours, 9.0 + 11.0 + 10.5);
    assert_eq!(t.overtime_hours, 2.0 + 1.5);
    assert_eq!(t.missing_hours, 0.0);
    assert_eq!(t.total_working_days, 3);
    assert_eq!(t.total_required_hours, 27.0);

    assert_eq!(session.entries()[2].end_time, "19:30");
}

#[test]
fn test_invalid_times_keep_edit_open_and_data_unchanged() {
    let mut session = TimesheetSession::computed(sample_entries()).unwrap();
    let before = session.report();

    session.begin_edit(1).unwrap();
    let res = session.commit_edit("25:00", "18:00");
    assert!(matches!(res, Err(AppError::InvalidTimeFormat(_))));
    assert_eq!(session.state(), SessionState::Edited { index: 1 });

    session.cancel_edit().unwrap();
    assert_eq!(session.state(), SessionState::Computed);
    assert_eq!(session.report(), before);
}

#[test]
fn test_edit_day_failure_leaves_session_computed() {
    let mut session = TimesheetSession::computed(sample_entries()).unwrap();

    let res = session.edit_day(0, "09:00", "6pm");
    assert!(matches!(res, Err(AppError::InvalidTimeFormat(_))));
    assert_eq!(session.state(), SessionState::Computed);
    assert_eq!(session.records()[0].working_hours, 9.0);
}

#[test]
fn test_second_begin_edit_and_stray_commit_are_rejected() {
    let mut session = TimesheetSession::computed(sample_entries()).unwrap();

    assert!(matches!(
        session.commit_edit("09:00", "18:00"),
        Err(AppError::InvalidState(_))
    ));
    assert!(matches!(session.cancel_edit(), Err(AppError::InvalidState(_))));

    session.begin_edit(0).unwrap();
    assert!(matches!(
        session.begin_edit(1),
        Err(AppError::InvalidState(_))
    ));
    assert!(matches!(session.compute(), Err(AppError::InvalidState(_))));
}

#[test]
fn test_begin_edit_out_of_range() {
    let mut session = TimesheetSession::computed(sample_entries()).unwrap();
    assert!(matches!(
        session.begin_edit(3),
        Err(AppError::InvalidDayIndex(3))
    ));
    assert_eq!(session.state(), SessionState::Computed);
}

#[test]
fn test_resolve_day_by_date_or_row_number() {
    let session = TimesheetSession::computed(sample_entries()).unwrap();

    assert_eq!(session.resolve_day("2024-01-02").unwrap(), 1);
    assert_eq!(session.resolve_day("1").unwrap(), 0);
    assert_eq!(session.resolve_day("3").unwrap(), 2);
    assert!(matches!(
        session.resolve_day("4"),
        Err(AppError::InvalidDayIndex(4))
    ));
    assert!(matches!(
        session.resolve_day("2024-02-01"),
        Err(AppError::DayNotFound(_))
    ));
}

#[test]
fn test_summary_is_cleared_by_edit_and_regenerated() {
    let mut session = TimesheetSession::computed(sample_entries()).unwrap();

    assert_eq!(
        session.summarize(&FixedSummarizer("first")).unwrap(),
        "first"
    );
    assert_eq!(session.summary(), Some("first"));

    session.edit_day(0, "08:00", "18:00").unwrap();
    assert_eq!(session.summary(), None);
    assert!(session.report().summary.is_none());

    session.summarize(&PlainSummarizer::default()).unwrap();
    let text = session.summary().unwrap();
    assert!(text.contains("26 hours"), "{text}");
}

#[test]
fn test_summarize_while_editing_is_rejected() {
    let mut session = TimesheetSession::computed(vec![entry("2024-01-01", "09:00", "18:00")])
        .unwrap();
    session.begin_edit(0).unwrap();
    assert!(matches!(
        session.summarize(&FixedSummarizer("x")),
        Err(AppError::InvalidState(_))
    ));
}
