//! Interactive view over one timesheet: computed days, manual corrections
//! and a summary that goes stale when a day changes.

use crate::core::analysis::Analyzer;
use crate::core::calculator::{aggregate, compute_duration};
use crate::core::logic::Core;
use crate::core::summary::Summarizer;
use crate::errors::{AppError, AppResult};
use crate::models::{Aggregate, AnalysisPayload, AnalysisReport, DailyRecord, RawEntry};
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Entries received, nothing derived yet.
    Input,
    /// Days and totals available.
    Computed,
    /// A correction of day `index` is in progress.
    Edited { index: usize },
}

#[derive(Debug, Clone)]
pub struct TimesheetSession {
    entries: Vec<RawEntry>,
    records: Vec<DailyRecord>,
    totals: Aggregate,
    summary: Option<String>,
    state: SessionState,
}

impl TimesheetSession {
    pub fn new(entries: Vec<RawEntry>) -> Self {
        Self {
            entries: entries.iter().map(RawEntry::trimmed).collect(),
            records: Vec::new(),
            totals: Aggregate::default(),
            summary: None,
            state: SessionState::Input,
        }
    }

    /// Shortcut for `new` followed by `compute`.
    pub fn computed(entries: Vec<RawEntry>) -> AppResult<Self> {
        let mut session = Self::new(entries);
        session.compute()?;
        Ok(session)
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Current entries, including committed corrections.
    pub fn entries(&self) -> &[RawEntry] {
        &self.entries
    }

    pub fn records(&self) -> &[DailyRecord] {
        &self.records
    }

    pub fn totals(&self) -> &Aggregate {
        &self.totals
    }

    pub fn summary(&self) -> Option<&str> {
        self.summary.as_deref()
    }

    /// Derives every day and the totals. Not allowed while an edit is open.
    pub fn compute(&mut self) -> AppResult<()> {
        if let SessionState::Edited { index } = self.state {
            return Err(AppError::InvalidState(format!(
                "cannot recompute while day {index} is being edited"
            )));
        }

        let payload = Analyzer::compute(&self.entries)?;
        self.records = payload.daily_hours;
        self.totals = payload.totals;
        self.state = SessionState::Computed;
        Ok(())
    }

    /// Index of the day with the given date.
    pub fn find_day(&self, date: &str) -> AppResult<usize> {
        let date = date.trim();
        self.entries
            .iter()
            .position(|e| e.date == date)
            .ok_or_else(|| AppError::DayNotFound(date.to_string()))
    }

    /// Accepts either a `YYYY-MM-DD` date or a 1-based row number.
    pub fn resolve_day(&self, selector: &str) -> AppResult<usize> {
        match selector.trim().parse::<usize>() {
            Ok(n) if n >= 1 && n <= self.entries.len() => Ok(n - 1),
            Ok(n) => Err(AppError::InvalidDayIndex(n)),
            Err(_) => self.find_day(selector),
        }
    }

    pub fn begin_edit(&mut self, index: usize) -> AppResult<()> {
        match self.state {
            SessionState::Computed => {}
            SessionState::Input => {
                return Err(AppError::InvalidState(
                    "timesheet must be computed before editing".to_string(),
                ));
            }
            SessionState::Edited { index: open } => {
                return Err(AppError::InvalidState(format!(
                    "day {open} is already being edited"
                )));
            }
        }

        if index >= self.records.len() {
            return Err(AppError::InvalidDayIndex(index));
        }

        self.state = SessionState::Edited { index };
        Ok(())
    }

    /// Applies new start/end times to the day being edited and recomputes
    /// that day plus the totals. On invalid times nothing changes and the
    /// edit stays open.
    pub fn commit_edit(&mut self, start_time: &str, end_time: &str) -> AppResult<&DailyRecord> {
        let SessionState::Edited { index } = self.state else {
            return Err(AppError::InvalidState("no day is being edited".to_string()));
        };

        compute_duration(start_time, end_time)?;

        let entry = self.entries[index].with_times(start_time, end_time);
        let record = Core::build_daily_record(&entry)?;

        info!(
            date = %entry.date,
            start = %entry.start_time,
            end = %entry.end_time,
            working_hours = record.working_hours,
            "day corrected"
        );

        self.entries[index] = entry;
        self.records[index] = record;
        self.totals = aggregate(&self.records);
        self.summary = None;
        self.state = SessionState::Computed;

        Ok(&self.records[index])
    }

    pub fn cancel_edit(&mut self) -> AppResult<()> {
        match self.state {
            SessionState::Edited { .. } => {
                self.state = SessionState::Computed;
                Ok(())
            }
            _ => Err(AppError::InvalidState("no day is being edited".to_string())),
        }
    }

    /// `begin_edit` + `commit_edit`; a failed commit leaves the session computed.
    pub fn edit_day(
        &mut self,
        index: usize,
        start_time: &str,
        end_time: &str,
    ) -> AppResult<&DailyRecord> {
        self.begin_edit(index)?;

        if let Err(e) = compute_duration(start_time, end_time) {
            self.state = SessionState::Computed;
            return Err(e);
        }

        self.commit_edit(start_time, end_time)
    }

    /// Regenerates the summary for the current data.
    pub fn summarize(&mut self, summarizer: &dyn Summarizer) -> AppResult<&str> {
        if self.state != SessionState::Computed {
            return Err(AppError::InvalidState(
                "summary needs a computed timesheet with no open edit".to_string(),
            ));
        }

        let text = summarizer.summarize(&self.payload())?;
        Ok(self.summary.insert(text).as_str())
    }

    pub fn payload(&self) -> AnalysisPayload {
        AnalysisPayload {
            daily_hours: self.records.clone(),
            totals: self.totals.clone(),
        }
    }

    pub fn report(&self) -> AnalysisReport {
        AnalysisReport::new(self.payload(), self.summary.clone())
    }
}
