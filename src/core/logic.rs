use crate::core::calculator::{aggregate, classify_day, compute_duration};
use crate::errors::AppResult;
use crate::models::{AnalysisPayload, DailyRecord, RawEntry};
use tracing::debug;

pub struct Core;

impl Core {
    /// RawEntry → DailyRecord. Rejects a malformed date or time; the record
    /// keeps the entry with surrounding whitespace stripped.
    pub fn build_daily_record(entry: &RawEntry) -> AppResult<DailyRecord> {
        let entry = entry.trimmed();
        entry.naive_date()?;

        let working_hours = compute_duration(&entry.start_time, &entry.end_time)?;
        let class = classify_day(working_hours);

        debug!(
            date = %entry.date,
            working_hours,
            status = %class.status,
            "computed day"
        );

        Ok(DailyRecord {
            entry,
            working_hours,
            overtime: class.overtime,
            due_time: class.due_time,
            status: class.status,
        })
    }

    /// Computes every day; the first malformed entry aborts the whole batch.
    pub fn build_daily_records(entries: &[RawEntry]) -> AppResult<Vec<DailyRecord>> {
        entries.iter().map(Self::build_daily_record).collect()
    }

    /// Days plus their totals.
    pub fn build_payload(entries: &[RawEntry]) -> AppResult<AnalysisPayload> {
        let daily_hours = Self::build_daily_records(entries)?;
        let totals = aggregate(&daily_hours);

        Ok(AnalysisPayload {
            daily_hours,
            totals,
        })
    }
}
