use crate::errors::{AppError, AppResult};
use crate::utils::date::parse_date;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One extracted timesheet line, exactly as the extraction step produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawEntry {
    pub date: String,       // "YYYY-MM-DD"
    pub start_time: String, // "HH:MM", 24-hour
    pub end_time: String,   // "HH:MM", 24-hour
}

impl RawEntry {
    pub fn new(
        date: impl Into<String>,
        start_time: impl Into<String>,
        end_time: impl Into<String>,
    ) -> Self {
        Self {
            date: date.into(),
            start_time: start_time.into(),
            end_time: end_time.into(),
        }
    }

    /// Parsed calendar date, or `InvalidDate` when the string is not `YYYY-MM-DD`.
    pub fn naive_date(&self) -> AppResult<NaiveDate> {
        parse_date(&self.date).ok_or_else(|| AppError::InvalidDate(self.date.clone()))
    }

    /// Copy with surrounding whitespace removed from every field.
    pub fn trimmed(&self) -> Self {
        Self::new(self.date.trim(), self.start_time.trim(), self.end_time.trim())
    }

    /// Same entry with different start/end times (used when a day is corrected).
    pub fn with_times(&self, start_time: &str, end_time: &str) -> Self {
        Self {
            date: self.date.clone(),
            start_time: start_time.trim().to_string(),
            end_time: end_time.trim().to_string(),
        }
    }
}
