use super::{day_status::DayStatus, raw_entry::RawEntry};
use serde::{Deserialize, Serialize};

/// A raw entry plus everything derived from it.
///
/// Exactly one of `overtime` / `due_time` is positive, unless the day hit the
/// target exactly (both zero, status `OK`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyRecord {
    #[serde(flatten)]
    pub entry: RawEntry,
    pub working_hours: f64,
    pub overtime: f64,
    pub due_time: f64,
    pub status: DayStatus,
}

impl DailyRecord {
    pub fn date(&self) -> &str {
        &self.entry.date
    }
}
