use super::{aggregate::Aggregate, daily_record::DailyRecord, day_status::DayStatus};
use serde::{Deserialize, Serialize};

/// Computed data handed to the summarizer: every day plus the totals.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisPayload {
    pub daily_hours: Vec<DailyRecord>,
    #[serde(flatten)]
    pub totals: Aggregate,
}

impl AnalysisPayload {
    pub fn count_status(&self, status: DayStatus) -> usize {
        self.daily_hours
            .iter()
            .filter(|d| d.status == status)
            .count()
    }
}

/// Full analysis result: computed data plus the (optional) prose summary.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    #[serde(flatten)]
    pub payload: AnalysisPayload,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
}

impl AnalysisReport {
    pub fn new(payload: AnalysisPayload, summary: Option<String>) -> Self {
        Self { payload, summary }
    }

    pub fn days(&self) -> &[DailyRecord] {
        &self.payload.daily_hours
    }

    pub fn totals(&self) -> &Aggregate {
        &self.payload.totals
    }
}
