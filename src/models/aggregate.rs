use serde::{Deserialize, Serialize};

/// Totals over every computed day of a timesheet.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Aggregate {
    pub total_hours: f64,
    pub overtime_hours: f64,
    pub missing_hours: f64,
    pub total_working_days: usize,
    pub total_required_hours: f64,
}

impl Aggregate {
    /// Worked minus required hours (positive = ahead of target).
    pub fn balance(&self) -> f64 {
        self.total_hours - self.total_required_hours
    }
}
