use crate::core::calculator::classify::DAILY_TARGET_HOURS;
use crate::models::{Aggregate, DailyRecord};

/// Totals over `records`, always recomputed from scratch.
///
/// An empty slice yields an all-zero aggregate.
pub fn aggregate(records: &[DailyRecord]) -> Aggregate {
    let mut totals = records.iter().fold(Aggregate::default(), |mut acc, day| {
        acc.total_hours += day.working_hours;
        acc.overtime_hours += day.overtime;
        acc.missing_hours += day.due_time;
        acc
    });

    totals.total_working_days = records.len();
    totals.total_required_hours = records.len() as f64 * DAILY_TARGET_HOURS;
    totals
}
