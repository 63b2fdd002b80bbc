use crate::models::DayStatus;

/// Hours a single working day is expected to last.
pub const DAILY_TARGET_HOURS: f64 = 9.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DayClassification {
    pub overtime: f64,
    pub due_time: f64,
    pub status: DayStatus,
}

pub fn classify_day(working_hours: f64) -> DayClassification {
    let overtime = (working_hours - DAILY_TARGET_HOURS).max(0.0);
    let due_time = (DAILY_TARGET_HOURS - working_hours).max(0.0);

    let status = if working_hours > DAILY_TARGET_HOURS {
        DayStatus::Overtime
    } else if working_hours < DAILY_TARGET_HOURS {
        DayStatus::Missing
    } else {
        DayStatus::Ok
    };

    DayClassification {
        overtime,
        due_time,
        status,
    }
}
