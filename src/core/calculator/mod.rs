//! Deterministic hours arithmetic: durations, daily classification, totals.

pub mod aggregate;
pub mod classify;
pub mod duration;

pub use aggregate::aggregate;
pub use classify::{DAILY_TARGET_HOURS, DayClassification, classify_day};
pub use duration::compute_duration;
