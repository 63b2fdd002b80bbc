pub mod aggregate;
pub mod daily_record;
pub mod day_status;
pub mod raw_entry;
pub mod report;

pub use aggregate::Aggregate;
pub use daily_record::DailyRecord;
pub use day_status::DayStatus;
pub use raw_entry::RawEntry;
pub use report::{AnalysisPayload, AnalysisReport};
