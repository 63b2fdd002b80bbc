pub mod analysis;
pub mod calculator;
pub mod input;
pub mod logic;
pub mod session;
pub mod summary;

pub use analysis::Analyzer;
pub use logic::Core;
pub use session::{SessionState, TimesheetSession};
pub use summary::{CommandSummarizer, PlainSummarizer, Summarizer};
