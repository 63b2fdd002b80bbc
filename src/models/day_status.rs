use serde::{Deserialize, Serialize};
use std::fmt;

/// Classification of a day against the daily target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DayStatus {
    #[serde(rename = "OK")]
    Ok,
    Overtime,
    Missing,
}

impl DayStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DayStatus::Ok => "OK",
            DayStatus::Overtime => "Overtime",
            DayStatus::Missing => "Missing",
        }
    }
}

impl fmt::Display for DayStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
