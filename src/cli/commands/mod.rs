pub mod analyze;
pub mod calc;
pub mod config;
pub mod edit;
pub mod export;
pub mod init;

use crate::config::Config;
use crate::core::input::{filter_by_range, load_entries};
use crate::core::summary::{CommandSummarizer, PlainSummarizer, Summarizer};
use crate::errors::AppResult;
use crate::export::parse_range;
use crate::models::RawEntry;
use crate::utils::path::expand_tilde;

/// Load the entries file and keep only the requested period ("all" or none → everything).
pub(crate) fn load_for_period(file: &str, period: Option<&str>) -> AppResult<Vec<RawEntry>> {
    let entries = load_entries(&expand_tilde(file))?;

    let bounds = match period {
        None => None,
        Some(p) if p.eq_ignore_ascii_case("all") => None,
        Some(p) => Some(parse_range(p)?),
    };

    Ok(filter_by_range(entries, bounds))
}

/// External command when `summary_command` is set, built-in template otherwise.
pub(crate) fn summarizer_for(cfg: &Config) -> AppResult<Box<dyn Summarizer>> {
    match cfg.summary_command.as_deref().map(str::trim) {
        Some(line) if !line.is_empty() => Ok(Box::new(
            CommandSummarizer::from_command_line(line)?.with_timeout(cfg.summary_timeout()),
        )),
        _ => Ok(Box::new(PlainSummarizer {
            decimals: cfg.decimals,
        })),
    }
}
