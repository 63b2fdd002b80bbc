//! Extraction output → computed days → totals → summary.

use crate::core::logic::Core;
use crate::core::summary::Summarizer;
use crate::errors::{AppError, AppResult};
use crate::models::{AnalysisPayload, AnalysisReport, RawEntry};
use tracing::{info, warn};

pub struct Analyzer;

impl Analyzer {
    /// Computes days and totals without asking for a summary.
    ///
    /// An empty entry list means the extraction found nothing and is rejected.
    pub fn compute(entries: &[RawEntry]) -> AppResult<AnalysisPayload> {
        if entries.is_empty() {
            warn!("no timesheet entries to analyze");
            return Err(AppError::EmptyInputSet);
        }

        let payload = Core::build_payload(entries)?;

        info!(
            days = payload.totals.total_working_days,
            total_hours = payload.totals.total_hours,
            "timesheet computed"
        );
        Ok(payload)
    }

    /// Full pipeline: compute, then attach the summarizer's text.
    pub fn run(entries: &[RawEntry], summarizer: &dyn Summarizer) -> AppResult<AnalysisReport> {
        let payload = Self::compute(entries)?;
        let summary = summarizer.summarize(&payload)?;

        Ok(AnalysisReport::new(payload, Some(summary)))
    }
}
