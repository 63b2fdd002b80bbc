// src/export/json_csv.rs

use crate::errors::{AppError, AppResult};
use crate::export::{DayExport, notify_export_success};
use crate::models::AnalysisReport;
use crate::ui::messages::info;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Export JSON pretty-printed: days, totals and summary.
pub(crate) fn export_json(report: &AnalysisReport, path: &Path) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));

    let json_data = serde_json::to_string_pretty(report)?;

    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;

    notify_export_success("JSON", path);
    Ok(())
}

/// Export CSV, one row per day (header from the serde field names).
pub(crate) fn export_csv(report: &AnalysisReport, path: &Path) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    let mut wtr = csv::Writer::from_path(path)?;

    for day in report.days() {
        wtr.serialize(DayExport::from(day))?;
    }

    wtr.flush()
        .map_err(|e| AppError::Export(format!("CSV flush error: {e}")))?;

    notify_export_success("CSV", path);
    Ok(())
}
