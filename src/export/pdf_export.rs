// src/export/pdf_export.rs

use crate::errors::{AppError, AppResult};
use crate::export::model::{get_headers, report_to_table};
use crate::export::notify_export_success;
use crate::export::pdf::PdfManager;
use crate::models::AnalysisReport;
use crate::ui::messages::info;
use std::path::Path;

/// Export PDF: day table with totals, plus a summary page when available.
pub(crate) fn export_pdf(
    report: &AnalysisReport,
    path: &Path,
    title: &str,
    decimals: usize,
) -> AppResult<()> {
    info(format!("Exporting to PDF: {}", path.display()));

    let headers = get_headers();
    let rows = report_to_table(report, decimals);
    let totals = rows.len() - report.days().len();

    let mut pdf = PdfManager::new();
    pdf.write_table(title, &headers, &rows, totals);

    if let Some(summary) = &report.summary {
        pdf.write_notes("Summary", summary);
    }

    pdf.save(path)
        .map_err(|e| AppError::Export(format!("PDF export error: {e}")))?;

    notify_export_success("PDF", path);
    Ok(())
}
