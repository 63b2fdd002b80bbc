// src/export/logic.rs

use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::pdf_export::export_pdf;
use crate::export::xlsx::export_xlsx;
use crate::models::AnalysisReport;
use crate::utils::date::month_name;
use crate::utils::path::expand_tilde;
use std::path::Path;
use tracing::info;

/// Logica di alto livello per l'export.
pub struct ExportLogic;

impl ExportLogic {
    /// Writes `report` to `file` (absolute path required).
    ///
    /// - `format`: csv | json | xlsx | pdf
    /// - `source`: entries file the report was computed from; never overwritten
    /// - `title`: PDF title, see [`build_title`]
    /// - `decimals`: precision of hour cells in XLSX / PDF
    /// - `force`: overwrite without asking
    pub fn export(
        report: &AnalysisReport,
        format: ExportFormat,
        file: &str,
        source: Option<&Path>,
        title: &str,
        decimals: usize,
        force: bool,
    ) -> AppResult<()> {
        let path = expand_tilde(file);

        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "Output file path must be absolute: {file}"
            )));
        }

        ensure_writable(&path, source, force)?;

        info!(
            format = format.as_str(),
            path = %path.display(),
            days = report.days().len(),
            "exporting report"
        );

        match format {
            ExportFormat::Csv => export_csv(report, &path)?,
            ExportFormat::Json => export_json(report, &path)?,
            ExportFormat::Xlsx => export_xlsx(report, &path, decimals)?,
            ExportFormat::Pdf => export_pdf(report, &path, title, decimals)?,
        }

        Ok(())
    }
}

/// Costruisce il titolo del PDF in base al periodo selezionato.
pub fn build_title(range: Option<&str>) -> String {
    let Some(p) = range.filter(|p| !p.eq_ignore_ascii_case("all")) else {
        return "Timesheet report".to_string();
    };

    match p.len() {
        // YYYY
        4 => format!("Timesheet report for year {p}"),
        // YYYY-MM
        7 => match p.split_once('-') {
            Some((year, month)) => {
                let month = month.parse().map(month_name).unwrap_or("");
                format!("Timesheet report for {month} {year}")
            }
            None => "Timesheet report".to_string(),
        },
        // YYYY-MM-DD
        10 => format!("Timesheet report for {p}"),
        _ => match p.split_once(':') {
            Some((from, to)) => format!("Timesheet report from {from} to {to}"),
            None => "Timesheet report".to_string(),
        },
    }
}
