// src/export/xlsx.rs

use crate::errors::{AppError, AppResult};
use crate::export::excel_date::parse_to_excel_date;
use crate::export::model::{get_headers, report_to_table};
use crate::export::notify_export_success;
use crate::models::AnalysisReport;
use crate::ui::messages::info;
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, FormatPattern, Workbook, Worksheet};
use std::path::Path;
use unicode_width::UnicodeWidthStr;

/// Export XLSX con styling e auto-larghezza colonne.
///
/// Day rows are banded, the TOTAL/REQUIRED rows are bold and the summary
/// (if any) is written two rows below the table.
pub(crate) fn export_xlsx(report: &AnalysisReport, path: &Path, decimals: usize) -> AppResult<()> {
    info(format!("Exporting to XLSX: {}", path.display()));

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name("Timesheet").map_err(to_app_error)?;

    // ---------------------------
    // Header
    // ---------------------------
    let headers = get_headers();

    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0xFFFFFF))
        .set_background_color(Color::RGB(0x2F75B5))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    for (col, header) in headers.iter().enumerate() {
        worksheet
            .write_with_format(0, col as u16, *header, &header_format)
            .map_err(to_app_error)?;
    }

    worksheet.set_freeze_panes(1, 0).map_err(to_app_error)?;

    let mut col_widths: Vec<usize> = headers.iter().map(|h| UnicodeWidthStr::width(*h)).collect();

    let band1 = Color::RGB(0xEAF3FB);
    let band2 = Color::RGB(0xFFFFFF);
    let totals_bg = Color::RGB(0xD9D9D9);

    // ---------------------------
    // Righe: giorni + totali
    // ---------------------------
    let rows = report_to_table(report, decimals);
    let day_count = report.days().len();

    for (row_index, values) in rows.iter().enumerate() {
        let row = (row_index + 1) as u32;
        let is_total = row_index >= day_count;
        let bg = if is_total {
            totals_bg
        } else if row_index % 2 == 0 {
            band1
        } else {
            band2
        };

        for (col, value) in values.iter().enumerate() {
            write_xlsx_cell(worksheet, row, col as u16, value, bg, is_total)?;
            col_widths[col] = col_widths[col].max(UnicodeWidthStr::width(value.as_str()));
        }
    }

    if let Some(summary) = &report.summary {
        let row = (rows.len() + 2) as u32;
        let bold = Format::new().set_bold();
        worksheet
            .write_with_format(row, 0, "Summary", &bold)
            .map_err(to_app_error)?;
        worksheet
            .write(row + 1, 0, summary.as_str())
            .map_err(to_app_error)?;
    }

    for (c, w) in col_widths.iter().enumerate() {
        worksheet
            .set_column_width(c as u16, *w as f64 + 2.0)
            .map_err(to_app_error)?;
    }

    workbook.save(path).map_err(to_app_error)?;

    notify_export_success("XLSX", path);
    Ok(())
}

/// Scrive una singola cella, interpretando stringhe come data/ora/numero se possibile.
fn write_xlsx_cell(
    worksheet: &mut Worksheet,
    row: u32,
    col: u16,
    s: &str,
    bg: Color,
    bold: bool,
) -> AppResult<()> {
    let mut fmt = Format::new()
        .set_background_color(bg)
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);
    if bold {
        fmt = fmt.set_bold();
    }

    // Data / Ora in formato Excel
    if let Some((num_format, serial)) = parse_to_excel_date(s) {
        worksheet
            .write_with_format(row, col, serial, &fmt.set_num_format(num_format))
            .map_err(to_app_error)?;
        return Ok(());
    }

    // Ore decimali
    if let Ok(num) = s.parse::<f64>() {
        worksheet
            .write_with_format(row, col, num, &fmt.set_align(FormatAlign::Right))
            .map_err(to_app_error)?;
        return Ok(());
    }

    worksheet
        .write_with_format(row, col, s, &fmt)
        .map_err(to_app_error)?;

    Ok(())
}

fn to_app_error<E: std::fmt::Display>(e: E) -> AppError {
    AppError::Export(e.to_string())
}
