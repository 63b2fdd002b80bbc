// src/export/model.rs

use crate::models::{Aggregate, AnalysisReport, DailyRecord};
use crate::utils::formatting::format_hours;
use serde::Serialize;

/// Flat per-day row for CSV (the csv writer cannot serialize flattened structs).
#[derive(Serialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct DayExport {
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub working_hours: f64,
    pub overtime: f64,
    pub due_time: f64,
    pub status: String,
}

impl From<&DailyRecord> for DayExport {
    fn from(d: &DailyRecord) -> Self {
        Self {
            date: d.entry.date.clone(),
            start_time: d.entry.start_time.clone(),
            end_time: d.entry.end_time.clone(),
            working_hours: d.working_hours,
            overtime: d.overtime,
            due_time: d.due_time,
            status: d.status.as_str().to_string(),
        }
    }
}

/// Header per XLSX / PDF
pub(crate) fn get_headers() -> Vec<&'static str> {
    vec![
        "date",
        "startTime",
        "endTime",
        "workingHours",
        "overtime",
        "dueTime",
        "status",
    ]
}

pub(crate) fn day_to_row(d: &DailyRecord, decimals: usize) -> Vec<String> {
    vec![
        d.entry.date.clone(),
        d.entry.start_time.clone(),
        d.entry.end_time.clone(),
        format_hours(d.working_hours, decimals),
        format_hours(d.overtime, decimals),
        format_hours(d.due_time, decimals),
        d.status.as_str().to_string(),
    ]
}

/// Two closing rows: worked totals and the required hours.
pub(crate) fn totals_rows(t: &Aggregate, decimals: usize) -> Vec<Vec<String>> {
    vec![
        vec![
            "TOTAL".to_string(),
            String::new(),
            String::new(),
            format_hours(t.total_hours, decimals),
            format_hours(t.overtime_hours, decimals),
            format_hours(t.missing_hours, decimals),
            String::new(),
        ],
        vec![
            "REQUIRED".to_string(),
            String::new(),
            String::new(),
            format_hours(t.total_required_hours, decimals),
            String::new(),
            String::new(),
            format!("{} days", t.total_working_days),
        ],
    ]
}

pub(crate) fn report_to_table(report: &AnalysisReport, decimals: usize) -> Vec<Vec<String>> {
    let mut rows: Vec<Vec<String>> = report
        .days()
        .iter()
        .map(|d| day_to_row(d, decimals))
        .collect();
    rows.extend(totals_rows(report.totals(), decimals));
    rows
}
