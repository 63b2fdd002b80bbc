//! Unified application error type.
//! All modules (core, export, cli, utils) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO / serialization
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid time format: {0} (expected HH:MM, 24-hour)")]
    InvalidTimeFormat(String),

    #[error("Invalid date format: {0} (expected YYYY-MM-DD)")]
    InvalidDate(String),

    #[error("Unsupported input file: {0} (use .json or .csv)")]
    UnsupportedInput(String),

    // ---------------------------
    // Logic errors
    // ---------------------------
    #[error(
        "Could not extract any data from the timesheet. The input might be empty or not a valid timesheet."
    )]
    EmptyInputSet,

    #[error("Invalid day index: {0}")]
    InvalidDayIndex(usize),

    #[error("No entry found for date {0}")]
    DayNotFound(String),

    #[error("Invalid state: {0}")]
    InvalidState(String),

    #[error("Summary generation failed: {0}")]
    Summary(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export format not supported: {0}")]
    InvalidExportFormat(String),

    #[error("Export error: {0}")]
    Export(String),
}

pub type AppResult<T> = Result<T, AppError>;
