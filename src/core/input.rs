//! Loading the extracted entries (JSON or CSV) and writing them back.

use crate::errors::{AppError, AppResult};
use crate::models::RawEntry;
use crate::utils::path::extension_of;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

/// Either the extraction object `{ "entries": [...] }` or a bare array.
#[derive(Deserialize)]
#[serde(untagged)]
enum EntriesDocument {
    Wrapped { entries: Vec<RawEntry> },
    Bare(Vec<RawEntry>),
}

#[derive(Serialize)]
struct EntriesOut<'a> {
    entries: &'a [RawEntry],
}

/// Read entries from a `.json` or `.csv` file; every date is validated.
pub fn load_entries(path: &Path) -> AppResult<Vec<RawEntry>> {
    let entries = match extension_of(path).as_deref() {
        Some("json") => parse_json_entries(&fs::read_to_string(path)?)?,
        Some("csv") => parse_csv_entries(fs::File::open(path)?)?,
        _ => return Err(AppError::UnsupportedInput(path.display().to_string())),
    };

    validate_dates(&entries)?;

    info!(
        path = %path.display(),
        count = entries.len(),
        "loaded timesheet entries"
    );
    Ok(entries)
}

pub fn parse_json_entries(text: &str) -> AppResult<Vec<RawEntry>> {
    let doc: EntriesDocument = serde_json::from_str(text)?;
    let entries = match doc {
        EntriesDocument::Wrapped { entries } => entries,
        EntriesDocument::Bare(entries) => entries,
    };
    Ok(entries.iter().map(RawEntry::trimmed).collect())
}

/// CSV with a `date,startTime,endTime` header row.
pub fn parse_csv_entries<R: Read>(reader: R) -> AppResult<Vec<RawEntry>> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut entries = Vec::new();
    for row in rdr.deserialize() {
        entries.push(row?);
    }
    Ok(entries)
}

pub fn validate_dates(entries: &[RawEntry]) -> AppResult<()> {
    for e in entries {
        e.naive_date()?;
    }
    Ok(())
}

/// Writes entries in the extraction JSON form.
pub fn save_entries(path: &Path, entries: &[RawEntry]) -> AppResult<()> {
    match extension_of(path).as_deref() {
        Some("json") => {
            let json = serde_json::to_string_pretty(&EntriesOut { entries })?;
            fs::write(path, json)?;
        }
        Some("csv") => {
            let mut wtr = csv::Writer::from_path(path)?;
            for e in entries {
                wtr.serialize(e)?;
            }
            wtr.flush()?;
        }
        _ => return Err(AppError::UnsupportedInput(path.display().to_string())),
    }

    debug!(path = %path.display(), count = entries.len(), "saved timesheet entries");
    Ok(())
}

/// Keeps the entries whose date falls inside `bounds` (inclusive); `None` keeps all.
pub fn filter_by_range(
    entries: Vec<RawEntry>,
    bounds: Option<(NaiveDate, NaiveDate)>,
) -> Vec<RawEntry> {
    let Some((start, end)) = bounds else {
        return entries;
    };

    entries
        .into_iter()
        .filter(|e| {
            e.naive_date()
                .map(|d| d >= start && d <= end)
                .unwrap_or(false)
        })
        .collect()
}
