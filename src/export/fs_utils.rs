//! Checks on the export target before anything is written.

use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, warning};
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use tracing::debug;

/// Decides whether the report may be written to `target`.
///
/// A missing target is always fine. The entries file the report was computed
/// from is never a valid target, `force` included. Any other existing file is
/// replaced with `force`, otherwise only after the user confirms.
pub(crate) fn ensure_writable(target: &Path, source: Option<&Path>, force: bool) -> AppResult<()> {
    if !target.exists() {
        return Ok(());
    }

    if let Some(source) = source
        && same_file(target, source)
    {
        return Err(AppError::Export(format!(
            "Refusing to overwrite the timesheet entries file: {}",
            target.display()
        )));
    }

    if force {
        debug!(path = %target.display(), "replacing existing report");
        return Ok(());
    }

    confirm_replace(target)
}

fn same_file(a: &Path, b: &Path) -> bool {
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

fn confirm_replace(target: &Path) -> AppResult<()> {
    warning(format!("A file already exists at '{}'.", target.display()));

    print!("Replace it with the new timesheet report? [y/N]: ");
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;

    if matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes") {
        info("Existing file will be replaced by the report.");
        return Ok(());
    }

    Err(AppError::Export(
        "Export cancelled: existing file not overwritten".to_string(),
    ))
}
