//! Upgrades an existing config file in place: keys introduced by newer
//! versions are added with their default values, existing values are kept.

use super::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use serde_yaml::Value;
use std::fs;
use std::path::Path;

/// Adds every default key missing from the YAML file at `path`.
/// Returns the names of the keys that were added.
pub fn add_missing_keys(path: &Path) -> AppResult<Vec<String>> {
    let content = fs::read_to_string(path)?;

    let mut yaml: Value = if content.trim().is_empty() {
        Value::Mapping(Default::default())
    } else {
        serde_yaml::from_str(&content)?
    };

    let defaults = serde_yaml::to_value(Config::default())?;

    let (Some(map), Some(default_map)) = (yaml.as_mapping_mut(), defaults.as_mapping()) else {
        return Err(AppError::Config(format!(
            "{} is not a YAML mapping",
            path.display()
        )));
    };

    let mut added = Vec::new();
    for (key, value) in default_map {
        if !map.contains_key(key) {
            map.insert(key.clone(), value.clone());
            if let Some(k) = key.as_str() {
                added.push(k.to_string());
            }
        }
    }

    if added.is_empty() {
        return Ok(added);
    }

    let serialized = serde_yaml::to_string(&yaml)?;
    fs::write(path, annotate(&serialized))?;

    success(format!(
        "Configuration upgraded: added {}",
        added.join(", ")
    ));

    Ok(added)
}

/// Inject documentation comments after the lines that need them.
pub(crate) fn annotate(serialized: &str) -> String {
    let mut out = String::new();

    for line in serialized.lines() {
        out.push_str(line);
        out.push('\n');

        if line.starts_with("show_weekday:") {
            out.push_str(
                "  # show_weekday options:\n\
                 #   None   → do not show weekday\n\
                 #   Short  → Mo, Tu, We, Th, Fr, Sa, Su\n\
                 #   Medium → Mon, Tue, Wed, Thu, Fri, Sat, Sun\n\
                 #   Long   → Monday, Tuesday, ...\n",
            );
        } else if line.starts_with("summary_command:") {
            out.push_str(
                "  # summary_command: program that reads the computed timesheet (JSON)\n\
                 #   on stdin and prints a summary on stdout. Unset → built-in summary.\n",
            );
        } else if line.starts_with("summary_timeout_secs:") {
            out.push_str("  # seconds before summary_command is killed (0 = no limit)\n");
        }
    }

    out
}
