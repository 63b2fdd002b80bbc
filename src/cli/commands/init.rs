use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use std::path::Path;

/// Handle the `init` command
///
/// Creates the config directory and file; an existing file is upgraded with
/// any missing keys instead of being overwritten.
pub fn handle(config_path: &Path) -> AppResult<()> {
    println!("⚙️  Initializing rTimesheet…");

    if Config::init_at(config_path)? {
        success(format!("Config file created: {}", config_path.display()));
    } else {
        info(format!("Config file already present: {}", config_path.display()));
    }

    println!("🎉 rTimesheet initialization completed!");
    Ok(())
}
