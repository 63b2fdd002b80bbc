use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

pub mod migrate;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Maximum fraction digits when printing hours.
    #[serde(default = "default_decimals")]
    pub decimals: usize,
    /// None | Short | Medium | Long
    #[serde(default = "default_show_weekday")]
    pub show_weekday: String,
    #[serde(default = "default_separator_char")]
    pub separator_char: String,
    /// External summarizer command line; the JSON payload is written to its stdin.
    #[serde(default)]
    pub summary_command: Option<String>,
    /// Seconds before the summary command is killed; 0 disables the limit.
    #[serde(default = "default_summary_timeout_secs")]
    pub summary_timeout_secs: u64,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_decimals() -> usize {
    1
}
fn default_show_weekday() -> String {
    "None".to_string()
}
fn default_separator_char() -> String {
    "-".to_string()
}
fn default_summary_timeout_secs() -> u64 {
    120
}
fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            decimals: default_decimals(),
            show_weekday: default_show_weekday(),
            separator_char: default_separator_char(),
            summary_command: None,
            summary_timeout_secs: default_summary_timeout_secs(),
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rtimesheet")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".rtimesheet")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rtimesheet.conf")
    }

    /// Load configuration from `path`, or return defaults if the file does not exist
    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let cfg: Config = serde_yaml::from_str(&content)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> AppResult<()> {
        if self.decimals > 6 {
            return Err(AppError::Config(format!(
                "decimals must be between 0 and 6 (got {})",
                self.decimals
            )));
        }
        if self.separator_char.chars().count() != 1 {
            return Err(AppError::Config(format!(
                "separator_char must be a single character (got '{}')",
                self.separator_char
            )));
        }
        Ok(())
    }

    pub fn summary_timeout(&self) -> Option<Duration> {
        (self.summary_timeout_secs > 0).then(|| Duration::from_secs(self.summary_timeout_secs))
    }

    pub fn separator(&self) -> char {
        self.separator_char.chars().next().unwrap_or('-')
    }

    /// Create the configuration file at `path` (and its directory).
    ///
    /// An existing file is never overwritten: missing keys are added instead.
    pub fn init_at(path: &Path) -> AppResult<bool> {
        if let Some(dir) = path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir)?;
        }

        if path.exists() {
            migrate::add_missing_keys(path)?;
            return Ok(false);
        }

        let yaml = serde_yaml::to_string(&Config::default())?;
        fs::write(path, migrate::annotate(&yaml))?;
        Ok(true)
    }
}
