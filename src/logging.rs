//! Diagnostic logging on stderr via `tracing`.
//!
//! The filter comes from `RTIMESHEET_LOG` (e.g. `RTIMESHEET_LOG=debug`),
//! falling back to the `log_level` config key.

use crate::config::Config;
use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "RTIMESHEET_LOG";

pub fn init(cfg: &Config) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(&cfg.log_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    // a second init (tests, embedding) keeps the first subscriber
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
