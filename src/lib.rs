//! rTimesheet library root.
//! Exposes the hours calculator, the analysis pipeline, the CLI parser and
//! the high-level run() function.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod logging;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use std::path::Path;
use utils::path::expand_tilde;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config, config_path: &Path) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(config_path),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg, config_path),
        Commands::Calc { .. } => cli::commands::calc::handle(&cli.command, cfg),
        Commands::Analyze { .. } => cli::commands::analyze::handle(&cli.command, cfg),
        Commands::Edit { .. } => cli::commands::edit::handle(&cli.command, cfg),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg),
    }
}

/// Entry point usato da main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    let config_path = cli
        .config
        .as_deref()
        .map(expand_tilde)
        .unwrap_or_else(Config::config_file);

    // `init` must work even when the existing file is broken.
    let cfg = match (&cli.command, Config::load_from(&config_path)) {
        (_, Ok(cfg)) => cfg,
        (Commands::Init, Err(_)) => Config::default(),
        (_, Err(e)) => return Err(e),
    };

    logging::init(&cfg);

    dispatch(&cli, &cfg, &config_path)
}
