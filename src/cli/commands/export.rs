use crate::cli::commands::{load_for_period, summarizer_for};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::analysis::Analyzer;
use crate::errors::AppResult;
use crate::export::{ExportFormat, ExportLogic, build_title};
use crate::models::AnalysisReport;
use crate::ui::messages::warning;
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        input,
        format,
        file,
        range,
        summary,
        force,
    } = cmd
    {
        let format = ExportFormat::parse(format)?;
        let entries = load_for_period(input, range.as_deref())?;

        if entries.is_empty() && range.is_some() {
            warning("No entries found for selected range.");
            return Ok(());
        }

        let report = if *summary {
            let summarizer = summarizer_for(cfg)?;
            Analyzer::run(&entries, summarizer.as_ref())?
        } else {
            AnalysisReport::new(Analyzer::compute(&entries)?, None)
        };

        let title = build_title(range.as_deref());
        let source = expand_tilde(input);
        ExportLogic::export(
            &report,
            format,
            file,
            Some(&source),
            &title,
            cfg.decimals,
            *force,
        )?;
    }
    Ok(())
}
