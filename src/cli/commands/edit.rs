use crate::cli::commands::analyze::print_report;
use crate::cli::commands::{load_for_period, summarizer_for};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::input::save_entries;
use crate::core::session::TimesheetSession;
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::formatting::format_hours;
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Edit {
        file,
        day,
        start,
        end,
        write,
        summary,
        json,
    } = cmd
    {
        let entries = load_for_period(file, None)?;
        let mut session = TimesheetSession::computed(entries)?;

        let index = session.resolve_day(day)?;
        let record = session.edit_day(index, start, end)?;

        let msg = format!(
            "Day {} updated: {} → {} ({} hours, {})",
            record.date(),
            record.entry.start_time,
            record.entry.end_time,
            format_hours(record.working_hours, cfg.decimals),
            record.status
        );

        if *summary {
            let summarizer = summarizer_for(cfg)?;
            session.summarize(summarizer.as_ref())?;
        }

        if *write {
            save_entries(&expand_tilde(file), session.entries())?;
        }

        let report = session.report();
        if *json {
            println!("{}", serde_json::to_string_pretty(&report)?);
        } else {
            success(msg);
            if *write {
                success(format!("Entries saved to {file}"));
            }
            println!();
            print_report(&report, cfg);
        }
    }
    Ok(())
}
