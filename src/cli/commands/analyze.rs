use crate::cli::commands::{load_for_period, summarizer_for};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::analysis::Analyzer;
use crate::errors::AppResult;
use crate::models::{AnalysisReport, DayStatus};
use crate::ui::messages::{header, summary, warning};
use crate::utils::colors::{RESET, color_for_balance, color_for_hours, color_for_status};
use crate::utils::date::weekday_label;
use crate::utils::formatting::{format_hours, hours2readable, plural};
use crate::utils::table::{Cell, Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Analyze {
        file,
        period,
        summary: with_summary,
        json,
    } = cmd
    {
        let entries = load_for_period(file, period.as_deref())?;

        if entries.is_empty() && period.is_some() {
            warning("No entries found for selected period.");
            return Ok(());
        }

        let report = if *with_summary {
            let summarizer = summarizer_for(cfg)?;
            Analyzer::run(&entries, summarizer.as_ref())?
        } else {
            AnalysisReport::new(Analyzer::compute(&entries)?, None)
        };

        if *json {
            println!("{}", serde_json::to_string_pretty(&report)?);
        } else {
            print_report(&report, cfg);
        }
    }
    Ok(())
}

/// Per-day table, stat totals and (if present) the summary.
pub(crate) fn print_report(report: &AnalysisReport, cfg: &Config) {
    let d = cfg.decimals;
    let t = report.totals();

    header(format!(
        "Timesheet analysis ({})",
        plural(t.total_working_days, "day", "days")
    ));

    let show_weekday = !cfg.show_weekday.eq_ignore_ascii_case("none");

    let mut columns = vec![Column::new("#"), Column::new("DATE")];
    if show_weekday {
        columns.push(Column::new("DAY"));
    }
    for h in ["IN", "OUT", "WORKED", "OVERTIME", "DUE", "STATUS"] {
        columns.push(Column::new(h));
    }

    let mut table = Table::new(columns, cfg.separator());

    for (i, day) in report.days().iter().enumerate() {
        let mut row: Vec<Cell> = vec![(i + 1).to_string().into(), day.date().into()];
        if show_weekday {
            row.push(
                weekday_label(day.date(), &cfg.show_weekday)
                    .unwrap_or_default()
                    .into(),
            );
        }
        row.push(day.entry.start_time.as_str().into());
        row.push(day.entry.end_time.as_str().into());
        row.push(format!("{}h", format_hours(day.working_hours, d)).into());
        row.push(Cell::colored(
            format!("{}h", format_hours(day.overtime, d)),
            color_for_hours(day.overtime),
        ));
        row.push(Cell::colored(
            format!("{}h", format_hours(day.due_time, d)),
            color_for_hours(day.due_time),
        ));
        row.push(Cell::colored(day.status.as_str(), color_for_status(day.status)));

        table.add_row(row);
    }

    print!("{}", table.render());
    println!();

    let balance = t.balance();
    println!("Total worked hours : {} hours", format_hours(t.total_hours, d));
    println!(
        "Total required     : {} hours",
        format_hours(t.total_required_hours, d)
    );
    println!(
        "Overtime           : {} hours",
        format_hours(t.overtime_hours, d)
    );
    println!(
        "Missing            : {} hours",
        format_hours(t.missing_hours, d)
    );
    println!("Working days       : {}", t.total_working_days);
    println!(
        "Balance            : {}{}{}",
        color_for_balance(balance),
        hours2readable(balance, true),
        RESET
    );
    println!(
        "Days               : {} OK, {} overtime, {} missing",
        report.payload.count_status(DayStatus::Ok),
        report.payload.count_status(DayStatus::Overtime),
        report.payload.count_status(DayStatus::Missing)
    );

    if let Some(text) = &report.summary {
        summary(textwrap::fill(text, 80));
    }
}
