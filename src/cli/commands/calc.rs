use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calculator::{classify_day, compute_duration};
use crate::errors::AppResult;
use crate::utils::colors::{RESET, color_for_status};
use crate::utils::formatting::{format_hours, hours2readable};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Calc { start, end } = cmd {
        let hours = compute_duration(start, end)?;
        let class = classify_day(hours);
        let d = cfg.decimals;

        println!(
            "Worked   : {} hours ({})",
            format_hours(hours, d),
            hours2readable(hours, false)
        );
        println!("Overtime : {} hours", format_hours(class.overtime, d));
        println!("Due      : {} hours", format_hours(class.due_time, d));
        println!(
            "Status   : {}{}{}",
            color_for_status(class.status),
            class.status,
            RESET
        );
    }
    Ok(())
}
