//! Console output of the CLI. Reports and confirmations go to stdout;
//! warnings and errors go to stderr so `--json` output stays parseable.

use crate::utils::colors::{BLUE, GREEN, RED, RESET, YELLOW};
use std::fmt;

const BOLD: &str = "\x1b[1m";
const RULE: &str = "======================";

#[derive(Clone, Copy)]
enum Level {
    Info,
    Success,
    Warning,
    Error,
}

impl Level {
    fn color(self) -> &'static str {
        match self {
            Level::Info => BLUE,
            Level::Success => GREEN,
            Level::Warning => YELLOW,
            Level::Error => RED,
        }
    }

    fn icon(self) -> &'static str {
        match self {
            Level::Info => "ℹ️",
            Level::Success => "✅",
            Level::Warning => "⚠️",
            Level::Error => "❌",
        }
    }
}

fn emit(level: Level, msg: impl fmt::Display) {
    let line = format!("{}{BOLD}{} {RESET}{msg}", level.color(), level.icon());
    match level {
        Level::Warning | Level::Error => eprintln!("{line}"),
        Level::Info | Level::Success => println!("{line}"),
    }
}

pub fn info<T: fmt::Display>(msg: T) {
    emit(Level::Info, msg);
}

pub fn success<T: fmt::Display>(msg: T) {
    emit(Level::Success, msg);
}

pub fn warning<T: fmt::Display>(msg: T) {
    emit(Level::Warning, msg);
}

pub fn error<T: fmt::Display>(msg: T) {
    emit(Level::Error, msg);
}

/// Title line above a timesheet table, e.g. "====================== Timesheet analysis (3 days)"
pub fn header<T: fmt::Display>(msg: T) {
    println!("{BLUE}{BOLD}{RULE} {msg}{RESET}\n");
}

/// Summary block printed under the totals of a timesheet.
pub fn summary<T: fmt::Display>(msg: T) {
    println!("\n{BOLD}📝 Summary{RESET}\n{msg}");
}
