#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use rtimesheet::models::RawEntry;
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rts() -> Command {
    cargo_bin_cmd!("rtimesheet")
}

/// Command with an isolated (non-existing) config file, so defaults apply.
pub fn rts_isolated(name: &str) -> Command {
    let mut cmd = rts();
    cmd.args(["--config", &temp_config(name)]);
    cmd.env_remove("RTIMESHEET_LOG");
    cmd
}

/// Unique config path inside the system temp dir; any existing file is removed
pub fn temp_config(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rtimesheet.conf", name));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rtimesheet_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Write an input file with the given raw content and return its path
pub fn write_input(name: &str, ext: &str, content: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rtimesheet_in.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::write(&p, content).expect("write input file");
    p
}

/// Three days: 9h (OK), 11h (Overtime), 5h (Missing)
pub fn sample_json() -> &'static str {
    r#"{
  "entries": [
    { "date": "2024-01-01", "startTime": "09:00", "endTime": "18:00" },
    { "date": "2024-01-02", "startTime": "09:00", "endTime": "20:00" },
    { "date": "2024-01-03", "startTime": "10:00", "endTime": "15:00" }
  ]
}"#
}

pub fn entry(date: &str, start: &str, end: &str) -> RawEntry {
    RawEntry::new(date, start, end)
}

pub fn sample_entries() -> Vec<RawEntry> {
    vec![
        entry("2024-01-01", "09:00", "18:00"),
        entry("2024-01-02", "09:00", "20:00"),
        entry("2024-01-03", "10:00", "15:00"),
    ]
}
