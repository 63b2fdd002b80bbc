mod common;
use common::{rts, rts_isolated, sample_json, temp_config, temp_out, write_input};
use predicates::str::contains;
use serde_json::Value;
use std::fs;

#[test]
fn test_export_csv_rows() {
    let input = write_input("export_csv", "json", sample_json());
    let out = temp_out("export_csv", "csv");

    rts_isolated("export_csv")
        .args(["export", &input, "--format", "csv", "--file", &out])
        .assert()
        .success()
        .stdout(contains("CSV export completed"));

    let content = fs::read_to_string(&out).expect("read exported csv");
    let mut lines = content.lines();
    assert_eq!(
        lines.next(),
        Some("date,startTime,endTime,workingHours,overtime,dueTime,status")
    );
    assert_eq!(lines.next(), Some("2024-01-01,09:00,18:00,9.0,0.0,0.0,OK"));
    assert_eq!(lines.next(), Some("2024-01-02,09:00,20:00,11.0,2.0,0.0,Overtime"));
    assert_eq!(lines.next(), Some("2024-01-03,10:00,15:00,5.0,0.0,4.0,Missing"));
    assert_eq!(lines.next(), None);
}

#[test]
fn test_export_csv_strips_padded_times() {
    let input = write_input(
        "export_padded",
        "json",
        r#"[{"date":"2024-01-06","startTime":" 9:00 ","endTime":" 18:00"}]"#,
    );
    let out = temp_out("export_padded", "csv");

    rts_isolated("export_padded")
        .args(["export", &input, "--format", "csv", "--file", &out])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    assert!(content.contains("2024-01-06,9:00,18:00,9.0,0.0,0.0,OK"));
}

#[test]
fn test_export_json_with_summary() {
    let input = write_input("export_json", "json", sample_json());
    let out = temp_out("export_json", "json");

    rts_isolated("export_json")
        .args([
            "export", &input, "--format", "json", "--file", &out, "--summary",
        ])
        .assert()
        .success();

    let v: Value = serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(v["totalHours"], 25.0);
    assert_eq!(v["totalWorkingDays"], 3);
    assert!(
        v["summary"]
            .as_str()
            .is_some_and(|s| s.starts_with("You worked 25 hours"))
    );
}

#[test]
fn test_export_json_range() {
    let input = write_input("export_json_range", "json", sample_json());
    let out = temp_out("export_json_range", "json");

    rts_isolated("export_json_range")
        .args([
            "export",
            &input,
            "--format",
            "json",
            "--file",
            &out,
            "--range",
            "2024-01-02:2024-01-03",
        ])
        .assert()
        .success();

    let v: Value = serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(v["totalWorkingDays"], 2);
    assert_eq!(v["totalHours"], 16.0);
    assert_eq!(v["totalRequiredHours"], 18.0);
}

#[test]
fn test_export_xlsx_and_pdf_files() {
    let input = write_input("export_binary", "json", sample_json());

    let xlsx = temp_out("export_binary", "xlsx");
    rts_isolated("export_xlsx")
        .args([
            "export", &input, "--format", "xlsx", "--file", &xlsx, "--summary",
        ])
        .assert()
        .success();
    let bytes = fs::read(&xlsx).expect("xlsx written");
    assert!(bytes.starts_with(b"PK"));

    let pdf = temp_out("export_binary", "pdf");
    rts_isolated("export_pdf")
        .args([
            "export", &input, "--format", "pdf", "--file", &pdf, "--range", "2024-01", "--summary",
        ])
        .assert()
        .success();
    let bytes = fs::read(&pdf).expect("pdf written");
    assert!(bytes.starts_with(b"%PDF"));
    let text = String::from_utf8_lossy(&bytes);
    assert!(text.contains("Timesheet report for January 2024"));
}

#[test]
fn test_export_invalid_format_fails() {
    let input = write_input("export_invalid_format", "json", sample_json());
    let out = temp_out("export_invalid_format", "xml");

    rts_isolated("export_invalid_format")
        .args(["export", &input, "--format", "xml", "--file", &out])
        .assert()
        .failure()
        .stderr(contains("Export format not supported: xml"));
}

#[test]
fn test_export_non_absolute_path_fails() {
    let input = write_input("export_non_abs", "json", sample_json());

    rts_isolated("export_non_abs")
        .args(["export", &input, "--format", "csv", "--file", "relative_out.csv"])
        .assert()
        .failure()
        .stderr(contains("Output file path must be absolute"));
}

#[test]
fn test_export_force_overwrite() {
    let input = write_input("export_force", "json", sample_json());
    let out = temp_out("export_force", "csv");
    fs::write(&out, "OLD_CONTENT").expect("create file");

    rts_isolated("export_force")
        .args(["export", &input, "--format", "csv", "--file", &out, "--force"])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    assert_ne!(content, "OLD_CONTENT");
    assert!(content.starts_with("date,startTime"));
}

#[test]
fn test_export_cancel_overwrite_keeps_file() {
    let input = write_input("export_cancel", "json", sample_json());
    let out = temp_out("export_cancel", "json");
    fs::write(&out, "ORIGINAL").expect("create file");

    rts_isolated("export_cancel")
        .args(["export", &input, "--format", "json", "--file", &out])
        .write_stdin("n\n")
        .assert()
        .failure()
        .stderr(contains("Export cancelled"));

    assert_eq!(fs::read_to_string(&out).unwrap(), "ORIGINAL");
}

#[test]
fn test_export_never_overwrites_entries_file() {
    let input = write_input("export_onto_input", "json", sample_json());

    rts_isolated("export_onto_input")
        .args(["export", &input, "--format", "json", "--file", &input, "--force"])
        .assert()
        .failure()
        .stderr(contains("Refusing to overwrite the timesheet entries file"));

    assert_eq!(fs::read_to_string(&input).unwrap(), sample_json());
}

#[cfg(unix)]
#[test]
fn test_export_pdf_summary_uses_win_ansi_text() {
    let script = write_input(
        "pdf_summary_script",
        "sh",
        "cat >/dev/null\nprintf '%s\\n' 'Week → done' 'café “ok”' 'Ωmega'\n",
    );
    let cfg = temp_config("pdf_summary_text");
    fs::write(&cfg, format!("summary_command: sh {script}\n")).expect("write config");

    let input = write_input("pdf_summary_text", "json", sample_json());
    let pdf = temp_out("pdf_summary_text", "pdf");

    rts()
        .args([
            "--config", &cfg, "export", &input, "--format", "pdf", "--file", &pdf, "--summary",
        ])
        .assert()
        .success();

    let bytes = fs::read(&pdf).expect("pdf written");
    let text = String::from_utf8_lossy(&bytes);
    assert!(text.contains("/WinAnsiEncoding"));
    assert!(text.contains("(Week -> done)"));
    // café “ok” in WinAnsi, written as a hex string
    assert!(text.contains("<636166E920936F6B94>"));
    assert!(text.contains("(?mega)"));
    assert!(!text.contains("→"));
}
