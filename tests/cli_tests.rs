use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

mod common;
use common::{rts, scenario_dataset, temp_dataset, temp_out, write_dataset};

const WEEK: &str = "2026-01-07";

#[test]
fn test_init_creates_empty_dataset() {
    let data = temp_dataset("cli_init");

    rts()
        .args(["--data", &data, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Empty dataset created"));

    let content = fs::read_to_string(&data).expect("dataset written");
    assert!(content.contains("time_entries"));

    rts()
        .args(["--data", &data, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("already exists"));
}

#[test]
fn test_list_week() {
    let data = write_dataset("cli_list", &scenario_dataset());

    rts()
        .args(["--data", &data, "list", "--week", WEEK])
        .assert()
        .success()
        .stdout(contains("Alice Carter").and(contains("Ben Doyle")))
        .stdout(contains("Tesco Rewire"))
        .stdout(contains("3 of 3 entries shown"));
}

#[test]
fn test_list_status_filter() {
    let data = write_dataset("cli_list_status", &scenario_dataset());

    rts()
        .args(["--data", &data, "list", "--week", WEEK, "--status", "pending"])
        .assert()
        .success()
        .stdout(contains("Ben Doyle").and(contains("Alice Carter").not()))
        .stdout(contains("1 of 3 entries shown"));
}

#[test]
fn test_list_search_filter() {
    let data = write_dataset("cli_list_search", &scenario_dataset());

    rts()
        .args(["--data", &data, "list", "--week", WEEK, "-s", "eicr"])
        .assert()
        .success()
        .stdout(contains("School EICR").and(contains("Ben Doyle").not()));
}

#[test]
fn test_list_other_week_is_empty() {
    let data = write_dataset("cli_list_empty", &scenario_dataset());

    rts()
        .args(["--data", &data, "list", "--week", WEEK, "--offset", "-1"])
        .assert()
        .success()
        .stdout(contains("No time entries for this week"));
}

#[test]
fn test_huge_offset_fails_cleanly() {
    let data = write_dataset("cli_huge_offset", &scenario_dataset());

    rts()
        .args(["--data", &data, "list", "--week", WEEK, "--offset", "1000000000000"])
        .assert()
        .failure()
        .code(1)
        .stderr(contains("Error: Date out of range").and(contains("panicked").not()));
}

#[test]
fn test_invalid_status_fails() {
    let data = write_dataset("cli_bad_status", &scenario_dataset());

    rts()
        .args(["--data", &data, "list", "--week", WEEK, "--status", "done"])
        .assert()
        .failure()
        .stderr(contains("Invalid status"));
}

#[test]
fn test_summary() {
    let data = write_dataset("cli_summary", &scenario_dataset());

    rts()
        .args(["--data", &data, "summary", "--week", WEEK])
        .assert()
        .success()
        .stdout(contains("Total hours     : 18.00h"))
        .stdout(contains("Approved hours  : 12.00h"))
        .stdout(contains("Pending entries : 1"))
        .stdout(contains("By employee:"));
}

#[test]
fn test_approve_then_payroll() {
    let data = write_dataset("cli_approve", &scenario_dataset());

    rts()
        .args(["--data", &data, "payroll", "--week", WEEK])
        .assert()
        .success()
        .stdout(contains("Alice Carter").and(contains("Ben Doyle").not()));

    rts()
        .args(["--data", &data, "approve", "e3"])
        .assert()
        .success()
        .stdout(contains("1 time entries approved"));

    rts()
        .args(["--data", &data, "payroll", "--week", WEEK])
        .assert()
        .success()
        .stdout(contains("Ben Doyle"))
        .stdout(contains("2 employees"));

    rts()
        .args(["--data", &data, "approve", "e3"])
        .assert()
        .failure()
        .stderr(contains("already approved"));
}

#[test]
fn test_batch_with_unknown_id_changes_nothing() {
    let data = write_dataset("cli_batch_unknown", &scenario_dataset());
    let before = fs::read_to_string(&data).expect("read dataset");

    rts()
        .args(["--data", &data, "reject", "e3", "nope"])
        .assert()
        .failure()
        .stderr(contains("Time entry not found: nope"));

    assert_eq!(fs::read_to_string(&data).expect("read dataset"), before);
}

#[test]
fn test_review_filtered_pending() {
    let data = write_dataset("cli_review", &scenario_dataset());

    rts()
        .args([
            "--data", &data, "review", "--week", WEEK, "--employee", "emp-b", "--approve",
        ])
        .assert()
        .success()
        .stdout(contains("1 time entries approved"));

    rts()
        .args(["--data", &data, "review", "--week", WEEK, "--reject"])
        .assert()
        .success()
        .stdout(contains("No pending entries match the filters"));
}

#[test]
fn test_export_csv() {
    let data = write_dataset("cli_export_csv", &scenario_dataset());
    let out = temp_out("cli_export_csv", "csv");

    rts()
        .args([
            "--data", &data, "export", "--format", "csv", "--file", &out, "--week", WEEK,
            "--force",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("csv written");
    assert!(content.contains("Alice Carter"));
    assert!(content.contains("job-y"));
    assert!(!content.contains("Ben Doyle"));
}

#[test]
fn test_export_empty_week() {
    let data = write_dataset("cli_export_empty", &scenario_dataset());
    let out = temp_out("cli_export_empty", "json");

    rts()
        .args([
            "--data", &data, "export", "--format", "json", "--file", &out, "--week",
            "2025-12-01",
        ])
        .assert()
        .success()
        .stdout(contains("Nothing to export"));

    assert!(!std::path::Path::new(&out).exists());
}

#[test]
fn test_missing_dataset_fails() {
    let data = temp_dataset("cli_missing");

    rts()
        .args(["--data", &data, "list"])
        .assert()
        .failure()
        .stderr(contains("dataset not found"));
}
