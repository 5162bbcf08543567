#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::NaiveDate;
use rtimesheet::core::normalize::normalize_entries;
use rtimesheet::core::rates::RateBook;
use rtimesheet::data::Dataset;
use rtimesheet::models::{
    DisplayTimeEntry, Employee, EmployeeStatus, Job, TimeEntry, TimeEntryStatus,
};
use std::env;
use std::fs;
use std::path::PathBuf;

pub const EPS: f64 = 1e-9;

pub fn rts() -> Command {
    cargo_bin_cmd!("rtimesheet")
}

pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("valid test date")
}

/// Unique dataset path inside the system temp dir; any previous file is removed
pub fn temp_dataset(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rtimesheet.json", name));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Temporary output file path inside tempdir, removed if present
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rtimesheet_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

pub fn employees() -> Vec<Employee> {
    let mut inactive = Employee::new("emp-c", "Carl Evans", Some(40.0));
    inactive.status = EmployeeStatus::Inactive;

    vec![
        Employee::new("emp-a", "Alice Carter", Some(30.0)),
        Employee::new("emp-b", "Ben Doyle", None),
        inactive,
    ]
}

pub fn jobs() -> Vec<Job> {
    vec![
        Job::new("job-x", "Tesco Rewire"),
        Job::new("job-y", "School EICR"),
    ]
}

/// The three-entry week starting Monday 2026-01-05.
pub fn scenario_entries() -> Vec<TimeEntry> {
    vec![
        TimeEntry::new("e1", "emp-a", Some("job-x"), "2026-01-05", 8.0, TimeEntryStatus::Approved)
            .with_clock(Some("2026-01-05T08:00:00+00:00"), Some("2026-01-05T16:30:00+00:00")),
        TimeEntry::new("e2", "emp-a", Some("job-y"), "2026-01-06", 4.0, TimeEntryStatus::Approved)
            .with_clock(Some("08:00"), Some("12:00")),
        TimeEntry::new("e3", "emp-b", Some("job-x"), "2026-01-05", 6.0, TimeEntryStatus::Pending)
            .with_clock(None, Some("2026-01-05T15:00:00Z")),
    ]
}

pub fn scenario_dataset() -> Dataset {
    Dataset {
        employees: employees(),
        jobs: jobs(),
        time_entries: scenario_entries(),
    }
}

pub fn scenario_display() -> Vec<DisplayTimeEntry> {
    normalize_entries(&scenario_entries(), &employees(), &jobs())
}

pub fn rates() -> RateBook {
    RateBook::new(&employees(), 25.0)
}

pub fn write_dataset(name: &str, dataset: &Dataset) -> String {
    let path = temp_dataset(name);
    fs::write(&path, serde_json::to_string_pretty(dataset).expect("serialize dataset"))
        .expect("write dataset");
    path
}

/// Deterministic spread of entries over three weeks around 2026-01-05,
/// hours in quarter steps so sums stay exact.
pub fn spread_entries() -> Vec<TimeEntry> {
    let statuses = [
        TimeEntryStatus::Approved,
        TimeEntryStatus::Pending,
        TimeEntryStatus::Rejected,
    ];
    let emps = ["emp-a", "emp-b", "emp-x"];
    let job_ids = [Some("job-x"), Some("job-y"), None, Some("job-gone")];

    (0..60)
        .map(|i| {
            let day = date("2025-12-29") + chrono::Duration::days((i * 5 % 21) as i64);
            TimeEntry::new(
                &format!("s{i}"),
                emps[i % emps.len()],
                job_ids[i % job_ids.len()],
                &day.format("%Y-%m-%d").to_string(),
                (1 + i % 36) as f64 * 0.25,
                statuses[(i / 3) % statuses.len()],
            )
        })
        .collect()
}
