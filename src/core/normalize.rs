//! Raw record normalizer: resolves employee/job references and formats clock
//! times for display. Bad input degrades to placeholders, never to errors.

use crate::models::{DisplayTimeEntry, Employee, Job, TimeEntry};
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};

pub const UNKNOWN_EMPLOYEE: &str = "Unknown";
pub const UNKNOWN_JOB: &str = "Unknown Job";
pub const NO_TIME: &str = "--:--";

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

const TIME_FORMATS: &[&str] = &["%H:%M:%S", "%H:%M"];

pub fn normalize_entries(
    entries: &[TimeEntry],
    employees: &[Employee],
    jobs: &[Job],
) -> Vec<DisplayTimeEntry> {
    entries
        .iter()
        .map(|e| normalize_entry(e, employees, jobs))
        .collect()
}

pub fn normalize_entry(entry: &TimeEntry, employees: &[Employee], jobs: &[Job]) -> DisplayTimeEntry {
    let employee_name = employees
        .iter()
        .find(|emp| emp.id == entry.employee_id)
        .map(|emp| emp.name.clone())
        .unwrap_or_else(|| UNKNOWN_EMPLOYEE.to_string());

    let job_id = entry.job_id.clone().unwrap_or_default();
    let job_title = entry
        .job_id
        .as_deref()
        .and_then(|id| jobs.iter().find(|j| j.id == id))
        .map(|j| j.title.clone())
        .unwrap_or_else(|| UNKNOWN_JOB.to_string());

    DisplayTimeEntry {
        id: entry.id.clone(),
        employee_id: entry.employee_id.clone(),
        employee_name,
        job_id,
        job_title,
        date: parse_entry_date(&entry.date),
        raw_date: entry.date.clone(),
        clock_in: format_clock(entry.clock_in.as_deref()),
        clock_out: format_clock(entry.clock_out.as_deref()),
        break_minutes: entry.break_minutes,
        total_hours: entry.total_hours,
        status: entry.status,
        notes: entry.notes.clone(),
    }
}

/// `YYYY-MM-DD`, or the date part of a full timestamp.
pub fn parse_entry_date(raw: &str) -> Option<NaiveDate> {
    let s = raw.trim();
    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(d);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.date_naive());
    }
    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .map(|dt| dt.date())
}

/// Clock time as `HH:MM`, or [`NO_TIME`] when absent or unreadable.
///
/// Offsets are kept as written: `2026-01-05T08:00:00+01:00` shows `08:00`.
pub fn format_clock(value: Option<&str>) -> String {
    value
        .and_then(parse_clock)
        .map(|t| t.format("%H:%M").to_string())
        .unwrap_or_else(|| NO_TIME.to_string())
}

fn parse_clock(raw: &str) -> Option<NaiveTime> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.time());
    }

    // Postgres style "2026-01-05 08:00:00+00"
    if let Ok(dt) = DateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S%#z") {
        return Some(dt.time());
    }

    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .map(|dt| dt.time())
        .or_else(|| {
            TIME_FORMATS
                .iter()
                .find_map(|fmt| NaiveTime::parse_from_str(s, fmt).ok())
        })
}
