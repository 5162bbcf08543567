use super::status::TimeEntryStatus;
use chrono::NaiveDate;
use serde::Serialize;

/// Read-only projection of a [`TimeEntry`](super::TimeEntry) with resolved
/// employee and job names. Rebuilt from its sources on every pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplayTimeEntry {
    pub id: String,
    pub employee_id: String,
    pub employee_name: String,
    pub job_id: String,
    pub job_title: String,
    pub date: Option<NaiveDate>, // None when the raw date is malformed
    pub raw_date: String,
    pub clock_in: String,  // "HH:MM" or "--:--"
    pub clock_out: String, // "HH:MM" or "--:--"
    pub break_minutes: i32,
    pub total_hours: f64,
    pub status: TimeEntryStatus,
    pub notes: Option<String>,
}

impl DisplayTimeEntry {
    pub fn date_label(&self) -> String {
        match self.date {
            Some(d) => d.format("%Y-%m-%d").to_string(),
            None => self.raw_date.clone(),
        }
    }

    pub fn weekday_label(&self) -> String {
        self.date
            .map(|d| d.format("%a").to_string())
            .unwrap_or_else(|| "---".to_string())
    }
}
