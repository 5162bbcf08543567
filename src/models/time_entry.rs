use super::status::TimeEntryStatus;
use serde::{Deserialize, Serialize};

/// Raw time entry as stored by the time-entry provider.
///
/// Dates and clock timestamps are kept as the provider's strings; they are
/// only interpreted by the normalizer, which never fails on bad values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeEntry {
    pub id: String,
    pub employee_id: String,
    #[serde(default)]
    pub job_id: Option<String>,
    pub date: String,             // "YYYY-MM-DD"
    #[serde(default)]
    pub clock_in: Option<String>, // RFC 3339 or "HH:MM"
    #[serde(default)]
    pub clock_out: Option<String>,
    #[serde(default)]
    pub break_minutes: i32,
    #[serde(default)]
    pub total_hours: f64,
    pub status: TimeEntryStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl TimeEntry {
    /// Pending entry without clock times, mostly useful to build fixtures.
    pub fn new(
        id: &str,
        employee_id: &str,
        job_id: Option<&str>,
        date: &str,
        total_hours: f64,
        status: TimeEntryStatus,
    ) -> Self {
        Self {
            id: id.to_string(),
            employee_id: employee_id.to_string(),
            job_id: job_id.map(str::to_string),
            date: date.to_string(),
            clock_in: None,
            clock_out: None,
            break_minutes: 0,
            total_hours,
            status,
            notes: None,
        }
    }

    pub fn with_clock(mut self, clock_in: Option<&str>, clock_out: Option<&str>) -> Self {
        self.clock_in = clock_in.map(str::to_string);
        self.clock_out = clock_out.map(str::to_string);
        self
    }
}
