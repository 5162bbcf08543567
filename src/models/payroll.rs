use chrono::NaiveDate;
use serde::Serialize;

/// Hours and cost of one job inside a [`PayrollEntry`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JobBreakdown {
    pub job_id: String,
    pub job_title: String,
    pub hours: f64,
    pub cost: f64,
}

/// One employee's approved hours for a reporting period, ready for export.
/// Built fresh on every request; never stored.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PayrollEntry {
    pub employee_id: String,
    pub employee_name: String,
    pub regular_hours: f64,
    pub overtime_hours: f64,
    pub hourly_rate: f64,
    pub gross_pay: f64,
    pub period_start: NaiveDate,
    pub period_end: NaiveDate,
    pub job_breakdown: Vec<JobBreakdown>,
}

impl PayrollEntry {
    pub fn total_hours(&self) -> f64 {
        self.regular_hours + self.overtime_hours
    }
}
