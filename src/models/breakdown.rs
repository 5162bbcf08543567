use chrono::NaiveDate;
use serde::Serialize;

/// Hours recorded on one day of the active week, split by status.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyBreakdown {
    pub date: NaiveDate,
    pub total_hours: f64,
    pub approved_hours: f64,
    pub pending_hours: f64,
    pub rejected_hours: f64,
    pub entry_count: usize,
}

impl DailyBreakdown {
    pub fn empty(date: NaiveDate) -> Self {
        Self {
            date,
            total_hours: 0.0,
            approved_hours: 0.0,
            pending_hours: 0.0,
            rejected_hours: 0.0,
            entry_count: 0,
        }
    }
}

/// Hours and labour cost of one employee over the active week.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmployeeBreakdown {
    pub employee_id: String,
    pub employee_name: String,
    pub total_hours: f64,
    pub cost: f64,
    pub entry_count: usize,
}
