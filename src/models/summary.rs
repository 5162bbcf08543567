use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TimesheetSummary {
    pub total_hours: f64,
    pub approved_hours: f64,
    pub pending_count: usize,
    pub total_labour_cost: f64,
    pub approved_labour_cost: f64,
}
