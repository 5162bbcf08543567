//! Summary statistics and breakdowns for the active week.

use crate::core::rates::RateBook;
use crate::core::week::WeekWindow;
use crate::models::{
    DailyBreakdown, DisplayTimeEntry, EmployeeBreakdown, TimeEntryStatus, TimesheetSummary,
};
use std::collections::HashMap;

/// Lowest value used to scale the daily chart.
pub const MIN_CHART_HOURS: f64 = 8.0;

/// Totals over `entries` (normally the facet-filtered list).
pub fn summarize(entries: &[DisplayTimeEntry], rates: &RateBook) -> TimesheetSummary {
    entries
        .iter()
        .fold(TimesheetSummary::default(), |mut acc, e| {
            let cost = rates.cost(&e.employee_id, e.total_hours);

            acc.total_hours += e.total_hours;
            acc.total_labour_cost += cost;

            match e.status {
                TimeEntryStatus::Approved => {
                    acc.approved_hours += e.total_hours;
                    acc.approved_labour_cost += cost;
                }
                TimeEntryStatus::Pending => acc.pending_count += 1,
                TimeEntryStatus::Rejected => {}
            }

            acc
        })
}

/// One row per day of `window`, Monday first. Entries outside the window are ignored.
pub fn daily_breakdown(window: &WeekWindow, entries: &[DisplayTimeEntry]) -> Vec<DailyBreakdown> {
    window
        .days()
        .into_iter()
        .map(|day| {
            entries
                .iter()
                .filter(|e| e.date == Some(day))
                .fold(DailyBreakdown::empty(day), |mut acc, e| {
                    acc.total_hours += e.total_hours;
                    acc.entry_count += 1;
                    match e.status {
                        TimeEntryStatus::Approved => acc.approved_hours += e.total_hours,
                        TimeEntryStatus::Pending => acc.pending_hours += e.total_hours,
                        TimeEntryStatus::Rejected => acc.rejected_hours += e.total_hours,
                    }
                    acc
                })
        })
        .collect()
}

/// Largest daily total, never below `floor`.
pub fn max_daily_hours(days: &[DailyBreakdown], floor: f64) -> f64 {
    days.iter().map(|d| d.total_hours).fold(floor, f64::max)
}

/// Hours and cost per employee, in first-seen order. Employees without
/// entries do not appear.
pub fn employee_breakdown(entries: &[DisplayTimeEntry], rates: &RateBook) -> Vec<EmployeeBreakdown> {
    let mut out: Vec<EmployeeBreakdown> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for e in entries {
        let cost = rates.cost(&e.employee_id, e.total_hours);

        match index.get(e.employee_id.as_str()) {
            Some(&i) => {
                let row = &mut out[i];
                row.total_hours += e.total_hours;
                row.cost += cost;
                row.entry_count += 1;
            }
            None => {
                index.insert(&e.employee_id, out.len());
                out.push(EmployeeBreakdown {
                    employee_id: e.employee_id.clone(),
                    employee_name: e.employee_name.clone(),
                    total_hours: e.total_hours,
                    cost,
                    entry_count: 1,
                });
            }
        }
    }

    out
}
