//! Folds approved entries of a week into one payroll entry per employee.

use crate::core::rates::RateBook;
use crate::core::week::WeekWindow;
use crate::models::{DisplayTimeEntry, JobBreakdown, PayrollEntry};
use std::collections::HashMap;

/// Build payroll entries from the week-filtered list.
///
/// Only `Approved` entries dated inside `window` count. Employees and their
/// job rows keep first-seen order. An empty result means there is nothing to
/// export for the week.
pub fn build_payroll(
    entries: &[DisplayTimeEntry],
    window: &WeekWindow,
    rates: &RateBook,
) -> Vec<PayrollEntry> {
    let mut out: Vec<PayrollEntry> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    let approved = entries
        .iter()
        .filter(|e| e.status.is_approved() && e.date.is_some_and(|d| window.contains(d)));

    for e in approved {
        match index.get(e.employee_id.as_str()) {
            Some(&i) => {
                let payroll = &mut out[i];
                let cost = e.total_hours * payroll.hourly_rate;

                payroll.regular_hours += e.total_hours;
                payroll.gross_pay += cost;

                match payroll
                    .job_breakdown
                    .iter_mut()
                    .find(|j| j.job_id == e.job_id)
                {
                    Some(job) => {
                        job.hours += e.total_hours;
                        job.cost += cost;
                    }
                    None => payroll.job_breakdown.push(job_row(e, cost)),
                }
            }
            None => {
                let hourly_rate = rates.rate_for(&e.employee_id);
                let cost = e.total_hours * hourly_rate;

                index.insert(&e.employee_id, out.len());
                out.push(PayrollEntry {
                    employee_id: e.employee_id.clone(),
                    employee_name: e.employee_name.clone(),
                    regular_hours: e.total_hours,
                    overtime_hours: 0.0,
                    hourly_rate,
                    gross_pay: cost,
                    period_start: window.start,
                    period_end: window.end,
                    job_breakdown: vec![job_row(e, cost)],
                });
            }
        }
    }

    out
}

fn job_row(e: &DisplayTimeEntry, cost: f64) -> JobBreakdown {
    JobBreakdown {
        job_id: e.job_id.clone(),
        job_title: e.job_title.clone(),
        hours: e.total_hours,
        cost,
    }
}
