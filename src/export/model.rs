// src/export/model.rs

use crate::models::PayrollEntry;
use serde::Serialize;

/// Flat payroll line: one row per employee and job.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct PayrollExportRow {
    pub employee_id: String,
    pub employee_name: String,
    pub job_id: String,
    pub job_title: String,
    pub hours: f64,
    pub overtime_hours: f64,
    pub hourly_rate: f64,
    pub cost: f64,
    pub period_start: String,
    pub period_end: String,
}

/// Headers shared by CSV / XLSX / PDF, in [`PayrollExportRow`] field order.
pub(crate) fn get_headers() -> Vec<&'static str> {
    vec![
        "employee_id",
        "employee_name",
        "job_id",
        "job_title",
        "hours",
        "overtime_hours",
        "hourly_rate",
        "cost",
        "period_start",
        "period_end",
    ]
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

/// Expand payroll entries into job lines. Overtime is reported on the
/// employee's first line only.
pub fn payroll_rows(entries: &[PayrollEntry]) -> Vec<PayrollExportRow> {
    entries
        .iter()
        .flat_map(|p| {
            p.job_breakdown
                .iter()
                .enumerate()
                .map(move |(i, job)| PayrollExportRow {
                    employee_id: p.employee_id.clone(),
                    employee_name: p.employee_name.clone(),
                    job_id: job.job_id.clone(),
                    job_title: job.job_title.clone(),
                    hours: round2(job.hours),
                    overtime_hours: if i == 0 { round2(p.overtime_hours) } else { 0.0 },
                    hourly_rate: round2(p.hourly_rate),
                    cost: round2(job.cost),
                    period_start: p.period_start.format("%Y-%m-%d").to_string(),
                    period_end: p.period_end.format("%Y-%m-%d").to_string(),
                })
        })
        .collect()
}

pub(crate) fn row_to_cells(r: &PayrollExportRow) -> Vec<String> {
    vec![
        r.employee_id.clone(),
        r.employee_name.clone(),
        r.job_id.clone(),
        r.job_title.clone(),
        format!("{:.2}", r.hours),
        format!("{:.2}", r.overtime_hours),
        format!("{:.2}", r.hourly_rate),
        format!("{:.2}", r.cost),
        r.period_start.clone(),
        r.period_end.clone(),
    ]
}

pub(crate) fn rows_to_table(rows: &[PayrollExportRow]) -> Vec<Vec<String>> {
    rows.iter().map(row_to_cells).collect()
}

/// Grand totals aligned on the header columns.
pub(crate) fn totals_cells(entries: &[PayrollEntry]) -> Vec<String> {
    let hours: f64 = entries.iter().map(|p| p.regular_hours).sum();
    let overtime: f64 = entries.iter().map(|p| p.overtime_hours).sum();
    let gross: f64 = entries.iter().map(|p| p.gross_pay).sum();

    vec![
        "TOTAL".to_string(),
        format!("{} employees", entries.len()),
        String::new(),
        String::new(),
        format!("{hours:.2}"),
        format!("{overtime:.2}"),
        String::new(),
        format!("{gross:.2}"),
        String::new(),
        String::new(),
    ]
}
