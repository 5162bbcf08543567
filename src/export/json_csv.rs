// src/export/json_csv.rs

use crate::errors::AppResult;
use crate::export::model::PayrollExportRow;
use crate::export::notify_export_success;
use crate::models::PayrollEntry;
use crate::ui::messages::info;
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::Path;

#[derive(Serialize)]
struct PayrollDocument<'a> {
    period_start: &'a str,
    period_end: &'a str,
    employee_count: usize,
    total_hours: f64,
    total_gross_pay: f64,
    entries: &'a [PayrollEntry],
}

/// Pretty-printed JSON document with period, totals and full entries.
pub(crate) fn export_json(
    entries: &[PayrollEntry],
    period_start: &str,
    period_end: &str,
    path: &Path,
) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));

    let doc = PayrollDocument {
        period_start,
        period_end,
        employee_count: entries.len(),
        total_hours: entries.iter().map(PayrollEntry::total_hours).sum(),
        total_gross_pay: entries.iter().map(|p| p.gross_pay).sum(),
        entries,
    };

    let json_data = serde_json::to_string_pretty(&doc)?;

    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;

    notify_export_success("JSON", path);
    Ok(())
}

/// CSV with one line per employee/job (header from serde).
pub(crate) fn export_csv(rows: &[PayrollExportRow], path: &Path) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    let mut wtr = csv::Writer::from_path(path)?;
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;

    notify_export_success("CSV", path);
    Ok(())
}
