// src/export/logic.rs

use crate::errors::{AppError, AppResult};
use crate::export::ExportProvider;
use crate::export::fs_utils::{ensure_absolute, ensure_writable};
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::payroll_rows;
use crate::export::pdf_export::export_pdf;
use crate::export::xlsx::export_xlsx;
use crate::models::PayrollEntry;
use std::path::Path;

/// Export payroll entries for one period.
///
/// - `provider`: csv | json | xlsx | pdf
/// - `entries`: output of the payroll builder for the period
/// - `file`: absolute path of the output file
/// - `force`: overwrite an existing file without asking
///
/// An empty `entries` list is reported as [`AppError::NothingToExport`]
/// and no file is written.
pub fn export_payroll(
    provider: ExportProvider,
    entries: &[PayrollEntry],
    period_start: &str,
    period_end: &str,
    file: &str,
    force: bool,
) -> AppResult<()> {
    if entries.is_empty() {
        return Err(AppError::NothingToExport(
            period_start.to_string(),
            period_end.to_string(),
        ));
    }

    let path = Path::new(file);
    ensure_absolute(path)?;
    ensure_writable(path, force)?;

    let rows = payroll_rows(entries);

    tracing::info!(
        provider = provider.as_str(),
        employees = entries.len(),
        lines = rows.len(),
        period_start,
        period_end,
        "exporting payroll"
    );

    match provider {
        ExportProvider::Csv => export_csv(&rows, path),
        ExportProvider::Json => export_json(entries, period_start, period_end, path),
        ExportProvider::Xlsx => export_xlsx(&rows, entries, period_start, path),
        ExportProvider::Pdf => export_pdf(&rows, entries, period_start, period_end, path),
    }
}
