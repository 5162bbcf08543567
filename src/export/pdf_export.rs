// src/export/pdf_export.rs

use crate::errors::{AppError, AppResult};
use crate::export::model::{PayrollExportRow, get_headers, rows_to_table, totals_cells};
use crate::export::notify_export_success;
use crate::export::pdf::PdfTable;
use crate::models::PayrollEntry;
use crate::ui::messages::info;
use std::path::Path;

pub(crate) fn export_pdf(
    rows: &[PayrollExportRow],
    entries: &[PayrollEntry],
    period_start: &str,
    period_end: &str,
    path: &Path,
) -> AppResult<()> {
    info(format!("Exporting to PDF: {}", path.display()));

    let title = format!("Payroll {period_start} to {period_end}");
    let subtitle = format!(
        "{} employees, approved entries only. Generated {}",
        entries.len(),
        chrono::Local::now().format("%Y-%m-%d %H:%M")
    );

    let mut pdf = PdfTable::new();
    pdf.write_table(
        &title,
        &subtitle,
        &get_headers(),
        &rows_to_table(rows),
        Some(&totals_cells(entries)),
    );

    pdf.save(path)
        .map_err(|e| AppError::Export(format!("PDF export error: {e}")))?;

    notify_export_success("PDF", path);
    Ok(())
}
