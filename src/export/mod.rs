// src/export/mod.rs

mod excel_date;
mod fs_utils;
mod json_csv;
pub mod logic;
mod model;
mod pdf;
mod pdf_export;
mod xlsx;

pub use logic::export_payroll;
pub use model::{PayrollExportRow, payroll_rows};

use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;

/// Common completion message for every export format.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}

/// Target of a payroll export.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportProvider {
    Csv,
    Json,
    Xlsx,
    Pdf,
}

impl ExportProvider {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportProvider::Csv => "csv",
            ExportProvider::Json => "json",
            ExportProvider::Xlsx => "xlsx",
            ExportProvider::Pdf => "pdf",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ExportProvider::Csv => "CSV",
            ExportProvider::Json => "JSON",
            ExportProvider::Xlsx => "XLSX",
            ExportProvider::Pdf => "PDF",
        }
    }
}
