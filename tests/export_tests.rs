mod common;
use common::{date, rates, scenario_display, temp_out};
use rtimesheet::core::payroll::build_payroll;
use rtimesheet::core::week::WeekWindow;
use rtimesheet::errors::AppError;
use rtimesheet::export::{ExportProvider, export_payroll, payroll_rows};
use rtimesheet::models::PayrollEntry;
use std::fs;

fn scenario_payroll() -> Vec<PayrollEntry> {
    let window = WeekWindow::containing(date("2026-01-05"));
    build_payroll(&scenario_display(), &window, &rates())
}

#[test]
fn test_rows_one_per_job() {
    let rows = payroll_rows(&scenario_payroll());

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].job_title, "Tesco Rewire");
    assert_eq!(rows[0].cost, 240.0);
    assert_eq!(rows[1].job_id, "job-y");
    assert_eq!(rows[1].period_end, "2026-01-11");
}

#[test]
fn test_export_csv() {
    let out = temp_out("export_csv", "csv");
    export_payroll(ExportProvider::Csv, &scenario_payroll(), "2026-01-05", "2026-01-11", &out, true)
        .expect("csv export");

    let content = fs::read_to_string(&out).expect("read exported csv");
    let mut lines = content.lines();
    assert!(lines.next().expect("header").starts_with("employee_id,employee_name,job_id"));
    assert!(content.contains("Alice Carter"));
    assert!(content.contains("School EICR"));
    assert_eq!(content.lines().count(), 3);
}

#[test]
fn test_export_json() {
    let out = temp_out("export_json", "json");
    export_payroll(ExportProvider::Json, &scenario_payroll(), "2026-01-05", "2026-01-11", &out, true)
        .expect("json export");

    let value: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&out).expect("read json")).expect("parse json");
    assert_eq!(value["period_start"], "2026-01-05");
    assert_eq!(value["employee_count"], 1);
    assert_eq!(value["entries"][0]["regular_hours"], 12.0);
    assert_eq!(value["entries"][0]["job_breakdown"].as_array().map(Vec::len), Some(2));
}

#[test]
fn test_export_xlsx_and_pdf_write_files() {
    for (provider, ext, magic) in [
        (ExportProvider::Xlsx, "xlsx", &b"PK"[..]),
        (ExportProvider::Pdf, "pdf", &b"%PDF"[..]),
    ] {
        let out = temp_out(&format!("export_binary_{ext}"), ext);
        export_payroll(provider, &scenario_payroll(), "2026-01-05", "2026-01-11", &out, true)
            .expect("binary export");

        let bytes = fs::read(&out).expect("read export");
        assert!(bytes.starts_with(magic), "{ext} header");
    }
}

#[test]
fn test_pdf_export_paginates_long_tables() {
    let base = scenario_payroll();
    let many: Vec<PayrollEntry> = (0..120)
        .map(|i| {
            let mut p = base[0].clone();
            p.employee_id = format!("emp-{i}");
            p.employee_name = format!("Électricien {i}");
            p
        })
        .collect();

    let out = temp_out("export_pdf_long", "pdf");
    export_payroll(ExportProvider::Pdf, &many, "2026-01-05", "2026-01-11", &out, true)
        .expect("pdf export");

    let bytes = fs::read(&out).expect("read pdf");
    let text = String::from_utf8_lossy(&bytes);
    // page tree plus at least two pages
    assert!(text.matches("/Type /Page").count() >= 3);
}

#[test]
fn test_empty_payroll_is_nothing_to_export() {
    let out = temp_out("export_empty", "csv");
    let err = export_payroll(ExportProvider::Csv, &[], "2026-01-05", "2026-01-11", &out, true)
        .unwrap_err();

    assert!(matches!(err, AppError::NothingToExport(..)));
    assert!(!std::path::Path::new(&out).exists());
}

#[test]
fn test_relative_path_is_rejected() {
    let err = export_payroll(
        ExportProvider::Csv,
        &scenario_payroll(),
        "2026-01-05",
        "2026-01-11",
        "relative.csv",
        true,
    )
    .unwrap_err();

    assert!(err.to_string().contains("must be absolute"));
}
