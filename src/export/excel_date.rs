// src/export/excel_date.rs

use chrono::NaiveDate;

/// Excel serial number for a `YYYY-MM-DD` string.
pub(crate) fn date_to_excel_serial(s: &str) -> Option<f64> {
    let d = NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()?;
    let excel_epoch = NaiveDate::from_ymd_opt(1899, 12, 30)?;
    Some((d - excel_epoch).num_days() as f64)
}
