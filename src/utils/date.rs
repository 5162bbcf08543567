use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map_err(|_| AppError::InvalidDate(s.to_string()))
}

/// `--week` argument, or today when absent.
pub fn date_or_today(s: Option<&str>) -> AppResult<NaiveDate> {
    match s {
        Some(d) => parse_date(d),
        None => Ok(today()),
    }
}
