//! Multi-facet filter over the week's entries. All active criteria must match.

use crate::errors::{AppError, AppResult};
use crate::models::{DisplayTimeEntry, TimeEntryStatus};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Sentinel accepted on the command line for "no filter".
pub const ALL: &str = "all";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EmployeeFilter {
    #[default]
    All,
    Only(String),
}

impl EmployeeFilter {
    pub fn matches(&self, employee_id: &str) -> bool {
        match self {
            EmployeeFilter::All => true,
            EmployeeFilter::Only(id) => id == employee_id,
        }
    }
}

impl FromStr for EmployeeFilter {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() || s.eq_ignore_ascii_case(ALL) {
            Ok(EmployeeFilter::All)
        } else {
            Ok(EmployeeFilter::Only(s.to_string()))
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatusFilter {
    #[default]
    All,
    Only(TimeEntryStatus),
}

impl StatusFilter {
    pub fn matches(&self, status: TimeEntryStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(s) => *s == status,
        }
    }
}

impl FromStr for StatusFilter {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case(ALL) {
            Ok(StatusFilter::All)
        } else {
            TimeEntryStatus::parse(s).map(StatusFilter::Only)
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Case-insensitive substring of the employee name or job title.
    pub search: String,
    pub employee: EmployeeFilter,
    pub status: StatusFilter,
    pub day: Option<NaiveDate>,
}

impl FilterCriteria {
    pub fn from_args(
        search: Option<&str>,
        employee: Option<&str>,
        status: Option<&str>,
        day: Option<&str>,
    ) -> AppResult<Self> {
        let day = match day {
            Some(d) if !d.trim().eq_ignore_ascii_case(ALL) => Some(
                NaiveDate::parse_from_str(d.trim(), "%Y-%m-%d")
                    .map_err(|_| AppError::InvalidDate(d.to_string()))?,
            ),
            _ => None,
        };

        Ok(Self {
            search: search.unwrap_or_default().to_string(),
            employee: employee.map(str::parse).transpose()?.unwrap_or_default(),
            status: status.map(str::parse).transpose()?.unwrap_or_default(),
            day,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.search.is_empty()
            && self.employee == EmployeeFilter::All
            && self.status == StatusFilter::All
            && self.day.is_none()
    }

    pub fn matches(&self, entry: &DisplayTimeEntry) -> bool {
        self.matches_search(entry)
            && self.employee.matches(&entry.employee_id)
            && self.status.matches(entry.status)
            && self.day.is_none_or(|d| entry.date == Some(d))
    }

    fn matches_search(&self, entry: &DisplayTimeEntry) -> bool {
        if self.search.is_empty() {
            return true;
        }
        let needle = self.search.to_lowercase();
        entry.employee_name.to_lowercase().contains(&needle)
            || entry.job_title.to_lowercase().contains(&needle)
    }
}

pub fn apply_filters(entries: &[DisplayTimeEntry], criteria: &FilterCriteria) -> Vec<DisplayTimeEntry> {
    entries
        .iter()
        .filter(|e| criteria.matches(e))
        .cloned()
        .collect()
}
