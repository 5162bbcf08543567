//! Monday-to-Sunday reporting windows.

use crate::models::DisplayTimeEntry;
use chrono::{Datelike, Days, NaiveDate, TimeDelta};
use serde::{Deserialize, Serialize};

pub const DAYS_PER_WEEK: i64 = 7;

/// Inclusive `[start, end]` window where `start` is a Monday and `end` the
/// following Sunday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WeekWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

/// The Monday on or before `date`, clamped to the first representable date.
pub fn week_start(date: NaiveDate) -> NaiveDate {
    date.checked_sub_days(Days::new(date.weekday().num_days_from_monday() as u64))
        .unwrap_or(NaiveDate::MIN)
}

impl WeekWindow {
    /// Window containing `date`.
    pub fn containing(date: NaiveDate) -> Self {
        let start = week_start(date);
        Self {
            start,
            end: start
                .checked_add_days(Days::new(DAYS_PER_WEEK as u64 - 1))
                .unwrap_or(NaiveDate::MAX),
        }
    }

    pub fn current(today: NaiveDate) -> Self {
        Self::containing(today)
    }

    /// Following week; stays put at the end of the calendar.
    pub fn next(&self) -> Self {
        self.shifted(1).unwrap_or(*self)
    }

    pub fn previous(&self) -> Self {
        self.shifted(-1).unwrap_or(*self)
    }

    /// Move by whole weeks; negative goes back in time. `None` when the
    /// target week is outside the supported calendar range.
    pub fn shifted(&self, weeks: i64) -> Option<Self> {
        let days = weeks.checked_mul(DAYS_PER_WEEK)?;
        let delta = TimeDelta::try_days(days)?;
        self.start.checked_add_signed(delta).map(Self::containing)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// The seven days of the window, Monday first.
    pub fn days(&self) -> Vec<NaiveDate> {
        (0..DAYS_PER_WEEK)
            .filter_map(|i| self.start.checked_add_days(Days::new(i as u64)))
            .collect()
    }

    pub fn start_str(&self) -> String {
        self.start.format("%Y-%m-%d").to_string()
    }

    pub fn end_str(&self) -> String {
        self.end.format("%Y-%m-%d").to_string()
    }

    pub fn label(&self) -> String {
        format!(
            "{} - {}",
            self.start.format("%d %b"),
            self.end.format("%d %b %Y")
        )
    }
}

/// Entries dated inside `window`. Entries with an unreadable date are dropped.
pub fn filter_week(entries: &[DisplayTimeEntry], window: &WeekWindow) -> Vec<DisplayTimeEntry> {
    entries
        .iter()
        .filter(|e| e.date.is_some_and(|d| window.contains(d)))
        .cloned()
        .collect()
}
