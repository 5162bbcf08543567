//! Explicit, serializable view state: selected week, filters and selection.

use crate::core::filter::FilterCriteria;
use crate::core::week::WeekWindow;
use crate::errors::{AppError, AppResult};
use crate::models::DisplayTimeEntry;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewState {
    pub window: WeekWindow,
    pub criteria: FilterCriteria,
    pub selected: BTreeSet<String>,
}

impl ViewState {
    /// View of the week containing `date`, with no filters.
    pub fn for_week(date: NaiveDate) -> Self {
        Self {
            window: WeekWindow::containing(date),
            criteria: FilterCriteria::default(),
            selected: BTreeSet::new(),
        }
    }

    pub fn with_criteria(mut self, criteria: FilterCriteria) -> Self {
        self.criteria = criteria;
        self.drop_day_outside_window();
        self
    }

    pub fn next_week(&mut self) {
        self.window = self.window.next();
        self.drop_day_outside_window();
    }

    pub fn previous_week(&mut self) {
        self.window = self.window.previous();
        self.drop_day_outside_window();
    }

    /// Move by `weeks`; the view is left unchanged when the target is out of range.
    pub fn shift_weeks(&mut self, weeks: i64) -> AppResult<()> {
        self.window = self.window.shifted(weeks).ok_or_else(|| {
            AppError::DateOutOfRange(format!(
                "{weeks} weeks from {}",
                self.window.start_str()
            ))
        })?;
        self.drop_day_outside_window();
        Ok(())
    }

    pub fn jump_to_current(&mut self, today: NaiveDate) {
        self.window = WeekWindow::current(today);
        self.drop_day_outside_window();
    }

    // A day filter only makes sense inside the shown week.
    fn drop_day_outside_window(&mut self) {
        if self.criteria.day.is_some_and(|d| !self.window.contains(d)) {
            self.criteria.day = None;
        }
    }

    /// Flip selection of `id`; returns true when it is now selected.
    pub fn toggle(&mut self, id: &str) -> bool {
        if self.selected.remove(id) {
            false
        } else {
            self.selected.insert(id.to_string());
            true
        }
    }

    /// Select every pending entry of `visible`; only pending entries can be reviewed.
    pub fn select_all_pending(&mut self, visible: &[DisplayTimeEntry]) {
        self.selected.extend(
            visible
                .iter()
                .filter(|e| e.status.is_pending())
                .map(|e| e.id.clone()),
        );
    }

    pub fn clear_selection(&mut self) {
        self.selected.clear();
    }

    pub fn selected_ids(&self) -> Vec<String> {
        self.selected.iter().cloned().collect()
    }

    /// React to the outcome of a batch approve/reject on the selection.
    ///
    /// The selection is cleared only when the batch succeeded and kept
    /// otherwise. Returns whether the batch succeeded.
    pub fn settle_batch<T>(&mut self, outcome: &AppResult<T>) -> bool {
        match outcome {
            Ok(_) => {
                self.clear_selection();
                true
            }
            Err(e) => {
                tracing::warn!(error = %e, selected = self.selected.len(), "batch mutation failed");
                false
            }
        }
    }
}
