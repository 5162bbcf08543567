use crate::data::dataset::Dataset;
use crate::errors::{AppError, AppResult};
use crate::models::{Employee, Job, TimeEntry, TimeEntryStatus};
use std::path::{Path, PathBuf};

/// Read side: the employee, job and time-entry providers.
pub trait TimesheetSource {
    fn employees(&self) -> AppResult<Vec<Employee>>;
    fn jobs(&self) -> AppResult<Vec<Job>>;
    fn time_entries(&self) -> AppResult<Vec<TimeEntry>>;
}

/// Write side: review decisions keyed by entry id.
///
/// Batches are atomic: either every id transitions or none does.
pub trait TimesheetMutations {
    fn batch_approve(&mut self, ids: &[String]) -> AppResult<usize>;
    fn batch_reject(&mut self, ids: &[String]) -> AppResult<usize>;

    fn approve(&mut self, id: &str) -> AppResult<()> {
        self.batch_approve(&[id.to_string()]).map(|_| ())
    }

    fn reject(&mut self, id: &str) -> AppResult<()> {
        self.batch_reject(&[id.to_string()]).map(|_| ())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewAction {
    Approve,
    Reject,
}

impl ReviewAction {
    pub fn target(&self) -> TimeEntryStatus {
        match self {
            ReviewAction::Approve => TimeEntryStatus::Approved,
            ReviewAction::Reject => TimeEntryStatus::Rejected,
        }
    }

    pub fn past_tense(&self) -> &'static str {
        match self {
            ReviewAction::Approve => "approved",
            ReviewAction::Reject => "rejected",
        }
    }
}

/// Provider backed by a JSON dataset file. Mutations are written back to the
/// file only when the whole batch succeeds.
#[derive(Debug)]
pub struct DatasetStore {
    path: Option<PathBuf>,
    dataset: Dataset,
}

impl DatasetStore {
    pub fn open(path: &Path) -> AppResult<Self> {
        Ok(Self {
            path: Some(path.to_path_buf()),
            dataset: Dataset::load(path)?,
        })
    }

    /// Store that never touches the filesystem.
    pub fn in_memory(dataset: Dataset) -> Self {
        Self {
            path: None,
            dataset,
        }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn review(&mut self, ids: &[String], action: ReviewAction) -> AppResult<usize> {
        if ids.is_empty() {
            return Ok(0);
        }

        // Validate the whole batch before touching anything.
        let mut positions = Vec::with_capacity(ids.len());
        for id in ids {
            let pos = self
                .dataset
                .time_entries
                .iter()
                .position(|e| &e.id == id)
                .ok_or_else(|| AppError::EntryNotFound(id.clone()))?;

            let status = self.dataset.time_entries[pos].status;
            if !status.is_pending() {
                return Err(AppError::InvalidTransition {
                    id: id.clone(),
                    status: status.as_str().to_string(),
                    action: action.past_tense().to_string(),
                });
            }
            if !positions.contains(&pos) {
                positions.push(pos);
            }
        }

        let target = action.target();
        for &pos in &positions {
            self.dataset.time_entries[pos].status = target;
        }

        if let Some(path) = &self.path
            && let Err(e) = self.dataset.save(path)
        {
            for &pos in &positions {
                self.dataset.time_entries[pos].status = TimeEntryStatus::Pending;
            }
            return Err(e);
        }

        tracing::info!(
            count = positions.len(),
            status = target.as_str(),
            "time entries reviewed"
        );

        Ok(positions.len())
    }
}

impl TimesheetSource for DatasetStore {
    fn employees(&self) -> AppResult<Vec<Employee>> {
        Ok(self.dataset.employees.clone())
    }

    fn jobs(&self) -> AppResult<Vec<Job>> {
        Ok(self.dataset.jobs.clone())
    }

    fn time_entries(&self) -> AppResult<Vec<TimeEntry>> {
        Ok(self.dataset.time_entries.clone())
    }
}

impl TimesheetMutations for DatasetStore {
    fn batch_approve(&mut self, ids: &[String]) -> AppResult<usize> {
        self.review(ids, ReviewAction::Approve)
    }

    fn batch_reject(&mut self, ids: &[String]) -> AppResult<usize> {
        self.review(ids, ReviewAction::Reject)
    }
}
