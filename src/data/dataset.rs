use crate::errors::{AppError, AppResult};
use crate::models::{Employee, Job, TimeEntry};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::Path;

/// JSON document holding the three source collections.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(default)]
    pub employees: Vec<Employee>,
    #[serde(default)]
    pub jobs: Vec<Job>,
    #[serde(default)]
    pub time_entries: Vec<TimeEntry>,
}

impl Dataset {
    pub fn from_json(s: &str) -> AppResult<Self> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn load(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Err(AppError::Config(format!(
                "dataset not found: {} (run `rtimesheet init` or pass --data)",
                path.display()
            )));
        }

        let content = fs::read_to_string(path)?;
        let dataset = Self::from_json(&content)?;

        tracing::debug!(
            path = %path.display(),
            employees = dataset.employees.len(),
            jobs = dataset.jobs.len(),
            entries = dataset.time_entries.len(),
            "dataset loaded"
        );

        Ok(dataset)
    }

    /// Pretty JSON written to a sibling `.tmp` file, then renamed over `path`.
    pub fn save(&self, path: &Path) -> AppResult<()> {
        let json = serde_json::to_string_pretty(self)?;

        let tmp = path.with_extension("json.tmp");
        {
            let mut file = fs::File::create(&tmp)?;
            file.write_all(json.as_bytes())?;
            file.sync_all()?;
        }
        fs::rename(&tmp, path)?;

        Ok(())
    }

    /// Write an empty dataset unless one already exists.
    pub fn create_empty(path: &Path) -> AppResult<bool> {
        if path.exists() {
            return Ok(false);
        }
        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir)?;
        }
        Dataset::default().save(path)?;
        Ok(true)
    }
}
