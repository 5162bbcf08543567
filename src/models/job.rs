use serde::{Deserialize, Serialize};

/// Job record as returned by the job provider. Read-only here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    pub id: String,
    pub title: String,
    #[serde(default = "default_job_status")]
    pub status: String,
}

fn default_job_status() -> String {
    "active".to_string()
}

impl Job {
    pub fn new(id: &str, title: &str) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            status: default_job_status(),
        }
    }

    pub fn is_active(&self) -> bool {
        self.status.eq_ignore_ascii_case("active")
    }
}
