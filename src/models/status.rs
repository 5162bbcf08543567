use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Review status of a time entry.
///
/// Transitions are owned by the mutation layer: `Pending → Approved` and
/// `Pending → Rejected`. Approved and rejected entries are final.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum TimeEntryStatus {
    Pending,
    Approved,
    Rejected,
}

impl TimeEntryStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeEntryStatus::Pending => "pending",
            TimeEntryStatus::Approved => "approved",
            TimeEntryStatus::Rejected => "rejected",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TimeEntryStatus::Pending => "Pending",
            TimeEntryStatus::Approved => "Approved",
            TimeEntryStatus::Rejected => "Rejected",
        }
    }

    /// Case-insensitive parse, used for CLI input and loose dataset values.
    pub fn parse(s: &str) -> AppResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "pending" => Ok(Self::Pending),
            "approved" => Ok(Self::Approved),
            "rejected" => Ok(Self::Rejected),
            _ => Err(AppError::InvalidStatus(s.to_string())),
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, TimeEntryStatus::Pending)
    }

    pub fn is_approved(&self) -> bool {
        matches!(self, TimeEntryStatus::Approved)
    }
}

impl FromStr for TimeEntryStatus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for TimeEntryStatus {
    type Error = AppError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl fmt::Display for TimeEntryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
