use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmployeeStatus {
    #[default]
    #[serde(alias = "Active")]
    Active,
    #[serde(alias = "Inactive")]
    Inactive,
}

/// Employee record as returned by the employee provider. Read-only here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hourly_rate: Option<f64>,
    #[serde(default)]
    pub status: EmployeeStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initials: Option<String>,
}

impl Employee {
    pub fn new(id: &str, name: &str, hourly_rate: Option<f64>) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            hourly_rate,
            status: EmployeeStatus::Active,
            initials: None,
        }
    }

    pub fn is_active(&self) -> bool {
        self.status == EmployeeStatus::Active
    }

    /// Stored initials, or the first letter of the first two words of the name.
    pub fn initials(&self) -> String {
        if let Some(i) = self.initials.as_deref().filter(|i| !i.trim().is_empty()) {
            return i.trim().to_uppercase();
        }

        self.name
            .split_whitespace()
            .filter_map(|w| w.chars().next())
            .take(2)
            .flat_map(char::to_uppercase)
            .collect()
    }
}
