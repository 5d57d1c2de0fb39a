//! Health condition reported with every record.

use serde::{Deserialize, Serialize};

/// Health condition of a person for the whole observation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Condition {
    Healthy,
    Sick,
}

impl Condition {
    pub fn is_sick(&self) -> bool {
        matches!(self, Self::Sick)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Healthy => "healthy",
            Self::Sick => "sick",
        }
    }

    /// Parse from string (matching the serde rename).
    pub fn from_str_name(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "healthy" => Some(Self::Healthy),
            "sick" => Some(Self::Sick),
            _ => None,
        }
    }
}

impl std::fmt::Display for Condition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
