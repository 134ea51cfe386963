//! Policy type labels and their premium multipliers

use crate::error::FinanceError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Multiplier applied when the policy label is not one of the known types
pub const DEFAULT_POLICY_MULTIPLIER: f64 = 1.0;

/// Category of an insurance policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PolicyType {
    Life,
    Car,
    Health,
    Property,
}

impl PolicyType {
    pub const ALL: [PolicyType; 4] = [
        PolicyType::Life,
        PolicyType::Car,
        PolicyType::Health,
        PolicyType::Property,
    ];

    /// Exact lookup of an upper-case label ("LIFE", "CAR", ...)
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "LIFE" => Some(PolicyType::Life),
            "CAR" => Some(PolicyType::Car),
            "HEALTH" => Some(PolicyType::Health),
            "PROPERTY" => Some(PolicyType::Property),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PolicyType::Life => "LIFE",
            PolicyType::Car => "CAR",
            PolicyType::Health => "HEALTH",
            PolicyType::Property => "PROPERTY",
        }
    }

    /// Premium multiplier used by the flat-rate premium formula
    pub fn multiplier(&self) -> f64 {
        match self {
            PolicyType::Life => 1.5,
            PolicyType::Car => 1.2,
            PolicyType::Health => 1.3,
            PolicyType::Property => 1.1,
        }
    }
}

/// Multiplier for a raw policy label, falling back to 1.0 for unknown labels
pub fn premium_multiplier(label: &str) -> f64 {
    PolicyType::from_label(label)
        .map(|t| t.multiplier())
        .unwrap_or(DEFAULT_POLICY_MULTIPLIER)
}

impl fmt::Display for PolicyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Case-insensitive parse for user-facing input
impl FromStr for PolicyType {
    type Err = FinanceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PolicyType::from_label(&s.trim().to_ascii_uppercase())
            .ok_or_else(|| FinanceError::unknown("policy type", s))
    }
}
