//! Insertion-ordered risk factor adjustments
//!
//! Each entry scales a premium by `(1 + value)`. Keys are unique: inserting an
//! existing name replaces its value without moving it.

use crate::error::FinanceError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RiskFactors {
    entries: Vec<(String, f64)>,
}

impl RiskFactors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a factor, returning the previous value if any
    pub fn insert(&mut self, name: impl Into<String>, value: f64) -> Option<f64> {
        let name = name.into();
        match self.entries.iter_mut().find(|(k, _)| *k == name) {
            Some((_, existing)) => Some(std::mem::replace(existing, value)),
            None => {
                self.entries.push((name, value));
                None
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| *v)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.entries.iter().map(|(_, v)| *v)
    }

    /// Render as `name=value;name=value`, the form used in batch CSV files
    pub fn to_pairs_string(&self) -> String {
        self.entries
            .iter()
            .map(|(k, v)| format!("{}={}", k, v))
            .collect::<Vec<_>>()
            .join(";")
    }
}

impl<K: Into<String>> FromIterator<(K, f64)> for RiskFactors {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        let mut factors = RiskFactors::new();
        for (name, value) in iter {
            factors.insert(name, value);
        }
        factors
    }
}

/// Parse `name=value` pairs separated by `;`. Blank input yields no factors.
impl FromStr for RiskFactors {
    type Err = FinanceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut factors = RiskFactors::new();
        for entry in s.split(';').map(str::trim).filter(|e| !e.is_empty()) {
            let (name, value) = entry
                .split_once('=')
                .ok_or_else(|| FinanceError::MalformedRiskFactor(entry.to_string()))?;
            let name = name.trim();
            if name.is_empty() {
                return Err(FinanceError::MalformedRiskFactor(entry.to_string()));
            }
            let value: f64 = value
                .trim()
                .parse()
                .map_err(|_| FinanceError::MalformedRiskFactor(entry.to_string()))?;
            factors.insert(name, value);
        }
        Ok(factors)
    }
}
