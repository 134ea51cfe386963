//! Runtime settings for batch runs and the CLI

use crate::calculator::DEFAULT_PROCESSING_FEE;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

fn default_processing_fee() -> f64 { DEFAULT_PROCESSING_FEE }
fn default_parallel() -> bool { true }
fn default_output_precision() -> usize { 2 }

/// Settings loaded from a JSON file; omitted fields take their defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinanceConfig {
    /// Fee withheld from refunds
    #[serde(default = "default_processing_fee")]
    pub processing_fee: f64,

    /// Run batch calculations across the rayon thread pool
    #[serde(default = "default_parallel")]
    pub parallel: bool,

    /// Decimal places for amounts printed by the CLI
    #[serde(default = "default_output_precision")]
    pub output_precision: usize,
}

impl Default for FinanceConfig {
    fn default() -> Self {
        Self {
            processing_fee: default_processing_fee(),
            parallel: default_parallel(),
            output_precision: default_output_precision(),
        }
    }
}

impl FinanceConfig {
    pub fn from_json_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        Ok(serde_json::from_reader(BufReader::new(file))?)
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_take_defaults() {
        let config = FinanceConfig::from_json_str(r#"{"processing_fee": 10.0}"#).unwrap();
        assert_eq!(config.processing_fee, 10.0);
        assert!(config.parallel);
        assert_eq!(config.output_precision, 2);

        assert_eq!(FinanceConfig::from_json_str("{}").unwrap(), FinanceConfig::default());
    }

    #[test]
    fn test_malformed_json_is_config_error() {
        let err = FinanceConfig::from_json_str("{processing_fee").unwrap_err();
        assert!(matches!(err, crate::FinanceError::Config(_)));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = FinanceConfig::from_json_path("does/not/exist.json").unwrap_err();
        assert!(matches!(err, crate::FinanceError::Io(_)));
    }
}
