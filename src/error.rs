//! Error types for record handling, loading and configuration
//!
//! The core calculator never fails; everything around it that parses input or
//! mutates a claim/payment record reports through `FinanceError`.

use thiserror::Error;

/// Result type alias using FinanceError
pub type Result<T> = std::result::Result<T, FinanceError>;

#[derive(Debug, Error)]
pub enum FinanceError {
    #[error("Unknown {kind}: {value}")]
    UnknownLabel { kind: &'static str, value: String },

    #[error("Invalid amount for {field}: {value}")]
    InvalidAmount { field: &'static str, value: f64 },

    #[error("Coverage amount and term must be positive (coverage {coverage}, term {term_months} months)")]
    InvalidTerm { coverage: f64, term_months: u32 },

    #[error("Malformed risk factor entry: {0}")]
    MalformedRiskFactor(String),

    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Invalid status transition from {from} to {to}")]
    InvalidTransition { from: &'static str, to: &'static str },

    #[error("Duplicate evidence document: {0}")]
    DuplicateEvidence(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] serde_json::Error),
}

impl FinanceError {
    pub(crate) fn unknown(kind: &'static str, value: &str) -> Self {
        FinanceError::UnknownLabel {
            kind,
            value: value.to_string(),
        }
    }
}
