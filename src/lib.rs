//! Insurance Finance - premium, claim payout, payment and refund calculations
//!
//! This library provides:
//! - Flat-rate premium, claim payout, payment matching and refund formulas
//! - Term premiums and normalised risk scores for underwriting
//! - Claim and payment records with adjuster assessment
//! - CSV batch pricing of quotes and claims

pub mod error;
pub mod config;
pub mod policy;
pub mod calculator;
pub mod underwriting;
pub mod claims;
pub mod payments;
pub mod batch;

// Re-export commonly used types
pub use error::{FinanceError, Result};
pub use config::FinanceConfig;
pub use policy::{PolicyType, RiskFactors};
pub use calculator::{
    calculate_claim_payout, calculate_default_refund_amount, calculate_premium,
    calculate_refund_amount, validate_payment_amount,
};
pub use claims::{Claim, ClaimStatus};
pub use payments::{Payment, PaymentMethod, PaymentStatus};
