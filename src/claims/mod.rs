//! Claim records and adjuster assessment

mod assessment;
mod claim;

pub use assessment::{assess_claim, ClaimAssessment, RiskLevel};
pub use claim::{Claim, ClaimStatus};
