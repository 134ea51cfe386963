//! Policy categories and per-quote risk factor adjustments

mod data;
mod risk_factors;

pub use data::{PolicyType, premium_multiplier};
pub use risk_factors::RiskFactors;
