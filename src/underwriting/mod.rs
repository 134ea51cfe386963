//! Underwriting: term-based premiums and normalised risk scores

mod profile;
mod term;
pub mod risk;

pub use profile::{
    CarProfile, DrivingHistory, LocationRisk, ParkingLocation, UnderwritingProfile,
};
pub use risk::RiskScore;
pub use term::{
    annual_base_rate, calculate_policy_term, calculate_term_premium, risk_multiplier,
    DEFAULT_ANNUAL_BASE_RATE,
};
