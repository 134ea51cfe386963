//! Flat-rate financial formulas used by underwriting and claims handling
//!
//! Every function here is pure: no state, no I/O, and no error path. Unknown
//! policy labels and out-of-range amounts are passed through the formulas
//! unchanged.

mod rounding;

pub use rounding::{round_to_cents, within_tolerance};

use crate::policy::{premium_multiplier, RiskFactors};

/// Base premium as a fraction of coverage
pub const BASE_PREMIUM_RATE: f64 = 0.05;

/// Largest difference at which a payment still matches the approved amount
pub const PAYMENT_TOLERANCE: f64 = 0.01;

/// Processing fee withheld from refunds when the caller does not supply one
pub const DEFAULT_PROCESSING_FEE: f64 = 25.0;

/// Calculate a premium from policy label, coverage and risk adjustments
///
/// `premium = coverage * 0.05 * multiplier(policy_type) * Π(1 + factor)`,
/// rounded to cents.
pub fn calculate_premium(policy_type: &str, coverage_amount: f64, risk_factors: &RiskFactors) -> f64 {
    let base_premium = coverage_amount * BASE_PREMIUM_RATE;
    let mut premium = base_premium * premium_multiplier(policy_type);

    for (factor, value) in risk_factors.iter() {
        log::trace!("Applying risk factor {}={}", factor, value);
        premium *= 1.0 + value;
    }

    round_to_cents(premium)
}

/// Calculate the amount paid on a claim after the deductible
///
/// A claim at or above the coverage limit is rejected outright (0.0). Below
/// the limit the payout is `min(claim - deductible, coverage)`, which goes
/// negative when the deductible exceeds the claim.
pub fn calculate_claim_payout(claim_amount: f64, coverage_amount: f64, deductible: f64) -> f64 {
    if claim_amount >= coverage_amount {
        log::debug!(
            "Claim {:.2} meets or exceeds coverage {:.2}; no payout",
            claim_amount,
            coverage_amount
        );
        return 0.0;
    }

    let payout = (claim_amount - deductible).min(coverage_amount);
    round_to_cents(payout)
}

/// Check whether a payment matches the approved claim amount
pub fn validate_payment_amount(payment_amount: f64, claim_amount: f64) -> bool {
    within_tolerance(payment_amount, claim_amount, PAYMENT_TOLERANCE)
}

/// Refund left after the processing fee, never below zero
pub fn calculate_refund_amount(payment_amount: f64, processing_fee: f64) -> f64 {
    let refund = round_to_cents(payment_amount - processing_fee);
    // Also maps -0.0 to 0.0
    if refund > 0.0 { refund } else { 0.0 }
}

/// Refund using `DEFAULT_PROCESSING_FEE`
pub fn calculate_default_refund_amount(payment_amount: f64) -> f64 {
    calculate_refund_amount(payment_amount, DEFAULT_PROCESSING_FEE)
}
