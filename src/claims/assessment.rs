//! Adjuster risk assessment and recommended payout
//!
//! Score points:
//! - coverage ratio > 0.8 → 3, > 0.5 → 2, otherwise 1
//! - fewer than two evidence documents → 2
//! - filed within 30 days of policy start → 2, within 90 days → 1
//!
//! A total of 6+ is HIGH, 4-5 MEDIUM, below 4 LOW.

use super::claim::Claim;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Payout uplift per evidence document
const EVIDENCE_BONUS: f64 = 0.02;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    fn from_points(points: u32) -> Self {
        if points >= 6 {
            RiskLevel::High
        } else if points >= 4 {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        }
    }

    /// Share of the covered amount paid at this risk level
    pub fn payout_multiplier(&self) -> f64 {
        match self {
            RiskLevel::Low => 1.0,
            RiskLevel::Medium => 0.9,
            RiskLevel::High => 0.8,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClaimAssessment {
    pub claim_id: String,
    pub policy_id: String,
    pub risk_level: RiskLevel,
    pub recommended_payout: f64,
    pub coverage_ratio: f64,
    pub evidence_count: usize,
    pub days_since_policy_start: i64,
}

/// Assess a claim against its policy's coverage and start date
///
/// A policy with no positive coverage cannot be scored and is treated as HIGH
/// risk with no payout.
pub fn assess_claim(claim: &Claim, coverage_amount: f64, policy_start: NaiveDate) -> ClaimAssessment {
    let evidence_count = claim.evidence_documents().len();
    let days_active = (claim.date_filed - policy_start).num_days();

    if coverage_amount <= 0.0 {
        log::warn!(
            "Claim {} references policy {} without coverage",
            claim.claim_id,
            claim.policy_id
        );
        return ClaimAssessment {
            claim_id: claim.claim_id.clone(),
            policy_id: claim.policy_id.clone(),
            risk_level: RiskLevel::High,
            recommended_payout: 0.0,
            coverage_ratio: 0.0,
            evidence_count,
            days_since_policy_start: days_active,
        };
    }

    let coverage_ratio = claim.amount() / coverage_amount;
    let mut points = if coverage_ratio > 0.8 {
        3
    } else if coverage_ratio > 0.5 {
        2
    } else {
        1
    };

    if evidence_count < 2 {
        points += 2;
    }

    if days_active < 30 {
        points += 2;
    } else if days_active < 90 {
        points += 1;
    }

    let risk_level = RiskLevel::from_points(points);

    let base_amount = claim.amount().min(coverage_amount);
    let payout = base_amount * risk_level.payout_multiplier() * (1.0 + EVIDENCE_BONUS * evidence_count as f64);

    ClaimAssessment {
        claim_id: claim.claim_id.clone(),
        policy_id: claim.policy_id.clone(),
        risk_level,
        recommended_payout: payout.min(coverage_amount),
        coverage_ratio,
        evidence_count,
        days_since_policy_start: days_active,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn claim_with(amount: f64, evidence: &[&str], filed: NaiveDate) -> Claim {
        let mut claim = Claim::new("CL001", "POL001", "CUST001", filed);
        claim.set_amount(amount).unwrap();
        for doc in evidence {
            claim.add_evidence(doc).unwrap();
        }
        claim
    }

    #[test]
    fn test_low_risk_claim() {
        // ratio 0.2 → 1, two documents → 0, a year in → 0
        let claim = claim_with(2000.0, &["D1", "D2"], date(2025, 1, 1));
        let assessment = assess_claim(&claim, 10_000.0, date(2024, 1, 1));

        assert_eq!(assessment.risk_level, RiskLevel::Low);
        assert_relative_eq!(assessment.recommended_payout, 2000.0 * 1.04, epsilon = 1e-9);
        assert_eq!(assessment.evidence_count, 2);
    }

    #[test]
    fn test_medium_risk_claim() {
        // ratio 0.6 → 2, one document → 2, 60 days → 1
        let claim = claim_with(6000.0, &["D1"], date(2024, 3, 1));
        let assessment = assess_claim(&claim, 10_000.0, date(2024, 1, 1));

        assert_eq!(assessment.days_since_policy_start, 60);
        assert_eq!(assessment.risk_level, RiskLevel::Medium);
        assert_relative_eq!(assessment.recommended_payout, 6000.0 * 0.9 * 1.02, epsilon = 1e-9);

        let claim = claim_with(6000.0, &["D1", "D2"], date(2024, 3, 1));
        let assessment = assess_claim(&claim, 10_000.0, date(2024, 1, 1));
        assert_eq!(assessment.risk_level, RiskLevel::Low);
    }

    #[test]
    fn test_high_risk_claim() {
        // ratio 0.9 → 3, one document → 2, 9 days → 2
        let claim = claim_with(9000.0, &["D1"], date(2024, 1, 10));
        let assessment = assess_claim(&claim, 10_000.0, date(2024, 1, 1));

        assert_eq!(assessment.risk_level, RiskLevel::High);
        assert_relative_eq!(assessment.recommended_payout, 9000.0 * 0.8 * 1.02, epsilon = 1e-9);
    }

    #[test]
    fn test_payout_capped_at_coverage() {
        let docs = ["D1", "D2", "D3", "D4", "D5"];
        let claim = claim_with(9900.0, &docs, date(2025, 1, 1));
        let assessment = assess_claim(&claim, 10_000.0, date(2024, 1, 1));
        // ratio > 0.8 → 3 points, LOW; 9900 * 1.10 exceeds coverage
        assert_eq!(assessment.risk_level, RiskLevel::Low);
        assert_eq!(assessment.recommended_payout, 10_000.0);
    }

    #[test]
    fn test_zero_coverage_is_high_risk() {
        let claim = claim_with(100.0, &["D1"], date(2024, 1, 10));
        let assessment = assess_claim(&claim, 0.0, date(2024, 1, 1));
        assert_eq!(assessment.risk_level, RiskLevel::High);
        assert_eq!(assessment.recommended_payout, 0.0);
    }
}
