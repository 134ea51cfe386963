//! A filed insurance claim

use crate::calculator::calculate_claim_payout;
use crate::error::{FinanceError, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Uplift per attached evidence document
pub const EVIDENCE_UPLIFT: f64 = 0.05;
/// Adjusted amount never exceeds this multiple of the filed amount
pub const ADJUSTMENT_CAP: f64 = 1.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ClaimStatus {
    #[default]
    Pending,
    Reviewing,
    Approved,
    Rejected,
    Settled,
}

impl ClaimStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ClaimStatus::Pending => "PENDING",
            ClaimStatus::Reviewing => "REVIEWING",
            ClaimStatus::Approved => "APPROVED",
            ClaimStatus::Rejected => "REJECTED",
            ClaimStatus::Settled => "SETTLED",
        }
    }
}

impl fmt::Display for ClaimStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ClaimStatus {
    type Err = FinanceError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "PENDING" => Ok(ClaimStatus::Pending),
            "REVIEWING" => Ok(ClaimStatus::Reviewing),
            "APPROVED" => Ok(ClaimStatus::Approved),
            "REJECTED" => Ok(ClaimStatus::Rejected),
            "SETTLED" => Ok(ClaimStatus::Settled),
            _ => Err(FinanceError::unknown("claim status", s)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claim {
    pub claim_id: String,
    pub policy_id: String,
    pub customer_id: String,
    amount: f64,
    status: ClaimStatus,
    description: String,
    evidence_documents: Vec<String>,
    pub date_filed: NaiveDate,
}

impl Claim {
    /// New pending claim with no amount, filed on `date_filed`
    pub fn new(
        claim_id: impl Into<String>,
        policy_id: impl Into<String>,
        customer_id: impl Into<String>,
        date_filed: NaiveDate,
    ) -> Self {
        Self {
            claim_id: claim_id.into(),
            policy_id: policy_id.into(),
            customer_id: customer_id.into(),
            amount: 0.0,
            status: ClaimStatus::Pending,
            description: String::new(),
            evidence_documents: Vec::new(),
            date_filed,
        }
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    pub fn status(&self) -> ClaimStatus {
        self.status
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn evidence_documents(&self) -> &[String] {
        &self.evidence_documents
    }

    /// Amount must be strictly positive
    pub fn set_amount(&mut self, amount: f64) -> Result<()> {
        if !(amount > 0.0) {
            return Err(FinanceError::InvalidAmount {
                field: "claim amount",
                value: amount,
            });
        }
        self.amount = amount;
        Ok(())
    }

    pub fn set_status(&mut self, status: ClaimStatus) {
        log::debug!("Claim {}: {} -> {}", self.claim_id, self.status, status);
        self.status = status;
    }

    /// Stores the trimmed description; blank text is rejected
    pub fn set_description(&mut self, description: &str) -> Result<()> {
        let trimmed = description.trim();
        if trimmed.is_empty() {
            return Err(FinanceError::MissingField("description"));
        }
        self.description = trimmed.to_string();
        Ok(())
    }

    pub fn add_evidence(&mut self, document_id: &str) -> Result<()> {
        if document_id.trim().is_empty() {
            return Err(FinanceError::MissingField("evidence document id"));
        }
        if self.evidence_documents.iter().any(|d| d == document_id) {
            return Err(FinanceError::DuplicateEvidence(document_id.to_string()));
        }
        self.evidence_documents.push(document_id.to_string());
        Ok(())
    }

    /// Filed amount adjusted for evidence and filing age as of `as_of`, capped
    /// at 150% of the filed amount
    pub fn adjusted_amount(&self, as_of: NaiveDate) -> f64 {
        let evidence_factor = self.evidence_documents.len() as f64 * EVIDENCE_UPLIFT;
        let adjusted = self.amount * (1.0 + evidence_factor) * self.time_factor(as_of);
        adjusted.min(self.amount * ADJUSTMENT_CAP)
    }

    fn time_factor(&self, as_of: NaiveDate) -> f64 {
        let days = (as_of - self.date_filed).num_days();
        if days <= 30 {
            1.0
        } else if days <= 60 {
            0.95
        } else {
            0.90
        }
    }

    /// Payout net of deductible under the flat claim formula
    pub fn net_payout(&self, coverage_amount: f64, deductible: f64) -> f64 {
        calculate_claim_payout(self.amount, coverage_amount, deductible)
    }
}

impl fmt::Display for Claim {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Claim {} - Policy: {}, Amount: ${:.2}, Status: {}",
            self.claim_id, self.policy_id, self.amount, self.status
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use chrono::Duration;

    fn claim() -> Claim {
        Claim::new("CL001", "POL001", "CUST001", NaiveDate::from_ymd_opt(2024, 5, 1).unwrap())
    }

    #[test]
    fn test_new_claim_is_pending() {
        let claim = claim();
        assert_eq!(claim.status(), ClaimStatus::Pending);
        assert_eq!(claim.amount(), 0.0);
        assert_eq!(claim.description(), "");
        assert!(claim.evidence_documents().is_empty());
    }

    #[test]
    fn test_setters_validate() {
        let mut claim = claim();
        assert!(claim.set_amount(1000.0).is_ok());
        assert_eq!(claim.amount(), 1000.0);
        assert!(claim.set_amount(-100.0).is_err());
        assert!(claim.set_amount(0.0).is_err());
        assert!(claim.set_amount(f64::NAN).is_err());
        assert_eq!(claim.amount(), 1000.0);

        assert!(claim.set_description("  Hail damage  ").is_ok());
        assert_eq!(claim.description(), "Hail damage");
        assert!(claim.set_description("   ").is_err());

        assert_eq!("APPROVED".parse::<ClaimStatus>().unwrap(), ClaimStatus::Approved);
        assert_eq!(" reviewing ".parse::<ClaimStatus>().unwrap(), ClaimStatus::Reviewing);
        assert!("INVALID".parse::<ClaimStatus>().is_err());
    }

    #[test]
    fn test_evidence_is_unique() {
        let mut claim = claim();
        assert!(claim.add_evidence("DOC001").is_ok());
        assert!(matches!(
            claim.add_evidence("DOC001"),
            Err(FinanceError::DuplicateEvidence(_))
        ));
        assert!(claim.add_evidence("").is_err());
        assert_eq!(claim.evidence_documents(), ["DOC001".to_string()]);
    }

    #[test]
    fn test_net_payout_uses_claim_amount() {
        let mut claim = claim();
        claim.set_amount(4000.0).unwrap();
        assert_eq!(claim.net_payout(5000.0, 500.0), 3500.0);
        assert_eq!(claim.net_payout(4000.0, 500.0), 0.0);
    }

    #[test]
    fn test_adjusted_amount_evidence_and_age() {
        let mut claim = claim();
        claim.set_amount(1000.0).unwrap();
        let filed = claim.date_filed;
        assert_eq!(claim.adjusted_amount(filed), 1000.0);

        claim.add_evidence("DOC001").unwrap();
        claim.add_evidence("DOC002").unwrap();
        assert_abs_diff_eq!(claim.adjusted_amount(filed), 1100.0, epsilon = 1e-9);
        assert_abs_diff_eq!(
            claim.adjusted_amount(filed + Duration::days(30)),
            1100.0,
            epsilon = 1e-9
        );
        assert_abs_diff_eq!(
            claim.adjusted_amount(filed + Duration::days(45)),
            1045.0,
            epsilon = 1e-9
        );
        assert_abs_diff_eq!(
            claim.adjusted_amount(filed + Duration::days(61)),
            990.0,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_adjusted_amount_is_capped() {
        let mut claim = claim();
        claim.set_amount(1000.0).unwrap();
        for i in 0..12 {
            claim.add_evidence(&format!("DOC{:03}", i)).unwrap();
        }
        assert_eq!(claim.adjusted_amount(claim.date_filed), 1500.0);
    }

    #[test]
    fn test_display() {
        let mut claim = claim();
        claim.set_amount(1234.5).unwrap();
        assert_eq!(
            claim.to_string(),
            "Claim CL001 - Policy: POL001, Amount: $1234.50, Status: PENDING"
        );
    }
}
