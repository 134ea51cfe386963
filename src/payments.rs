//! Payment records: processing, verification against claims, and refunds

use crate::calculator::{calculate_refund_amount, validate_payment_amount};
use crate::error::{FinanceError, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PaymentStatus {
    #[default]
    Pending,
    Completed,
    Failed,
    Refunded,
}

impl PaymentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Pending => "PENDING",
            PaymentStatus::Completed => "COMPLETED",
            PaymentStatus::Failed => "FAILED",
            PaymentStatus::Refunded => "REFUNDED",
        }
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentMethod {
    BankTransfer,
    CreditCard,
    Check,
}

impl FromStr for PaymentMethod {
    type Err = FinanceError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "BANK_TRANSFER" => Ok(PaymentMethod::BankTransfer),
            "CREDIT_CARD" => Ok(PaymentMethod::CreditCard),
            "CHECK" => Ok(PaymentMethod::Check),
            _ => Err(FinanceError::unknown("payment method", s)),
        }
    }
}

/// Serialisable summary handed to the payer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentReceipt {
    pub payment_id: String,
    pub amount: f64,
    pub date: NaiveDate,
    pub status: PaymentStatus,
    pub method: Option<PaymentMethod>,
    pub transaction_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    pub payment_id: String,
    pub policy_id: String,
    amount: f64,
    pub payment_date: NaiveDate,
    status: PaymentStatus,
    method: Option<PaymentMethod>,
    transaction_id: Option<String>,
}

impl Payment {
    pub fn new(payment_id: impl Into<String>, policy_id: impl Into<String>, payment_date: NaiveDate) -> Self {
        Self {
            payment_id: payment_id.into(),
            policy_id: policy_id.into(),
            amount: 0.0,
            payment_date,
            status: PaymentStatus::Pending,
            method: None,
            transaction_id: None,
        }
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    pub fn status(&self) -> PaymentStatus {
        self.status
    }

    pub fn method(&self) -> Option<PaymentMethod> {
        self.method
    }

    pub fn transaction_id(&self) -> Option<&str> {
        self.transaction_id.as_deref()
    }

    pub fn set_amount(&mut self, amount: f64) -> Result<()> {
        if !(amount > 0.0) {
            return Err(FinanceError::InvalidAmount {
                field: "payment amount",
                value: amount,
            });
        }
        self.amount = amount;
        Ok(())
    }

    pub fn set_method(&mut self, method: PaymentMethod) {
        self.method = Some(method);
    }

    /// Complete a pending payment and assign `TXN_<payment_id>`
    pub fn process(&mut self) -> Result<()> {
        if self.status != PaymentStatus::Pending {
            return Err(FinanceError::InvalidTransition {
                from: self.status.as_str(),
                to: PaymentStatus::Completed.as_str(),
            });
        }
        if self.payment_id.is_empty() {
            return Err(FinanceError::MissingField("payment id"));
        }
        if self.policy_id.is_empty() {
            return Err(FinanceError::MissingField("policy id"));
        }
        if !(self.amount > 0.0) {
            return Err(FinanceError::InvalidAmount {
                field: "payment amount",
                value: self.amount,
            });
        }
        if self.method.is_none() {
            return Err(FinanceError::MissingField("payment method"));
        }

        self.status = PaymentStatus::Completed;
        self.transaction_id = Some(format!("TXN_{}", self.payment_id));
        log::info!("Payment {} completed for {:.2}", self.payment_id, self.amount);
        Ok(())
    }

    /// Mark a payment that could not be processed
    pub fn fail(&mut self) -> Result<()> {
        if self.status != PaymentStatus::Pending {
            return Err(FinanceError::InvalidTransition {
                from: self.status.as_str(),
                to: PaymentStatus::Failed.as_str(),
            });
        }
        log::warn!("Payment {} failed", self.payment_id);
        self.status = PaymentStatus::Failed;
        Ok(())
    }

    /// All required fields present and a transaction id assigned
    pub fn verify(&self) -> bool {
        !self.payment_id.is_empty()
            && !self.policy_id.is_empty()
            && self.amount > 0.0
            && self.method.is_some()
            && self.transaction_id.is_some()
    }

    /// Whether this payment settles an approved claim amount
    pub fn matches_claim(&self, claim_amount: f64) -> bool {
        validate_payment_amount(self.amount, claim_amount)
    }

    /// Refund a completed payment, returning the amount returned to the payer
    pub fn refund(&mut self, processing_fee: f64) -> Result<f64> {
        if self.status != PaymentStatus::Completed {
            return Err(FinanceError::InvalidTransition {
                from: self.status.as_str(),
                to: PaymentStatus::Refunded.as_str(),
            });
        }
        let refund = calculate_refund_amount(self.amount, processing_fee);
        self.status = PaymentStatus::Refunded;
        log::info!(
            "Payment {} refunded {:.2} (fee {:.2})",
            self.payment_id,
            refund,
            processing_fee
        );
        Ok(refund)
    }

    pub fn receipt(&self) -> PaymentReceipt {
        PaymentReceipt {
            payment_id: self.payment_id.clone(),
            amount: self.amount,
            date: self.payment_date,
            status: self.status,
            method: self.method,
            transaction_id: self.transaction_id.clone(),
        }
    }
}
