//! Claim payout batches
//!
//! Input columns: `ClaimID,ClaimAmount,CoverageAmount,Deductible`.

use super::map_items;
use crate::calculator::calculate_claim_payout;
use crate::config::FinanceConfig;
use crate::error::Result;
use csv::{Reader, Writer};
use serde::{Deserialize, Serialize};
use std::io::{Read, Write};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ClaimRequest {
    #[serde(rename = "ClaimID")]
    pub claim_id: String,
    #[serde(rename = "ClaimAmount")]
    pub claim_amount: f64,
    #[serde(rename = "CoverageAmount")]
    pub coverage_amount: f64,
    #[serde(rename = "Deductible")]
    pub deductible: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClaimResult {
    #[serde(rename = "ClaimID")]
    pub claim_id: String,
    #[serde(rename = "Payout")]
    pub payout: f64,
    /// Claim met or exceeded the coverage limit
    #[serde(rename = "OverLimit")]
    pub over_limit: bool,
}

pub fn load_claims<P: AsRef<Path>>(path: P) -> Result<Vec<ClaimRequest>> {
    collect_rows(Reader::from_path(path)?)
}

pub fn load_claims_from_reader<R: Read>(reader: R) -> Result<Vec<ClaimRequest>> {
    collect_rows(Reader::from_reader(reader))
}

fn collect_rows<R: Read>(mut reader: Reader<R>) -> Result<Vec<ClaimRequest>> {
    let requests = reader
        .deserialize()
        .collect::<std::result::Result<Vec<ClaimRequest>, csv::Error>>()?;
    log::debug!("Loaded {} claim requests", requests.len());
    Ok(requests)
}

pub fn run_claims(requests: &[ClaimRequest], config: &FinanceConfig) -> Vec<ClaimResult> {
    let results = map_items(requests, config.parallel, |request| {
        let over_limit = request.claim_amount >= request.coverage_amount;
        let payout = calculate_claim_payout(request.claim_amount, request.coverage_amount, request.deductible);
        if payout < 0.0 {
            log::warn!(
                "Claim {} deductible {:.2} exceeds claim {:.2}",
                request.claim_id,
                request.deductible,
                request.claim_amount
            );
        }
        ClaimResult {
            claim_id: request.claim_id.clone(),
            payout,
            over_limit,
        }
    });

    let rejected = results.iter().filter(|r| r.over_limit).count();
    log::info!("Processed {} claims ({} over limit)", results.len(), rejected);
    results
}

pub fn write_claim_results<W: Write>(writer: W, results: &[ClaimResult]) -> Result<()> {
    let mut writer = Writer::from_writer(writer);
    for result in results {
        writer.serialize(result)?;
    }
    writer.flush()?;
    Ok(())
}
