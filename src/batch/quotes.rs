//! Premium quote batches
//!
//! Input columns: `QuoteID,PolicyType,CoverageAmount,RiskFactors` where
//! `RiskFactors` holds `name=value` pairs separated by `;` (may be empty).

use super::map_items;
use crate::calculator::calculate_premium;
use crate::config::FinanceConfig;
use crate::error::Result;
use crate::policy::RiskFactors;
use csv::{Reader, Writer};
use serde::{Deserialize, Serialize};
use std::io::{Read, Write};
use std::path::Path;
use std::time::Instant;

#[derive(Debug, Deserialize)]
struct CsvRow {
    #[serde(rename = "QuoteID")]
    quote_id: String,
    #[serde(rename = "PolicyType")]
    policy_type: String,
    #[serde(rename = "CoverageAmount")]
    coverage_amount: f64,
    #[serde(rename = "RiskFactors", default)]
    risk_factors: String,
}

impl CsvRow {
    fn to_request(self) -> Result<QuoteRequest> {
        Ok(QuoteRequest {
            risk_factors: self.risk_factors.parse()?,
            quote_id: self.quote_id,
            // Labels are passed through verbatim; unknown ones price at 1.0
            policy_type: self.policy_type.trim().to_string(),
            coverage_amount: self.coverage_amount,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct QuoteRequest {
    pub quote_id: String,
    pub policy_type: String,
    pub coverage_amount: f64,
    pub risk_factors: RiskFactors,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuoteResult {
    #[serde(rename = "QuoteID")]
    pub quote_id: String,
    #[serde(rename = "PolicyType")]
    pub policy_type: String,
    #[serde(rename = "CoverageAmount")]
    pub coverage_amount: f64,
    #[serde(rename = "Premium")]
    pub premium: f64,
}

/// Load quote requests from a CSV file
pub fn load_quotes<P: AsRef<Path>>(path: P) -> Result<Vec<QuoteRequest>> {
    let reader = Reader::from_path(path)?;
    collect_rows(reader)
}

/// Load quote requests from any reader
pub fn load_quotes_from_reader<R: Read>(reader: R) -> Result<Vec<QuoteRequest>> {
    collect_rows(Reader::from_reader(reader))
}

fn collect_rows<R: Read>(mut reader: Reader<R>) -> Result<Vec<QuoteRequest>> {
    let mut requests = Vec::new();
    for result in reader.deserialize() {
        let row: CsvRow = result?;
        requests.push(row.to_request()?);
    }
    log::debug!("Loaded {} quote requests", requests.len());
    Ok(requests)
}

/// Price every quote
pub fn run_quotes(requests: &[QuoteRequest], config: &FinanceConfig) -> Vec<QuoteResult> {
    let start = Instant::now();
    let results = map_items(requests, config.parallel, |request| QuoteResult {
        quote_id: request.quote_id.clone(),
        policy_type: request.policy_type.clone(),
        coverage_amount: request.coverage_amount,
        premium: calculate_premium(&request.policy_type, request.coverage_amount, &request.risk_factors),
    });
    log::info!("Priced {} quotes in {:?}", results.len(), start.elapsed());
    results
}

pub fn write_quote_results<W: Write>(writer: W, results: &[QuoteResult]) -> Result<()> {
    let mut writer = Writer::from_writer(writer);
    for result in results {
        writer.serialize(result)?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const INPUT: &str = "\
QuoteID,PolicyType,CoverageAmount,RiskFactors
Q1,LIFE,100000,
Q2,CAR,1000,storm=0.1
Q3,BOAT,1000,age=0.1;health=0.05
";

    #[test]
    fn test_load_and_price() {
        let requests = load_quotes_from_reader(INPUT.as_bytes()).unwrap();
        assert_eq!(requests.len(), 3);
        assert!(requests[0].risk_factors.is_empty());
        assert_eq!(requests[2].risk_factors.len(), 2);

        let results = run_quotes(&requests, &FinanceConfig::default());
        assert_eq!(results[0].premium, 7500.0);
        assert_eq!(results[1].premium, 66.0);
        // 1000 * 0.05 * 1.0 * 1.1 * 1.05
        assert_eq!(results[2].premium, 57.75);
    }

    #[test]
    fn test_malformed_risk_factors_fail_load() {
        let input = "QuoteID,PolicyType,CoverageAmount,RiskFactors\nQ1,LIFE,1000,age\n";
        assert!(load_quotes_from_reader(input.as_bytes()).is_err());
    }

    #[test]
    fn test_write_results() {
        let results = vec![QuoteResult {
            quote_id: "Q1".to_string(),
            policy_type: "LIFE".to_string(),
            coverage_amount: 100_000.0,
            premium: 7500.0,
        }];
        let mut out = Vec::new();
        write_quote_results(&mut out, &results).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "QuoteID,PolicyType,CoverageAmount,Premium");
        assert!(lines[1].starts_with("Q1,LIFE,"));
        assert_eq!(lines.len(), 2);
    }
}
