//! Insurance Finance CLI
//!
//! Command-line access to the premium, payout, payment and refund formulas,
//! plus CSV batch runs.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use insurance_finance::batch::{
    load_claims, load_quotes, run_claims, run_quotes, write_claim_results, write_quote_results,
};
use insurance_finance::underwriting::{
    calculate_policy_term, calculate_term_premium, UnderwritingProfile,
};
use insurance_finance::{
    calculate_claim_payout, calculate_premium, calculate_refund_amount, validate_payment_amount,
    FinanceConfig, PolicyType, RiskFactors,
};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "insurance-finance")]
#[command(about = "Premium, claim payout, payment and refund calculations")]
#[command(version)]
struct Cli {
    /// JSON settings file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Flat-rate premium for a policy type and coverage
    Premium {
        /// LIFE, CAR, HEALTH or PROPERTY; other labels use a 1.0 multiplier
        policy_type: String,
        #[arg(allow_negative_numbers = true)]
        coverage_amount: f64,
        /// Risk adjustments as name=value pairs separated by ';'
        #[arg(short, long, default_value = "")]
        risk_factors: String,
    },
    /// Payout for a claim after deductible
    Payout {
        #[arg(allow_negative_numbers = true)]
        claim_amount: f64,
        #[arg(allow_negative_numbers = true)]
        coverage_amount: f64,
        #[arg(allow_negative_numbers = true)]
        deductible: f64,
    },
    /// Check a payment against the approved claim amount
    ValidatePayment {
        #[arg(allow_negative_numbers = true)]
        payment_amount: f64,
        #[arg(allow_negative_numbers = true)]
        claim_amount: f64,
    },
    /// Refund after the processing fee
    Refund {
        #[arg(allow_negative_numbers = true)]
        payment_amount: f64,
        /// Overrides the configured processing fee
        #[arg(short, long, allow_negative_numbers = true)]
        fee: Option<f64>,
    },
    /// Premium for a term in months using annual base rates
    TermPremium {
        policy_type: String,
        #[arg(allow_negative_numbers = true)]
        coverage_amount: f64,
        term_months: u32,
        /// Underwriting profile as JSON, e.g. '{"type":"LIFE","age":45}'
        #[arg(short, long)]
        profile: Option<String>,
    },
    /// Whole months between two dates (YYYY-MM-DD)
    PolicyTerm { start: NaiveDate, end: NaiveDate },
    /// Price a CSV file of quotes
    QuoteBatch {
        input: PathBuf,
        /// Output CSV (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Settle a CSV file of claims
    ClaimBatch {
        input: PathBuf,
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn open_output(path: Option<&PathBuf>) -> Result<Box<dyn Write>> {
    Ok(match path {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("creating {}", path.display()))?,
        )),
        None => Box::new(io::stdout().lock()),
    })
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => FinanceConfig::from_json_path(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => FinanceConfig::default(),
    };
    let precision = config.output_precision;

    match cli.command {
        Command::Premium {
            policy_type,
            coverage_amount,
            risk_factors,
        } => {
            let factors: RiskFactors = risk_factors.parse().context("parsing risk factors")?;
            let label = policy_type.trim().to_ascii_uppercase();
            if PolicyType::from_label(&label).is_none() {
                log::info!("Unrecognised policy type {}; using neutral multiplier", label);
            }
            let premium = calculate_premium(&label, coverage_amount, &factors);
            println!("Premium: ${:.*}", precision, premium);
        }
        Command::Payout {
            claim_amount,
            coverage_amount,
            deductible,
        } => {
            let payout = calculate_claim_payout(claim_amount, coverage_amount, deductible);
            println!("Payout: ${:.*}", precision, payout);
        }
        Command::ValidatePayment {
            payment_amount,
            claim_amount,
        } => {
            if validate_payment_amount(payment_amount, claim_amount) {
                println!("Payment amount is valid.");
            } else {
                println!("Payment amount does not match claim amount.");
            }
        }
        Command::Refund { payment_amount, fee } => {
            let fee = fee.unwrap_or(config.processing_fee);
            let refund = calculate_refund_amount(payment_amount, fee);
            println!("Refund: ${:.*} (fee ${:.*})", precision, refund, precision, fee);
        }
        Command::TermPremium {
            policy_type,
            coverage_amount,
            term_months,
            profile,
        } => {
            let profile: Option<UnderwritingProfile> = profile
                .as_deref()
                .map(|json| serde_json::from_str::<UnderwritingProfile>(json))
                .transpose()
                .context("parsing underwriting profile")?;
            let label = policy_type.trim().to_ascii_uppercase();
            let premium = calculate_term_premium(&label, coverage_amount, term_months, profile.as_ref())?;
            println!("Term premium: ${:.*}", precision, premium);
        }
        Command::PolicyTerm { start, end } => {
            println!("Term: {} months", calculate_policy_term(start, end));
        }
        Command::QuoteBatch { input, output } => {
            let requests = load_quotes(&input)
                .with_context(|| format!("loading quotes from {}", input.display()))?;
            let results = run_quotes(&requests, &config);
            write_quote_results(open_output(output.as_ref())?, &results)?;
        }
        Command::ClaimBatch { input, output } => {
            let requests = load_claims(&input)
                .with_context(|| format!("loading claims from {}", input.display()))?;
            let results = run_claims(&requests, &config);
            write_claim_results(open_output(output.as_ref())?, &results)?;
        }
    }

    Ok(())
}
