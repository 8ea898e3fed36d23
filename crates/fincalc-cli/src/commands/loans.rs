use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use fincalc_core::loans::amortizing::{self, LoanAdvancedInput};
use fincalc_core::loans::basic::{self, LoanBasicInput};
use fincalc_core::CalculatorConfig;

use super::{limits, request_from_input};

/// Arguments for the flat-rate loan quote
#[derive(Args)]
pub struct LoanBasicArgs {
    /// Path to JSON/YAML input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Loan principal (₹, at least 1000)
    #[arg(long)]
    pub principal: Option<Decimal>,

    /// Annual interest rate in percent (e.g. 10 for 10%)
    #[arg(long)]
    pub rate: Option<Decimal>,

    /// Tenure in years
    #[arg(long)]
    pub years: Option<u32>,
}

pub fn run_loan_basic(args: LoanBasicArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let loan_input: LoanBasicInput = match request_from_input(args.input.as_deref())? {
        Some(req) => req,
        None => LoanBasicInput {
            principal: args
                .principal
                .ok_or("--principal is required (or provide --input)")?,
            annual_rate_percent: args.rate.ok_or("--rate is required (or provide --input)")?,
            years: args.years.ok_or("--years is required (or provide --input)")?,
        },
    };
    limits::loan_basic(&loan_input)?;
    let result = basic::calculate_loan_basic(&loan_input)?;
    Ok(serde_json::to_value(result)?)
}

/// Arguments for the amortizing loan quote
#[derive(Args)]
pub struct LoanAdvancedArgs {
    /// Path to JSON/YAML input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Loan principal (₹, at least 1000)
    #[arg(long)]
    pub principal: Option<Decimal>,

    /// Annual interest rate in percent
    #[arg(long)]
    pub rate: Option<Decimal>,

    /// Tenure in years
    #[arg(long)]
    pub years: Option<u32>,

    /// Processing fee in percent of principal (defaults to the configured fee)
    #[arg(long)]
    pub processing_fee: Option<Decimal>,

    /// Include a year-wise amortization schedule
    #[arg(long)]
    pub schedule: bool,
}

pub fn run_loan_advanced(
    args: LoanAdvancedArgs,
    config: &CalculatorConfig,
) -> Result<Value, Box<dyn std::error::Error>> {
    let loan_input: LoanAdvancedInput = match request_from_input(args.input.as_deref())? {
        Some(req) => req,
        None => LoanAdvancedInput {
            principal: args
                .principal
                .ok_or("--principal is required (or provide --input)")?,
            annual_rate_percent: args.rate.ok_or("--rate is required (or provide --input)")?,
            years: args.years.ok_or("--years is required (or provide --input)")?,
            processing_fee_percent: args.processing_fee,
            include_schedule: args.schedule,
        },
    };
    limits::loan_advanced(&loan_input)?;
    let result = amortizing::calculate_loan_advanced_with(&loan_input, &config.loan)?;
    Ok(serde_json::to_value(result)?)
}
