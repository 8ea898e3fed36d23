use clap::{Args, ValueEnum};
use rust_decimal::Decimal;
use serde_json::Value;

use fincalc_core::deposits::fixed::{self, FdPayout, FixedDepositInput};
use fincalc_core::deposits::ppf::{self, PpfInput};
use fincalc_core::deposits::recurring::{self, RecurringDepositInput};
use fincalc_core::CalculatorConfig;

use super::{limits, request_from_input};

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum PayoutArg {
    /// Interest compounds and is paid at maturity (STDR)
    Cumulative,
    /// Interest paid out as it accrues (TDR)
    NonCumulative,
}

impl From<PayoutArg> for FdPayout {
    fn from(arg: PayoutArg) -> Self {
        match arg {
            PayoutArg::Cumulative => FdPayout::Cumulative,
            PayoutArg::NonCumulative => FdPayout::NonCumulative,
        }
    }
}

/// Arguments for fixed deposit maturity
#[derive(Args)]
pub struct FixedDepositArgs {
    /// Path to JSON/YAML input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Amount deposited (₹, at least 1000)
    #[arg(long)]
    pub principal: Option<Decimal>,

    /// Annual interest rate in percent
    #[arg(long)]
    pub rate: Option<Decimal>,

    /// Tenure in years
    #[arg(long)]
    pub years: Option<u32>,

    /// Interest payout type
    #[arg(long, value_enum, default_value = "cumulative")]
    pub payout: PayoutArg,
}

pub fn run_fixed_deposit(args: FixedDepositArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let fd_input: FixedDepositInput = match request_from_input(args.input.as_deref())? {
        Some(req) => req,
        None => FixedDepositInput {
            principal: args
                .principal
                .ok_or("--principal is required (or provide --input)")?,
            annual_rate_percent: args.rate.ok_or("--rate is required (or provide --input)")?,
            years: args.years.ok_or("--years is required (or provide --input)")?,
            payout: args.payout.into(),
        },
    };
    limits::fixed_deposit(&fd_input)?;
    let result = fixed::calculate_fixed_deposit(&fd_input)?;
    Ok(serde_json::to_value(result)?)
}

/// Arguments for recurring deposit maturity
#[derive(Args)]
pub struct RecurringDepositArgs {
    /// Path to JSON/YAML input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Installment paid every month (₹, at least 100)
    #[arg(long)]
    pub monthly_deposit: Option<Decimal>,

    /// Annual interest rate in percent
    #[arg(long)]
    pub rate: Option<Decimal>,

    /// Tenure in years
    #[arg(long)]
    pub years: Option<u32>,
}

pub fn run_recurring_deposit(
    args: RecurringDepositArgs,
) -> Result<Value, Box<dyn std::error::Error>> {
    let rd_input: RecurringDepositInput = match request_from_input(args.input.as_deref())? {
        Some(req) => req,
        None => RecurringDepositInput {
            monthly_deposit: args
                .monthly_deposit
                .ok_or("--monthly-deposit is required (or provide --input)")?,
            annual_rate_percent: args.rate.ok_or("--rate is required (or provide --input)")?,
            years: args.years.ok_or("--years is required (or provide --input)")?,
        },
    };
    limits::recurring_deposit(&rd_input)?;
    let result = recurring::calculate_recurring_deposit(&rd_input)?;
    Ok(serde_json::to_value(result)?)
}

/// Arguments for a Public Provident Fund projection
#[derive(Args)]
pub struct PpfArgs {
    /// Path to JSON/YAML input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Deposit made at the start of every year (₹500 to ₹1,50,000)
    #[arg(long)]
    pub yearly_deposit: Option<Decimal>,

    /// Tenure in years (15 to 50)
    #[arg(long)]
    pub years: Option<u32>,

    /// Override the configured PPF rate for this run, in percent
    #[arg(long)]
    pub rate: Option<Decimal>,
}

pub fn run_ppf(args: PpfArgs, config: &CalculatorConfig) -> Result<Value, Box<dyn std::error::Error>> {
    let ppf_input: PpfInput = match request_from_input(args.input.as_deref())? {
        Some(req) => req,
        None => PpfInput {
            yearly_deposit: args
                .yearly_deposit
                .ok_or("--yearly-deposit is required (or provide --input)")?,
            years: args.years.ok_or("--years is required (or provide --input)")?,
        },
    };

    let mut ppf_config = config.ppf.clone();
    if let Some(rate) = args.rate {
        ppf_config.annual_rate_percent = rate;
    }

    let result = ppf::calculate_ppf_with(&ppf_input, &ppf_config)?;
    Ok(serde_json::to_value(result)?)
}
