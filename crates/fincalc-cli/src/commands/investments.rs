use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use fincalc_core::investments::sip::{self, SipInput};

use super::{limits, request_from_input};

/// Arguments for a SIP projection
#[derive(Args)]
pub struct SipArgs {
    /// Path to JSON/YAML input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Amount invested every month (₹, at least 100)
    #[arg(long)]
    pub monthly_investment: Option<Decimal>,

    /// Expected annual return in percent
    #[arg(long, default_value = "12")]
    pub expected_return: Decimal,

    /// Investment period in years
    #[arg(long)]
    pub years: Option<u32>,

    /// Print only the year-wise breakdown
    #[arg(long)]
    pub breakdown: bool,
}

pub fn run_sip(args: SipArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let sip_input: SipInput = match request_from_input(args.input.as_deref())? {
        Some(req) => req,
        None => SipInput {
            monthly_investment: args
                .monthly_investment
                .ok_or("--monthly-investment is required (or provide --input)")?,
            annual_return_percent: args.expected_return,
            years: args.years.ok_or("--years is required (or provide --input)")?,
        },
    };

    limits::sip(&sip_input)?;

    if args.breakdown {
        let rows: Vec<sip::SipYear> = sip::sip_yearly_breakdown(&sip_input)?.collect();
        return Ok(serde_json::to_value(rows)?);
    }

    let result = sip::calculate_sip(&sip_input)?;
    Ok(serde_json::to_value(result)?)
}
