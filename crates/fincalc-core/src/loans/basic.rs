use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::compounding::{checked_sum, simple_interest};
use crate::types::{with_metadata, ComputationOutput, Money, Percent};
use crate::validate;
use crate::FinCalcResult;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Input for the flat-interest loan quote.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanBasicInput {
    pub principal: Money,
    pub annual_rate_percent: Percent,
    pub years: u32,
}

/// Flat-interest loan quote.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanBasicOutput {
    pub interest: Money,
    pub total: Money,
    pub monthly_emi: Money,
}

// ---------------------------------------------------------------------------
// Core function
// ---------------------------------------------------------------------------

/// Quote a loan at simple interest on the original principal, with the
/// total spread evenly over every month of the tenure.
///
/// This is not an amortization schedule: interest never falls as principal
/// is repaid. See [`crate::loans::amortizing`] for the reducing-balance EMI.
pub fn calculate_loan_basic(
    input: &LoanBasicInput,
) -> FinCalcResult<ComputationOutput<LoanBasicOutput>> {
    let start = Instant::now();

    validate::positive_amount("principal", input.principal)?;
    validate::positive_rate("annual_rate_percent", input.annual_rate_percent)?;
    validate::positive_period("years", input.years)?;

    let interest = simple_interest(input.principal, input.annual_rate_percent, input.years)?;
    let total = checked_sum("loan total", input.principal, interest)?;
    // At least twelve months, so the division only shrinks the total
    let monthly_emi = total / (Decimal::from(input.years) * dec!(12));

    let output = LoanBasicOutput {
        interest,
        total,
        monthly_emi,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Flat-rate loan (simple interest on original principal, spread evenly per month)",
        &serde_json::json!({
            "principal": input.principal.to_string(),
            "annual_rate_percent": input.annual_rate_percent.to_string(),
            "years": input.years,
        }),
        Vec::new(),
        elapsed,
        output,
    ))
}
