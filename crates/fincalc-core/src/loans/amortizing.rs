use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::compounding::{amortizing_payment, checked_product, monthly_rate};
use crate::config::LoanConfig;
use crate::error::{DomainViolation, FinCalcError};
use crate::types::{with_metadata, ComputationOutput, Money, Percent, Rate};
use crate::validate;
use crate::FinCalcResult;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Input for the reducing-balance loan quote.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanAdvancedInput {
    pub principal: Money,
    pub annual_rate_percent: Percent,
    pub years: u32,
    /// Falls back to [`LoanConfig::default_processing_fee_percent`] when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub processing_fee_percent: Option<Percent>,
    /// Attach a year-wise amortization schedule to the quote.
    #[serde(default)]
    pub include_schedule: bool,
}

/// Reducing-balance (amortized) loan quote.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanAdvancedOutput {
    pub emi: Money,
    pub total_payment: Money,
    pub total_interest: Money,
    /// Informational only; not deducted from the amount disbursed.
    pub processing_fee: Money,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule: Option<Vec<AmortizationYear>>,
}

/// One loan year of the amortization schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AmortizationYear {
    pub year: u32,
    pub opening_balance: Money,
    pub principal_repaid: Money,
    pub interest_paid: Money,
    pub closing_balance: Money,
}

// ---------------------------------------------------------------------------
// Core function
// ---------------------------------------------------------------------------

/// Amortizing loan quote at the default loan parameters.
pub fn calculate_loan_advanced(
    input: &LoanAdvancedInput,
) -> FinCalcResult<ComputationOutput<LoanAdvancedOutput>> {
    calculate_loan_advanced_with(input, &LoanConfig::default())
}

/// Quote an amortizing loan: a level EMI that covers the month's interest
/// on the outstanding balance and repays the rest as principal.
///
/// A fee named on the input wins over `config`.
pub fn calculate_loan_advanced_with(
    input: &LoanAdvancedInput,
    config: &LoanConfig,
) -> FinCalcResult<ComputationOutput<LoanAdvancedOutput>> {
    let start = Instant::now();

    validate::positive_amount("principal", input.principal)?;
    validate::positive_rate("annual_rate_percent", input.annual_rate_percent)?;
    validate::positive_period("years", input.years)?;
    let fee_percent = input
        .processing_fee_percent
        .unwrap_or(config.default_processing_fee_percent);
    if fee_percent < Decimal::ZERO {
        return Err(FinCalcError::domain(
            "processing_fee_percent",
            DomainViolation::FeeMustBeNonNegative,
        ));
    }

    let r = monthly_rate(input.annual_rate_percent);
    let months = validate::months(input.years)?;

    let emi = amortizing_payment(input.principal, r, months)?;
    let total_payment = checked_product("total loan payment", emi, Decimal::from(months))?;
    let total_interest = total_payment - input.principal;
    let processing_fee = checked_product("processing fee", input.principal, fee_percent)? / dec!(100);

    let schedule = if input.include_schedule {
        Some(amortization_schedule(input.principal, r, emi, input.years)?)
    } else {
        None
    };

    let output = LoanAdvancedOutput {
        emi,
        total_payment,
        total_interest,
        processing_fee,
        schedule,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Amortizing loan (reducing balance, monthly compounding at rate/1200)",
        &serde_json::json!({
            "principal": input.principal.to_string(),
            "annual_rate_percent": input.annual_rate_percent.to_string(),
            "years": input.years,
            "processing_fee_percent": fee_percent.to_string(),
        }),
        Vec::new(),
        elapsed,
        output,
    ))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Roll the balance month by month and aggregate per loan year.
fn amortization_schedule(
    principal: Money,
    monthly: Rate,
    emi: Money,
    years: u32,
) -> FinCalcResult<Vec<AmortizationYear>> {
    let mut rows = Vec::with_capacity(years as usize);
    let mut balance = principal;

    for year in 1..=years {
        let opening = balance;
        let mut interest_paid = Decimal::ZERO;
        let mut principal_repaid = Decimal::ZERO;

        for month in 0..12 {
            let interest = checked_product("schedule interest", balance, monthly)?;
            // Last installment clears whatever rounding left behind
            let repaid = if year == years && month == 11 {
                balance
            } else {
                (emi - interest).min(balance)
            };
            balance -= repaid;
            interest_paid += interest;
            principal_repaid += repaid;
        }

        rows.push(AmortizationYear {
            year,
            opening_balance: opening,
            principal_repaid,
            interest_paid,
            closing_balance: balance,
        });
    }

    Ok(rows)
}
