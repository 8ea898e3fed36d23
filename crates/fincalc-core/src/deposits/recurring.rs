use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::compounding::{annuity_due_future_value, checked_product, monthly_rate};
use crate::types::{with_metadata, ComputationOutput, Money, Percent};
use crate::validate;
use crate::FinCalcResult;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecurringDepositInput {
    pub monthly_deposit: Money,
    pub annual_rate_percent: Percent,
    pub years: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecurringDepositOutput {
    pub maturity_amount: Money,
    pub total_interest: Money,
    pub total_deposited: Money,
}

/// Recurring deposit with monthly compounding; each installment is made at
/// the start of its month.
pub fn calculate_recurring_deposit(
    input: &RecurringDepositInput,
) -> FinCalcResult<ComputationOutput<RecurringDepositOutput>> {
    let start = Instant::now();

    validate::positive_amount("monthly_deposit", input.monthly_deposit)?;
    validate::positive_rate("annual_rate_percent", input.annual_rate_percent)?;
    validate::positive_period("years", input.years)?;

    let months = validate::months(input.years)?;
    let total_deposited =
        checked_product("total deposited", input.monthly_deposit, Decimal::from(months))?;
    let maturity_amount = annuity_due_future_value(
        input.monthly_deposit,
        monthly_rate(input.annual_rate_percent),
        months,
    )?;

    let output = RecurringDepositOutput {
        maturity_amount,
        total_interest: maturity_amount - total_deposited,
        total_deposited,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Recurring deposit (monthly compounding at rate/1200, installments at period start)",
        &serde_json::json!({
            "monthly_deposit": input.monthly_deposit.to_string(),
            "annual_rate_percent": input.annual_rate_percent.to_string(),
            "years": input.years,
        }),
        Vec::new(),
        elapsed,
        output,
    ))
}
