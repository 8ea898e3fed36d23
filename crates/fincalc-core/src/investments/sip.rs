use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::compounding::{annuity_due_factor, annuity_due_future_value, checked_product, monthly_rate};
use crate::types::{with_metadata, ComputationOutput, Money, Percent, Rate};
use crate::validate;
use crate::FinCalcResult;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SipInput {
    pub monthly_investment: Money,
    pub annual_return_percent: Percent,
    pub years: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SipOutput {
    pub future_value: Money,
    pub total_investment: Money,
    pub total_returns: Money,
    pub yearly_breakdown: Vec<SipYear>,
}

/// Position of the plan at the end of a given year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SipYear {
    pub year: u32,
    pub investment: Money,
    pub returns: Money,
    pub total_value: Money,
}

/// Lazy year-by-year view of a SIP, from year 1 through the full tenure.
///
/// The growth factor for every year end is computed, with overflow checks,
/// when the breakdown is built. Rows are priced on demand from those
/// factors, so iteration has no failure path and always yields `len()`
/// items. Clone it to walk the series again.
#[derive(Debug, Clone)]
pub struct SipBreakdown {
    monthly_investment: Money,
    year_end_factors: Vec<Decimal>,
    next: usize,
}

impl Iterator for SipBreakdown {
    type Item = SipYear;

    fn next(&mut self) -> Option<SipYear> {
        let factor = *self.year_end_factors.get(self.next)?;
        self.next += 1;
        let year = self.next as u32;
        // Both products are bounded by the final year's, which was checked
        // when the breakdown was built
        let investment = self.monthly_investment * Decimal::from(year * 12);
        let total_value = self.monthly_investment * factor;
        Some(SipYear {
            year,
            investment,
            returns: total_value - investment,
            total_value,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.year_end_factors.len() - self.next;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for SipBreakdown {}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// (future value, amount invested) after `years` of monthly contributions.
fn sip_position(monthly_investment: Money, rate: Rate, years: u32) -> FinCalcResult<(Money, Money)> {
    let months = validate::months(years)?;
    let future_value = annuity_due_future_value(monthly_investment, rate, months)?;
    let invested = checked_product("SIP total investment", monthly_investment, Decimal::from(months))?;
    Ok((future_value, invested))
}

/// Annuity-due factor at the end of each year, from one pass of monthly
/// compounding. Matches `compound(rate, 12 × year)` exactly.
fn year_end_factors(rate: Rate, years: u32) -> FinCalcResult<Vec<Decimal>> {
    let months = validate::months(years)?;
    let step = Decimal::ONE + rate;
    let mut growth = Decimal::ONE;
    let mut factors = Vec::with_capacity(years as usize);
    for month in 1..=months {
        growth = checked_product("SIP growth", growth, step)?;
        if month % 12 == 0 {
            factors.push(annuity_due_factor(rate, growth)?);
        }
    }
    Ok(factors)
}

fn validate_input(input: &SipInput) -> FinCalcResult<()> {
    validate::positive_amount("monthly_investment", input.monthly_investment)?;
    validate::positive_rate("annual_return_percent", input.annual_return_percent)?;
    validate::positive_period("years", input.years)
}

// ---------------------------------------------------------------------------
// Core functions
// ---------------------------------------------------------------------------

/// Build the lazy yearly breakdown for a SIP.
pub fn sip_yearly_breakdown(input: &SipInput) -> FinCalcResult<SipBreakdown> {
    validate_input(input)?;
    let rate = monthly_rate(input.annual_return_percent);
    // Price the full tenure so no earlier row can overflow
    sip_position(input.monthly_investment, rate, input.years)?;
    Ok(SipBreakdown {
        monthly_investment: input.monthly_investment,
        year_end_factors: year_end_factors(rate, input.years)?,
        next: 0,
    })
}

/// Future value of a monthly SIP, treating each installment as invested at
/// the start of its month.
pub fn calculate_sip(input: &SipInput) -> FinCalcResult<ComputationOutput<SipOutput>> {
    let start = Instant::now();

    validate_input(input)?;

    let rate = monthly_rate(input.annual_return_percent);
    let (future_value, total_investment) =
        sip_position(input.monthly_investment, rate, input.years)?;
    let yearly_breakdown: Vec<SipYear> = sip_yearly_breakdown(input)?.collect();

    let output = SipOutput {
        future_value,
        total_investment,
        total_returns: future_value - total_investment,
        yearly_breakdown,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Systematic Investment Plan (annuity-due future value, monthly compounding)",
        &serde_json::json!({
            "monthly_investment": input.monthly_investment.to_string(),
            "annual_return_percent": input.annual_return_percent.to_string(),
            "years": input.years,
        }),
        Vec::new(),
        elapsed,
        output,
    ))
}
