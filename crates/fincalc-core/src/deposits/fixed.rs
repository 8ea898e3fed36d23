use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::compounding::{annual_rate, checked_product, checked_sum, compound, simple_interest};
use crate::types::{with_metadata, ComputationOutput, Money, Percent};
use crate::validate;
use crate::FinCalcResult;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// How the deposit pays its interest.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FdPayout {
    /// Interest reinvested and paid at maturity (STDR). Compounds annually.
    #[default]
    Cumulative,
    /// Interest paid out as it accrues (TDR). Modeled as simple interest.
    NonCumulative,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixedDepositInput {
    pub principal: Money,
    pub annual_rate_percent: Percent,
    pub years: u32,
    #[serde(default)]
    pub payout: FdPayout,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FixedDepositOutput {
    pub maturity_amount: Money,
    pub total_interest: Money,
}

// ---------------------------------------------------------------------------
// Core function
// ---------------------------------------------------------------------------

pub fn calculate_fixed_deposit(
    input: &FixedDepositInput,
) -> FinCalcResult<ComputationOutput<FixedDepositOutput>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    validate::positive_amount("principal", input.principal)?;
    validate::positive_rate("annual_rate_percent", input.annual_rate_percent)?;
    validate::positive_period("years", input.years)?;

    let (maturity_amount, methodology) = match input.payout {
        FdPayout::Cumulative => (
            checked_product(
                "fixed deposit maturity",
                input.principal,
                compound(annual_rate(input.annual_rate_percent), input.years)?,
            )?,
            "Cumulative fixed deposit (annual compounding, paid at maturity)",
        ),
        FdPayout::NonCumulative => {
            warnings.push(
                "Quarterly and monthly payout schedules are not modeled; \
                 interest is reported as simple interest over the tenure"
                    .into(),
            );
            let interest =
                simple_interest(input.principal, input.annual_rate_percent, input.years)?;
            (
                checked_sum("fixed deposit maturity", input.principal, interest)?,
                "Non-cumulative fixed deposit (simple interest)",
            )
        }
    };

    let output = FixedDepositOutput {
        maturity_amount,
        total_interest: maturity_amount - input.principal,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        methodology,
        &serde_json::json!({
            "principal": input.principal.to_string(),
            "annual_rate_percent": input.annual_rate_percent.to_string(),
            "years": input.years,
            "payout": format!("{:?}", input.payout),
        }),
        warnings,
        elapsed,
        output,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{DomainViolation, FinCalcError};
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn input(payout: FdPayout) -> FixedDepositInput {
        FixedDepositInput {
            principal: dec!(100000),
            annual_rate_percent: dec!(7),
            years: 5,
            payout,
        }
    }

    #[test]
    fn test_cumulative_compounds_annually() {
        let out = calculate_fixed_deposit(&input(FdPayout::Cumulative))
            .unwrap()
            .result;
        // 100000 × 1.07^5
        assert_eq!(out.maturity_amount, dec!(140255.1730700));
        assert!((out.total_interest - dec!(40255.17)).abs() < dec!(0.01));
    }

    #[test]
    fn test_non_cumulative_simple_interest() {
        let result = calculate_fixed_deposit(&input(FdPayout::NonCumulative)).unwrap();
        assert_eq!(result.result.total_interest, dec!(35000));
        assert_eq!(result.result.maturity_amount, dec!(135000));
        assert_eq!(result.warnings.len(), 1);
    }

    #[test]
    fn test_cumulative_beats_simple_beyond_one_year() {
        let c = calculate_fixed_deposit(&input(FdPayout::Cumulative)).unwrap().result;
        let s = calculate_fixed_deposit(&input(FdPayout::NonCumulative)).unwrap().result;
        assert!(c.maturity_amount > s.maturity_amount);
    }

    #[test]
    fn test_payout_defaults_to_cumulative() {
        let parsed: FixedDepositInput = serde_json::from_str(
            r#"{"principal": "1000", "annual_rate_percent": "6.5", "years": 2}"#,
        )
        .unwrap();
        assert_eq!(parsed.payout, FdPayout::Cumulative);
    }

    #[test]
    fn test_zero_rate_rejected() {
        let mut i = input(FdPayout::Cumulative);
        i.annual_rate_percent = Decimal::ZERO;
        let err = calculate_fixed_deposit(&i).unwrap_err();
        assert_eq!(err.violation(), Some(DomainViolation::RateMustBePositive));
    }

    #[test]
    fn test_large_cumulative_deposit_reports_overflow() {
        // 1e15 doubling for 50 years exceeds 28 significant digits
        let i = FixedDepositInput {
            principal: Decimal::from(10_u64.pow(15)),
            annual_rate_percent: dec!(100),
            years: 50,
            payout: FdPayout::Cumulative,
        };
        let err = calculate_fixed_deposit(&i).unwrap_err();
        assert!(matches!(err, FinCalcError::Overflow { .. }));
    }

    #[test]
    fn test_large_non_cumulative_deposit_reports_overflow() {
        let mut i = input(FdPayout::NonCumulative);
        i.principal = Decimal::MAX;
        let err = calculate_fixed_deposit(&i).unwrap_err();
        assert!(matches!(err, FinCalcError::Overflow { .. }));
    }
}
