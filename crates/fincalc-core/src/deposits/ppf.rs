use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::compounding::{annual_rate, checked_product};
use crate::config::{PpfConfig, DEFAULT_PPF_RATE_PERCENT};
use crate::error::FinCalcError;
use crate::types::{with_metadata, ComputationOutput, Money, Percent};
use crate::validate;
use crate::FinCalcResult;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PpfInput {
    pub yearly_deposit: Money,
    pub years: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PpfOutput {
    pub maturity_amount: Money,
    pub total_interest: Money,
    pub total_deposited: Money,
    pub annual_rate_percent: Percent,
    pub year_by_year: Vec<PpfYear>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PpfYear {
    pub year: u32,
    pub opening_balance: Money,
    pub deposit: Money,
    pub interest: Money,
    pub closing_balance: Money,
}

// ---------------------------------------------------------------------------
// Core functions
// ---------------------------------------------------------------------------

/// PPF projection at the default scheme parameters.
pub fn calculate_ppf(input: &PpfInput) -> FinCalcResult<ComputationOutput<PpfOutput>> {
    calculate_ppf_with(input, &PpfConfig::default())
}

/// PPF projection: each year's deposit is credited first, then the whole
/// balance earns a year of interest.
pub fn calculate_ppf_with(
    input: &PpfInput,
    config: &PpfConfig,
) -> FinCalcResult<ComputationOutput<PpfOutput>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    validate::positive_rate("ppf.annual_rate_percent", config.annual_rate_percent)?;
    validate::positive_amount("yearly_deposit", input.yearly_deposit)?;
    validate::positive_period("years", input.years)?;
    validate::within(
        "yearly_deposit",
        input.yearly_deposit,
        config.min_yearly_deposit,
        config.max_yearly_deposit,
    )?;
    validate::within(
        "years",
        Decimal::from(input.years),
        Decimal::from(config.min_years),
        Decimal::from(config.max_years),
    )?;

    if config.annual_rate_percent != DEFAULT_PPF_RATE_PERCENT {
        warnings.push(format!(
            "PPF rate overridden to {}% (scheme default {}%)",
            config.annual_rate_percent, DEFAULT_PPF_RATE_PERCENT
        ));
    }

    let growth = Decimal::ONE + annual_rate(config.annual_rate_percent);
    let mut balance = Decimal::ZERO;
    let mut year_by_year = Vec::with_capacity(input.years as usize);

    for year in 1..=input.years {
        let opening = balance;
        let closing = balance
            .checked_add(input.yearly_deposit)
            .and_then(|v| v.checked_mul(growth))
            .ok_or_else(|| FinCalcError::Overflow {
                context: format!("PPF balance in year {year}"),
            })?;
        year_by_year.push(PpfYear {
            year,
            opening_balance: opening,
            deposit: input.yearly_deposit,
            interest: closing - opening - input.yearly_deposit,
            closing_balance: closing,
        });
        balance = closing;
    }

    let total_deposited =
        checked_product("PPF total deposited", input.yearly_deposit, Decimal::from(input.years))?;
    let output = PpfOutput {
        maturity_amount: balance,
        total_interest: balance - total_deposited,
        total_deposited,
        annual_rate_percent: config.annual_rate_percent,
        year_by_year,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Public Provident Fund (deposit at start of year, annual compounding)",
        &serde_json::json!({
            "yearly_deposit": input.yearly_deposit.to_string(),
            "years": input.years,
            "annual_rate_percent": config.annual_rate_percent.to_string(),
        }),
        warnings,
        elapsed,
        output,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DomainViolation;
    use rust_decimal_macros::dec;

    fn max_deposit_fifteen_years() -> PpfInput {
        PpfInput {
            yearly_deposit: dec!(150000),
            years: 15,
        }
    }

    #[test]
    fn test_matches_deposit_then_compound_loop() {
        let out = calculate_ppf(&max_deposit_fifteen_years()).unwrap().result;

        let mut expected = Decimal::ZERO;
        for _ in 0..15 {
            expected = (expected + dec!(150000)) * dec!(1.071);
        }

        assert_eq!(out.maturity_amount, expected);
        assert_eq!(out.total_deposited, dec!(2250000));
        assert_eq!(out.total_interest, expected - dec!(2250000));
        assert!((out.maturity_amount - dec!(4068209.22)).abs() < dec!(0.01));
    }

    #[test]
    fn test_year_by_year_chains() {
        let out = calculate_ppf(&max_deposit_fifteen_years()).unwrap().result;
        assert_eq!(out.year_by_year.len(), 15);
        assert_eq!(out.year_by_year[0].closing_balance, dec!(160650));
        for pair in out.year_by_year.windows(2) {
            assert_eq!(pair[0].closing_balance, pair[1].opening_balance);
        }
        let last = out.year_by_year.last().unwrap();
        assert_eq!(last.closing_balance, out.maturity_amount);
    }

    #[test]
    fn test_rate_override_changes_result_and_warns() {
        let cfg = PpfConfig {
            annual_rate_percent: dec!(8),
            ..PpfConfig::default()
        };
        let base = calculate_ppf(&max_deposit_fifteen_years()).unwrap();
        let bumped = calculate_ppf_with(&max_deposit_fifteen_years(), &cfg).unwrap();
        assert!(bumped.result.maturity_amount > base.result.maturity_amount);
        assert!(base.warnings.is_empty());
        assert_eq!(bumped.warnings.len(), 1);
    }

    #[test]
    fn test_unbounded_config_reports_overflow() {
        let cfg = PpfConfig {
            max_yearly_deposit: Decimal::MAX,
            ..PpfConfig::default()
        };
        let input = PpfInput {
            yearly_deposit: Decimal::MAX,
            years: 15,
        };
        let err = calculate_ppf_with(&input, &cfg).unwrap_err();
        assert!(matches!(err, FinCalcError::Overflow { .. }));
    }

    #[test]
    fn test_deposit_above_ceiling_rejected() {
        let input = PpfInput {
            yearly_deposit: dec!(150001),
            years: 15,
        };
        let err = calculate_ppf(&input).unwrap_err();
        assert!(matches!(
            err.violation(),
            Some(DomainViolation::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_tenure_below_lock_in_rejected() {
        let input = PpfInput {
            yearly_deposit: dec!(10000),
            years: 10,
        };
        assert!(calculate_ppf(&input).is_err());
    }

    #[test]
    fn test_zero_years_is_period_error() {
        let input = PpfInput {
            yearly_deposit: dec!(10000),
            years: 0,
        };
        let err = calculate_ppf(&input).unwrap_err();
        assert_eq!(err.violation(), Some(DomainViolation::PeriodMustBePositive));
    }
}
