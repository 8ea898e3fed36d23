//! Statutory and product defaults that change over time.
//!
//! Everything here has a serde default so a partial TOML file only needs to
//! name the values it overrides.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::FinCalcError;
use crate::types::{Money, Percent};
use crate::FinCalcResult;

/// Calculator-wide configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CalculatorConfig {
    #[serde(default)]
    pub ppf: PpfConfig,
    #[serde(default)]
    pub loan: LoanConfig,
}

/// Public Provident Fund scheme parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PpfConfig {
    /// Government-notified annual rate, compounded yearly.
    #[serde(default = "default_ppf_rate")]
    pub annual_rate_percent: Percent,
    #[serde(default = "default_ppf_min_deposit")]
    pub min_yearly_deposit: Money,
    #[serde(default = "default_ppf_max_deposit")]
    pub max_yearly_deposit: Money,
    #[serde(default = "default_ppf_min_years")]
    pub min_years: u32,
    #[serde(default = "default_ppf_max_years")]
    pub max_years: u32,
}

/// Loan product defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanConfig {
    /// Processing fee applied when a quote does not name one.
    #[serde(default = "default_processing_fee")]
    pub default_processing_fee_percent: Percent,
}

pub const DEFAULT_PPF_RATE_PERCENT: Decimal = dec!(7.1);

fn default_ppf_rate() -> Percent {
    DEFAULT_PPF_RATE_PERCENT
}

fn default_ppf_min_deposit() -> Money {
    dec!(500)
}

fn default_ppf_max_deposit() -> Money {
    dec!(150000)
}

fn default_ppf_min_years() -> u32 {
    15
}

fn default_ppf_max_years() -> u32 {
    50
}

fn default_processing_fee() -> Percent {
    Decimal::ONE
}

impl Default for PpfConfig {
    fn default() -> Self {
        Self {
            annual_rate_percent: default_ppf_rate(),
            min_yearly_deposit: default_ppf_min_deposit(),
            max_yearly_deposit: default_ppf_max_deposit(),
            min_years: default_ppf_min_years(),
            max_years: default_ppf_max_years(),
        }
    }
}

impl Default for LoanConfig {
    fn default() -> Self {
        Self {
            default_processing_fee_percent: default_processing_fee(),
        }
    }
}

impl CalculatorConfig {
    /// Reject configurations no calculation could satisfy.
    pub fn validate(&self) -> FinCalcResult<()> {
        let ppf = &self.ppf;
        if ppf.annual_rate_percent <= Decimal::ZERO {
            return Err(FinCalcError::InvalidConfig(
                "ppf.annual_rate_percent must be > 0".into(),
            ));
        }
        if ppf.min_yearly_deposit <= Decimal::ZERO
            || ppf.min_yearly_deposit > ppf.max_yearly_deposit
        {
            return Err(FinCalcError::InvalidConfig(
                "ppf deposit bounds must satisfy 0 < min_yearly_deposit <= max_yearly_deposit"
                    .into(),
            ));
        }
        if ppf.min_years == 0 || ppf.min_years > ppf.max_years {
            return Err(FinCalcError::InvalidConfig(
                "ppf tenure bounds must satisfy 0 < min_years <= max_years".into(),
            ));
        }
        if self.loan.default_processing_fee_percent < Decimal::ZERO {
            return Err(FinCalcError::InvalidConfig(
                "loan.default_processing_fee_percent must be >= 0".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_current_scheme() {
        let cfg = CalculatorConfig::default();
        assert_eq!(cfg.ppf.annual_rate_percent, dec!(7.1));
        assert_eq!(cfg.ppf.min_yearly_deposit, dec!(500));
        assert_eq!(cfg.ppf.max_yearly_deposit, dec!(150000));
        assert_eq!(cfg.ppf.min_years, 15);
        assert_eq!(cfg.ppf.max_years, 50);
        assert_eq!(cfg.loan.default_processing_fee_percent, dec!(1));
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let cfg: CalculatorConfig =
            serde_json::from_str(r#"{"ppf": {"annual_rate_percent": "7.6"}}"#).unwrap();
        assert_eq!(cfg.ppf.annual_rate_percent, dec!(7.6));
        assert_eq!(cfg.ppf.max_years, 50);
        assert_eq!(cfg.loan, LoanConfig::default());
    }

    #[test]
    fn test_validate_rejects_zero_ppf_rate() {
        let mut cfg = CalculatorConfig::default();
        cfg.ppf.annual_rate_percent = Decimal::ZERO;
        assert!(matches!(cfg.validate(), Err(FinCalcError::InvalidConfig(_))));
    }

    #[test]
    fn test_validate_rejects_inverted_bounds() {
        let mut cfg = CalculatorConfig::default();
        cfg.ppf.min_years = 60;
        assert!(cfg.validate().is_err());
    }
}
