//! Entry limits applied before a quote is requested.
//!
//! The core accepts any positive amount. The CLI is stricter and matches the
//! minimums a customer can enter at a branch counter. PPF deposit and tenure
//! bands are left to the core, which reads them from configuration.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use fincalc_core::deposits::fixed::FixedDepositInput;
use fincalc_core::deposits::recurring::RecurringDepositInput;
use fincalc_core::instrument::InstrumentRequest;
use fincalc_core::investments::sip::SipInput;
use fincalc_core::loans::amortizing::LoanAdvancedInput;
use fincalc_core::loans::basic::LoanBasicInput;

pub const MIN_PRINCIPAL: Decimal = dec!(1000);
pub const MIN_RATE_PERCENT: Decimal = dec!(1.0);
pub const MIN_MONTHLY_AMOUNT: Decimal = dec!(100);
pub const MIN_YEARS: u32 = 1;

fn at_least(field: &str, value: Decimal, min: Decimal) -> Result<(), String> {
    if value < min {
        return Err(format!("{field} must be at least {min} (got {value})"));
    }
    Ok(())
}

fn tenure(years: u32) -> Result<(), String> {
    if years < MIN_YEARS {
        return Err(format!("years must be at least {MIN_YEARS} (got {years})"));
    }
    Ok(())
}

pub(crate) fn loan_basic(input: &LoanBasicInput) -> Result<(), String> {
    at_least("principal", input.principal, MIN_PRINCIPAL)?;
    at_least("annual_rate_percent", input.annual_rate_percent, MIN_RATE_PERCENT)?;
    tenure(input.years)
}

pub(crate) fn loan_advanced(input: &LoanAdvancedInput) -> Result<(), String> {
    at_least("principal", input.principal, MIN_PRINCIPAL)?;
    at_least("annual_rate_percent", input.annual_rate_percent, MIN_RATE_PERCENT)?;
    tenure(input.years)?;
    if let Some(fee) = input.processing_fee_percent {
        at_least("processing_fee_percent", fee, Decimal::ZERO)?;
    }
    Ok(())
}

pub(crate) fn fixed_deposit(input: &FixedDepositInput) -> Result<(), String> {
    at_least("principal", input.principal, MIN_PRINCIPAL)?;
    at_least("annual_rate_percent", input.annual_rate_percent, MIN_RATE_PERCENT)?;
    tenure(input.years)
}

pub(crate) fn recurring_deposit(input: &RecurringDepositInput) -> Result<(), String> {
    at_least("monthly_deposit", input.monthly_deposit, MIN_MONTHLY_AMOUNT)?;
    at_least("annual_rate_percent", input.annual_rate_percent, MIN_RATE_PERCENT)?;
    tenure(input.years)
}

pub(crate) fn sip(input: &SipInput) -> Result<(), String> {
    at_least("monthly_investment", input.monthly_investment, MIN_MONTHLY_AMOUNT)?;
    at_least("annual_return_percent", input.annual_return_percent, MIN_RATE_PERCENT)?;
    tenure(input.years)
}

/// Limits for a tagged request, by instrument.
pub(crate) fn request(req: &InstrumentRequest) -> Result<(), String> {
    match req {
        InstrumentRequest::LoanBasic(input) => loan_basic(input),
        InstrumentRequest::LoanAdvanced(input) => loan_advanced(input),
        InstrumentRequest::FixedDeposit(input) => fixed_deposit(input),
        InstrumentRequest::RecurringDeposit(input) => recurring_deposit(input),
        InstrumentRequest::Ppf(_) => Ok(()),
        InstrumentRequest::Sip(input) => sip(input),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fincalc_core::deposits::fixed::FdPayout;

    fn basic(principal: Decimal, rate: Decimal, years: u32) -> LoanBasicInput {
        LoanBasicInput {
            principal,
            annual_rate_percent: rate,
            years,
        }
    }

    #[test]
    fn test_tiny_loan_names_principal_floor() {
        let err = loan_basic(&basic(dec!(1), dec!(0.01), 1)).unwrap_err();
        assert_eq!(err, "principal must be at least 1000 (got 1)");
    }

    #[test]
    fn test_low_rate_names_rate_floor() {
        let err = loan_basic(&basic(dec!(5000), dec!(0.5), 1)).unwrap_err();
        assert!(err.starts_with("annual_rate_percent must be at least 1.0"));
    }

    #[test]
    fn test_floors_are_inclusive() {
        assert!(loan_basic(&basic(dec!(1000), dec!(1), 1)).is_ok());
        let fd = FixedDepositInput {
            principal: dec!(1000),
            annual_rate_percent: dec!(1.0),
            years: 1,
            payout: FdPayout::Cumulative,
        };
        assert!(fixed_deposit(&fd).is_ok());
    }

    #[test]
    fn test_zero_years_rejected() {
        let err = loan_basic(&basic(dec!(100000), dec!(10), 0)).unwrap_err();
        assert_eq!(err, "years must be at least 1 (got 0)");
    }

    #[test]
    fn test_monthly_floor_for_rd_and_sip() {
        let rd = RecurringDepositInput {
            monthly_deposit: dec!(99.99),
            annual_rate_percent: dec!(7),
            years: 5,
        };
        assert!(recurring_deposit(&rd).unwrap_err().starts_with("monthly_deposit"));

        let plan = SipInput {
            monthly_investment: dec!(50),
            annual_return_percent: dec!(12),
            years: 10,
        };
        assert!(sip(&plan).unwrap_err().starts_with("monthly_investment"));
    }

    #[test]
    fn test_negative_fee_rejected_but_absent_fee_allowed() {
        let mut loan = LoanAdvancedInput {
            principal: dec!(100000),
            annual_rate_percent: dec!(10),
            years: 1,
            processing_fee_percent: None,
            include_schedule: false,
        };
        assert!(loan_advanced(&loan).is_ok());
        loan.processing_fee_percent = Some(dec!(-1));
        assert!(loan_advanced(&loan).is_err());
    }

    #[test]
    fn test_tagged_requests_checked_by_instrument() {
        let small: InstrumentRequest = serde_json::from_str(
            r#"{"instrument": "fixed_deposit", "principal": "500", "annual_rate_percent": "7", "years": 5}"#,
        )
        .unwrap();
        assert!(request(&small).unwrap_err().starts_with("principal"));

        let ppf: InstrumentRequest = serde_json::from_str(
            r#"{"instrument": "ppf", "yearly_deposit": "500", "years": 15}"#,
        )
        .unwrap();
        assert!(request(&ppf).is_ok());
    }
}
