use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::error::{DomainViolation, FinCalcError};
use crate::types::{Money, Percent, Rate};
use crate::FinCalcResult;

/// Monthly rate from an annual percentage (percent / 1200).
pub fn monthly_rate(annual_percent: Percent) -> Rate {
    annual_percent / dec!(1200)
}

/// Annual rate from an annual percentage (percent / 100).
pub fn annual_rate(annual_percent: Percent) -> Rate {
    annual_percent / dec!(100)
}

fn overflow(context: &str) -> FinCalcError {
    FinCalcError::Overflow {
        context: context.into(),
    }
}

/// `a × b`, reporting overflow against `context`.
pub(crate) fn checked_product(context: &str, a: Decimal, b: Decimal) -> FinCalcResult<Decimal> {
    a.checked_mul(b).ok_or_else(|| overflow(context))
}

/// `a + b`, reporting overflow against `context`.
pub(crate) fn checked_sum(context: &str, a: Decimal, b: Decimal) -> FinCalcResult<Decimal> {
    a.checked_add(b).ok_or_else(|| overflow(context))
}

/// Simple interest on `principal` at `annual_percent` for `years`:
/// `P × rate × years / 100`.
pub fn simple_interest(principal: Money, annual_percent: Percent, years: u32) -> FinCalcResult<Money> {
    principal
        .checked_mul(annual_percent)
        .and_then(|v| v.checked_mul(Decimal::from(years)))
        .and_then(|v| v.checked_div(dec!(100)))
        .ok_or_else(|| overflow("simple interest"))
}

/// Compute (1 + r)^n via iterative multiplication (avoids Decimal::powd drift).
pub fn compound(rate: Rate, periods: u32) -> FinCalcResult<Decimal> {
    let factor = Decimal::ONE + rate;
    let mut result = Decimal::ONE;
    for _ in 0..periods {
        result = result
            .checked_mul(factor)
            .ok_or_else(|| FinCalcError::Overflow {
                context: format!("compounding (1 + {rate})^{periods}"),
            })?;
    }
    Ok(result)
}

/// Future value of an annuity-due: each payment is made at the start of its
/// period and compounds for that period too.
///
/// `payment × ((1+r)^n − 1) × (1+r) / r`
pub fn annuity_due_future_value(payment: Money, rate: Rate, periods: u32) -> FinCalcResult<Money> {
    if rate <= Decimal::ZERO {
        return Err(FinCalcError::domain("rate", DomainViolation::RateMustBePositive));
    }
    let factor = annuity_due_factor(rate, compound(rate, periods)?)?;
    checked_product("annuity-due future value", payment, factor)
}

/// `((1+r)^n − 1) × (1+r) / r` given `growth = (1+r)^n`; the future value
/// of one unit paid at the start of each of the `n` periods.
pub(crate) fn annuity_due_factor(rate: Rate, growth: Decimal) -> FinCalcResult<Decimal> {
    (growth - Decimal::ONE)
        .checked_mul(Decimal::ONE + rate)
        .and_then(|v| v.checked_div(rate))
        .ok_or_else(|| overflow("annuity-due factor"))
}

/// Level installment that retires `principal` over `periods` at `rate`.
///
/// `P·r·(1+r)^n / ((1+r)^n − 1)`
pub fn amortizing_payment(principal: Money, rate: Rate, periods: u32) -> FinCalcResult<Money> {
    if periods == 0 {
        return Err(FinCalcError::domain(
            "periods",
            DomainViolation::PeriodMustBePositive,
        ));
    }
    if rate <= Decimal::ZERO {
        return Err(FinCalcError::domain("rate", DomainViolation::RateMustBePositive));
    }
    let growth = compound(rate, periods)?;
    let denominator = growth - Decimal::ONE;
    if denominator.is_zero() {
        // Rate too small to register at 28 digits.
        return Err(FinCalcError::domain("rate", DomainViolation::RateMustBePositive));
    }
    principal
        .checked_mul(rate)
        .and_then(|v| v.checked_mul(growth))
        .and_then(|v| v.checked_div(denominator))
        .ok_or_else(|| overflow("amortizing payment"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_compound_basic() {
        assert_eq!(compound(dec!(0.07), 0).unwrap(), Decimal::ONE);
        assert_eq!(compound(dec!(0.10), 2).unwrap(), dec!(1.21));
    }

    #[test]
    fn test_compound_overflow_is_reported() {
        let err = compound(dec!(1000), 50).unwrap_err();
        assert!(matches!(err, FinCalcError::Overflow { .. }));
    }

    #[test]
    fn test_monthly_rate() {
        assert_eq!(monthly_rate(dec!(12)), dec!(0.01));
        assert_eq!(annual_rate(dec!(7.1)), dec!(0.071));
    }

    #[test]
    fn test_annuity_due_single_period() {
        // One payment of 100 at 1% compounds for one period
        let fv = annuity_due_future_value(dec!(100), dec!(0.01), 1).unwrap();
        assert_eq!(fv, dec!(101));
    }

    #[test]
    fn test_annuity_due_zero_rate_rejected() {
        let err = annuity_due_future_value(dec!(100), Decimal::ZERO, 12).unwrap_err();
        assert_eq!(err.violation(), Some(DomainViolation::RateMustBePositive));
    }

    #[test]
    fn test_amortizing_payment_standard_loan() {
        // 1 lakh at 12% for 12 months ≈ 8884.88
        let emi = amortizing_payment(dec!(100000), dec!(0.01), 12).unwrap();
        assert!((emi - dec!(8884.88)).abs() < dec!(0.01));
    }

    #[test]
    fn test_amortizing_payment_overflow_is_reported() {
        let err = amortizing_payment(Decimal::MAX, dec!(0.01), 360).unwrap_err();
        assert!(matches!(err, FinCalcError::Overflow { .. }));
    }

    #[test]
    fn test_simple_interest() {
        assert_eq!(simple_interest(dec!(100000), dec!(10), 3).unwrap(), dec!(30000));
        let err = simple_interest(Decimal::MAX, dec!(10), 1).unwrap_err();
        assert!(matches!(err, FinCalcError::Overflow { .. }));
    }

    #[test]
    fn test_amortizing_payment_zero_periods_rejected() {
        let err = amortizing_payment(dec!(100000), dec!(0.01), 0).unwrap_err();
        assert_eq!(err.violation(), Some(DomainViolation::PeriodMustBePositive));
    }
}
