//! Precondition checks shared by the calculators.

use rust_decimal::Decimal;

use crate::error::{DomainViolation, FinCalcError};
use crate::FinCalcResult;

pub(crate) fn positive_amount(field: &str, value: Decimal) -> FinCalcResult<()> {
    if value <= Decimal::ZERO {
        return Err(FinCalcError::domain(
            field,
            DomainViolation::AmountMustBePositive,
        ));
    }
    Ok(())
}

pub(crate) fn positive_rate(field: &str, value: Decimal) -> FinCalcResult<()> {
    if value <= Decimal::ZERO {
        return Err(FinCalcError::domain(field, DomainViolation::RateMustBePositive));
    }
    Ok(())
}

pub(crate) fn positive_period(field: &str, value: u32) -> FinCalcResult<()> {
    if value == 0 {
        return Err(FinCalcError::domain(
            field,
            DomainViolation::PeriodMustBePositive,
        ));
    }
    Ok(())
}

/// Month count for a tenure in years.
pub(crate) fn months(years: u32) -> FinCalcResult<u32> {
    years.checked_mul(12).ok_or_else(|| FinCalcError::Overflow {
        context: format!("{years} years in months"),
    })
}

pub(crate) fn within(field: &str, value: Decimal, min: Decimal, max: Decimal) -> FinCalcResult<()> {
    if value < min || value > max {
        return Err(FinCalcError::domain(
            field,
            DomainViolation::OutOfRange { min, max },
        ));
    }
    Ok(())
}
