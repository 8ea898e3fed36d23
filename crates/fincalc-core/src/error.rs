use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The precondition an input broke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DomainViolation {
    /// Rate is zero or negative. Rates divide the annuity formulas.
    RateMustBePositive,
    /// Tenure is zero. Tenure divides the flat EMI and sizes every loop.
    PeriodMustBePositive,
    AmountMustBePositive,
    FeeMustBeNonNegative,
    OutOfRange { min: Decimal, max: Decimal },
}

impl fmt::Display for DomainViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DomainViolation::RateMustBePositive => write!(f, "RateMustBePositive"),
            DomainViolation::PeriodMustBePositive => write!(f, "PeriodMustBePositive"),
            DomainViolation::AmountMustBePositive => write!(f, "AmountMustBePositive"),
            DomainViolation::FeeMustBeNonNegative => write!(f, "FeeMustBeNonNegative"),
            DomainViolation::OutOfRange { min, max } => {
                write!(f, "OutOfRange (must lie within [{min}, {max}])")
            }
        }
    }
}

#[derive(Debug, Error)]
pub enum FinCalcError {
    /// Input outside the documented domain. A zero divisor is reported
    /// here rather than surfacing as a division failure.
    #[error("Invalid input: {field}: {violation}")]
    InvalidDomainInput {
        field: String,
        violation: DomainViolation,
    },

    #[error("Arithmetic overflow in {context}")]
    Overflow { context: String },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl FinCalcError {
    pub(crate) fn domain(field: &str, violation: DomainViolation) -> Self {
        FinCalcError::InvalidDomainInput {
            field: field.into(),
            violation,
        }
    }

    /// The violated precondition, if this is a domain error.
    pub fn violation(&self) -> Option<DomainViolation> {
        match self {
            FinCalcError::InvalidDomainInput { violation, .. } => Some(*violation),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for FinCalcError {
    fn from(e: serde_json::Error) -> Self {
        FinCalcError::SerializationError(e.to_string())
    }
}
