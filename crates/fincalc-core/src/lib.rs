pub mod compounding;
pub mod config;
pub mod error;
pub mod types;
mod validate;

#[cfg(feature = "loans")]
pub mod loans;

#[cfg(feature = "deposits")]
pub mod deposits;

#[cfg(feature = "investments")]
pub mod investments;

#[cfg(all(feature = "loans", feature = "deposits", feature = "investments"))]
pub mod instrument;

pub use config::CalculatorConfig;
pub use error::{DomainViolation, FinCalcError};
pub use types::*;

/// Standard result type for all fincalc operations
pub type FinCalcResult<T> = Result<T, FinCalcError>;
