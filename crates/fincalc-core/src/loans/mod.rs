pub mod amortizing;
pub mod basic;
