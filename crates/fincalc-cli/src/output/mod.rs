pub mod csv_out;
pub mod json;
pub mod minimal;
pub mod table;

use crate::OutputFormat;
use rust_decimal::Decimal;
use serde_json::Value;
use std::str::FromStr;

/// Dispatch output to the appropriate formatter.
pub fn format_output(format: &OutputFormat, value: &Value) {
    match format {
        OutputFormat::Json => json::print_json(value),
        OutputFormat::Table => table::print_table(value),
        OutputFormat::Csv => csv_out::print_csv(value),
        OutputFormat::Minimal => minimal::print_minimal(value),
    }
}

/// Decimals travel as strings; show them to the paisa for people.
pub(crate) fn display_amount(s: &str) -> String {
    match Decimal::from_str(s) {
        Ok(d) => d.round_dp(2).to_string(),
        Err(_) => s.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_amount_rounds_decimals() {
        assert_eq!(display_amount("9166.666666666666"), "9166.67");
        assert_eq!(display_amount("110000"), "110000");
        assert_eq!(display_amount("Cumulative"), "Cumulative");
    }
}
