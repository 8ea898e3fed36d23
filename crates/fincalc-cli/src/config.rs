use std::fs;
use std::path::Path;

use fincalc_core::CalculatorConfig;
use tracing::info;

/// Load calculator configuration from a TOML file, or fall back to the
/// built-in scheme defaults when no path is given.
pub fn load(path: Option<&str>) -> Result<CalculatorConfig, Box<dyn std::error::Error>> {
    let Some(path) = path else {
        return Ok(CalculatorConfig::default());
    };

    let p = Path::new(path);
    let contents = fs::read_to_string(p)
        .map_err(|e| format!("Failed to read config '{}': {}", p.display(), e))?;
    let cfg = parse(&contents)
        .map_err(|e| format!("Invalid config '{}': {}", p.display(), e))?;
    info!(path = %p.display(), "loaded calculator configuration");
    Ok(cfg)
}

fn parse(contents: &str) -> Result<CalculatorConfig, Box<dyn std::error::Error>> {
    let cfg: CalculatorConfig = toml::from_str(contents)?;
    cfg.validate()?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_no_path_gives_defaults() {
        let cfg = load(None).unwrap();
        assert_eq!(cfg, CalculatorConfig::default());
    }

    #[test]
    fn test_partial_toml_overrides_rate_only() {
        let cfg = parse(
            r#"
            [ppf]
            annual_rate_percent = "7.6"
            "#,
        )
        .unwrap();
        assert_eq!(cfg.ppf.annual_rate_percent, dec!(7.6));
        assert_eq!(cfg.ppf.max_yearly_deposit, dec!(150000));
        assert_eq!(cfg.loan.default_processing_fee_percent, dec!(1));
    }

    #[test]
    fn test_loan_fee_override() {
        let cfg = parse(
            r#"
            [loan]
            default_processing_fee_percent = "0.5"
            "#,
        )
        .unwrap();
        assert_eq!(cfg.loan.default_processing_fee_percent, dec!(0.5));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let err = parse(
            r#"
            [ppf]
            annual_rate_percent = "0"
            "#,
        );
        assert!(err.is_err());
    }

    #[test]
    fn test_missing_file_reported() {
        assert!(load(Some("/definitely/not/here.toml")).is_err());
    }
}
