use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};

/// Read a JSON or YAML input file and deserialise into a typed struct.
/// YAML is chosen by a `.yaml`/`.yml` extension; anything else is JSON.
pub fn read_input<T: DeserializeOwned>(path: &str) -> Result<T, Box<dyn std::error::Error>> {
    let canonical = resolve_path(path)?;
    let contents = fs::read_to_string(&canonical)
        .map_err(|e| format!("Failed to read '{}': {}", canonical.display(), e))?;
    parse(&canonical, &contents)
        .map_err(|e| format!("Failed to parse '{}': {}", canonical.display(), e).into())
}

fn parse<T: DeserializeOwned>(path: &Path, contents: &str) -> Result<T, Box<dyn std::error::Error>> {
    let is_yaml = matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("yaml") | Some("yml")
    );
    if is_yaml {
        Ok(serde_yaml::from_str(contents)?)
    } else {
        Ok(serde_json::from_str(contents)?)
    }
}

/// Resolve the path against the working directory and check it is a file.
fn resolve_path(path: &str) -> Result<PathBuf, Box<dyn std::error::Error>> {
    let p = Path::new(path);
    let canonical = if p.is_absolute() {
        p.to_path_buf()
    } else {
        std::env::current_dir()?.join(p)
    };

    if !canonical.exists() {
        return Err(format!("File not found: {}", canonical.display()).into());
    }

    if !canonical.is_file() {
        return Err(format!("Not a file: {}", canonical.display()).into());
    }

    Ok(canonical)
}

#[cfg(test)]
mod tests {
    use super::*;
    use fincalc_core::deposits::ppf::PpfInput;
    use rust_decimal_macros::dec;

    #[test]
    fn test_yaml_by_extension() {
        let input: PpfInput =
            parse(Path::new("ppf.yaml"), "yearly_deposit: \"150000\"\nyears: 15\n").unwrap();
        assert_eq!(input.yearly_deposit, dec!(150000));
        assert_eq!(input.years, 15);
    }

    #[test]
    fn test_json_otherwise() {
        let input: PpfInput =
            parse(Path::new("ppf.json"), r#"{"yearly_deposit": "500", "years": 20}"#).unwrap();
        assert_eq!(input.yearly_deposit, dec!(500));
    }

    #[test]
    fn test_missing_file() {
        assert!(read_input::<PpfInput>("no_such_input.json").is_err());
    }
}
