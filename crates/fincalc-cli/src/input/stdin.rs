use serde::de::DeserializeOwned;
use std::io::{self, Read};

/// Take a calculation request piped into the CLI, e.g.
/// `cat sip.yaml | fincalc sip`.
///
/// Nothing is read from a terminal, and blank input counts as no request, so
/// callers fall back to flags in both cases.
pub fn read_request<T: DeserializeOwned>() -> Result<Option<T>, Box<dyn std::error::Error>> {
    if atty::is(atty::Stream::Stdin) {
        return Ok(None);
    }
    let mut piped = String::new();
    io::stdin().read_to_string(&mut piped)?;
    parse_piped(&piped)
}

/// A piped body opening with `{` is JSON; anything else is read as YAML.
fn parse_piped<T: DeserializeOwned>(text: &str) -> Result<Option<T>, Box<dyn std::error::Error>> {
    let body = text.trim_start_matches('\u{feff}').trim();
    if body.is_empty() {
        return Ok(None);
    }
    let request = if body.starts_with('{') {
        serde_json::from_str(body).map_err(|e| format!("piped JSON request: {e}"))?
    } else {
        serde_yaml::from_str(body).map_err(|e| format!("piped YAML request: {e}"))?
    };
    Ok(Some(request))
}
