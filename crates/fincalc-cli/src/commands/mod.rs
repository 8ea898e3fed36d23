pub mod calculate;
pub mod deposits;
pub mod investments;
pub(crate) mod limits;
pub mod loans;

use serde::de::DeserializeOwned;

use crate::input;

/// Read a typed request from `--input <file>` or piped stdin, in that order.
/// `Ok(None)` means neither was supplied and the caller falls back to flags.
pub(crate) fn request_from_input<T: DeserializeOwned>(
    path: Option<&str>,
) -> Result<Option<T>, Box<dyn std::error::Error>> {
    if let Some(path) = path {
        return Ok(Some(input::file::read_input(path)?));
    }
    input::stdin::read_request()
}
