use napi::Result as NapiResult;
use napi_derive::napi;

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

// ---------------------------------------------------------------------------
// Loans
// ---------------------------------------------------------------------------

#[napi]
pub fn loan_basic(input_json: String) -> NapiResult<String> {
    let input: fincalc_core::loans::basic::LoanBasicInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output =
        fincalc_core::loans::basic::calculate_loan_basic(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

/// Amortizing loan quote. `config_json` optionally supplies loan defaults
/// such as `default_processing_fee_percent`.
#[napi]
pub fn loan_advanced(input_json: String, config_json: Option<String>) -> NapiResult<String> {
    let input: fincalc_core::loans::amortizing::LoanAdvancedInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let config: fincalc_core::config::LoanConfig = match config_json {
        Some(json) => serde_json::from_str(&json).map_err(to_napi_error)?,
        None => fincalc_core::config::LoanConfig::default(),
    };
    let output = fincalc_core::loans::amortizing::calculate_loan_advanced_with(&input, &config)
        .map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Deposits
// ---------------------------------------------------------------------------

#[napi]
pub fn fixed_deposit(input_json: String) -> NapiResult<String> {
    let input: fincalc_core::deposits::fixed::FixedDepositInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = fincalc_core::deposits::fixed::calculate_fixed_deposit(&input)
        .map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn recurring_deposit(input_json: String) -> NapiResult<String> {
    let input: fincalc_core::deposits::recurring::RecurringDepositInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = fincalc_core::deposits::recurring::calculate_recurring_deposit(&input)
        .map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

/// PPF projection. `config_json` optionally overrides the scheme
/// parameters (rate, deposit and tenure bounds).
#[napi]
pub fn ppf(input_json: String, config_json: Option<String>) -> NapiResult<String> {
    let input: fincalc_core::deposits::ppf::PpfInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let config: fincalc_core::config::PpfConfig = match config_json {
        Some(json) => serde_json::from_str(&json).map_err(to_napi_error)?,
        None => fincalc_core::config::PpfConfig::default(),
    };
    let output = fincalc_core::deposits::ppf::calculate_ppf_with(&input, &config)
        .map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Investments
// ---------------------------------------------------------------------------

#[napi]
pub fn sip(input_json: String) -> NapiResult<String> {
    let input: fincalc_core::investments::sip::SipInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output =
        fincalc_core::investments::sip::calculate_sip(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn sip_breakdown(input_json: String) -> NapiResult<String> {
    let input: fincalc_core::investments::sip::SipInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let rows: Vec<fincalc_core::investments::sip::SipYear> =
        fincalc_core::investments::sip::sip_yearly_breakdown(&input)
            .map_err(to_napi_error)?
            .collect();
    serde_json::to_string(&rows).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

/// Run a tagged request (`{"instrument": "...", ...}`) against an optional
/// calculator configuration.
#[napi]
pub fn calculate(request_json: String, config_json: Option<String>) -> NapiResult<String> {
    let request: fincalc_core::instrument::InstrumentRequest =
        serde_json::from_str(&request_json).map_err(to_napi_error)?;
    let config: fincalc_core::CalculatorConfig = match config_json {
        Some(json) => serde_json::from_str(&json).map_err(to_napi_error)?,
        None => fincalc_core::CalculatorConfig::default(),
    };
    config.validate().map_err(to_napi_error)?;
    let quote = fincalc_core::instrument::calculate(&request, &config).map_err(to_napi_error)?;
    serde_json::to_string(&quote).map_err(to_napi_error)
}

#[napi]
pub fn instruments() -> Vec<String> {
    fincalc_core::instrument::Instrument::ALL
        .iter()
        .map(|i| i.tag().to_string())
        .collect()
}
