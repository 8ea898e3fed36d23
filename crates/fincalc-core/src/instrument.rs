//! Closed set of supported instruments and a single entry point that routes
//! a tagged request to the matching calculator.

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

use crate::config::CalculatorConfig;
use crate::deposits::fixed::{self, FixedDepositInput, FixedDepositOutput};
use crate::deposits::ppf::{self, PpfInput, PpfOutput};
use crate::deposits::recurring::{self, RecurringDepositInput, RecurringDepositOutput};
use crate::investments::sip::{self, SipInput, SipOutput};
use crate::loans::amortizing::{self, LoanAdvancedInput, LoanAdvancedOutput};
use crate::loans::basic::{self, LoanBasicInput, LoanBasicOutput};
use crate::types::ComputationOutput;
use crate::FinCalcResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Instrument {
    LoanBasic,
    LoanAdvanced,
    FixedDeposit,
    RecurringDeposit,
    Ppf,
    Sip,
}

impl Instrument {
    pub const ALL: [Instrument; 6] = [
        Instrument::LoanBasic,
        Instrument::LoanAdvanced,
        Instrument::FixedDeposit,
        Instrument::RecurringDeposit,
        Instrument::Ppf,
        Instrument::Sip,
    ];

    /// Human-readable name, as shown in a calculator menu.
    pub fn label(self) -> &'static str {
        match self {
            Instrument::LoanBasic => "Loan - Basic",
            Instrument::LoanAdvanced => "Loan - Advanced",
            Instrument::FixedDeposit => "Fixed Deposit",
            Instrument::RecurringDeposit => "Recurring Deposit",
            Instrument::Ppf => "PPF",
            Instrument::Sip => "SIP Calculator",
        }
    }

    /// Tag used in requests (`{"instrument": "<tag>", ...}`).
    pub fn tag(self) -> &'static str {
        match self {
            Instrument::LoanBasic => "loan_basic",
            Instrument::LoanAdvanced => "loan_advanced",
            Instrument::FixedDeposit => "fixed_deposit",
            Instrument::RecurringDeposit => "recurring_deposit",
            Instrument::Ppf => "ppf",
            Instrument::Sip => "sip",
        }
    }
}

impl fmt::Display for Instrument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A calculation request, tagged by instrument.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "instrument", rename_all = "snake_case")]
pub enum InstrumentRequest {
    LoanBasic(LoanBasicInput),
    LoanAdvanced(LoanAdvancedInput),
    FixedDeposit(FixedDepositInput),
    RecurringDeposit(RecurringDepositInput),
    Ppf(PpfInput),
    Sip(SipInput),
}

impl InstrumentRequest {
    pub fn instrument(&self) -> Instrument {
        match self {
            InstrumentRequest::LoanBasic(_) => Instrument::LoanBasic,
            InstrumentRequest::LoanAdvanced(_) => Instrument::LoanAdvanced,
            InstrumentRequest::FixedDeposit(_) => Instrument::FixedDeposit,
            InstrumentRequest::RecurringDeposit(_) => Instrument::RecurringDeposit,
            InstrumentRequest::Ppf(_) => Instrument::Ppf,
            InstrumentRequest::Sip(_) => Instrument::Sip,
        }
    }
}

/// The quote produced for a request, tagged the same way.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "instrument", rename_all = "snake_case")]
pub enum InstrumentQuote {
    LoanBasic(ComputationOutput<LoanBasicOutput>),
    LoanAdvanced(ComputationOutput<LoanAdvancedOutput>),
    FixedDeposit(ComputationOutput<FixedDepositOutput>),
    RecurringDeposit(ComputationOutput<RecurringDepositOutput>),
    Ppf(ComputationOutput<PpfOutput>),
    Sip(ComputationOutput<SipOutput>),
}

impl InstrumentQuote {
    pub fn warnings(&self) -> &[String] {
        match self {
            InstrumentQuote::LoanBasic(o) => &o.warnings,
            InstrumentQuote::LoanAdvanced(o) => &o.warnings,
            InstrumentQuote::FixedDeposit(o) => &o.warnings,
            InstrumentQuote::RecurringDeposit(o) => &o.warnings,
            InstrumentQuote::Ppf(o) => &o.warnings,
            InstrumentQuote::Sip(o) => &o.warnings,
        }
    }
}

/// Route a request to its calculator.
pub fn calculate(
    request: &InstrumentRequest,
    config: &CalculatorConfig,
) -> FinCalcResult<InstrumentQuote> {
    debug!(instrument = request.instrument().tag(), "dispatching calculation");

    let quote = match request {
        InstrumentRequest::LoanBasic(input) => {
            InstrumentQuote::LoanBasic(basic::calculate_loan_basic(input)?)
        }
        InstrumentRequest::LoanAdvanced(input) => {
            InstrumentQuote::LoanAdvanced(amortizing::calculate_loan_advanced_with(
                input,
                &config.loan,
            )?)
        }
        InstrumentRequest::FixedDeposit(input) => {
            InstrumentQuote::FixedDeposit(fixed::calculate_fixed_deposit(input)?)
        }
        InstrumentRequest::RecurringDeposit(input) => {
            InstrumentQuote::RecurringDeposit(recurring::calculate_recurring_deposit(input)?)
        }
        InstrumentRequest::Ppf(input) => {
            InstrumentQuote::Ppf(ppf::calculate_ppf_with(input, &config.ppf)?)
        }
        InstrumentRequest::Sip(input) => InstrumentQuote::Sip(sip::calculate_sip(input)?),
    };

    for warning in quote.warnings() {
        debug!(instrument = request.instrument().tag(), %warning, "calculation warning");
    }

    Ok(quote)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_tag_round_trips_through_instrument() {
        let req: InstrumentRequest = serde_json::from_str(
            r#"{"instrument": "ppf", "yearly_deposit": "150000", "years": 15}"#,
        )
        .unwrap();
        assert_eq!(req.instrument(), Instrument::Ppf);
        assert_eq!(req.instrument().tag(), "ppf");
    }

    #[test]
    fn test_unknown_instrument_rejected() {
        let parsed: Result<InstrumentRequest, _> =
            serde_json::from_str(r#"{"instrument": "kisan_vikas_patra"}"#);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_tags_match_serde_names() {
        for instrument in Instrument::ALL {
            let json = serde_json::to_value(instrument).unwrap();
            assert_eq!(json, serde_json::Value::String(instrument.tag().into()));
        }
    }
}
