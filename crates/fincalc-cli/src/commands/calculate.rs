use clap::Args;
use serde_json::{json, Value};

use fincalc_core::instrument::{self, Instrument, InstrumentRequest};
use fincalc_core::CalculatorConfig;

use super::{limits, request_from_input};

/// Arguments for a tagged calculation request
#[derive(Args)]
pub struct CalculateArgs {
    /// Path to JSON/YAML request, e.g. {"instrument": "sip", ...}
    #[arg(long)]
    pub input: Option<String>,
}

pub fn run_calculate(
    args: CalculateArgs,
    config: &CalculatorConfig,
) -> Result<Value, Box<dyn std::error::Error>> {
    let request: InstrumentRequest = request_from_input(args.input.as_deref())?
        .ok_or("--input <file.json> or stdin required for calculate")?;
    limits::request(&request)?;
    let quote = instrument::calculate(&request, config)?;
    Ok(serde_json::to_value(quote)?)
}

pub fn run_instruments() -> Result<Value, Box<dyn std::error::Error>> {
    let rows: Vec<Value> = Instrument::ALL
        .iter()
        .map(|i| json!({ "instrument": i.tag(), "label": i.label() }))
        .collect();
    Ok(Value::Array(rows))
}
