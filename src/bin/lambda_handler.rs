//! AWS Lambda handler for single calculations
//!
//! Accepts the four form fields (as strings or numbers) plus a frequency and
//! returns the future value. Validation failures come back in the `error`
//! field rather than as a Lambda invocation error.

use compound_interest::{
    engine::{AccumulationBreakdown, AccumulationEngine},
    presentation::format_currency,
    ContributionFrequency, DisplayConfig, Language, RawInput,
};
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use log::{info, warn};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Input for one calculation
#[derive(Debug, Deserialize)]
pub struct CalculationRequest {
    #[serde(default)]
    pub principal: Value,

    #[serde(default)]
    pub annual_rate_percent: Value,

    #[serde(default)]
    pub years: Value,

    #[serde(default)]
    pub contribution_amount: Value,

    #[serde(default)]
    pub contribution_frequency: ContributionFrequency,

    /// Include the principal/contribution split in the response
    #[serde(default)]
    pub include_breakdown: bool,

    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,

    #[serde(default = "default_decimals")]
    pub decimals: usize,

    #[serde(default)]
    pub language: Language,
}

fn default_currency_symbol() -> String { "$".to_string() }
fn default_decimals() -> usize { 2 }

#[derive(Debug, Serialize, Default)]
pub struct CalculationResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_future_value: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formatted: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breakdown: Option<AccumulationBreakdown>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// JSON numbers and strings both become field text; anything else is blank
fn field_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        _ => String::new(),
    }
}

fn calculate(request: CalculationRequest) -> CalculationResponse {
    let raw = RawInput::new(
        field_text(&request.principal),
        field_text(&request.annual_rate_percent),
        field_text(&request.years),
        field_text(&request.contribution_amount),
        request.contribution_frequency,
    );

    let input = match raw.validate() {
        Ok(input) => input,
        Err(e) => {
            warn!("Rejected request: {}", e);
            return CalculationResponse {
                error: Some(e.to_string()),
                ..Default::default()
            };
        }
    };

    let display = DisplayConfig {
        currency_symbol: request.currency_symbol,
        decimals: request.decimals,
        language: request.language,
    };

    let breakdown = AccumulationEngine::new().breakdown(&input);
    CalculationResponse {
        total_future_value: Some(breakdown.total_future_value),
        formatted: Some(format_currency(breakdown.total_future_value, &display)),
        breakdown: request.include_breakdown.then_some(breakdown),
        error: None,
    }
}

async fn handler(event: LambdaEvent<CalculationRequest>) -> Result<CalculationResponse, Error> {
    let start = std::time::Instant::now();
    let response = calculate(event.payload);
    info!("Handled request in {:?}", start.elapsed());
    Ok(response)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();
    run(service_fn(handler)).await
}
