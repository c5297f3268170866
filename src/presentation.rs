//! Display helpers for consumers of the engine
//!
//! Labels and currency text live here so the domain enum stays free of
//! presentation strings.

use crate::engine::ContributionFrequency;
use serde::{Deserialize, Serialize};

/// Language used for labels and the result line
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    English,
    Spanish,
}

/// How amounts are rendered
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    pub currency_symbol: String,
    pub decimals: usize,
    pub language: Language,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            currency_symbol: "$".to_string(),
            decimals: 2,
            language: Language::English,
        }
    }
}

pub fn frequency_label(frequency: ContributionFrequency, language: Language) -> &'static str {
    match (frequency, language) {
        (ContributionFrequency::Monthly, Language::English) => "Monthly",
        (ContributionFrequency::Annually, Language::English) => "Annually",
        (ContributionFrequency::Monthly, Language::Spanish) => "Mensual",
        (ContributionFrequency::Annually, Language::Spanish) => "Anual",
    }
}

/// Round to `config.decimals` places, group thousands with commas and prefix
/// the currency symbol. The sign goes before the symbol.
pub fn format_currency(value: f64, config: &DisplayConfig) -> String {
    let rounded = format!("{:.*}", config.decimals, value.abs());
    let (whole, fraction) = match rounded.split_once('.') {
        Some((w, f)) => (w, Some(f)),
        None => (rounded.as_str(), None),
    };

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    // Values that round to zero print without a sign
    let is_zero = rounded.chars().all(|c| c == '0' || c == '.');
    let sign = if value < 0.0 && !is_zero { "-" } else { "" };

    match fraction {
        Some(f) => format!("{}{}{}.{}", sign, config.currency_symbol, grouped, f),
        None => format!("{}{}{}", sign, config.currency_symbol, grouped),
    }
}

/// Full result sentence, e.g. `Final amount: $2,395.08`
pub fn result_line(value: f64, config: &DisplayConfig) -> String {
    let prefix = match config.language {
        Language::English => "Final amount",
        Language::Spanish => "Cantidad Final",
    };
    format!("{}: {}", prefix, format_currency(value, config))
}
