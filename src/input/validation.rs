//! Turns raw text fields into a validated [`CalculationInput`]

use crate::engine::{CalculationInput, ContributionFrequency};
use crate::error::{CalculatorError, Result};
use serde::{Deserialize, Serialize};

/// Longest accepted duration in years
const MAX_YEARS: u32 = 1000;

/// Unparsed field values as typed by a user or read from a file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawInput {
    pub principal: String,
    pub annual_rate_percent: String,
    pub years: String,
    pub contribution_amount: String,
    #[serde(default)]
    pub contribution_frequency: ContributionFrequency,
}

impl RawInput {
    pub fn new(
        principal: impl Into<String>,
        annual_rate_percent: impl Into<String>,
        years: impl Into<String>,
        contribution_amount: impl Into<String>,
        contribution_frequency: ContributionFrequency,
    ) -> Self {
        Self {
            principal: principal.into(),
            annual_rate_percent: annual_rate_percent.into(),
            years: years.into(),
            contribution_amount: contribution_amount.into(),
            contribution_frequency,
        }
    }

    /// Parse and range-check every field
    ///
    /// Blank or unparseable text in any field is reported once as
    /// [`CalculatorError::MissingFields`]; range checks only run after all four
    /// fields parsed.
    pub fn validate(&self) -> Result<CalculationInput> {
        let principal = parse_decimal(&self.principal);
        let rate = parse_decimal(&self.annual_rate_percent);
        let years = parse_integer(&self.years);
        let contribution = parse_decimal(&self.contribution_amount);

        let (Some(principal), Some(rate), Some(years), Some(contribution)) =
            (principal, rate, years, contribution)
        else {
            return Err(CalculatorError::MissingFields);
        };

        let principal = non_negative("principal", principal)?;
        let rate = non_negative("annual rate", rate)?;
        let contribution = non_negative("contribution", contribution)?;
        let years = u32::try_from(years)
            .ok()
            .filter(|&y| y <= MAX_YEARS)
            .ok_or(CalculatorError::OutOfRange {
                field: "years",
                value: years as f64,
            })?;

        Ok(CalculationInput::new(
            principal,
            rate,
            years,
            contribution,
            self.contribution_frequency,
        ))
    }
}

fn parse_decimal(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse().ok()
}

fn parse_integer(text: &str) -> Option<i64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse().ok()
}

fn non_negative(field: &'static str, value: f64) -> Result<f64> {
    if !value.is_finite() {
        return Err(CalculatorError::InvalidNumber {
            field,
            value: value.to_string(),
        });
    }
    if value < 0.0 {
        return Err(CalculatorError::OutOfRange { field, value });
    }
    Ok(value)
}
