//! Value types fed into and returned from the accumulation engine

use crate::error::CalculatorError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// How often the contribution amount is paid into the account
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContributionFrequency {
    /// One contribution at the end of every month
    #[default]
    Monthly,
    /// One contribution at the end of every year
    Annually,
}

impl ContributionFrequency {
    /// Number of contributions paid over `years`
    pub fn contributions_over(&self, years: u32) -> f64 {
        match self {
            ContributionFrequency::Monthly => f64::from(years) * 12.0,
            ContributionFrequency::Annually => f64::from(years),
        }
    }
}

impl FromStr for ContributionFrequency {
    type Err = CalculatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "monthly" | "month" | "m" | "mensual" => Ok(ContributionFrequency::Monthly),
            "annually" | "annual" | "yearly" | "a" | "y" | "anual" => {
                Ok(ContributionFrequency::Annually)
            }
            _ => Err(CalculatorError::UnknownFrequency(s.to_string())),
        }
    }
}

/// Validated inputs for a single calculation
///
/// Built once the caller has checked every field; the engine trusts it as-is.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalculationInput {
    /// Initial deposit
    pub principal: f64,

    /// Nominal annual rate in percent (5.0 = 5%)
    pub annual_rate_percent: f64,

    /// Duration in whole years
    pub years: u32,

    /// Amount paid in at each contribution date
    pub contribution_amount: f64,

    pub contribution_frequency: ContributionFrequency,
}

impl CalculationInput {
    pub fn new(
        principal: f64,
        annual_rate_percent: f64,
        years: u32,
        contribution_amount: f64,
        contribution_frequency: ContributionFrequency,
    ) -> Self {
        Self {
            principal,
            annual_rate_percent,
            years,
            contribution_amount,
            contribution_frequency,
        }
    }

    /// Copy of this input with a different annual rate
    pub fn with_rate(mut self, annual_rate_percent: f64) -> Self {
        self.annual_rate_percent = annual_rate_percent;
        self
    }

    /// Copy of this input with a different duration
    pub fn with_years(mut self, years: u32) -> Self {
        self.years = years;
        self
    }
}

/// Output of a calculation: a single full-precision amount
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    pub total_future_value: f64,
}
