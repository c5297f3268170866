//! Year-by-year view of an accumulation

use super::accumulation::AccumulationEngine;
use super::input::CalculationInput;
use serde::{Deserialize, Serialize};

/// Account position at the end of one year
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct YearRow {
    pub year: u32,
    pub principal_value: f64,
    pub contributions_value: f64,
    pub total_contributed: f64,
    pub balance: f64,
}

/// Growth schedule for one input, one row per elapsed year
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GrowthSchedule {
    pub input: CalculationInput,
    pub rows: Vec<YearRow>,
}

impl GrowthSchedule {
    /// Evaluate the engine at every year end from 1 to `input.years`
    ///
    /// Each row is the closed form at that horizon, so the final balance is
    /// identical to a single `compute` over the full duration.
    pub fn build(input: &CalculationInput) -> Self {
        let engine = AccumulationEngine::new();
        let rows = (1..=input.years)
            .map(|year| {
                let b = engine.breakdown(&input.with_years(year));
                YearRow {
                    year,
                    principal_value: b.future_value_of_principal,
                    contributions_value: b.future_value_of_contributions,
                    total_contributed: b.total_contributed,
                    balance: b.total_future_value,
                }
            })
            .collect();

        Self { input: *input, rows }
    }

    pub fn summary(&self) -> ScheduleSummary {
        let (final_balance, total_contributed) = self
            .rows
            .last()
            .map(|r| (r.balance, r.total_contributed))
            .unwrap_or((0.0, 0.0));

        ScheduleSummary {
            total_years: self.rows.len() as u32,
            final_balance,
            total_contributed,
            interest_earned: final_balance - total_contributed,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleSummary {
    pub total_years: u32,
    pub final_balance: f64,
    pub total_contributed: f64,
    pub interest_earned: f64,
}
