//! Scenario runner for batch and rate-sensitivity calculations
//!
//! The engine holds no state, so batches fan out across threads without any
//! coordination; results always come back in input order.

use crate::engine::{AccumulationBreakdown, AccumulationEngine, CalculationInput, CalculationResult};
use crate::error::Result;
use crate::input::Scenario;
use log::{debug, info};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::time::Instant;

/// Runner options
#[derive(Debug, Clone)]
pub struct RunnerConfig {
    /// Spread batches over the rayon thread pool
    pub parallel: bool,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self { parallel: true }
    }
}

/// Result for one scenario of a batch
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioResult {
    pub scenario_id: u32,
    pub breakdown: AccumulationBreakdown,
}

/// Runs the accumulation engine over many inputs
///
/// # Example
/// ```
/// use compound_interest::{CalculationInput, ContributionFrequency, ScenarioRunner};
///
/// let runner = ScenarioRunner::new();
/// let input = CalculationInput::new(1000.0, 5.0, 10, 100.0, ContributionFrequency::Monthly);
/// let sweep = runner.rate_sensitivity(&input, &[3.0, 5.0, 7.0]);
/// assert!(sweep[2].1.total_future_value > sweep[0].1.total_future_value);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScenarioRunner {
    engine: AccumulationEngine,
    config: RunnerConfig,
}

impl ScenarioRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: RunnerConfig) -> Self {
        Self {
            engine: AccumulationEngine::new(),
            config,
        }
    }

    /// Run a single calculation
    pub fn run(&self, input: &CalculationInput) -> CalculationResult {
        self.engine.compute(input)
    }

    /// Run every scenario, preserving input order
    pub fn run_batch(&self, scenarios: &[Scenario]) -> Vec<ScenarioResult> {
        let start = Instant::now();
        let run_one = |s: &Scenario| ScenarioResult {
            scenario_id: s.scenario_id,
            breakdown: self.engine.breakdown(&s.input),
        };

        let results: Vec<ScenarioResult> = if self.config.parallel {
            scenarios.par_iter().map(run_one).collect()
        } else {
            scenarios.iter().map(run_one).collect()
        };

        info!(
            "Ran {} scenarios in {:?} (parallel: {})",
            results.len(),
            start.elapsed(),
            self.config.parallel
        );
        results
    }

    /// Re-run one input at each alternative annual rate (in percent)
    pub fn rate_sensitivity(
        &self,
        input: &CalculationInput,
        rates_percent: &[f64],
    ) -> Vec<(f64, CalculationResult)> {
        rates_percent
            .iter()
            .map(|&rate| {
                let result = self.engine.compute(&input.with_rate(rate));
                debug!("rate {:.4}% -> {:.6}", rate, result.total_future_value);
                (rate, result)
            })
            .collect()
    }
}

/// Write batch results as CSV
pub fn write_results<W: Write>(writer: W, results: &[ScenarioResult]) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record([
        "ScenarioID",
        "TotalFutureValue",
        "PrincipalValue",
        "ContributionsValue",
        "TotalContributed",
        "InterestEarned",
    ])?;

    for r in results {
        let b = &r.breakdown;
        csv_writer.write_record(&[
            r.scenario_id.to_string(),
            format!("{:.8}", b.total_future_value),
            format!("{:.8}", b.future_value_of_principal),
            format!("{:.8}", b.future_value_of_contributions),
            format!("{:.8}", b.total_contributed),
            format!("{:.8}", b.interest_earned),
        ])?;
    }

    csv_writer.flush()?;
    Ok(())
}
