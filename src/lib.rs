//! Compound Interest - future value of a principal plus a periodic contribution
//!
//! This library provides:
//! - A pure accumulation engine (monthly compounding, monthly or annual contributions)
//! - Principal/contribution breakdowns and year-by-year growth schedules
//! - Validation of raw text input and CSV scenario loading
//! - Batch and rate-sensitivity runs
//! - Currency and label formatting for front ends

pub mod error;
pub mod engine;
pub mod input;
pub mod presentation;
pub mod scenario;

// Re-export commonly used types
pub use error::{CalculatorError, Result};
pub use engine::{
    compute, AccumulationBreakdown, AccumulationEngine, CalculationInput, CalculationResult,
    ContributionFrequency, GrowthSchedule,
};
pub use input::{RawInput, Scenario};
pub use presentation::{DisplayConfig, Language};
pub use scenario::{RunnerConfig, ScenarioRunner};
