//! Accumulation engine: future value of a principal plus a contribution stream

mod input;
mod accumulation;
mod schedule;

pub use input::{CalculationInput, CalculationResult, ContributionFrequency};
pub use accumulation::{compute, AccumulationBreakdown, AccumulationEngine};
pub use schedule::{GrowthSchedule, ScheduleSummary, YearRow};
