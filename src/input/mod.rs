//! Caller-side input handling: text validation and scenario files

mod validation;
pub mod loader;

pub use validation::RawInput;
pub use loader::{load_scenarios, load_scenarios_from_reader, Scenario};
