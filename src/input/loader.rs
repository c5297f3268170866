//! Load calculation scenarios from CSV
//!
//! Expected columns:
//! `ScenarioID,Principal,AnnualRatePercent,Years,Contribution,Frequency`

use super::validation::RawInput;
use crate::engine::{CalculationInput, ContributionFrequency};
use crate::error::Result;
use csv::Reader;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One named set of inputs
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scenario {
    pub scenario_id: u32,
    pub input: CalculationInput,
}

/// Raw CSV row; numeric columns stay as text so blanks reach validation
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    #[serde(rename = "ScenarioID")]
    scenario_id: u32,
    #[serde(rename = "Principal")]
    principal: String,
    #[serde(rename = "AnnualRatePercent")]
    annual_rate_percent: String,
    #[serde(rename = "Years")]
    years: String,
    #[serde(rename = "Contribution")]
    contribution: String,
    #[serde(rename = "Frequency")]
    frequency: String,
}

impl CsvRow {
    fn into_scenario(self) -> Result<Scenario> {
        let scenario_id = self.scenario_id;
        let input = self.parse_input().inspect_err(|e| {
            warn!("Scenario {} rejected: {}", scenario_id, e);
        })?;

        Ok(Scenario { scenario_id, input })
    }

    fn parse_input(self) -> Result<CalculationInput> {
        let frequency: ContributionFrequency = self.frequency.parse()?;
        RawInput::new(
            self.principal,
            self.annual_rate_percent,
            self.years,
            self.contribution,
            frequency,
        )
        .validate()
    }
}

/// Load all scenarios from a CSV file
pub fn load_scenarios<P: AsRef<Path>>(path: P) -> Result<Vec<Scenario>> {
    let path = path.as_ref();
    debug!("Loading scenarios from {}", path.display());
    let reader = Reader::from_path(path)?;
    collect_scenarios(reader)
}

/// Load scenarios from any reader (e.g., string buffer, stdin)
pub fn load_scenarios_from_reader<R: std::io::Read>(reader: R) -> Result<Vec<Scenario>> {
    collect_scenarios(Reader::from_reader(reader))
}

fn collect_scenarios<R: std::io::Read>(mut reader: Reader<R>) -> Result<Vec<Scenario>> {
    let mut scenarios = Vec::new();

    for result in reader.deserialize() {
        let row: CsvRow = result?;
        scenarios.push(row.into_scenario()?);
    }

    debug!("Loaded {} scenarios", scenarios.len());
    Ok(scenarios)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CalculatorError;

    const SAMPLE: &str = "\
ScenarioID,Principal,AnnualRatePercent,Years,Contribution,Frequency
1,1000,12,1,100,Monthly
2,500,0,5,200,Annually
3,0,5,3,1000,annually
";

    #[test]
    fn test_load_scenarios() {
        let scenarios = load_scenarios_from_reader(SAMPLE.as_bytes()).unwrap();
        assert_eq!(scenarios.len(), 3);

        let s2 = &scenarios[1];
        assert_eq!(s2.scenario_id, 2);
        assert_eq!(s2.input.principal, 500.0);
        assert_eq!(s2.input.years, 5);
        assert_eq!(s2.input.contribution_frequency, ContributionFrequency::Annually);
        assert_eq!(scenarios[2].input.contribution_frequency, ContributionFrequency::Annually);
    }

    #[test]
    fn test_blank_cell_rejected() {
        let csv = "ScenarioID,Principal,AnnualRatePercent,Years,Contribution,Frequency\n7,1000,,10,50,Monthly\n";
        let err = load_scenarios_from_reader(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, CalculatorError::MissingFields));
    }

    #[test]
    fn test_unknown_frequency_rejected() {
        let csv = "ScenarioID,Principal,AnnualRatePercent,Years,Contribution,Frequency\n1,1000,5,10,50,Weekly\n";
        let err = load_scenarios_from_reader(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, CalculatorError::UnknownFrequency(ref s) if s == "Weekly"));
    }

    #[test]
    fn test_bad_frequency_stops_at_that_row() {
        let row = CsvRow {
            scenario_id: 9,
            principal: "1000".to_string(),
            annual_rate_percent: "5".to_string(),
            years: "10".to_string(),
            contribution: "50".to_string(),
            frequency: "Fortnightly".to_string(),
        };
        let err = row.into_scenario().unwrap_err();
        assert!(matches!(err, CalculatorError::UnknownFrequency(ref s) if s == "Fortnightly"));

        let csv = "ScenarioID,Principal,AnnualRatePercent,Years,Contribution,Frequency\n\
1,1000,5,10,50,Monthly\n\
9,1000,5,10,50,Weekly\n\
10,1000,5,10,50,Monthly\n";
        let err = load_scenarios_from_reader(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, CalculatorError::UnknownFrequency(_)));
    }

    #[test]
    fn test_missing_column_is_csv_error() {
        let csv = "ScenarioID,Principal\n1,1000\n";
        let err = load_scenarios_from_reader(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, CalculatorError::Csv(_)));
    }

    #[test]
    fn test_bundled_sample_file() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("data/scenarios.csv");
        let scenarios = load_scenarios(path).expect("Failed to load bundled scenarios");
        assert!(!scenarios.is_empty());
        assert_eq!(scenarios[0].scenario_id, 1);
    }
}
