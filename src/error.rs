//! Error types for input validation and scenario I/O
//!
//! The accumulation engine itself never fails; everything here belongs to the
//! layers that turn raw text into a [`CalculationInput`](crate::CalculationInput).

use thiserror::Error;

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, CalculatorError>;

#[derive(Error, Debug)]
pub enum CalculatorError {
    /// One or more fields were blank or could not be parsed
    #[error("all fields are required")]
    MissingFields,

    /// A field parsed but is not a usable number (NaN, infinite)
    #[error("invalid number for {field}: '{value}'")]
    InvalidNumber { field: &'static str, value: String },

    /// A field parsed but falls outside the accepted domain
    #[error("{field} is out of range (got {value})")]
    OutOfRange { field: &'static str, value: f64 },

    #[error("unknown contribution frequency '{0}' (expected monthly or annually)")]
    UnknownFrequency(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_message() {
        assert_eq!(CalculatorError::MissingFields.to_string(), "all fields are required");
    }

    #[test]
    fn test_out_of_range_message() {
        let err = CalculatorError::OutOfRange { field: "principal", value: -5.0 };
        assert_eq!(err.to_string(), "principal is out of range (got -5)");
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: CalculatorError = io.into();
        assert!(matches!(err, CalculatorError::Io(_)));
    }
}
