//! # Error Types
//!
//! Structured error types for fincalc_core. Every calculator validates its
//! inputs up front and reports the first violation as one of these variants,
//! so a front end can render a specific message instead of silently hiding
//! the results panel.
//!
//! ## Example
//!
//! ```rust
//! use fincalc_core::errors::{CalcError, CalcResult};
//!
//! fn validate_term(term_years: f64) -> CalcResult<()> {
//!     if term_years <= 0.0 {
//!         return Err(CalcError::InvalidInput {
//!             field: "term_years".to_string(),
//!             value: term_years.to_string(),
//!             reason: "Loan term must be positive".to_string(),
//!         });
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for fincalc_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for calculation operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// An input value violates the calculator's domain (sign, ordering, zero divisor)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// A required field was left blank
    #[error("Missing required field: {field}")]
    MissingField { field: String },

    /// A field could not be read as a number
    #[error("Could not parse '{value}' as a number for '{field}'")]
    ParseError { field: String, value: String },

    /// An unbounded field exceeds its ceiling
    #[error("Value for '{field}' is out of range: {value} exceeds the maximum of {max}")]
    OutOfRange {
        field: String,
        value: String,
        max: String,
    },

    /// No calculator is registered under this name
    #[error("Unknown calculator: {name}")]
    UnknownCalculator { name: String },

    /// A translation or metadata asset is missing or malformed
    #[error("Localization error for '{language}': {reason}")]
    LocalizationError { language: String, reason: String },

    /// Settings file could not be read or parsed
    #[error("Configuration error in '{path}': {reason}")]
    ConfigError { path: String, reason: String },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

impl CalcError {
    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a MissingField error
    pub fn missing_field(field: impl Into<String>) -> Self {
        CalcError::MissingField {
            field: field.into(),
        }
    }

    /// Create a ParseError
    pub fn parse_error(field: impl Into<String>, value: impl Into<String>) -> Self {
        CalcError::ParseError {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Create an OutOfRange error
    pub fn out_of_range(field: impl Into<String>, value: impl Into<String>, max: impl Into<String>) -> Self {
        CalcError::OutOfRange {
            field: field.into(),
            value: value.into(),
            max: max.into(),
        }
    }

    /// Create an UnknownCalculator error
    pub fn unknown_calculator(name: impl Into<String>) -> Self {
        CalcError::UnknownCalculator { name: name.into() }
    }

    /// Create a LocalizationError
    pub fn localization(language: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::LocalizationError {
            language: language.into(),
            reason: reason.into(),
        }
    }

    /// Create a ConfigError
    pub fn config(path: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::ConfigError {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// True for errors caused by what the user typed, as opposed to
    /// missing assets or bad configuration.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            CalcError::InvalidInput { .. }
                | CalcError::MissingField { .. }
                | CalcError::ParseError { .. }
                | CalcError::OutOfRange { .. }
        )
    }

    /// Name of the offending input field, if the error is tied to one
    pub fn field(&self) -> Option<&str> {
        match self {
            CalcError::InvalidInput { field, .. }
            | CalcError::MissingField { field }
            | CalcError::ParseError { field, .. }
            | CalcError::OutOfRange { field, .. } => Some(field),
            _ => None,
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::MissingField { .. } => "MISSING_FIELD",
            CalcError::ParseError { .. } => "PARSE_ERROR",
            CalcError::OutOfRange { .. } => "OUT_OF_RANGE",
            CalcError::UnknownCalculator { .. } => "UNKNOWN_CALCULATOR",
            CalcError::LocalizationError { .. } => "LOCALIZATION_ERROR",
            CalcError::ConfigError { .. } => "CONFIG_ERROR",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
        }
    }
}

impl From<serde_json::Error> for CalcError {
    fn from(e: serde_json::Error) -> Self {
        CalcError::SerializationError {
            reason: e.to_string(),
        }
    }
}
