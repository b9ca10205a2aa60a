//! Conversion errors and their structured, serializable report form
//!
//! Every failure is deterministic for a given input and is returned to the
//! caller as-is. Nothing here is retried or recovered locally.

use crate::NumberError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Standard error codes (machine-readable)
pub mod codes {
    pub const UNKNOWN_UNIT: &str = "UNKNOWN_UNIT";
    pub const INCOMPATIBLE_UNITS: &str = "INCOMPATIBLE_UNITS";
    pub const INVALID_NUMERIC_VALUE: &str = "INVALID_NUMERIC_VALUE";
    pub const INVALID_DIGIT: &str = "INVALID_DIGIT";
    pub const UNSUPPORTED_VALUE: &str = "UNSUPPORTED_VALUE";
    pub const INVALID_QUERY: &str = "INVALID_QUERY";
    pub const ARITHMETIC: &str = "ARITHMETIC";
}

/// Errors that can occur during unit conversion
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    /// Unit not found in any category
    #[error("Unknown unit: {0}")]
    UnknownUnit(String),

    /// Source and target do not share a factor table
    #[error("Cannot convert from {from} to {to}")]
    IncompatibleUnits { from: String, to: String },

    /// Text input that does not parse to a finite number
    #[error("Invalid numeric value: {0}")]
    InvalidNumericValue(String),

    /// Digit outside the legal set of a non-decimal base
    #[error("Invalid {unit} number: {value} (must contain only {allowed})")]
    InvalidDigit {
        unit: String,
        value: String,
        allowed: String,
    },

    /// Negative or fractional value where only non-negative integers are valid
    #[error("Unsupported {unit} value {value}: {reason}")]
    UnsupportedValue {
        unit: String,
        value: String,
        reason: String,
    },

    /// Text query that is not of the form "<value> <unit> to <unit>"
    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    #[error(transparent)]
    Arithmetic(#[from] NumberError),
}

impl ConversionError {
    pub fn incompatible(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self::IncompatibleUnits { from: from.into(), to: to.into() }
    }

    pub fn negative(unit: &str, value: impl ToString) -> Self {
        Self::UnsupportedValue {
            unit: unit.to_string(),
            value: value.to_string(),
            reason: "negative numbers are not supported".to_string(),
        }
    }

    pub fn not_integer(unit: &str, value: impl ToString) -> Self {
        Self::UnsupportedValue {
            unit: unit.to_string(),
            value: value.to_string(),
            reason: "only integers are supported".to_string(),
        }
    }

    /// Machine-readable code
    pub fn code(&self) -> &'static str {
        match self {
            Self::UnknownUnit(_) => codes::UNKNOWN_UNIT,
            Self::IncompatibleUnits { .. } => codes::INCOMPATIBLE_UNITS,
            Self::InvalidNumericValue(_) => codes::INVALID_NUMERIC_VALUE,
            Self::InvalidDigit { .. } => codes::INVALID_DIGIT,
            Self::UnsupportedValue { .. } => codes::UNSUPPORTED_VALUE,
            Self::InvalidQuery(_) => codes::INVALID_QUERY,
            Self::Arithmetic(_) => codes::ARITHMETIC,
        }
    }

    /// Suggestion for fixing the error
    pub fn suggestion(&self) -> Option<String> {
        match self {
            Self::UnknownUnit(_) => Some("List known units with `uconv units`".to_string()),
            Self::IncompatibleUnits { from, .. } => Some(format!(
                "Pick a target unit from the same category as '{}'",
                from
            )),
            Self::InvalidNumericValue(_) => Some("Use a decimal number such as 12 or 3.5".to_string()),
            Self::InvalidDigit { allowed, .. } => Some(format!("Use only {}", allowed)),
            Self::UnsupportedValue { .. } => {
                Some("Number bases accept non-negative integers only".to_string())
            }
            Self::InvalidQuery(_) => Some("Write queries as '5 km to mi' or 'km -> mi'".to_string()),
            Self::Arithmetic(_) => None,
        }
    }

    /// Structured form for machine consumers
    pub fn report(&self) -> ErrorReport {
        ErrorReport {
            code: self.code().to_string(),
            message: self.to_string(),
            suggestion: self.suggestion(),
        }
    }
}

/// Structured error for JSON output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorReport {
    /// Machine-readable error code
    pub code: String,

    /// Human-readable error message
    pub message: String,

    /// Suggestion for fixing the error
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

impl From<ConversionError> for ErrorReport {
    fn from(err: ConversionError) -> Self {
        err.report()
    }
}

impl std::fmt::Display for ErrorReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)?;
        if let Some(ref suggestion) = self.suggestion {
            write!(f, " (suggestion: {})", suggestion)?;
        }
        Ok(())
    }
}
