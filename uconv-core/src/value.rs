//! Values flowing in and out of a conversion
//!
//! Inputs are numbers or numeric text. Outputs are numbers, or digit strings
//! for number systems whose digits include letters.

use crate::{ConversionError, Number};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum Value {
    Number(Number),
    Text(String),
}

impl Value {
    pub fn as_number(&self) -> Option<&Number> {
        match self {
            Value::Number(n) => Some(n),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Type name for error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Number(_) => "Number",
            Value::Text(_) => "Text",
        }
    }

    /// Coerce to a number, parsing text as a decimal.
    pub fn to_number(&self) -> Result<Number, ConversionError> {
        match self {
            Value::Number(n) => Ok(n.clone()),
            Value::Text(s) => Number::from_str(s)
                .map_err(|_| ConversionError::InvalidNumericValue(s.clone())),
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Number(n) => write!(f, "{}", n),
            Value::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<Number> for Value {
    fn from(n: Number) -> Self {
        Value::Number(n)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(Number::from_i64(n))
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(Number::from_i64(n as i64))
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Value::Number(Number::from_i64(n as i64))
    }
}

/// NaN and infinities become text, which then fails numeric coercion.
impl From<f64> for Value {
    fn from(f: f64) -> Self {
        match Number::from_f64(f) {
            Some(n) => Value::Number(n),
            None => Value::Text(f.to_string()),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}
