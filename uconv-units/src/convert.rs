//! The conversion engine and its builder API
//!
//! A conversion classifies the source unit, converts the value to the base
//! unit of that category, converts the base value to the target unit, then
//! applies the precision policy of the config.

use std::fmt;
use serde::Serialize;
use tracing::trace;
use uconv_core::{ConversionError, Number, Value};
use crate::{Category, ConversionConfig, ConversionOptions, classify, format_for_locale, UNITS};

/// Outcome of one conversion
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConversionResult {
    pub value: Value,
    /// Display label of the target unit
    pub unit: String,
    pub category: Category,
}

impl ConversionResult {
    pub fn as_number(&self) -> Option<&Number> {
        self.value.as_number()
    }

    pub fn as_text(&self) -> Option<&str> {
        self.value.as_text()
    }

    /// Lossy float view of a numeric result
    pub fn as_f64(&self) -> Option<f64> {
        self.as_number().and_then(Number::to_f64)
    }

    /// Render as one string: value, then label unless suppressed.
    ///
    /// Results in the `number` category are never suffixed and never
    /// localized, since their digits are the value.
    pub fn render(&self, config: &ConversionConfig) -> String {
        let labelless = self.category.is_labelless();
        let value = match (&self.value, &config.locale) {
            (Value::Number(n), Some(tag)) if !labelless => format_for_locale(&n.to_string(), tag),
            (value, _) => value.to_string(),
        };

        if config.include_unit && !labelless {
            format!("{}{}", value, self.unit)
        } else {
            value
        }
    }
}

impl fmt::Display for ConversionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.category.is_labelless() {
            write!(f, "{}", self.value)
        } else {
            write!(f, "{}{}", self.value, self.unit)
        }
    }
}

/// Convert `value` from one unit to another.
///
/// Unit names may be identifiers, labels or aliases ("ft", "feet", "foot").
pub fn convert(
    value: impl Into<Value>,
    from: &str,
    to: &str,
    config: &ConversionConfig,
) -> Result<ConversionResult, ConversionError> {
    convert_value(&value.into(), from, to, config)
}

/// Borrowing form of [`convert`]
pub fn convert_value(
    value: &Value,
    from: &str,
    to: &str,
    config: &ConversionConfig,
) -> Result<ConversionResult, ConversionError> {
    let from = UNITS.resolve(from);
    let to = UNITS.resolve(to);
    let category = classify(from)?;

    let (from_unit, to_unit) = match (UNITS.get(category, from), UNITS.get(category, to)) {
        (Some(f), Some(t)) => (f, t),
        _ => return Err(ConversionError::incompatible(from, to)),
    };
    trace!(%category, from = from_unit.id, to = to_unit.id, "resolved units");

    let base = from_unit.to_base(value)?;
    trace!(%base, unit = category.base_unit(), "converted to base unit");

    let converted = to_unit.from_base(&base)?;
    let value = apply_precision(converted, config);
    trace!(result = %value, "applied precision");

    Ok(ConversionResult {
        value,
        unit: to_unit.label().to_string(),
        category,
    })
}

/// Round numeric results per the config; digit strings pass through.
pub fn apply_precision(value: Value, config: &ConversionConfig) -> Value {
    match value {
        Value::Number(n) if !config.is_float => Value::Number(n.round()),
        Value::Number(n) => Value::Number(n.round_to(config.decimals)),
        text => text,
    }
}

/// Entry point of the builder API
///
/// ```
/// use uconv_units::Converter;
///
/// let feet = Converter::default().value(1).from("meter").to("foot").unwrap();
/// assert_eq!(feet.to_string(), "3.28ft");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Converter {
    config: ConversionConfig,
}

impl Converter {
    pub fn new(config: ConversionConfig) -> Self {
        Converter { config }
    }

    /// Defaults overridden by the set fields of `options`
    pub fn with_options(options: ConversionOptions) -> Self {
        Converter { config: ConversionConfig::from(options) }
    }

    pub fn config(&self) -> &ConversionConfig {
        &self.config
    }

    pub fn value(&self, value: impl Into<Value>) -> ValueWithFrom<'_> {
        ValueWithFrom { value: value.into(), config: &self.config }
    }

    pub fn convert(&self, value: impl Into<Value>, from: &str, to: &str) -> Result<ConversionResult, ConversionError> {
        convert(value, from, to, &self.config)
    }
}

/// A value waiting for its source unit
#[derive(Debug, Clone)]
pub struct ValueWithFrom<'a> {
    value: Value,
    config: &'a ConversionConfig,
}

impl<'a> ValueWithFrom<'a> {
    pub fn from(self, unit: &str) -> FromUnit<'a> {
        FromUnit { value: self.value, unit: unit.to_string(), config: self.config }
    }
}

/// A value with its source unit, ready to convert
#[derive(Debug, Clone)]
pub struct FromUnit<'a> {
    value: Value,
    unit: String,
    config: &'a ConversionConfig,
}

impl FromUnit<'_> {
    pub fn to(&self, unit: &str) -> Result<ConversionResult, ConversionError> {
        convert_value(&self.value, &self.unit, unit, self.config)
    }

    /// Convert and render as a single string
    pub fn to_formatted(&self, unit: &str) -> Result<String, ConversionError> {
        Ok(self.to(unit)?.render(self.config))
    }
}
