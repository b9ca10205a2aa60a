//! Unit representation with its conversion rule

use std::fmt;
use serde::Serialize;
use uconv_core::{ConversionError, Number, Value};
use crate::{Category, Radix};

/// How a unit maps to and from the base unit of its category
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ConversionRule {
    /// The base unit itself
    Identity,
    /// base = value * factor
    Scale(Number),
    /// base = value / divisor
    InverseScale(Number),
    /// base = (value - zero) * numerator / denominator + offset
    Affine {
        zero: Number,
        numerator: Number,
        denominator: Number,
        offset: Number,
    },
    /// Positional number system, base is decimal
    Radix(Radix),
}

impl ConversionRule {
    /// Convert a value in this unit to the base unit of the category
    pub fn to_base(&self, value: &Value) -> Result<Number, ConversionError> {
        match self {
            ConversionRule::Identity => value.to_number(),
            ConversionRule::Scale(factor) => Ok(value.to_number()?.mul(factor)),
            ConversionRule::InverseScale(divisor) => Ok(value.to_number()?.checked_div(divisor)?),
            ConversionRule::Affine { zero, numerator, denominator, offset } => {
                // Multiply before dividing so 5/9 style ratios stay exact
                let shifted = value.to_number()?.sub(zero).mul(numerator);
                Ok(shifted.checked_div(denominator)?.add(offset))
            }
            ConversionRule::Radix(radix) => radix.to_decimal(value),
        }
    }

    /// Convert a base-unit value into this unit
    pub fn from_base(&self, base: &Number) -> Result<Value, ConversionError> {
        let n = match self {
            ConversionRule::Identity => base.clone(),
            ConversionRule::Scale(factor) => base.checked_div(factor)?,
            ConversionRule::InverseScale(divisor) => base.mul(divisor),
            ConversionRule::Affine { zero, numerator, denominator, offset } => {
                base.sub(offset).mul(denominator).checked_div(numerator)?.add(zero)
            }
            ConversionRule::Radix(radix) => return radix.from_decimal(base),
        };
        Ok(Value::Number(n))
    }
}

/// A unit known to the registry
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Unit {
    /// Canonical identifier (e.g., "nautical-mile")
    pub id: &'static str,
    /// Human name (e.g., "nautical mile")
    pub name: &'static str,
    pub category: Category,
    pub rule: ConversionRule,
}

impl Unit {
    pub fn new(id: &'static str, name: &'static str, category: Category, rule: ConversionRule) -> Self {
        Unit { id, name, category, rule }
    }

    /// Check if this is the base unit of its category
    pub fn is_base(&self) -> bool {
        matches!(self.rule, ConversionRule::Identity)
    }

    /// Display label, falling back to the identifier
    pub fn label(&self) -> &'static str {
        crate::labels::label_for(self.id)
    }

    pub fn to_base(&self, value: &Value) -> Result<Number, ConversionError> {
        self.rule.to_base(value)
    }

    pub fn from_base(&self, base: &Number) -> Result<Value, ConversionError> {
        self.rule.from_base(base)
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn num(s: &str) -> Number {
        Number::from_str(s).unwrap()
    }

    fn kilometer() -> Unit {
        Unit::new("kilometer", "kilometer", Category::Length, ConversionRule::Scale(num("1000")))
    }

    fn celsius() -> Unit {
        Unit::new(
            "celsius",
            "degree Celsius",
            Category::Temperature,
            ConversionRule::Affine {
                zero: num("0"),
                numerator: num("1"),
                denominator: num("1"),
                offset: num("273.15"),
            },
        )
    }

    #[test]
    fn test_is_base() {
        let meter = Unit::new("meter", "meter", Category::Length, ConversionRule::Identity);
        assert!(meter.is_base());
        assert!(!kilometer().is_base());
    }

    #[test]
    fn test_scale() {
        let km = kilometer();
        assert_eq!(km.to_base(&Value::from(5)).unwrap(), num("5000"));
        assert_eq!(km.from_base(&num("5000")).unwrap(), Value::Number(num("5")));
    }

    #[test]
    fn test_inverse_scale() {
        let cm = Unit::new("centimeter", "centimeter", Category::Length, ConversionRule::InverseScale(num("100")));
        assert_eq!(cm.to_base(&Value::from(250)).unwrap(), num("2.5"));
        assert_eq!(cm.from_base(&num("2.5")).unwrap(), Value::Number(num("250")));
    }

    #[test]
    fn test_affine() {
        let c = celsius();
        assert_eq!(c.to_base(&Value::from(0)).unwrap(), num("273.15"));
        assert_eq!(c.from_base(&num("373.15")).unwrap(), Value::Number(num("100")));

        let f = Unit::new(
            "fahrenheit",
            "degree Fahrenheit",
            Category::Temperature,
            ConversionRule::Affine {
                zero: num("32"),
                numerator: num("5"),
                denominator: num("9"),
                offset: num("273.15"),
            },
        );
        assert_eq!(f.to_base(&Value::from(32)).unwrap(), num("273.15"));
        assert_eq!(f.to_base(&Value::from(212)).unwrap(), num("373.15"));
        assert_eq!(f.from_base(&num("373.15")).unwrap(), Value::Number(num("212")));
        assert_eq!(f.from_base(&num("233.15")).unwrap(), Value::Number(num("-40")));
    }

    #[test]
    fn test_text_input_is_parsed() {
        assert_eq!(kilometer().to_base(&Value::from("1.5")).unwrap(), num("1500"));
        assert!(matches!(
            kilometer().to_base(&Value::from("far")),
            Err(ConversionError::InvalidNumericValue(_))
        ));
    }

    #[test]
    fn test_radix_rule() {
        let hex = Unit::new("hexadecimal", "hexadecimal", Category::Number, ConversionRule::Radix(Radix::Hexadecimal));
        assert_eq!(hex.to_base(&Value::from("FF")).unwrap(), num("255"));
        assert_eq!(hex.from_base(&num("255")).unwrap(), Value::from("FF"));
    }
}
