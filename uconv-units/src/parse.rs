//! Query parsing - "5 km to mi", "km -> mi", "0xFF hexadecimal"

use uconv_core::{ConversionError, Number, Value};
use crate::{ConversionConfig, ConversionResult, Unit, convert_value, UNITS};

/// Separators between a source and a target unit, in matching order
const SEPARATORS: [&str; 4] = ["->", "→", " to ", " in "];

/// A parsed "<value> <unit> to <unit>" query
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionQuery {
    pub value: Value,
    pub from: &'static Unit,
    pub to: &'static Unit,
}

impl ConversionQuery {
    pub fn run(&self, config: &ConversionConfig) -> Result<ConversionResult, ConversionError> {
        convert_value(&self.value, self.from.id, self.to.id, config)
    }
}

/// Look a unit up by identifier, label or alias
pub fn parse_unit(s: &str) -> Result<&'static Unit, ConversionError> {
    let s = s.trim();
    UNITS
        .lookup(s)
        .ok_or_else(|| ConversionError::UnknownUnit(s.to_string()))
}

/// Split at the first separator that occurs. " in " splits at its last
/// occurrence so "5 in in cm" reads as inches to centimeters.
fn split_units(s: &str) -> Option<(&str, &str)> {
    SEPARATORS.iter().find_map(|sep| {
        if *sep == " in " {
            s.rsplit_once(sep)
        } else {
            s.split_once(sep)
        }
    })
}

/// Parse a conversion specification like "kg->lb" or "celsius to kelvin"
pub fn parse_conversion(s: &str) -> Result<(&'static Unit, &'static Unit), ConversionError> {
    let (from, to) = split_units(s).ok_or_else(|| {
        ConversionError::InvalidQuery(format!("{}, expected 'unit1 -> unit2'", s.trim()))
    })?;
    if split_units(to).is_some() {
        return Err(ConversionError::InvalidQuery(format!(
            "{}, expected exactly one target unit",
            s.trim()
        )));
    }

    Ok((parse_unit(from)?, parse_unit(to)?))
}

/// Parse a quantity string like "5 m", "100kg" or "0xFF hexadecimal"
pub fn parse_quantity(s: &str) -> Result<(Value, &'static Unit), ConversionError> {
    let s = s.trim();

    let (value_str, unit_str) = match s.split_once(char::is_whitespace) {
        Some((value, unit)) => (value, unit.trim()),
        None => split_attached(s),
    };
    if value_str.is_empty() {
        return Err(ConversionError::InvalidQuery(format!("no number found in: {}", s)));
    }
    if unit_str.is_empty() {
        return Err(ConversionError::InvalidQuery(format!("no unit found in: {}", s)));
    }

    let unit = parse_unit(unit_str)?;
    // Hex digits stay text; the conversion validates them
    let value = if unit.id == "hexadecimal" {
        Value::Text(value_str.to_string())
    } else {
        let n = Number::from_str(value_str)
            .map_err(|_| ConversionError::InvalidNumericValue(value_str.to_string()))?;
        Value::Number(n)
    };

    Ok((value, unit))
}

/// "100kg" style: the number runs until the first character that cannot
/// be part of it.
fn split_attached(s: &str) -> (&str, &str) {
    let mut split_pos = 0;
    for (i, c) in s.char_indices() {
        if c.is_ascii_digit() || c == '.' || c == '-' || c == '+' {
            split_pos = i + c.len_utf8();
        } else if (c == 'e' || c == 'E') && split_pos > 0 && starts_exponent(&s[i + 1..]) {
            split_pos = i + c.len_utf8();
        } else {
            break;
        }
    }
    (&s[..split_pos], s[split_pos..].trim())
}

fn starts_exponent(rest: &str) -> bool {
    let rest = rest.strip_prefix(&['-', '+'][..]).unwrap_or(rest);
    rest.chars().next().is_some_and(|c| c.is_ascii_digit())
}

/// Parse a full query like "5 km to mi"
pub fn parse_query(s: &str) -> Result<ConversionQuery, ConversionError> {
    let s = s.trim();
    let (quantity, target) = split_units(s).ok_or_else(|| {
        ConversionError::InvalidQuery(format!("{}, expected '<value> <unit> to <unit>'", s))
    })?;

    let (value, from) = parse_quantity(quantity)?;
    let to = parse_unit(target)?;
    Ok(ConversionQuery { value, from, to })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_unit() {
        assert_eq!(parse_unit("m").unwrap().id, "meter");
        assert_eq!(parse_unit(" kilograms ").unwrap().id, "kilogram");
        assert_eq!(parse_unit("°F").unwrap().id, "fahrenheit");
    }

    #[test]
    fn test_unknown_unit() {
        assert_eq!(
            parse_unit("unknown_xyz"),
            Err(ConversionError::UnknownUnit("unknown_xyz".to_string()))
        );
    }

    #[test]
    fn test_parse_conversion() {
        let (from, to) = parse_conversion("km->mi").unwrap();
        assert_eq!(from.id, "kilometer");
        assert_eq!(to.id, "mile");
    }

    #[test]
    fn test_parse_conversion_arrow() {
        let (from, to) = parse_conversion("C→F").unwrap();
        assert_eq!(from.id, "celsius");
        assert_eq!(to.id, "fahrenheit");
    }

    #[test]
    fn test_parse_conversion_words() {
        let (from, to) = parse_conversion("liter to us-gallon").unwrap();
        assert_eq!(from.id, "liter");
        assert_eq!(to.id, "us-gallon");

        let (from, to) = parse_conversion("feet in meters").unwrap();
        assert_eq!(from.id, "foot");
        assert_eq!(to.id, "meter");
    }

    #[test]
    fn test_parse_conversion_malformed() {
        assert!(matches!(parse_conversion("km mi"), Err(ConversionError::InvalidQuery(_))));
        assert!(matches!(parse_conversion("km -> mi -> ft"), Err(ConversionError::InvalidQuery(_))));
    }

    #[test]
    fn test_parse_quantity() {
        let (value, unit) = parse_quantity("5 m").unwrap();
        assert_eq!(value, Value::Number(Number::from_i64(5)));
        assert_eq!(unit.id, "meter");

        let (value, unit) = parse_quantity("100kg").unwrap();
        assert_eq!(value, Value::Number(Number::from_i64(100)));
        assert_eq!(unit.id, "kilogram");

        let (value, unit) = parse_quantity("-3.14 rad").unwrap();
        assert_eq!(value, Value::Number(Number::from_str("-3.14").unwrap()));
        assert_eq!(unit.id, "radian");
    }

    #[test]
    fn test_parse_quantity_exponent_and_unit_starting_with_e() {
        let (value, unit) = parse_quantity("2e3m").unwrap();
        assert_eq!(value, Value::Number(Number::from_i64(2000)));
        assert_eq!(unit.id, "meter");

        let (value, unit) = parse_quantity("2eV").unwrap();
        assert_eq!(value, Value::Number(Number::from_i64(2)));
        assert_eq!(unit.id, "electron-volt");
    }

    #[test]
    fn test_parse_quantity_hex() {
        let (value, unit) = parse_quantity("0xFF hexadecimal").unwrap();
        assert_eq!(value, Value::from("0xFF"));
        assert_eq!(unit.id, "hexadecimal");

        let (value, _) = parse_quantity("10 hex").unwrap();
        assert_eq!(value, Value::from("10"));
    }

    #[test]
    fn test_parse_quantity_errors() {
        assert!(matches!(parse_quantity("km"), Err(ConversionError::InvalidQuery(_))));
        assert!(matches!(parse_quantity("5"), Err(ConversionError::InvalidQuery(_))));
        assert!(matches!(parse_quantity("five km"), Err(ConversionError::InvalidNumericValue(_))));
        assert!(matches!(parse_quantity("5 furlongs"), Err(ConversionError::UnknownUnit(_))));
    }

    #[test]
    fn test_parse_query() {
        let query = parse_query("5 km to mi").unwrap();
        assert_eq!(query.value, Value::Number(Number::from_i64(5)));
        assert_eq!(query.from.id, "kilometer");
        assert_eq!(query.to.id, "mile");

        let result = query.run(&ConversionConfig::default()).unwrap();
        assert_eq!(result.to_string(), "3.11mi");
    }

    #[test]
    fn test_parse_query_inches() {
        let query = parse_query("5 in in cm").unwrap();
        assert_eq!(query.from.id, "inch");
        assert_eq!(query.to.id, "centimeter");
        assert_eq!(query.run(&ConversionConfig::default()).unwrap().to_string(), "12.7cm");
    }

    #[test]
    fn test_parse_query_hex() {
        let query = parse_query("0xFF hexadecimal -> decimal").unwrap();
        let result = query.run(&ConversionConfig::default()).unwrap();
        assert_eq!(result.value, Value::Number(Number::from_i64(255)));
    }
}
