//! Non-decimal number systems
//!
//! Binary and octal values are carried as base-10 integers whose decimal
//! digits are the digit sequence: binary 1010 is the number 1010, not ten.
//! Hexadecimal values are written as strings because its digits include
//! letters, and are read from either strings or numbers.

use dashu_int::IBig;
use serde::{Serialize, Deserialize};
use uconv_core::{ConversionError, Number, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Radix {
    Binary,
    Octal,
    Hexadecimal,
}

impl Radix {
    pub fn base(self) -> u32 {
        match self {
            Radix::Binary => 2,
            Radix::Octal => 8,
            Radix::Hexadecimal => 16,
        }
    }

    /// Unit identifier of this number system
    pub fn unit(self) -> &'static str {
        match self {
            Radix::Binary => "binary",
            Radix::Octal => "base8",
            Radix::Hexadecimal => "hexadecimal",
        }
    }

    /// Human description of the legal digit set
    pub fn allowed(self) -> &'static str {
        match self {
            Radix::Binary => "the digits 0 and 1",
            Radix::Octal => "the digits 0-7",
            Radix::Hexadecimal => "the hex digits 0-9 and A-F",
        }
    }

    /// Read a value written in this radix and return it as a decimal number.
    pub fn to_decimal(self, value: &Value) -> Result<Number, ConversionError> {
        let digits = match (self, value) {
            (Radix::Hexadecimal, Value::Text(text)) => self.hex_digits(text)?,
            (_, value) => {
                let n = value.to_number()?;
                let repr = self.integer_operand(&n)?;
                self.validated_digits(&repr)?
            }
        };
        Ok(Number::from_integer(accumulate(&digits, self.base())))
    }

    /// Write a decimal number in this radix.
    pub fn from_decimal(self, decimal: &Number) -> Result<Value, ConversionError> {
        let n = self.integer_operand(decimal)?;
        let mut digits = peel_digits(n, self.base());
        if digits.is_empty() {
            digits.push(0);
        }

        match self {
            Radix::Hexadecimal => {
                let text = digits
                    .iter()
                    .rev()
                    .filter_map(|d| char::from_digit(*d, 16))
                    .map(|c| c.to_ascii_uppercase())
                    .collect();
                Ok(Value::Text(text))
            }
            // Same digit sequence, read back as a base-10 integer
            _ => Ok(Value::Number(Number::from_integer(accumulate(&digits, 10)))),
        }
    }

    /// Non-negative integer check shared by both directions
    fn integer_operand(self, n: &Number) -> Result<IBig, ConversionError> {
        if n.is_negative() {
            return Err(ConversionError::negative(self.unit(), n));
        }
        n.to_integer()
            .ok_or_else(|| ConversionError::not_integer(self.unit(), n))
    }

    /// Peel the decimal digits off `repr` and check each against this radix
    fn validated_digits(self, repr: &IBig) -> Result<Vec<u32>, ConversionError> {
        let digits = peel_digits(repr.clone(), 10);
        if digits.iter().any(|d| *d >= self.base()) {
            return Err(self.invalid_digit(&repr.to_string()));
        }
        Ok(digits)
    }

    /// Hex digit string, optional 0x/0X prefix, least significant digit first
    fn hex_digits(self, text: &str) -> Result<Vec<u32>, ConversionError> {
        let trimmed = text.trim();
        if trimmed.starts_with('-') {
            return Err(ConversionError::negative(self.unit(), trimmed));
        }

        let body = trimmed
            .strip_prefix("0x")
            .or_else(|| trimmed.strip_prefix("0X"))
            .unwrap_or(trimmed);
        if body.is_empty() {
            return Err(self.invalid_digit(trimmed));
        }

        body.chars()
            .rev()
            .map(|c| c.to_digit(16).ok_or_else(|| self.invalid_digit(trimmed)))
            .collect()
    }

    fn invalid_digit(self, value: &str) -> ConversionError {
        ConversionError::InvalidDigit {
            unit: self.unit().to_string(),
            value: value.to_string(),
            allowed: self.allowed().to_string(),
        }
    }
}

/// Repeated division: remainders least significant first, empty for zero
fn peel_digits(mut n: IBig, radix: u32) -> Vec<u32> {
    let divisor = IBig::from(radix);
    let mut digits = Vec::new();
    while n > IBig::ZERO {
        let remainder = &n % &divisor;
        digits.push(u32::try_from(remainder).unwrap_or(0));
        n = &n / &divisor;
    }
    digits
}

/// Positional accumulation: sum of digit * radix^position
fn accumulate(digits_lsf: &[u32], radix: u32) -> IBig {
    let radix = IBig::from(radix);
    let mut place = IBig::ONE;
    let mut total = IBig::ZERO;
    for digit in digits_lsf {
        total = &total + &(&place * &IBig::from(*digit));
        place = &place * &radix;
    }
    total
}
