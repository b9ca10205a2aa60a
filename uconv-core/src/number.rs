//! Arbitrary precision numbers using dashu
//!
//! Uses dashu-float (DBig) for decimal arithmetic, so factor chains such as
//! `0.3048 * 1000 / 1609.344` stay exact where binary floats drift.

use dashu_float::DBig;
use dashu_float::ops::Abs;
use dashu_int::IBig;
use dashu_int::ops::BitTest;
use serde::{Deserialize, Serialize, Serializer, Deserializer};
use thiserror::Error;

/// Error type for number operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NumberError {
    #[error("Invalid number format: {0}")]
    ParseError(String),

    #[error("Division by zero")]
    DivisionByZero,
}

/// Default precision for calculations (decimal digits)
pub const DEFAULT_PRECISION: usize = 50;

/// Largest decimal exponent accepted from text
pub const MAX_EXPONENT: usize = 4096;

/// Arbitrary precision decimal number
///
/// Built on dashu-float's DBig. All operations return Results or new
/// Numbers - never panic.
#[derive(Debug, Clone)]
pub struct Number {
    inner: DBig,
}

impl Number {
    // ========== Construction ==========

    /// Ensure a DBig has adequate precision for calculations
    fn with_work_precision(val: DBig) -> DBig {
        val.with_precision(DEFAULT_PRECISION).value()
    }

    /// Precision that keeps every digit of `n`, never below the working precision
    fn digits_precision(n: &IBig) -> usize {
        n.to_string().trim_start_matches('-').len().max(DEFAULT_PRECISION)
    }

    /// Reject exponents whose plain rendering would not fit in memory
    fn bounded(inner: DBig, s: &str) -> Result<Self, NumberError> {
        let (_, exponent) = inner.clone().into_repr().into_parts();
        if exponent.unsigned_abs() > MAX_EXPONENT {
            return Err(NumberError::ParseError(s.to_string()));
        }
        Ok(Self { inner })
    }

    /// Create from decimal text.
    /// Supports: "123", "3.14", "1.5e10", "-42". Integers keep every digit.
    pub fn from_str(s: &str) -> Result<Self, NumberError> {
        let s = s.trim();

        let unsigned = s.strip_prefix(&['-', '+'][..]).unwrap_or(s);
        if !unsigned.is_empty() && unsigned.bytes().all(|b| b.is_ascii_digit()) {
            let magnitude: IBig = unsigned.parse()
                .map_err(|_| NumberError::ParseError(s.to_string()))?;
            let n = if s.starts_with('-') { -magnitude } else { magnitude };
            return Ok(Self::from_integer(n));
        }

        // Handle scientific notation with integer mantissa: "602214076e15"
        if (s.contains('e') || s.contains('E')) && !s.contains('.') {
            let s_lower = s.to_lowercase();
            let parts: Vec<&str> = s_lower.split('e').collect();
            if parts.len() == 2 {
                let mantissa: IBig = parts[0].parse()
                    .map_err(|_| NumberError::ParseError(s.to_string()))?;
                let exp: isize = parts[1].parse()
                    .map_err(|_| NumberError::ParseError(s.to_string()))?;
                if exp.unsigned_abs() > MAX_EXPONENT {
                    return Err(NumberError::ParseError(s.to_string()));
                }

                return Ok(Self::from_parts(mantissa, exp));
            }
        }

        // Standard decimal parsing
        let inner: DBig = s.parse()
            .map_err(|_| NumberError::ParseError(s.to_string()))?;
        let digits = s.bytes().filter(u8::is_ascii_digit).count();

        Self::bounded(inner.with_precision(digits.max(DEFAULT_PRECISION)).value(), s)
    }

    /// Create from i64 with working precision
    pub fn from_i64(n: i64) -> Self {
        Self { inner: Self::with_work_precision(DBig::from(n)) }
    }

    /// Create from ratio (exact division)
    pub fn from_ratio(num: i64, den: i64) -> Self {
        if den == 0 {
            return Self { inner: DBig::ZERO };
        }
        let n = Self::with_work_precision(DBig::from(num));
        let d = Self::with_work_precision(DBig::from(den));
        Self { inner: n / d }
    }

    /// `significand * 10^exponent`
    pub fn from_parts(significand: IBig, exponent: isize) -> Self {
        let precision = Self::digits_precision(&significand);
        let inner = DBig::from_parts(significand, exponent);
        Self { inner: inner.with_precision(precision).value() }
    }

    /// Create from an integer of any size without rounding it away.
    pub fn from_integer(n: IBig) -> Self {
        Self::from_parts(n, 0)
    }

    /// Create from f64. Returns None for NaN and infinities.
    pub fn from_f64(f: f64) -> Option<Self> {
        if !f.is_finite() {
            return None;
        }
        // Display for f64 prints the shortest round-trip decimal, never exponent form
        Self::from_str(&format!("{}", f)).ok()
    }

    // ========== Predicates ==========

    /// Check if zero
    pub fn is_zero(&self) -> bool {
        self.inner == DBig::ZERO
    }

    /// Check if negative
    pub fn is_negative(&self) -> bool {
        self.inner < DBig::ZERO
    }

    /// Check if value is an integer
    pub fn is_integer(&self) -> bool {
        let floor_val = self.inner.clone().floor();
        self.inner == floor_val
    }

    // ========== Basic Arithmetic ==========

    /// Addition
    pub fn add(&self, other: &Self) -> Self {
        Self { inner: &self.inner + &other.inner }
    }

    /// Subtraction
    pub fn sub(&self, other: &Self) -> Self {
        Self { inner: &self.inner - &other.inner }
    }

    /// Multiplication
    pub fn mul(&self, other: &Self) -> Self {
        Self { inner: &self.inner * &other.inner }
    }

    /// Safe division (returns Result, never panics)
    pub fn checked_div(&self, other: &Self) -> Result<Self, NumberError> {
        if other.is_zero() {
            Err(NumberError::DivisionByZero)
        } else {
            Ok(Self { inner: &self.inner / &other.inner })
        }
    }

    /// Negation
    pub fn neg(&self) -> Self {
        Self { inner: -&self.inner }
    }

    /// Integer power (exact)
    pub fn pow(&self, exp: i32) -> Self {
        if exp == 0 {
            return Self::from_i64(1);
        }

        let mut result = Self::from_i64(1);
        for _ in 0..exp.unsigned_abs() {
            result = result.mul(self);
        }

        if exp < 0 {
            Self::from_i64(1).checked_div(&result).unwrap_or(Self::from_i64(0))
        } else {
            result
        }
    }

    // ========== Mathematical Constants ==========

    /// Pi - from high-precision string constant
    pub fn pi(precision: u32) -> Self {
        const PI_STR: &str = "3.14159265358979323846264338327950288419716939937510582097494459230781640628620899862803482534211706798214808651328230664709384460955058223172535940812848111745028410270193852110555964462294895493038196442881097566593344612847564823378678316527120190914564856692346034861045432664821339360726024914127372458700660631558817488152092096282925409171536436789259036001133053054882046652138414695194151160943305727036575959195309218611738193261179310511854807446237996274956735188575272489122793818301194912";

        let end_pos = (precision as usize + 2).min(PI_STR.len());
        Self::from_str(&PI_STR[..end_pos])
            .unwrap_or(Self::from_ratio(355, 113))
    }

    // ========== Rounding ==========

    /// Absolute value
    pub fn abs(&self) -> Self {
        Self { inner: Abs::abs(self.inner.clone()) }
    }

    /// Floor - largest integer <= x
    pub fn floor(&self) -> Self {
        Self { inner: self.inner.clone().floor() }
    }

    /// Round to the nearest integer, ties away from zero
    pub fn round(&self) -> Self {
        if self.is_integer() {
            return self.clone();
        }
        let half = Self::from_ratio(1, 2);
        if self.is_negative() {
            self.abs().add(&half).floor().neg()
        } else {
            self.add(&half).floor()
        }
    }

    /// Round to `places` decimal places, ties away from zero
    pub fn round_to(&self, places: u32) -> Self {
        // Rounding past the last stored fraction digit changes nothing
        let (_, exponent) = self.inner.clone().into_repr().into_parts();
        let fraction_digits = exponent.min(0).unsigned_abs();
        if self.is_integer() || places as usize >= fraction_digits {
            return self.clone();
        }
        let Ok(power) = i32::try_from(places) else {
            return self.clone();
        };
        let scale = Self::from_i64(10).pow(power);
        match self.mul(&scale).round().to_integer() {
            Some(scaled) => Self::from_parts(scaled, -(places as isize)),
            None => self.clone(),
        }
    }

    // ========== Conversion ==========

    /// Exact integer value, if this number has no fractional part
    pub fn to_integer(&self) -> Option<IBig> {
        if !self.is_integer() {
            return None;
        }

        let (significand, exponent) = self.inner.clone().into_repr().into_parts();
        let ten = IBig::from(10u8);
        if exponent >= 0 {
            Some(significand * ten.pow(exponent as usize))
        } else {
            Some(significand / ten.pow(exponent.unsigned_abs()))
        }
    }

    /// Convert to f64 (may lose precision)
    pub fn to_f64(&self) -> Option<f64> {
        // Get the representation: significand * 10^exponent
        let (significand, exponent) = self.inner.clone().into_repr().into_parts();

        let sig_f64: f64 = if significand.bit_len() <= 53 {
            match TryInto::<i64>::try_into(significand.clone()) {
                Ok(i) => i as f64,
                Err(_) => return None,
            }
        } else {
            // Shift right to fit in 53 bits, adjusting by the bits we drop
            let extra_bits = significand.bit_len() - 53;
            let shifted = &significand >> extra_bits;
            let shifted_i64: i64 = shifted.try_into().ok()?;
            shifted_i64 as f64 * 2_f64.powi(extra_bits as i32)
        };

        let result = if exponent == 0 {
            sig_f64
        } else if exponent > 0 && exponent <= 308 {
            sig_f64 * 10_f64.powi(exponent as i32)
        } else if exponent < 0 && exponent >= -308 {
            sig_f64 / 10_f64.powi((-exponent) as i32)
        } else {
            return None;
        };

        if result.is_finite() {
            Some(result)
        } else {
            None
        }
    }

    // ========== Display ==========

    /// Fixed-point decimal text without trailing zeros ("1.10" renders "1.1").
    /// Never uses exponent notation.
    pub fn to_plain_string(&self) -> String {
        let (significand, exponent) = self.inner.clone().into_repr().into_parts();
        if significand == IBig::ZERO {
            return "0".to_string();
        }

        let text = significand.to_string();
        let (negative, digits) = match text.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, text.as_str()),
        };
        let trimmed = digits.trim_end_matches('0');
        let exponent = exponent + (digits.len() - trimmed.len()) as isize;

        let body = if exponent >= 0 {
            format!("{}{}", trimmed, "0".repeat(exponent as usize))
        } else {
            let shift = exponent.unsigned_abs();
            if shift >= trimmed.len() {
                format!("0.{}{}", "0".repeat(shift - trimmed.len()), trimmed)
            } else {
                let (int_part, frac_part) = trimmed.split_at(trimmed.len() - shift);
                format!("{}.{}", int_part, frac_part)
            }
        };

        if negative {
            format!("-{}", body)
        } else {
            body
        }
    }
}

// ========== Trait Implementations ==========

impl std::fmt::Display for Number {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_plain_string())
    }
}

impl Serialize for Number {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Number {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_str(&s).map_err(serde::de::Error::custom)
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl Eq for Number {}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Number {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.inner.partial_cmp(&other.inner).unwrap_or(std::cmp::Ordering::Equal)
    }
}
