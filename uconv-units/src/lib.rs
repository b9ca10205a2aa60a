//! uconv Units - Unit classification and conversion
//!
//! Converts values between units of the same category through the category's
//! base unit, with configurable rounding and labelled output.
//!
//! Categories (base unit first):
//! - Temperature (kelvin, celsius, fahrenheit, rankine)
//! - Length (meter, km, cm, mm, in, ft, yd, mi, nmi)
//! - Weight (gram, mg, kg, lb, oz, ton)
//! - Volume (liter, ml, cups, pints, fluid ounces, gallons, cubic units)
//! - Time (second, ms, min, h, d, wk, mo, y)
//! - Number (decimal, binary, base8, hexadecimal)
//! - Force (N, dyn, lbf, kgf, pdl)
//! - Pressure (Pa, kPa, bar, psi, atm)
//! - Energy (J, kJ, cal, Wh, kWh, eV)
//! - Angle (rad, °, grad, ′, ″, tr)
//!
//! ```
//! use uconv_units::{convert, ConversionConfig};
//!
//! let result = convert(12, "celsius", "kelvin", &ConversionConfig::default()).unwrap();
//! assert_eq!(result.to_string(), "285.15K");
//! ```

mod category;
mod unit;
mod radix;
mod labels;
mod units;
mod config;
mod convert;
mod format;
mod parse;

pub use category::{Category, classify};
pub use unit::{Unit, ConversionRule};
pub use radix::Radix;
pub use labels::{LABELS, label_for};
pub use units::{UnitRegistry, UNITS};
pub use config::{ConversionConfig, ConversionOptions};
pub use convert::{
    apply_precision, convert, convert_value, ConversionResult, Converter, FromUnit, ValueWithFrom,
};
pub use format::{format_for_locale, Digits, Grouping, NumberFormat};
pub use parse::{parse_conversion, parse_quantity, parse_query, parse_unit, ConversionQuery};

pub use uconv_core::{ConversionError, ErrorReport, Number, Value};
