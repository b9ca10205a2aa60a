//! uconv Core - Fundamental types
//!
//! This crate provides the core types used throughout uconv:
//! - `Number`: Arbitrary precision decimal numbers
//! - `Value`: Conversion inputs and outputs (numbers or digit text)
//! - `ConversionError`: The conversion error taxonomy

mod number;
mod value;
mod error;

pub use number::{Number, NumberError, DEFAULT_PRECISION, MAX_EXPONENT};
pub use value::Value;
pub use error::{ConversionError, ErrorReport, codes};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{Number, Value, ConversionError, ErrorReport};
    pub use crate::error::codes;
}
