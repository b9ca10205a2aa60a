//! Measurement categories and the unit classifier
//!
//! Categories are disjoint: a unit identifier appears in at most one list.
//! The probe order below is fixed so lookups and error messages are
//! deterministic.

use std::fmt;
use serde::{Serialize, Deserialize};
use uconv_core::ConversionError;

pub const TEMPERATURE_UNITS: &[&str] = &["celsius", "fahrenheit", "kelvin", "rankine"];

pub const LENGTH_UNITS: &[&str] = &[
    "meter", "kilometer", "centimeter", "millimeter",
    "inch", "foot", "yard", "mile", "nautical-mile",
];

pub const WEIGHT_UNITS: &[&str] = &["milligram", "gram", "kilogram", "pound", "ounce", "ton"];

pub const VOLUME_UNITS: &[&str] = &[
    "liter",
    "milliliter",
    "us-legal-cup",
    "imperial-cup",
    "us-liquid-pint",
    "imperial-pint",
    "us-legal-fluid-ounce",
    "imperial-fluid-ounce",
    "cubic-meter",
    "cubic-foot",
    "cubic-inch",
    "cubic-centimeter",
    "us-gallon",
    "imperial-gallon",
];

pub const TIME_UNITS: &[&str] = &[
    "millisecond", "second", "minute", "hour", "day", "week", "month", "year",
];

pub const NUMBER_UNITS: &[&str] = &["decimal", "binary", "hexadecimal", "base8"];

pub const FORCE_UNITS: &[&str] = &["newton", "dyne", "pound-force", "kilogram-force", "poundal"];

pub const PRESSURE_UNITS: &[&str] = &["pascal", "kilopascal", "bar", "psi", "atmosphere"];

pub const ENERGY_UNITS: &[&str] = &[
    "joule",
    "kilojoule",
    "calorie",
    "calorie-international-table",
    "calorie-thermochemical",
    "watt-hour",
    "kilowatt-hour",
    "electron-volt",
];

pub const ANGLE_UNITS: &[&str] = &["radian", "degree", "gradian", "arcminute", "arcsecond", "turn"];

/// A group of mutually convertible units sharing one base unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Temperature,
    Length,
    Weight,
    Volume,
    Time,
    Number,
    Force,
    Pressure,
    Energy,
    Angle,
}

impl Category {
    /// Probe order of the classifier
    pub const ALL: [Category; 10] = [
        Category::Temperature,
        Category::Length,
        Category::Weight,
        Category::Volume,
        Category::Time,
        Category::Number,
        Category::Force,
        Category::Pressure,
        Category::Energy,
        Category::Angle,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Category::Temperature => "temperature",
            Category::Length => "length",
            Category::Weight => "weight",
            Category::Volume => "volume",
            Category::Time => "time",
            Category::Number => "number",
            Category::Force => "force",
            Category::Pressure => "pressure",
            Category::Energy => "energy",
            Category::Angle => "angle",
        }
    }

    /// Unit identifiers belonging to this category
    pub fn units(&self) -> &'static [&'static str] {
        match self {
            Category::Temperature => TEMPERATURE_UNITS,
            Category::Length => LENGTH_UNITS,
            Category::Weight => WEIGHT_UNITS,
            Category::Volume => VOLUME_UNITS,
            Category::Time => TIME_UNITS,
            Category::Number => NUMBER_UNITS,
            Category::Force => FORCE_UNITS,
            Category::Pressure => PRESSURE_UNITS,
            Category::Energy => ENERGY_UNITS,
            Category::Angle => ANGLE_UNITS,
        }
    }

    /// The conversion identity point of the category
    pub fn base_unit(&self) -> &'static str {
        match self {
            Category::Temperature => "kelvin",
            Category::Length => "meter",
            Category::Weight => "gram",
            Category::Volume => "liter",
            Category::Time => "second",
            Category::Number => "decimal",
            Category::Force => "newton",
            Category::Pressure => "pascal",
            Category::Energy => "joule",
            Category::Angle => "radian",
        }
    }

    pub fn contains(&self, unit: &str) -> bool {
        self.units().iter().any(|u| *u == unit)
    }

    /// Results in this category are rendered without a unit suffix
    pub fn is_labelless(&self) -> bool {
        matches!(self, Category::Number)
    }

    /// Look a category up by name
    pub fn from_name(name: &str) -> Option<Category> {
        let name = name.trim().to_lowercase();
        Self::ALL.iter().copied().find(|c| c.name() == name)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Determine the category of a unit identifier.
///
/// Probes the categories in `Category::ALL` order and returns the first whose
/// unit list contains `unit`.
pub fn classify(unit: &str) -> Result<Category, ConversionError> {
    Category::ALL
        .iter()
        .copied()
        .find(|category| category.contains(unit))
        .ok_or_else(|| ConversionError::UnknownUnit(unit.to_string()))
}
