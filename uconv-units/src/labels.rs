//! Display labels for unit identifiers
//!
//! The table is wider than the set of convertible units: it also carries the
//! conventional abbreviations of SI prefixes and related units so callers can
//! label values they convert elsewhere.

use phf::phf_map;

pub static LABELS: phf::Map<&'static str, &'static str> = phf_map! {
    // time
    "year" => "y",
    "month" => "mo",
    "week" => "wk",
    "day" => "d",
    "hour" => "h",
    "minute" => "min",
    "second" => "s",
    "millisecond" => "ms",
    "microsecond" => "µs",
    "nanosecond" => "ns",
    "picosecond" => "ps",
    "femtosecond" => "fs",
    "attosecond" => "as",
    "zeptosecond" => "zs",
    "yoctosecond" => "ys",

    // length
    "meter" => "m",
    "kilometer" => "km",
    "centimeter" => "cm",
    "millimeter" => "mm",
    "micrometer" => "µm",
    "nanometer" => "nm",
    "picometer" => "pm",
    "femtometer" => "fm",
    "attometer" => "am",
    "zeptometer" => "zm",
    "yoctometer" => "ym",
    "ronnameter" => "Rm",
    "quettameter" => "Qm",
    "inch" => "in",
    "foot" => "ft",
    "yard" => "yd",
    "mile" => "mi",
    "nautical-mile" => "nmi",
    "link" => "link",
    "fathom" => "ftm",
    "chain" => "ch",
    "league" => "lea",

    // mass
    "kilogram" => "kg",
    "gram" => "g",
    "milligram" => "mg",
    "microgram" => "µg",
    "nanogram" => "ng",
    "picogram" => "pg",
    "femtogram" => "fg",
    "attogram" => "ag",
    "zeptogram" => "zg",
    "yoctogram" => "yg",
    "ronnagram" => "Rg",
    "quettagram" => "Qg",
    "tonne" => "t",
    "pound" => "lb",
    "ounce" => "oz",
    "stone" => "st",
    "dalton" => "Da",
    "atomic-mass-unit" => "u",
    "carat" => "ct",

    // volume
    "liter" => "l",
    "milliliter" => "ml",
    "us-gallon" => "gallon (US)",
    "imperial-gallon" => "gallon (UK)",
    "us-legal-cup" => "cup (US)",
    "imperial-cup" => "cup (UK)",
    "us-liquid-pint" => "pt (US)",
    "imperial-pint" => "pt (UK)",
    "us-legal-fluid-ounce" => "fl oz (US)",
    "imperial-fluid-ounce" => "fl oz (UK)",
    "cubic-millimeter" => "mm^3",
    "cubic-centimeter" => "cm^3",
    "cubic-meter" => "m^3",
    "cubic-foot" => "ft^3",
    "cubic-inch" => "in^3",

    // amount of substance
    "mole" => "mol",

    // electrical
    "ampere" => "A",
    "coulomb" => "C",
    "volt" => "V",
    "ohm" => "Ω",
    "siemens" => "S",
    "watt" => "W",
    "farad" => "F",
    "henry" => "H",
    "hertz" => "Hz",

    // temperature
    "kelvin" => "K",
    "celsius" => "°C",
    "fahrenheit" => "°F",
    "rankine" => "°R",
    "delisle" => "°De",
    "newton-degree" => "°N",
    "reaumur" => "°Ré",
    "romer" => "°Rø",

    // luminous intensity
    "candela" => "cd",
    "stilb" => "sb",

    // force
    "newton" => "N",
    "dyne" => "dyn",
    "poundal" => "pdl",
    "pound-force" => "lbf",
    "kilogram-force" => "kgf",

    // pressure
    "pascal" => "Pa",
    "kilopascal" => "kPa",
    "bar" => "bar",
    "psi" => "psi",
    "atmosphere" => "atm",

    // energy
    "joule" => "J",
    "kilojoule" => "kJ",
    "calorie" => "cal",
    "calorie-international-table" => "cal (IT)",
    "calorie-thermochemical" => "cal (th)",
    "watt-hour" => "Wh",
    "kilowatt-hour" => "kWh",
    "electron-volt" => "eV",

    // angle
    "radian" => "rad",
    "degree" => "°",
    "gradian" => "grad",
    "arcminute" => "′",
    "arcsecond" => "″",
    "turn" => "tr",
};

/// Label of a unit, or the identifier itself when it has none.
pub fn label_for(unit: &str) -> &str {
    LABELS.get(unit).copied().unwrap_or(unit)
}
