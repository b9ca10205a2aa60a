//! Unit definitions - conversion rules keyed by category and identifier

use std::collections::HashMap;
use std::sync::LazyLock;
use uconv_core::Number;
use crate::{Category, ConversionRule, Radix, Unit, classify, label_for};

/// Global unit registry
pub static UNITS: LazyLock<UnitRegistry> = LazyLock::new(UnitRegistry::new);

/// Registry of all convertible units
pub struct UnitRegistry {
    units: HashMap<Category, HashMap<&'static str, Unit>>,
    /// Display labels, matched exactly ("Mm" is not "mm")
    symbols: HashMap<&'static str, &'static str>,
    /// Spellings and plurals, also matched case-insensitively
    aliases: HashMap<String, &'static str>,
}

/// Parse a factor literal from the tables below.
fn factor(literal: &str) -> Number {
    Number::from_str(literal)
        .unwrap_or_else(|e| panic!("malformed factor literal {}: {}", literal, e))
}

fn scale(literal: &str) -> ConversionRule {
    ConversionRule::Scale(factor(literal))
}

fn inverse(literal: &str) -> ConversionRule {
    ConversionRule::InverseScale(factor(literal))
}

fn affine(zero: &str, numerator: &str, denominator: &str, offset: &str) -> ConversionRule {
    ConversionRule::Affine {
        zero: factor(zero),
        numerator: factor(numerator),
        denominator: factor(denominator),
        offset: factor(offset),
    }
}

impl Default for UnitRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl UnitRegistry {
    pub fn new() -> Self {
        let mut registry = UnitRegistry {
            units: HashMap::new(),
            symbols: HashMap::new(),
            aliases: HashMap::new(),
        };
        registry.register_all_units();
        registry.register_label_aliases();
        registry
    }

    /// Get a unit by category and canonical identifier
    pub fn get(&self, category: Category, unit: &str) -> Option<&Unit> {
        self.units.get(&category)?.get(unit)
    }

    /// Find a unit by identifier, label or alias
    pub fn lookup(&self, name: &str) -> Option<&Unit> {
        let id = self.resolve(name);
        let category = classify(id).ok()?;
        self.get(category, id)
    }

    /// Map a label or alias to its canonical identifier.
    ///
    /// Canonical identifiers are returned as-is. Labels only match exactly;
    /// identifiers and word aliases also match ignoring case. Unrecognised
    /// names are passed through trimmed, so classification reports them as
    /// unknown.
    pub fn resolve<'a>(&self, name: &'a str) -> &'a str {
        let name = name.trim();
        if classify(name).is_ok() {
            return name;
        }
        if let Some(id) = self.symbols.get(name).or_else(|| self.aliases.get(name)) {
            return *id;
        }

        let lower = name.to_lowercase();
        if let Ok(category) = classify(&lower) {
            if let Some(unit) = self.get(category, &lower) {
                return unit.id;
            }
        }
        match self.aliases.get(&lower) {
            Some(id) => *id,
            None => name,
        }
    }

    /// Get all units in a category, in listing order
    pub fn by_category(&self, category: Category) -> Vec<&Unit> {
        category
            .units()
            .iter()
            .filter_map(|id| self.get(category, id))
            .collect()
    }

    /// Categories in probe order with their unit identifiers
    pub fn categories(&self) -> Vec<(Category, &'static [&'static str])> {
        Category::ALL.iter().map(|c| (*c, c.units())).collect()
    }

    /// Number of registered units
    pub fn len(&self) -> usize {
        self.units.values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn register(&mut self, category: Category, id: &'static str, name: &'static str, rule: ConversionRule) {
        self.units
            .entry(category)
            .or_default()
            .insert(id, Unit::new(id, name, category, rule));
    }

    fn alias(&mut self, alias: &str, id: &'static str) {
        self.aliases.insert(alias.to_string(), id);
    }

    fn register_all_units(&mut self) {
        self.register_temperature_units();
        self.register_length_units();
        self.register_weight_units();
        self.register_volume_units();
        self.register_time_units();
        self.register_number_units();
        self.register_force_units();
        self.register_pressure_units();
        self.register_energy_units();
        self.register_angle_units();
    }

    /// Every label doubles as an alias of its unit
    fn register_label_aliases(&mut self) {
        let ids: Vec<&'static str> = Category::ALL
            .iter()
            .flat_map(|c| c.units().iter().copied())
            .collect();
        for id in ids {
            let label = label_for(id);
            if label != id {
                self.symbols.insert(label, id);
            }
        }
    }

    fn register_temperature_units(&mut self) {
        let category = Category::Temperature;
        self.register(category, "kelvin", "kelvin", ConversionRule::Identity);
        self.register(category, "celsius", "degree Celsius", affine("0", "1", "1", "273.15"));
        self.register(category, "fahrenheit", "degree Fahrenheit", affine("32", "5", "9", "273.15"));
        self.register(category, "rankine", "degree Rankine", affine("0", "5", "9", "0"));

        self.alias("C", "celsius");
        self.alias("F", "fahrenheit");
        self.alias("degC", "celsius");
        self.alias("degF", "fahrenheit");
    }

    fn register_length_units(&mut self) {
        let category = Category::Length;
        self.register(category, "meter", "meter", ConversionRule::Identity);
        self.register(category, "kilometer", "kilometer", scale("1000"));
        self.register(category, "centimeter", "centimeter", inverse("100"));
        self.register(category, "millimeter", "millimeter", inverse("1000"));
        self.register(category, "inch", "inch", scale("0.0254"));
        self.register(category, "foot", "foot", scale("0.3048"));
        self.register(category, "yard", "yard", scale("0.9144"));
        self.register(category, "mile", "mile", scale("1609.344"));
        self.register(category, "nautical-mile", "nautical mile", scale("1852"));

        self.alias("meters", "meter");
        self.alias("metre", "meter");
        self.alias("metres", "meter");
        self.alias("kilometers", "kilometer");
        self.alias("kilometre", "kilometer");
        self.alias("kilometres", "kilometer");
        self.alias("centimeters", "centimeter");
        self.alias("centimetre", "centimeter");
        self.alias("millimeters", "millimeter");
        self.alias("millimetre", "millimeter");
        self.alias("inches", "inch");
        self.alias("feet", "foot");
        self.alias("yards", "yard");
        self.alias("miles", "mile");
        self.alias("nautical-miles", "nautical-mile");
    }

    fn register_weight_units(&mut self) {
        let category = Category::Weight;
        self.register(category, "gram", "gram", ConversionRule::Identity);
        self.register(category, "milligram", "milligram", inverse("1000"));
        self.register(category, "kilogram", "kilogram", scale("1000"));
        self.register(category, "pound", "pound", scale("453.592"));
        self.register(category, "ounce", "ounce", scale("28.3495"));
        self.register(category, "ton", "metric ton", scale("1000000"));

        self.alias("grams", "gram");
        self.alias("milligrams", "milligram");
        self.alias("kilograms", "kilogram");
        self.alias("pounds", "pound");
        self.alias("lbs", "pound");
        self.alias("ounces", "ounce");
        self.alias("tons", "ton");
    }

    fn register_volume_units(&mut self) {
        let category = Category::Volume;
        self.register(category, "liter", "liter", ConversionRule::Identity);
        self.register(category, "milliliter", "milliliter", inverse("1000"));
        self.register(category, "cubic-meter", "cubic meter", inverse("0.001"));
        self.register(category, "cubic-centimeter", "cubic centimeter", inverse("1000"));
        self.register(category, "cubic-foot", "cubic foot", scale("28.31685"));
        self.register(category, "cubic-inch", "cubic inch", inverse("61.023744095"));
        self.register(category, "imperial-cup", "imperial cup", inverse("3.5195079728"));
        self.register(category, "us-legal-cup", "US legal cup", inverse("4.2267528377"));
        self.register(category, "us-gallon", "US gallon", inverse("0.2641720524"));
        self.register(category, "imperial-gallon", "imperial gallon", inverse("0.2199692483"));
        self.register(category, "us-liquid-pint", "US liquid pint", inverse("2.1133764189"));
        self.register(category, "imperial-pint", "imperial pint", inverse("1.7597539864"));
        self.register(category, "imperial-fluid-ounce", "imperial fluid ounce", inverse("35.195079728"));
        // 30 mL by US labelling law
        self.register(category, "us-legal-fluid-ounce", "US legal fluid ounce", scale("0.03"));

        self.alias("L", "liter");
        self.alias("mL", "milliliter");
        self.alias("liters", "liter");
        self.alias("litre", "liter");
        self.alias("litres", "liter");
        self.alias("milliliters", "milliliter");
        self.alias("millilitre", "milliliter");
    }

    fn register_time_units(&mut self) {
        let category = Category::Time;
        self.register(category, "second", "second", ConversionRule::Identity);
        self.register(category, "millisecond", "millisecond", inverse("1000"));
        self.register(category, "minute", "minute", scale("60"));
        self.register(category, "hour", "hour", scale("3600"));
        self.register(category, "day", "day", scale("86400"));
        self.register(category, "week", "week", scale("604800"));
        // Gregorian averages: 365.2425 days per year
        self.register(category, "month", "month", scale("2629746"));
        self.register(category, "year", "year", scale("31556952"));

        self.alias("seconds", "second");
        self.alias("sec", "second");
        self.alias("milliseconds", "millisecond");
        self.alias("minutes", "minute");
        self.alias("hours", "hour");
        self.alias("hr", "hour");
        self.alias("days", "day");
        self.alias("weeks", "week");
        self.alias("months", "month");
        self.alias("years", "year");
        self.alias("yr", "year");
    }

    fn register_number_units(&mut self) {
        let category = Category::Number;
        self.register(category, "decimal", "decimal", ConversionRule::Identity);
        self.register(category, "binary", "binary", ConversionRule::Radix(Radix::Binary));
        self.register(category, "base8", "octal", ConversionRule::Radix(Radix::Octal));
        self.register(category, "hexadecimal", "hexadecimal", ConversionRule::Radix(Radix::Hexadecimal));

        self.alias("dec", "decimal");
        self.alias("bin", "binary");
        self.alias("octal", "base8");
        self.alias("oct", "base8");
        self.alias("hex", "hexadecimal");
    }

    fn register_force_units(&mut self) {
        let category = Category::Force;
        self.register(category, "newton", "newton", ConversionRule::Identity);
        self.register(category, "dyne", "dyne", scale("0.00001"));
        self.register(category, "poundal", "poundal", scale("0.138255"));
        self.register(category, "pound-force", "pound-force", scale("4.44822"));
        self.register(category, "kilogram-force", "kilogram-force", inverse("0.1019716213"));

        self.alias("newtons", "newton");
        self.alias("dynes", "dyne");
    }

    fn register_pressure_units(&mut self) {
        let category = Category::Pressure;
        self.register(category, "pascal", "pascal", ConversionRule::Identity);
        self.register(category, "kilopascal", "kilopascal", scale("1000"));
        self.register(category, "bar", "bar", scale("100000"));
        self.register(category, "psi", "pound per square inch", scale("6894.76"));
        self.register(category, "atmosphere", "standard atmosphere", scale("101325"));

        self.alias("pascals", "pascal");
        self.alias("atmospheres", "atmosphere");
    }

    fn register_energy_units(&mut self) {
        let category = Category::Energy;
        self.register(category, "joule", "joule", ConversionRule::Identity);
        self.register(category, "kilojoule", "kilojoule", scale("1000"));
        self.register(category, "calorie", "calorie", inverse("0.0002388459"));
        self.register(category, "calorie-international-table", "calorie (international table)", inverse("0.2388458966"));
        self.register(category, "calorie-thermochemical", "calorie (thermochemical)", inverse("0.2390057361"));
        self.register(category, "watt-hour", "watt-hour", inverse("0.0002777778"));
        self.register(category, "kilowatt-hour", "kilowatt-hour", inverse("0.0000002777777777"));
        self.register(category, "electron-volt", "electronvolt", inverse("6241509074461000000"));

        self.alias("joules", "joule");
        self.alias("calories", "calorie");
        self.alias("electronvolt", "electron-volt");
    }

    fn register_angle_units(&mut self) {
        let category = Category::Angle;
        let pi = Number::pi(50);
        let part_of_pi = |n: i64| -> ConversionRule {
            match pi.checked_div(&Number::from_i64(n)) {
                Ok(f) => ConversionRule::Scale(f),
                Err(e) => panic!("angle factor pi/{}: {}", n, e),
            }
        };

        self.register(category, "radian", "radian", ConversionRule::Identity);
        self.register(category, "degree", "degree", part_of_pi(180));
        self.register(category, "gradian", "gradian", part_of_pi(200));
        self.register(category, "arcminute", "arcminute", part_of_pi(10800));
        self.register(category, "arcsecond", "arcsecond", part_of_pi(648000));
        self.register(category, "turn", "turn", ConversionRule::Scale(pi.mul(&Number::from_i64(2))));

        self.alias("radians", "radian");
        self.alias("degrees", "degree");
        self.alias("deg", "degree");
        self.alias("gradians", "gradian");
        self.alias("gon", "gradian");
        self.alias("arcmin", "arcminute");
        self.alias("arcsec", "arcsecond");
        self.alias("turns", "turn");
        self.alias("rev", "turn");
    }
}
