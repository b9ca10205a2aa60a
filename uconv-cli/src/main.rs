//! uconv - command-line unit converter
//!
//! Commands:
//! - convert: Convert one value between two units
//! - eval: Convert a written query such as "5 km to mi"
//! - units: List categories and their units
//!
//! Results go to stdout. Errors and logs go to stderr, so stdout stays
//! machine-readable with `--json`.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use tracing::debug;
use tracing_subscriber::EnvFilter;
use uconv_core::{ErrorReport, Value};
use uconv_units::{
    parse_query, Category, ConversionConfig, ConversionOptions, ConversionResult, Converter, UNITS,
};

const CONFIG_ERROR: &str = "CONFIG_ERROR";
const UNKNOWN_CATEGORY: &str = "UNKNOWN_CATEGORY";

#[derive(Parser, Debug)]
#[command(name = "uconv", version, about = "Convert values between units", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Convert a value from one unit to another
    Convert {
        /// Value to convert (hex digits allowed for hexadecimal)
        #[arg(allow_hyphen_values = true)]
        value: String,

        /// Source unit (e.g., "meter", "ft", "°C")
        from: String,

        /// Target unit
        to: String,

        #[command(flatten)]
        format: FormatArgs,
    },

    /// Convert a query such as "5 km to mi" or "0xFF hex -> decimal"
    Eval {
        #[arg(allow_hyphen_values = true)]
        query: String,

        #[command(flatten)]
        format: FormatArgs,
    },

    /// List categories and their units
    Units {
        /// Only this category (e.g., "volume")
        category: Option<String>,

        /// Print JSON
        #[arg(long)]
        json: bool,
    },
}

/// Output options shared by convert and eval
#[derive(Args, Debug, Default, Clone)]
struct FormatArgs {
    /// Decimal places to keep
    #[arg(short, long)]
    decimals: Option<u32>,

    /// Round to the nearest integer
    #[arg(long)]
    integer: bool,

    /// Locale for number formatting (e.g., "de-DE")
    #[arg(long, env = "UCONV_LOCALE")]
    locale: Option<String>,

    /// Print the value without its unit label
    #[arg(long)]
    no_unit: bool,

    /// Print JSON
    #[arg(long)]
    json: bool,

    /// JSON file with default options (isFloat, decimals, locale, includeUnit)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
}

impl FormatArgs {
    /// File options overlaid by environment and flags
    fn options(&self) -> Result<ConversionOptions, ErrorReport> {
        let file = match &self.config {
            Some(path) => load_options(path)?,
            None => ConversionOptions::default(),
        };
        let flags = ConversionOptions {
            is_float: self.integer.then_some(false),
            decimals: self.decimals,
            locale: self.locale.clone(),
            include_unit: self.no_unit.then_some(false),
        };
        Ok(file.overlay(flags))
    }

    fn converter(&self) -> Result<Converter, ErrorReport> {
        let options = self.options()?;
        debug!(?options, "resolved conversion options");
        Ok(Converter::with_options(options))
    }
}

fn load_options(path: &Path) -> Result<ConversionOptions, ErrorReport> {
    let text = fs::read_to_string(path).map_err(|e| config_error(path, e))?;
    serde_json::from_str(&text).map_err(|e| config_error(path, e))
}

fn config_error(path: &Path, err: impl std::fmt::Display) -> ErrorReport {
    ErrorReport {
        code: CONFIG_ERROR.to_string(),
        message: format!("Failed to read config '{}': {}", path.display(), err),
        suggestion: Some("The config file must be a JSON object of conversion options".to_string()),
    }
}

#[derive(Serialize)]
struct ConvertOutput<'a> {
    #[serde(flatten)]
    result: &'a ConversionResult,
    formatted: String,
}

fn render_result(result: &ConversionResult, config: &ConversionConfig, json: bool) -> String {
    let formatted = result.render(config);
    if json {
        let output = ConvertOutput { result, formatted };
        serde_json::to_string_pretty(&output).unwrap_or_default()
    } else {
        formatted
    }
}

#[derive(Serialize)]
struct UnitInfo {
    id: &'static str,
    name: &'static str,
    label: &'static str,
    base: bool,
}

#[derive(Serialize)]
struct CategoryInfo {
    category: Category,
    base_unit: &'static str,
    units: Vec<UnitInfo>,
}

fn list_units(category: Option<&str>, json: bool) -> Result<String, ErrorReport> {
    let categories: Vec<Category> = match category {
        Some(name) => vec![Category::from_name(name).ok_or_else(|| ErrorReport {
            code: UNKNOWN_CATEGORY.to_string(),
            message: format!("Unknown category: {}", name),
            suggestion: Some(format!(
                "Known categories: {}",
                Category::ALL.iter().map(|c| c.name()).collect::<Vec<_>>().join(", ")
            )),
        })?],
        None => Category::ALL.to_vec(),
    };

    let infos: Vec<CategoryInfo> = categories
        .into_iter()
        .map(|category| CategoryInfo {
            category,
            base_unit: category.base_unit(),
            units: UNITS
                .by_category(category)
                .into_iter()
                .map(|u| UnitInfo { id: u.id, name: u.name, label: u.label(), base: u.is_base() })
                .collect(),
        })
        .collect();

    if json {
        return Ok(serde_json::to_string_pretty(&infos).unwrap_or_default());
    }

    let mut out = String::new();
    for info in &infos {
        out.push_str(&format!("{} (base: {})\n", info.category, info.base_unit));
        for unit in &info.units {
            out.push_str(&format!("  {:<30} {}\n", unit.id, unit.label));
        }
    }
    Ok(out.trim_end().to_string())
}

fn run(cli: Cli) -> Result<String, ErrorReport> {
    match cli.command {
        Commands::Convert { value, from, to, format } => {
            let converter = format.converter()?;
            let result = converter.value(Value::Text(value)).from(&from).to(&to)?;
            Ok(render_result(&result, converter.config(), format.json))
        }
        Commands::Eval { query, format } => {
            let converter = format.converter()?;
            let result = parse_query(&query)?.run(converter.config())?;
            Ok(render_result(&result, converter.config(), format.json))
        }
        Commands::Units { category, json } => list_units(category.as_deref(), json),
    }
}

fn wants_json(cli: &Cli) -> bool {
    match &cli.command {
        Commands::Convert { format, .. } | Commands::Eval { format, .. } => format.json,
        Commands::Units { json, .. } => *json,
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let json = wants_json(&cli);

    match run(cli) {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(report) => {
            if json {
                eprintln!("{}", serde_json::to_string_pretty(&report).unwrap_or_default());
            } else {
                eprintln!("error: {}", report);
            }
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_args(args: &[&str]) -> Result<String, ErrorReport> {
        let mut argv = vec!["uconv"];
        argv.extend_from_slice(args);
        run(Cli::parse_from(argv))
    }

    #[test]
    fn test_convert() {
        assert_eq!(run_args(&["convert", "1", "meter", "foot"]).unwrap(), "3.28ft");
        assert_eq!(run_args(&["convert", "12", "°C", "K", "--integer"]).unwrap(), "285K");
        assert_eq!(run_args(&["convert", "1", "N", "lbf", "-d", "4"]).unwrap(), "0.2248lbf");
    }

    #[test]
    fn test_convert_negative_value() {
        assert_eq!(run_args(&["convert", "-40", "celsius", "fahrenheit"]).unwrap(), "-40°F");
    }

    #[test]
    fn test_convert_hex_text() {
        assert_eq!(run_args(&["convert", "FF", "hexadecimal", "decimal"]).unwrap(), "255");
        assert_eq!(run_args(&["convert", "255", "decimal", "hex"]).unwrap(), "FF");
        // Hex digits, not scientific notation
        assert_eq!(run_args(&["convert", "1e5", "hexadecimal", "decimal"]).unwrap(), "485");
    }

    #[test]
    fn test_convert_long_binary() {
        let ones = "1".repeat(64);
        assert_eq!(run_args(&["convert", &ones, "binary", "decimal"]).unwrap(), "18446744073709551615");
        assert_eq!(
            run_args(&["convert", "18446744073709551615", "decimal", "binary", "--integer"]).unwrap(),
            ones
        );
    }

    #[test]
    fn test_convert_no_unit() {
        assert_eq!(run_args(&["convert", "1", "meter", "foot", "--no-unit"]).unwrap(), "3.28");
    }

    #[test]
    fn test_convert_locale() {
        let out = run_args(&["convert", "1234567.891", "meter", "meter", "--locale", "de-DE"]).unwrap();
        assert_eq!(out, "1.234.567,89m");
    }

    #[test]
    fn test_convert_json() {
        let out = run_args(&["convert", "1", "meter", "foot", "--json"]).unwrap();
        let json: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(json["unit"], "ft");
        assert_eq!(json["category"], "length");
        assert_eq!(json["formatted"], "3.28ft");
        assert_eq!(json["value"]["value"], "3.28");
    }

    #[test]
    fn test_convert_errors() {
        let err = run_args(&["convert", "1", "meter", "kelvin"]).unwrap_err();
        assert_eq!(err.code, "INCOMPATIBLE_UNITS");
        assert_eq!(err.message, "Cannot convert from meter to kelvin");

        let err = run_args(&["convert", "1", "furlong", "meter"]).unwrap_err();
        assert_eq!(err.code, "UNKNOWN_UNIT");

        let err = run_args(&["convert", "abc", "meter", "foot"]).unwrap_err();
        assert_eq!(err.code, "INVALID_NUMERIC_VALUE");

        let err = run_args(&["convert", "-1", "decimal", "binary"]).unwrap_err();
        assert_eq!(err.code, "UNSUPPORTED_VALUE");
    }

    #[test]
    fn test_eval() {
        assert_eq!(run_args(&["eval", "5 km to mi"]).unwrap(), "3.11mi");
        assert_eq!(run_args(&["eval", "0xFF hexadecimal -> binary"]).unwrap(), "11111111");
        assert_eq!(run_args(&["eval", "1 l to cubic-foot", "-d", "4"]).unwrap(), "0.0353ft^3");
    }

    #[test]
    fn test_eval_malformed() {
        let err = run_args(&["eval", "5 km"]).unwrap_err();
        assert_eq!(err.code, "INVALID_QUERY");
    }

    #[test]
    fn test_config_file_is_overridden_by_flags() {
        let path = std::env::temp_dir().join(format!("uconv-test-{}.json", std::process::id()));
        fs::write(&path, r#"{"decimals": 4, "includeUnit": false}"#).unwrap();
        let config = path.to_str().unwrap();

        assert_eq!(run_args(&["convert", "1", "meter", "foot", "--config", config]).unwrap(), "3.2808");
        assert_eq!(
            run_args(&["convert", "1", "meter", "foot", "--config", config, "-d", "1"]).unwrap(),
            "3.3"
        );

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_missing_config_file() {
        let err = run_args(&["convert", "1", "meter", "foot", "--config", "/nonexistent/uconv.json"]).unwrap_err();
        assert_eq!(err.code, CONFIG_ERROR);
    }

    #[test]
    fn test_units_listing() {
        let out = run_args(&["units", "number"]).unwrap();
        assert!(out.starts_with("number (base: decimal)"));
        assert!(out.contains("hexadecimal"));
        assert!(!out.contains("meter"));

        let all = run_args(&["units"]).unwrap();
        for category in Category::ALL {
            assert!(all.contains(&format!("{} (base: ", category)));
        }
    }

    #[test]
    fn test_units_json() {
        let out = run_args(&["units", "length", "--json"]).unwrap();
        let json: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(json[0]["category"], "length");
        assert_eq!(json[0]["base_unit"], "meter");
        assert_eq!(json[0]["units"][3]["label"], "mm");
    }

    #[test]
    fn test_unknown_category() {
        let err = run_args(&["units", "mass"]).unwrap_err();
        assert_eq!(err.code, UNKNOWN_CATEGORY);
    }

    #[test]
    fn test_json_flag_detection() {
        let cli = Cli::parse_from(["uconv", "eval", "1 m to ft", "--json"]);
        assert!(wants_json(&cli));
        let cli = Cli::parse_from(["uconv", "units"]);
        assert!(!wants_json(&cli));
    }
}
