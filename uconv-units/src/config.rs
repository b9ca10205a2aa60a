//! Conversion configuration
//!
//! `ConversionConfig` is the resolved, immutable form used by one call.
//! `ConversionOptions` is the partial form callers supply (from code, a JSON
//! file or command-line flags); unset fields fall back to the defaults.

use serde::{Deserialize, Serialize};

/// Resolved configuration for a conversion
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConversionConfig {
    /// Keep fractional results; false rounds to the nearest integer
    pub is_float: bool,
    /// Decimal places kept when `is_float` is true
    pub decimals: u32,
    /// BCP-47 tag used when rendering numbers as text
    pub locale: Option<String>,
    /// Append the unit label when rendering
    pub include_unit: bool,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        ConversionConfig {
            is_float: true,
            decimals: 2,
            locale: None,
            include_unit: true,
        }
    }
}

impl ConversionConfig {
    /// Defaults with `options` applied on top
    pub fn from_options(options: &ConversionOptions) -> Self {
        Self::default().merged(options)
    }

    /// A copy of this config with every set field of `options` overriding it
    pub fn merged(&self, options: &ConversionOptions) -> Self {
        ConversionConfig {
            is_float: options.is_float.unwrap_or(self.is_float),
            decimals: options.decimals.unwrap_or(self.decimals),
            locale: options.locale.clone().or_else(|| self.locale.clone()),
            include_unit: options.include_unit.unwrap_or(self.include_unit),
        }
    }
}

/// Caller-supplied overrides, every field optional
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionOptions {
    #[serde(default, alias = "isFloat", skip_serializing_if = "Option::is_none")]
    pub is_float: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub decimals: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,

    #[serde(default, alias = "includeUnit", skip_serializing_if = "Option::is_none")]
    pub include_unit: Option<bool>,
}

impl ConversionOptions {
    /// Combine two option sets; fields set in `over` win.
    pub fn overlay(self, over: ConversionOptions) -> ConversionOptions {
        ConversionOptions {
            is_float: over.is_float.or(self.is_float),
            decimals: over.decimals.or(self.decimals),
            locale: over.locale.or(self.locale),
            include_unit: over.include_unit.or(self.include_unit),
        }
    }
}

impl From<ConversionOptions> for ConversionConfig {
    fn from(options: ConversionOptions) -> Self {
        ConversionConfig::from_options(&options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ConversionConfig::default();
        assert!(config.is_float);
        assert_eq!(config.decimals, 2);
        assert_eq!(config.locale, None);
        assert!(config.include_unit);
    }

    #[test]
    fn test_options_override_defaults() {
        let options = ConversionOptions {
            decimals: Some(4),
            ..Default::default()
        };
        let config = ConversionConfig::from_options(&options);
        assert_eq!(config.decimals, 4);
        assert!(config.is_float);
    }

    #[test]
    fn test_camel_case_options() {
        let options: ConversionOptions =
            serde_json::from_str(r#"{"isFloat": false, "decimals": 3, "locale": "de-DE", "includeUnit": false}"#)
                .unwrap();
        let config = ConversionConfig::from(options);
        assert!(!config.is_float);
        assert_eq!(config.decimals, 3);
        assert_eq!(config.locale.as_deref(), Some("de-DE"));
        assert!(!config.include_unit);
    }

    #[test]
    fn test_snake_case_options() {
        let options: ConversionOptions = serde_json::from_str(r#"{"is_float": false}"#).unwrap();
        assert_eq!(options.is_float, Some(false));
        assert_eq!(options.decimals, None);
    }

    #[test]
    fn test_overlay_priority() {
        let file = ConversionOptions {
            decimals: Some(6),
            locale: Some("fr-FR".to_string()),
            ..Default::default()
        };
        let flags = ConversionOptions {
            decimals: Some(1),
            ..Default::default()
        };
        let merged = file.overlay(flags);
        assert_eq!(merged.decimals, Some(1));
        assert_eq!(merged.locale.as_deref(), Some("fr-FR"));
    }
}
