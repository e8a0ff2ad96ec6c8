// GUI configuration module
pub mod theme; // Colours and spacing for the form widgets

// Structure for the entire application configuration loaded from JSON.
// This mirrors the structure of assets/config/default.json
use anyhow::Context;
use serde::Deserialize;
use shared::{NumberFormat, PermissionSet};

use theme::ThemePalette;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    pub version: String,
    pub app: AppSettings,
    pub number_field: NumberFieldSettings,
    // Capabilities of the signed-in user, injected into the permission gates.
    #[serde(default)]
    pub permissions: PermissionSet,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppSettings {
    pub title: String,
    pub theme: String, // "dark" or "light"
    pub language: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct NumberFieldSettings {
    // Locale, empty policy and fraction digits; validated while deserializing.
    #[serde(default)]
    pub format: NumberFormat,
    #[serde(default = "default_placeholder")]
    pub placeholder: String,
}

fn default_placeholder() -> String {
    "0".to_string()
}

impl AppConfig {
    // The default config is embedded so the desktop binary never depends on the working directory.
    pub fn load_default() -> Result<Self, anyhow::Error> {
        let config_str = include_str!("../../assets/config/default.json"); // Path relative to this .rs file
        Self::from_json(config_str)
    }

    pub fn from_json(config_str: &str) -> Result<Self, anyhow::Error> {
        let config: AppConfig =
            serde_json::from_str(config_str).context("Invalid application configuration")?;
        // Resolve the theme eagerly so a typo fails at startup rather than on first render.
        config.palette()?;
        Ok(config)
    }

    pub fn number_format(&self) -> NumberFormat {
        self.number_field.format
    }

    pub fn palette(&self) -> Result<ThemePalette, anyhow::Error> {
        ThemePalette::for_name(&self.app.theme)
            .with_context(|| format!("Unknown theme '{}'", self.app.theme))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::{EmptyPolicy, NumberLocale};

    #[test]
    fn test_load_default_config() {
        let config = AppConfig::load_default().unwrap();
        assert_eq!(config.version, "1.0.0");
        assert_eq!(config.app.language, "pt-BR");

        let format = config.number_format();
        assert_eq!(format.locale, NumberLocale::pt_br());
        assert_eq!(format.empty_policy, EmptyPolicy::Empty);
        assert_eq!(format.max_fraction_digits, None);
        assert_eq!(config.number_field.placeholder, "0");

        assert!(config.permissions.can("invoice.create"));
        assert!(!config.permissions.can("role.delete"));
    }

    #[test]
    fn test_minimal_config_uses_defaults() {
        let config = AppConfig::from_json(
            r#"{
                "version": "0.1.0",
                "app": { "title": "Admin", "theme": "dark", "language": "en-US" },
                "number_field": {}
            }"#,
        )
        .unwrap();
        assert_eq!(config.number_format(), NumberFormat::default());
        assert_eq!(config.number_field.placeholder, "0");
        assert!(config.permissions.is_empty());
    }

    #[test]
    fn test_invalid_locale_is_rejected() {
        let result = AppConfig::from_json(
            r#"{
                "version": "0.1.0",
                "app": { "title": "Admin", "theme": "dark", "language": "en-US" },
                "number_field": { "format": { "locale": { "grouping": ",", "decimal": "," } } }
            }"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_theme_is_rejected() {
        let result = AppConfig::from_json(
            r#"{
                "version": "0.1.0",
                "app": { "title": "Admin", "theme": "neon", "language": "en-US" },
                "number_field": {}
            }"#,
        );
        let err = result.unwrap_err();
        assert!(err.to_string().contains("Unknown theme 'neon'"));
    }
}
