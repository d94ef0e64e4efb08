//! Rendering configuration loaded from TOML files

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::format::{FormatSpec, NumberFormat};
use crate::score::AbilityScore;

/// Configuration loading error
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Configuration validation error: {0}")]
    ValidationError(String),
}

/// Load a TOML file and deserialize it
pub fn load_toml<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    let content = fs::read_to_string(path)?;
    parse_toml(&content)
}

/// Load a TOML string and deserialize it
pub fn parse_toml<T: serde::de::DeserializeOwned>(content: &str) -> Result<T, ConfigError> {
    let config: T = toml::from_str(content)?;
    Ok(config)
}

/// How a host application renders ability scores by default
///
/// ```toml
/// default_format = "R"
///
/// [number_format]
/// positive_sign = "+"
/// negative_sign = "-"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Specifier used when the caller gives none
    #[serde(default)]
    pub default_format: FormatSpec,
    /// Sign and digit characters
    #[serde(default)]
    pub number_format: NumberFormat,
}

impl RenderConfig {
    /// Load and validate a render config file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let config: RenderConfig = load_toml(path)?;
        config.validate()?;
        tracing::debug!(
            path = %path.display(),
            default_format = %config.default_format,
            "loaded render config"
        );
        Ok(config)
    }

    /// Parse and validate a render config from a TOML string
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let config: RenderConfig = parse_toml(content)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        self.number_format
            .validate()
            .map_err(|e| ConfigError::ValidationError(e.to_string()))
    }

    /// Render a score with the configured default specifier
    pub fn render(&self, score: &AbilityScore) -> String {
        score.render_with(self.default_format, &self.number_format)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = RenderConfig::default();
        assert_eq!(config.default_format, FormatSpec::General);
        assert_eq!(config.number_format, NumberFormat::invariant());
        assert_eq!(config.render(&AbilityScore::new(14)), "14");
    }

    #[test]
    fn test_parse_config() {
        let toml = r#"
default_format = "r"

[number_format]
positive_sign = "+"
negative_sign = "~"
"#;

        let config = RenderConfig::parse(toml).unwrap();
        assert_eq!(config.default_format, FormatSpec::Right);
        assert_eq!(config.render(&AbilityScore::new(1)), " 1  (~5)");
        assert_eq!(config.render(&AbilityScore::new(30)), "30 (+10)");
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config = RenderConfig::parse("").unwrap();
        assert_eq!(config, RenderConfig::default());

        let config = RenderConfig::parse("default_format = \"M\"").unwrap();
        assert_eq!(config.number_format.negative_sign, "-");
    }

    #[test]
    fn test_unknown_format_fails_to_parse() {
        let err = RenderConfig::parse("default_format = \"Q\"").unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn test_bad_digits_fail_validation() {
        let toml = r#"
[number_format]
digits = "012"
"#;
        let err = RenderConfig::parse(toml).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }
}
