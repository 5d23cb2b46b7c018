//! Configuration loader for notifier-rs
//!
//! This module provides the `ConfigLoader` struct that layers environment
//! variable overrides on top of the built-in defaults.

use config::{Config, Environment, Map};

use crate::config::error::ConfigError;
use crate::config::settings::Settings;

/// Environment variable prefix for configuration overrides
const ENV_PREFIX: &str = "NOTIFIER";

/// Separator for nested configuration keys in environment variables
const ENV_SEPARATOR: &str = "__";

/// Configuration loader backed by environment variables
///
/// Variables with prefix `NOTIFIER_` are mapped to configuration keys:
/// - `NOTIFIER_LOGGER__LEVEL` -> `logger.level`
/// - `NOTIFIER_EMAIL__DOMAIN` -> `email.domain`
/// - `NOTIFIER_HTTP__TIMEOUT_SECONDS` -> `http.timeout_seconds`
#[derive(Debug, Default)]
pub struct ConfigLoader {
    /// Explicit variable set; `None` reads the process environment
    source: Option<Map<String, String>>,
}

impl ConfigLoader {
    /// Create a loader that reads the process environment
    pub fn new() -> Self {
        Self { source: None }
    }

    /// Create a loader over an explicit set of variables
    pub fn with_vars<I, K, V>(vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            source: Some(
                vars.into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect(),
            ),
        }
    }

    /// Load and validate settings
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A variable cannot be deserialized into its setting
    /// - Configuration validation fails
    pub fn load(&self) -> Result<Settings, ConfigError> {
        let config = self.build_config()?;
        let settings: Settings = config.try_deserialize().map_err(|e| {
            ConfigError::ParseError(format!("Failed to deserialize configuration: {}", e))
        })?;

        settings.validate()?;

        Ok(settings)
    }

    fn build_config(&self) -> Result<Config, ConfigError> {
        Config::builder()
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator(ENV_SEPARATOR)
                    .ignore_empty(true)
                    .try_parsing(true)
                    .source(self.source.clone()),
            )
            .build()
            .map_err(ConfigError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_defaults_without_variables() {
        let settings = ConfigLoader::with_vars(Vec::<(String, String)>::new())
            .load()
            .unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_nested_overrides() {
        let settings = ConfigLoader::with_vars([
            ("NOTIFIER_EMAIL__DOMAIN", "mg.example.com"),
            ("NOTIFIER_CHAT__DEFAULT_CHANNEL", "#alerts"),
            ("NOTIFIER_HTTP__TIMEOUT_SECONDS", "5"),
            ("NOTIFIER_LOGGER__FORMAT", "json"),
        ])
        .load()
        .unwrap();

        assert_eq!(settings.email.domain, "mg.example.com");
        assert_eq!(settings.chat.default_channel, "#alerts");
        assert_eq!(settings.http.timeout_seconds, 5);
        assert_eq!(settings.logger.format, "json");
        assert_eq!(settings.chat.subdomain, "datanews");
    }

    #[test]
    fn test_unprefixed_variables_ignored() {
        let settings = ConfigLoader::with_vars([("EMAIL__DOMAIN", "mg.example.com")])
            .load()
            .unwrap();
        assert!(settings.email.domain.is_empty());
    }

    #[test]
    fn test_invalid_values_rejected() {
        let result = ConfigLoader::with_vars([("NOTIFIER_HTTP__TIMEOUT_SECONDS", "0")]).load();
        assert!(matches!(result, Err(ConfigError::ValidationError { .. })));

        let result =
            ConfigLoader::with_vars([("NOTIFIER_HTTP__TIMEOUT_SECONDS", "soon")]).load();
        assert!(matches!(result, Err(ConfigError::ParseError(_))));

        let result = ConfigLoader::with_vars([("NOTIFIER_CHAT__SUBDOMAIN", "evil.com")]).load();
        assert!(matches!(
            result,
            Err(ConfigError::ValidationError { ref field, .. }) if field == "chat.subdomain"
        ));
    }
}
