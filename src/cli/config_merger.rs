//! Configuration merger for CLI arguments and environment settings
//!
//! This module applies CLI argument overrides on top of the settings
//! loaded from the environment.

use super::parser::{Cli, Commands};
use crate::config::error::ConfigError;
use crate::config::{ConfigLoader, settings::Settings};

/// Configuration merger that applies CLI overrides to loaded settings
///
/// CLI arguments always take precedence over `NOTIFIER_*` variables.
pub struct ConfigurationMerger {
    base_config: Settings,
}

impl ConfigurationMerger {
    /// Create a new configuration merger with base configuration
    pub fn new(base_config: Settings) -> Self {
        Self { base_config }
    }

    /// Create a configuration merger from the process environment
    ///
    /// # Errors
    /// Returns ConfigError if loading or validation fails
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self::new(ConfigLoader::new().load()?))
    }

    /// Merge CLI arguments with the base configuration
    ///
    /// # Arguments
    /// * `cli` - Parsed CLI arguments
    ///
    /// # Returns
    /// A new Settings instance with CLI overrides applied
    pub fn merge_cli_args(&self, cli: &Cli) -> Result<Settings, ConfigError> {
        let mut config = self.base_config.clone();

        // Apply global CLI overrides
        if let Some(level) = cli.log_level_override() {
            config.logger.level = level.to_string();
        }
        if let Some(format) = cli.log_format {
            config.logger.format = format.as_str().to_string();
        }

        // Apply command-specific overrides
        match &cli.command {
            Commands::Email(args) => {
                if let Some(domain) = &args.domain {
                    config.email.domain = domain.clone();
                }
            }
            Commands::Slack(args) => {
                if let Some(subdomain) = &args.subdomain {
                    config.chat.subdomain = subdomain.clone();
                }
            }
        }

        // Validate the merged configuration
        config.validate()?;

        Ok(config)
    }
}
