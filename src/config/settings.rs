//! Configuration settings structures for notifier-rs

use serde::{Deserialize, Serialize};

use crate::config::error::ConfigError;
use crate::logger::{LogFormat, LoggerConfig};
use crate::services::notifications::{DEFAULT_MAILGUN_BASE_URL, NotificationDefaults};

// ============================================================================
// Default value functions
// ============================================================================

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "full".to_string()
}

fn default_true() -> bool {
    true
}

fn default_timeout() -> u64 {
    30
}

fn default_connect_timeout() -> u64 {
    10
}

fn default_user_agent() -> String {
    format!("notifier-rs/{}", crate::pkg_version())
}

fn default_mailgun_base_url() -> String {
    DEFAULT_MAILGUN_BASE_URL.to_string()
}

fn default_from() -> String {
    NotificationDefaults::default().email_from
}

fn default_subject() -> String {
    NotificationDefaults::default().email_subject
}

fn default_subdomain() -> String {
    NotificationDefaults::default().chat_subdomain
}

fn default_channel() -> String {
    NotificationDefaults::default().chat_channel
}

fn default_username() -> String {
    NotificationDefaults::default().chat_username
}

fn default_icon() -> String {
    NotificationDefaults::default().chat_icon
}

// ============================================================================
// Logger Configuration
// ============================================================================

/// Logger settings as they appear in configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggerSettings {
    /// Log level: trace, debug, info, warn or error
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Output format: full, compact or json
    #[serde(default = "default_log_format")]
    pub format: String,

    /// Colored console output (only applied on a TTY)
    #[serde(default = "default_true")]
    pub colored: bool,
}

impl Default for LoggerSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            colored: default_true(),
        }
    }
}

impl LoggerSettings {
    /// Convert into the logger's runtime configuration
    pub fn into_logger_config(self) -> Result<LoggerConfig, ConfigError> {
        let format: LogFormat = self
            .format
            .parse()
            .map_err(|e: crate::logger::LoggerError| {
                ConfigError::validation("logger.format".to_string(), e.to_string())
            })?;

        Ok(LoggerConfig {
            level: self.level,
            format,
            colored: self.colored,
        })
    }
}

// ============================================================================
// HTTP Client Configuration
// ============================================================================

/// Outbound HTTP client settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpSettings {
    /// Total request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,

    /// Connect timeout in seconds
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u64,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for HttpSettings {
    fn default() -> Self {
        Self {
            timeout_seconds: default_timeout(),
            connect_timeout_seconds: default_connect_timeout(),
            user_agent: default_user_agent(),
        }
    }
}

// ============================================================================
// Email Configuration
// ============================================================================

/// Mailgun settings and email defaults
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailSettings {
    /// Mailgun sending domain; required only when sending email
    #[serde(default)]
    pub domain: String,

    #[serde(default = "default_mailgun_base_url")]
    pub base_url: String,

    #[serde(default = "default_from")]
    pub default_from: String,

    #[serde(default = "default_subject")]
    pub default_subject: String,
}

impl Default for EmailSettings {
    fn default() -> Self {
        Self {
            domain: String::new(),
            base_url: default_mailgun_base_url(),
            default_from: default_from(),
            default_subject: default_subject(),
        }
    }
}

// ============================================================================
// Chat Configuration
// ============================================================================

/// Slack webhook defaults
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatSettings {
    #[serde(default = "default_subdomain")]
    pub subdomain: String,

    #[serde(default = "default_channel")]
    pub default_channel: String,

    #[serde(default = "default_username")]
    pub default_username: String,

    #[serde(default = "default_icon")]
    pub default_icon: String,
}

impl Default for ChatSettings {
    fn default() -> Self {
        Self {
            subdomain: default_subdomain(),
            default_channel: default_channel(),
            default_username: default_username(),
            default_icon: default_icon(),
        }
    }
}

// ============================================================================
// Root Settings
// ============================================================================

/// Root settings structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub logger: LoggerSettings,

    #[serde(default)]
    pub http: HttpSettings,

    #[serde(default)]
    pub email: EmailSettings,

    #[serde(default)]
    pub chat: ChatSettings,
}

impl Settings {
    /// Default field values handed to the notification service
    pub fn notification_defaults(&self) -> NotificationDefaults {
        NotificationDefaults {
            email_from: self.email.default_from.clone(),
            email_subject: self.email.default_subject.clone(),
            chat_subdomain: self.chat.subdomain.clone(),
            chat_channel: self.chat.default_channel.clone(),
            chat_username: self.chat.default_username.clone(),
            chat_icon: self.chat.default_icon.clone(),
        }
    }
}
