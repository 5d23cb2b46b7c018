use crate::config::ConfigError;
use crate::services::notifications::DispatchError;
use thiserror::Error;

/// Application-wide error type that represents all possible errors in the system.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error with key information
    #[error("Configuration error: {key}")]
    Configuration {
        key: String,
        #[source]
        source: anyhow::Error,
    },

    /// Notification dispatch failed
    #[error(transparent)]
    Dispatch(#[from] DispatchError),
}

impl AppError {
    /// Whether the failure happened while talking to a provider rather than
    /// before any request was made
    pub fn is_delivery_failure(&self) -> bool {
        matches!(self, AppError::Dispatch(err) if err.is_suppressible())
    }
}

impl From<ConfigError> for AppError {
    fn from(error: ConfigError) -> Self {
        let key = match &error {
            ConfigError::ValidationError { field, .. } => field.clone(),
            _ => "settings".to_string(),
        };
        AppError::Configuration {
            key,
            source: error.into(),
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(error: reqwest::Error) -> Self {
        AppError::Configuration {
            key: "http".to_string(),
            source: error.into(),
        }
    }
}

/// Type alias for Result with AppError to simplify function signatures
pub type AppResult<T> = Result<T, AppError>;
