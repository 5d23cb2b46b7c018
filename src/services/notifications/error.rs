//! Typed failures for notification dispatch.

use thiserror::Error;

/// Everything that can go wrong while dispatching a single notification.
///
/// The first two variants describe caller misuse and are raised before any
/// network activity. The remaining three happen at delivery time and are the
/// only ones a `silent` request may suppress.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// Required API key or webhook token was empty
    #[error("Missing credential: {credential}")]
    MissingCredential { credential: &'static str },

    /// Structurally invalid input
    #[error("Invalid request for {field}: {reason}")]
    InvalidRequest { field: &'static str, reason: String },

    /// The provider could not be reached or the exchange did not complete
    #[error("Transport error while contacting {provider}")]
    Transport {
        provider: &'static str,
        #[source]
        source: anyhow::Error,
    },

    /// The provider answered, but not with the expected success status
    #[error("Unexpected status code from {provider}: {status}")]
    UnexpectedStatus { provider: &'static str, status: u16 },

    /// The provider returned a structured application-level error
    #[error("{provider} rejected the message ({status}): {message}")]
    Provider {
        provider: &'static str,
        status: u16,
        message: String,
    },
}

impl DispatchError {
    pub fn missing_credential(credential: &'static str) -> Self {
        Self::MissingCredential { credential }
    }

    pub fn invalid_request(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidRequest {
            field,
            reason: reason.into(),
        }
    }

    pub fn transport(provider: &'static str, source: impl Into<anyhow::Error>) -> Self {
        Self::Transport {
            provider,
            source: source.into(),
        }
    }

    /// Whether `silent` mode may turn this error into a suppressed outcome.
    pub fn is_suppressible(&self) -> bool {
        matches!(
            self,
            Self::Transport { .. } | Self::UnexpectedStatus { .. } | Self::Provider { .. }
        )
    }

    /// HTTP status observed from the provider, if one was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::UnexpectedStatus { status, .. } | Self::Provider { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Type alias for dispatch results
pub type DispatchResult<T> = Result<T, DispatchError>;
