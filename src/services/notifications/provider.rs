//! Core provider traits and the delivery outcome type.
//!
//! The traits in this module sit at the network seam: dispatch functions do
//! their validation and payload building, then hand off to an injected
//! implementation for the single outbound call. Production code uses
//! [`MailgunClient`](super::MailgunClient) and
//! [`ReqwestTransport`](super::ReqwestTransport); tests use in-memory fakes.

use super::email::EmailRequest;
use super::error::{DispatchError, DispatchResult};
use async_trait::async_trait;

/// Outcome of a dispatch call that did not fail
#[derive(Debug)]
#[must_use]
pub enum DeliveryOutcome {
    /// The provider accepted the notification
    Delivered,
    /// Delivery failed, but the caller asked for silent mode
    Suppressed(DispatchError),
}

impl DeliveryOutcome {
    pub fn is_delivered(&self) -> bool {
        matches!(self, Self::Delivered)
    }

    pub fn is_suppressed(&self) -> bool {
        matches!(self, Self::Suppressed(_))
    }

    /// The swallowed error, if any.
    pub fn suppressed_error(&self) -> Option<&DispatchError> {
        match self {
            Self::Suppressed(err) => Some(err),
            Self::Delivered => None,
        }
    }
}

/// Transactional email provider capable of sending plain-text messages
///
/// Implementations perform exactly one outbound request per call and map
/// every failure onto a delivery-time [`DispatchError`] variant.
#[async_trait]
pub trait EmailClient: Send + Sync {
    /// Sends `request` authenticated with `api_key`
    ///
    /// # Arguments
    /// * `api_key` - Provider API key, already checked to be non-empty
    /// * `request` - Validated message fields, passed through verbatim
    async fn send_text(&self, api_key: &str, request: &EmailRequest) -> DispatchResult<()>;

    /// Returns the provider name for logging/debugging
    fn name(&self) -> &'static str;
}

/// HTTP transport for incoming-webhook posts
#[async_trait]
pub trait WebhookTransport: Send + Sync {
    /// POSTs `body` as `application/json` to `url` and returns the response status code
    ///
    /// Transport-level failures are returned as errors; any status code,
    /// including non-2xx ones, is returned as `Ok`.
    async fn post_json(&self, url: &str, body: String) -> anyhow::Result<u16>;
}

/// Applies the silent-mode policy to the raw result of a provider call.
///
/// Caller errors always propagate. Delivery-time errors propagate unless
/// `silent` is set, in which case they are wrapped in
/// [`DeliveryOutcome::Suppressed`].
pub(crate) fn settle(silent: bool, result: DispatchResult<()>) -> DispatchResult<DeliveryOutcome> {
    match result {
        Ok(()) => Ok(DeliveryOutcome::Delivered),
        Err(err) if silent && err.is_suppressible() => {
            tracing::warn!(error = %err, "Delivery failure suppressed by silent mode");
            Ok(DeliveryOutcome::Suppressed(err))
        }
        Err(err) => Err(err),
    }
}
