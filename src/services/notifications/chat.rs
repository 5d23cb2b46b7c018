//! Slack incoming-webhook dispatch.

use super::error::{DispatchError, DispatchResult};
use super::provider::{DeliveryOutcome, WebhookTransport, settle};
use serde::{Deserialize, Serialize};

const PROVIDER: &str = "slack";

/// Message to post into a chat channel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Workspace subdomain, e.g. `datanews` for `datanews.slack.com`
    pub subdomain: String,
    pub channel: String,
    pub username: String,
    /// Emoji code such as `:tada:`
    pub icon: String,
    pub text: String,
    #[serde(default)]
    pub silent: bool,
}

/// JSON body accepted by the incoming-webhook endpoint
///
/// Field order is the wire order.
#[derive(Debug, Serialize)]
struct WebhookPayload<'a> {
    channel: &'a str,
    username: &'a str,
    icon_emoji: &'a str,
    text: &'a str,
}

impl<'a> From<&'a ChatMessage> for WebhookPayload<'a> {
    fn from(message: &'a ChatMessage) -> Self {
        Self {
            channel: &message.channel,
            username: &message.username,
            icon_emoji: &message.icon,
            text: &message.text,
        }
    }
}

/// Builds the incoming-webhook URL for a workspace
///
/// The token is appended as-is.
pub fn webhook_url(subdomain: &str, token: &str) -> String {
    format!("https://{subdomain}.slack.com/services/hooks/incoming-webhook?token={token}")
}

/// Serializes the webhook body for `message`.
pub fn webhook_body(message: &ChatMessage) -> DispatchResult<String> {
    serde_json::to_string(&WebhookPayload::from(message))
        .map_err(|e| DispatchError::invalid_request("message", e.to_string()))
}

/// ASCII letters, digits and `-`, with no `-` at either end
pub(crate) fn is_hostname_label(label: &str) -> bool {
    !label.is_empty()
        && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
        && !label.starts_with('-')
        && !label.ends_with('-')
}

/// Checks that `subdomain` can stand in front of `.slack.com`
pub fn validate_subdomain(subdomain: &str) -> DispatchResult<()> {
    if subdomain.is_empty() {
        return Err(DispatchError::invalid_request(
            "subdomain",
            "Subdomain is required to build the webhook URL",
        ));
    }

    if !is_hostname_label(subdomain) {
        return Err(DispatchError::invalid_request(
            "subdomain",
            format!("'{subdomain}' is not a valid hostname label"),
        ));
    }

    Ok(())
}

/// Posts `message` to the workspace's incoming webhook
///
/// Fails with [`DispatchError::MissingCredential`] or
/// [`DispatchError::InvalidRequest`] before any network activity. Otherwise
/// issues exactly one POST; anything other than HTTP 200 is a failure,
/// subject to the message's silent mode.
///
/// # Arguments
/// * `transport` - HTTP transport, constructed once by the caller
/// * `message` - Channel, display name, icon and text to post
/// * `webhook_token` - Token embedded in the webhook URL
pub async fn send_chat_message(
    transport: &dyn WebhookTransport,
    message: &ChatMessage,
    webhook_token: &str,
) -> DispatchResult<DeliveryOutcome> {
    if webhook_token.trim().is_empty() {
        return Err(DispatchError::missing_credential("webhook_token"));
    }

    validate_subdomain(&message.subdomain)?;

    let url = webhook_url(&message.subdomain, webhook_token);
    let body = webhook_body(message)?;

    tracing::info!(
        provider = PROVIDER,
        subdomain = %message.subdomain,
        channel = %message.channel,
        "Posting chat message"
    );

    let result = match transport.post_json(&url, body).await {
        Ok(200) => Ok(()),
        Ok(status) => Err(DispatchError::UnexpectedStatus {
            provider: PROVIDER,
            status,
        }),
        Err(e) => Err(DispatchError::transport(PROVIDER, e)),
    };

    settle(message.silent, result)
}
