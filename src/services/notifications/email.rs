//! Email dispatch.
//!
//! Validates an [`EmailRequest`] and its API key, then hands it to an
//! injected [`EmailClient`] for a single send. No default values are filled
//! in here; see [`NotificationService`](super::NotificationService) for that.

use super::error::{DispatchError, DispatchResult};
use super::provider::{DeliveryOutcome, EmailClient, settle};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use validator::{Validate, ValidateEmail, ValidationError};

/// One recipient address or a list of them
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Recipients {
    One(String),
    Many(Vec<String>),
}

impl Recipients {
    pub fn as_slice(&self) -> &[String] {
        match self {
            Recipients::One(address) => std::slice::from_ref(address),
            Recipients::Many(addresses) => addresses,
        }
    }

    pub fn len(&self) -> usize {
        self.as_slice().len()
    }

    pub fn is_empty(&self) -> bool {
        self.as_slice().is_empty()
    }
}

impl From<&str> for Recipients {
    fn from(address: &str) -> Self {
        Recipients::One(address.to_string())
    }
}

impl From<String> for Recipients {
    fn from(address: String) -> Self {
        Recipients::One(address)
    }
}

impl From<Vec<String>> for Recipients {
    fn from(addresses: Vec<String>) -> Self {
        Recipients::Many(addresses)
    }
}

/// Address part of a mailbox written as `Name <addr>` or a bare `addr`
pub fn mailbox_address(value: &str) -> &str {
    match (value.rfind('<'), value.rfind('>')) {
        (Some(start), Some(end)) if start < end => value[start + 1..end].trim(),
        _ => value.trim(),
    }
}

/// Whether `value` is a well-formed address, with or without a display name
pub fn is_valid_mailbox(value: &str) -> bool {
    mailbox_address(value).to_string().validate_email()
}

fn validate_recipients(to: &Recipients) -> Result<(), ValidationError> {
    if to.is_empty() {
        return Err(ValidationError::new("required")
            .with_message(Cow::Borrowed("At least one recipient is required")));
    }

    if let Some(bad) = to.as_slice().iter().find(|addr| !is_valid_mailbox(addr)) {
        return Err(ValidationError::new("email")
            .with_message(Cow::Owned(format!("'{bad}' is not a valid email address"))));
    }

    Ok(())
}

fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank").with_message(Cow::Borrowed("Body is required")));
    }
    Ok(())
}

/// Plain-text email to send
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct EmailRequest {
    /// Sender address; `None` is passed to the provider as absent
    pub from: Option<String>,
    #[validate(custom(function = "validate_recipients"))]
    pub to: Recipients,
    pub subject: String,
    /// Plain-text body
    #[validate(custom(function = "validate_not_blank"))]
    pub body: String,
    /// Suppress delivery failures instead of returning them
    #[serde(default)]
    pub silent: bool,
}

impl EmailRequest {
    /// Checks the fields a provider would otherwise reject
    ///
    /// # Validation Rules
    /// - At least one recipient, each a well-formed address
    /// - Body must not be blank
    pub fn check(&self) -> DispatchResult<()> {
        let Err(errors) = Validate::validate(self) else {
            return Ok(());
        };

        let fields = errors.field_errors();
        for field in ["to", "body"] {
            if let Some(err) = fields.get(field).and_then(|errs| errs.first()) {
                let reason = err
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| err.code.to_string());
                return Err(DispatchError::invalid_request(field, reason));
            }
        }

        Err(DispatchError::invalid_request("request", errors.to_string()))
    }
}

/// Sends a plain-text email through `client`
///
/// Fails with [`DispatchError::MissingCredential`] or
/// [`DispatchError::InvalidRequest`] before any network activity. Otherwise
/// performs exactly one provider call and applies the request's silent mode
/// to its result.
///
/// # Arguments
/// * `client` - Provider client, constructed once by the caller
/// * `request` - Message fields, passed through verbatim
/// * `api_key` - Provider API key
pub async fn send_email(
    client: &dyn EmailClient,
    request: &EmailRequest,
    api_key: &str,
) -> DispatchResult<DeliveryOutcome> {
    if api_key.trim().is_empty() {
        return Err(DispatchError::missing_credential("api_key"));
    }

    request.check()?;

    tracing::info!(
        provider = client.name(),
        recipients = request.to.len(),
        subject = %request.subject,
        "Sending email"
    );

    let result = client.send_text(api_key, request).await;
    if result.is_ok() {
        tracing::debug!(provider = client.name(), "Email accepted by provider");
    }

    settle(request.silent, result)
}
