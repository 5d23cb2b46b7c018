//! Notification dispatch with pluggable providers.
//!
//! Two dispatchers share one shape: validate the credential and request,
//! make a single outbound call through an injected provider, then apply
//! silent mode to the result. `EmailClient` and `WebhookTransport` are the
//! network seams; `NotificationService` layers caller defaults on top.

mod chat;
mod email;
mod error;
mod mailgun_provider;
mod provider;
mod webhook_provider;

pub mod notification_service;

#[cfg(test)]
pub(crate) mod testing;

pub use chat::{ChatMessage, send_chat_message, validate_subdomain, webhook_body, webhook_url};
pub use email::{EmailRequest, Recipients, is_valid_mailbox, mailbox_address, send_email};
pub use error::{DispatchError, DispatchResult};
pub use mailgun_provider::{DEFAULT_MAILGUN_BASE_URL, MailgunClient};
pub use notification_service::{ChatDraft, EmailDraft, NotificationDefaults, NotificationService};
pub use provider::{DeliveryOutcome, EmailClient, WebhookTransport};
pub use webhook_provider::ReqwestTransport;
