//! Notification service for callers.
//!
//! Owns the provider handles and the caller-side default values, turning
//! partially filled drafts into complete requests before dispatching them.

use super::chat::{ChatMessage, send_chat_message};
use super::email::{EmailRequest, Recipients, send_email};
use super::error::{DispatchError, DispatchResult};
use super::provider::{DeliveryOutcome, EmailClient, WebhookTransport};
use std::sync::Arc;

/// Default values applied to fields a draft leaves out
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationDefaults {
    pub email_from: String,
    pub email_subject: String,
    pub chat_subdomain: String,
    pub chat_channel: String,
    pub chat_username: String,
    pub chat_icon: String,
}

impl Default for NotificationDefaults {
    fn default() -> Self {
        Self {
            email_from: "'Data News Team' <wnyclabs@gmail.com>".to_string(),
            email_subject: "Data News Notification".to_string(),
            chat_subdomain: "datanews".to_string(),
            chat_channel: "#notifications".to_string(),
            chat_username: "Data News Bot".to_string(),
            chat_icon: ":robot:".to_string(),
        }
    }
}

/// Email with optional fields left to the service defaults
#[derive(Debug, Clone, Default)]
pub struct EmailDraft {
    pub from: Option<String>,
    pub to: Vec<String>,
    pub subject: Option<String>,
    pub body: String,
    pub silent: bool,
}

/// Chat message with optional fields left to the service defaults
#[derive(Debug, Clone, Default)]
pub struct ChatDraft {
    pub subdomain: Option<String>,
    pub channel: Option<String>,
    pub username: Option<String>,
    pub icon: Option<String>,
    pub text: String,
    pub silent: bool,
}

fn or_default(value: Option<String>, default: &str) -> String {
    value
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| default.to_string())
}

/// Notification service dispatching email and chat messages
///
/// Providers are attached with the `with_*` builders; a channel whose
/// provider is missing fails with `InvalidRequest` before any network call.
#[derive(Clone)]
pub struct NotificationService {
    email_client: Option<Arc<dyn EmailClient>>,
    transport: Option<Arc<dyn WebhookTransport>>,
    defaults: NotificationDefaults,
}

impl NotificationService {
    /// Creates a new NotificationService without providers
    ///
    /// # Arguments
    /// * `defaults` - Values for fields a draft leaves out
    pub fn new(defaults: NotificationDefaults) -> Self {
        Self {
            email_client: None,
            transport: None,
            defaults,
        }
    }

    /// Attaches the provider used for every email
    pub fn with_email_client(mut self, client: Arc<dyn EmailClient>) -> Self {
        self.email_client = Some(client);
        self
    }

    /// Attaches the HTTP transport used for every webhook post
    pub fn with_webhook_transport(mut self, transport: Arc<dyn WebhookTransport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Fills in sender and subject defaults
    pub fn complete_email(&self, draft: EmailDraft) -> EmailRequest {
        let to = match draft.to.len() {
            1 => Recipients::One(draft.to.into_iter().next().unwrap_or_default()),
            _ => Recipients::Many(draft.to),
        };

        EmailRequest {
            from: Some(or_default(draft.from, &self.defaults.email_from)),
            to,
            subject: or_default(draft.subject, &self.defaults.email_subject),
            body: draft.body,
            silent: draft.silent,
        }
    }

    /// Fills in subdomain, channel, username and icon defaults
    pub fn complete_chat(&self, draft: ChatDraft) -> ChatMessage {
        ChatMessage {
            subdomain: or_default(draft.subdomain, &self.defaults.chat_subdomain),
            channel: or_default(draft.channel, &self.defaults.chat_channel),
            username: or_default(draft.username, &self.defaults.chat_username),
            icon: or_default(draft.icon, &self.defaults.chat_icon),
            text: draft.text,
            silent: draft.silent,
        }
    }

    /// Sends an email after applying defaults
    ///
    /// # Arguments
    /// * `draft` - Email fields, possibly incomplete
    /// * `api_key` - Provider API key
    pub async fn email(&self, draft: EmailDraft, api_key: &str) -> DispatchResult<DeliveryOutcome> {
        let client = self.email_client.as_deref().ok_or_else(|| {
            DispatchError::invalid_request("email_client", "No email provider configured")
        })?;
        let request = self.complete_email(draft);
        send_email(client, &request, api_key).await
    }

    /// Posts a chat message after applying defaults
    ///
    /// # Arguments
    /// * `draft` - Message fields, possibly incomplete
    /// * `webhook_token` - Incoming-webhook token
    pub async fn chat(&self, draft: ChatDraft, webhook_token: &str) -> DispatchResult<DeliveryOutcome> {
        let transport = self.transport.as_deref().ok_or_else(|| {
            DispatchError::invalid_request("webhook_transport", "No webhook transport configured")
        })?;
        let message = self.complete_chat(draft);
        send_chat_message(transport, &message, webhook_token).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::notifications::testing::{RecordingEmailClient, RecordingTransport};

    fn service(
        status: u16,
    ) -> (NotificationService, Arc<RecordingEmailClient>, Arc<RecordingTransport>) {
        let email = Arc::new(RecordingEmailClient::succeeding());
        let transport = Arc::new(RecordingTransport::with_status(status));
        let service = NotificationService::new(NotificationDefaults::default())
            .with_email_client(email.clone())
            .with_webhook_transport(transport.clone());
        (service, email, transport)
    }

    #[tokio::test]
    async fn test_email_defaults_applied() {
        let (service, email, _) = service(200);

        let outcome = service
            .email(
                EmailDraft {
                    to: vec!["arecipient@domain.org".to_string()],
                    body: "What's up?".to_string(),
                    ..Default::default()
                },
                "key",
            )
            .await
            .unwrap();

        assert!(outcome.is_delivered());
        let calls = email.calls();
        let sent = &calls[0].1;
        assert_eq!(sent.from.as_deref(), Some("'Data News Team' <wnyclabs@gmail.com>"));
        assert_eq!(sent.subject, "Data News Notification");
        assert_eq!(sent.to, Recipients::One("arecipient@domain.org".to_string()));
    }

    #[tokio::test]
    async fn test_email_explicit_fields_kept() {
        let (service, email, _) = service(200);

        service
            .email(
                EmailDraft {
                    from: Some("Someone <someone@someone.com>".to_string()),
                    to: vec!["a@b.com".to_string(), "c@d.org".to_string()],
                    subject: Some("Hey".to_string()),
                    body: "hi".to_string(),
                    silent: false,
                },
                "key",
            )
            .await
            .unwrap();

        let calls = email.calls();
        let sent = &calls[0].1;
        assert_eq!(sent.from.as_deref(), Some("Someone <someone@someone.com>"));
        assert_eq!(sent.subject, "Hey");
        assert_eq!(sent.to.len(), 2);
    }

    #[tokio::test]
    async fn test_chat_defaults_applied() {
        let (service, _, transport) = service(200);

        service
            .chat(
                ChatDraft {
                    text: "HI EVERYONE!".to_string(),
                    ..Default::default()
                },
                "tok",
            )
            .await
            .unwrap();

        let posts = transport.posts();
        assert_eq!(
            posts[0].0,
            "https://datanews.slack.com/services/hooks/incoming-webhook?token=tok"
        );
        assert_eq!(
            posts[0].1,
            r##"{"channel":"#notifications","username":"Data News Bot","icon_emoji":":robot:","text":"HI EVERYONE!"}"##
        );
    }

    #[tokio::test]
    async fn test_chat_empty_fields_fall_back_to_defaults() {
        let (service, _, _) = service(200);

        let message = service.complete_chat(ChatDraft {
            subdomain: Some(String::new()),
            channel: Some("#general".to_string()),
            icon: Some(":tada:".to_string()),
            username: Some("Confetti Bot".to_string()),
            text: "hi".to_string(),
            silent: true,
        });

        assert_eq!(message.subdomain, "datanews");
        assert_eq!(message.channel, "#general");
        assert_eq!(message.icon, ":tada:");
        assert_eq!(message.username, "Confetti Bot");
        assert!(message.silent);
    }

    #[tokio::test]
    async fn test_chat_silent_failure_is_suppressed() {
        let (service, _, _) = service(500);

        let outcome = service
            .chat(
                ChatDraft {
                    text: "hi".to_string(),
                    silent: true,
                    ..Default::default()
                },
                "tok",
            )
            .await
            .unwrap();

        assert!(outcome.is_suppressed());
    }

    #[tokio::test]
    async fn test_missing_credentials_make_no_calls() {
        let (service, email, transport) = service(200);

        let err = service
            .email(
                EmailDraft {
                    to: vec!["a@b.com".to_string()],
                    body: "hi".to_string(),
                    ..Default::default()
                },
                "",
            )
            .await
            .unwrap_err();
        assert!(matches!(err, DispatchError::MissingCredential { .. }));

        let err = service
            .chat(
                ChatDraft {
                    text: "hi".to_string(),
                    ..Default::default()
                },
                "",
            )
            .await
            .unwrap_err();
        assert!(matches!(err, DispatchError::MissingCredential { .. }));

        assert_eq!(email.call_count(), 0);
        assert_eq!(transport.post_count(), 0);
    }

    #[tokio::test]
    async fn test_missing_provider_is_invalid_request() {
        let service = NotificationService::new(NotificationDefaults::default());

        let err = service
            .chat(
                ChatDraft {
                    text: "hi".to_string(),
                    ..Default::default()
                },
                "tok",
            )
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            DispatchError::InvalidRequest {
                field: "webhook_transport",
                ..
            }
        ));

        let err = service
            .email(
                EmailDraft {
                    to: vec!["a@b.com".to_string()],
                    body: "hi".to_string(),
                    ..Default::default()
                },
                "key",
            )
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            DispatchError::InvalidRequest {
                field: "email_client",
                ..
            }
        ));
    }
}
