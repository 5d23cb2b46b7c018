//! Email command handler

use std::sync::Arc;

use crate::cli::parser::EmailArgs;
use crate::config::ConfigError;
use crate::config::settings::Settings;
use crate::error::AppResult;
use crate::external::build_http_client;
use crate::services::notifications::{
    DeliveryOutcome, EmailClient, EmailDraft, MailgunClient, NotificationService,
};

/// Handler for the email command
pub struct EmailCommandHandler {
    config: Settings,
}

impl EmailCommandHandler {
    /// Create a new email command handler
    pub fn new(config: Settings) -> Self {
        Self { config }
    }

    /// Build the Mailgun client from settings
    ///
    /// # Errors
    /// - No sending domain configured
    /// - Invalid HTTP or Mailgun settings
    pub fn build_client(&self) -> AppResult<MailgunClient> {
        let email = &self.config.email;
        if email.domain.trim().is_empty() {
            return Err(ConfigError::validation(
                "email.domain",
                "Mailgun sending domain is required: pass --domain or set NOTIFIER_EMAIL__DOMAIN",
            )
            .into());
        }

        let http = build_http_client(&self.config.http)?;
        let client = MailgunClient::new(http, email.domain.clone())?.with_base_url(&email.base_url)?;
        Ok(client)
    }

    /// Execute the email command
    pub async fn execute(&self, args: &EmailArgs) -> AppResult<DeliveryOutcome> {
        let client: Arc<dyn EmailClient> = Arc::new(self.build_client()?);
        self.execute_with(client, args).await
    }

    /// Execute the email command against a given provider
    pub async fn execute_with(
        &self,
        client: Arc<dyn EmailClient>,
        args: &EmailArgs,
    ) -> AppResult<DeliveryOutcome> {
        let service =
            NotificationService::new(self.config.notification_defaults()).with_email_client(client);

        let draft = EmailDraft {
            from: args.from.clone(),
            to: args.to.clone(),
            subject: args.subject.clone(),
            body: args.body.clone(),
            silent: args.silent,
        };

        let api_key = args.api_key.as_deref().unwrap_or_default();
        let outcome = service.email(draft, api_key).await?;
        super::report("email", &outcome);
        Ok(outcome)
    }
}
