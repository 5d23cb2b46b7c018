//! Slack command handler

use std::sync::Arc;

use crate::cli::parser::SlackArgs;
use crate::config::settings::Settings;
use crate::error::AppResult;
use crate::external::build_http_client;
use crate::services::notifications::{
    ChatDraft, DeliveryOutcome, NotificationService, ReqwestTransport, WebhookTransport,
};

/// Handler for the slack command
pub struct SlackCommandHandler {
    config: Settings,
}

impl SlackCommandHandler {
    /// Create a new slack command handler
    pub fn new(config: Settings) -> Self {
        Self { config }
    }

    /// Execute the slack command
    pub async fn execute(&self, args: &SlackArgs) -> AppResult<DeliveryOutcome> {
        let http = build_http_client(&self.config.http)?;
        self.execute_with(Arc::new(ReqwestTransport::new(http)), args)
            .await
    }

    /// Execute the slack command over a given transport
    pub async fn execute_with(
        &self,
        transport: Arc<dyn WebhookTransport>,
        args: &SlackArgs,
    ) -> AppResult<DeliveryOutcome> {
        let service = NotificationService::new(self.config.notification_defaults())
            .with_webhook_transport(transport);

        let draft = ChatDraft {
            subdomain: args.subdomain.clone(),
            channel: args.channel.clone(),
            username: args.username.clone(),
            icon: args.icon.clone(),
            text: args.text.clone(),
            silent: args.silent,
        };

        let token = args.token.as_deref().unwrap_or_default();
        let outcome = service.chat(draft, token).await?;
        super::report("slack", &outcome);
        Ok(outcome)
    }
}
