//! Mailgun email provider implementation.
//!
//! Sends plain-text messages through the Mailgun messages API using HTTP
//! basic auth (`api:<key>`) and a URL-encoded form body.
//!
//! Mailgun API Reference: https://documentation.mailgun.com/docs/mailgun/api-reference/

use super::chat::is_hostname_label;
use super::email::EmailRequest;
use super::error::{DispatchError, DispatchResult};
use super::provider::EmailClient;
use async_trait::async_trait;
use reqwest::Url;
use serde::Deserialize;
use std::time::Instant;

const PROVIDER: &str = "mailgun";

/// Default Mailgun API base URL
pub const DEFAULT_MAILGUN_BASE_URL: &str = "https://api.mailgun.net/v3";

/// Error body returned by Mailgun on rejected requests
#[derive(Debug, Deserialize)]
struct MailgunErrorBody {
    message: String,
}

/// Mailgun email client
///
/// Holds the HTTP client and the sending domain; the API key is supplied
/// per call so one client can serve several keys.
///
/// # Example
/// ```ignore
/// let client = MailgunClient::new(http, "mg.example.com")?;
/// let outcome = send_email(&client, &request, &api_key).await?;
/// ```
#[derive(Clone)]
pub struct MailgunClient {
    http: reqwest::Client,
    base_url: String,
    domain: String,
}

impl MailgunClient {
    /// Creates a client for `domain` against the public Mailgun API
    ///
    /// # Errors
    /// Returns `InvalidRequest` if the domain is empty or not a hostname
    pub fn new(http: reqwest::Client, domain: impl Into<String>) -> DispatchResult<Self> {
        let domain = domain.into();
        if domain.trim().is_empty() {
            return Err(DispatchError::invalid_request(
                "domain",
                "Mailgun sending domain cannot be empty",
            ));
        }

        if !domain.split('.').all(is_hostname_label) {
            return Err(DispatchError::invalid_request(
                "domain",
                format!("'{domain}' is not a valid hostname"),
            ));
        }

        Ok(Self {
            http,
            base_url: DEFAULT_MAILGUN_BASE_URL.to_string(),
            domain,
        })
    }

    /// Points the client at a different API root (e.g. the EU region)
    ///
    /// # Errors
    /// Returns `InvalidRequest` if the URL is not http(s)
    pub fn with_base_url(mut self, base_url: &str) -> DispatchResult<Self> {
        let url = Url::parse(base_url)
            .map_err(|_| DispatchError::invalid_request("base_url", "Invalid URL format"))?;

        if url.scheme() != "https" && url.scheme() != "http" {
            return Err(DispatchError::invalid_request(
                "base_url",
                "URL must use http or https protocol",
            ));
        }

        self.base_url = base_url.trim_end_matches('/').to_string();
        Ok(self)
    }

    pub fn messages_url(&self) -> String {
        format!("{}/{}/messages", self.base_url, self.domain)
    }

    /// Builds the form fields, one `to` entry per recipient
    fn form_fields<'a>(request: &'a EmailRequest) -> Vec<(&'static str, &'a str)> {
        let mut fields = Vec::with_capacity(request.to.len() + 3);

        if let Some(from) = &request.from {
            fields.push(("from", from.as_str()));
        }
        for recipient in request.to.as_slice() {
            fields.push(("to", recipient.as_str()));
        }
        fields.push(("subject", request.subject.as_str()));
        fields.push(("text", request.body.as_str()));

        fields
    }

    fn failure(status: u16, body: &str) -> DispatchError {
        match serde_json::from_str::<MailgunErrorBody>(body) {
            Ok(err) => DispatchError::Provider {
                provider: PROVIDER,
                status,
                message: err.message,
            },
            Err(_) => DispatchError::UnexpectedStatus {
                provider: PROVIDER,
                status,
            },
        }
    }
}

#[async_trait]
impl EmailClient for MailgunClient {
    async fn send_text(&self, api_key: &str, request: &EmailRequest) -> DispatchResult<()> {
        let start = Instant::now();

        let response = self
            .http
            .post(self.messages_url())
            .basic_auth("api", Some(api_key))
            .form(&Self::form_fields(request))
            .send()
            .await
            .map_err(|e| DispatchError::transport(PROVIDER, e))?;

        let status = response.status();
        let duration_ms = start.elapsed().as_millis() as u64;

        if status.is_success() {
            tracing::debug!(status = status.as_u16(), duration_ms, "Mailgun accepted message");
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        tracing::debug!(status = status.as_u16(), duration_ms, body = %body, "Mailgun rejected message");

        Err(Self::failure(status.as_u16(), &body))
    }

    fn name(&self) -> &'static str {
        PROVIDER
    }
}
