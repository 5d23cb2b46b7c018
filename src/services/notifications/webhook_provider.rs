//! Reqwest-backed webhook transport.
//!
//! Sends pre-serialized JSON bodies with an injected `reqwest::Client`, so
//! connection pooling and timeouts are whatever the caller configured.

use super::provider::WebhookTransport;
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use std::time::Instant;

/// Webhook transport over a shared `reqwest::Client`
///
/// # Example
/// ```ignore
/// let http = build_http_client(&settings.http)?;
/// let transport = ReqwestTransport::new(http);
/// let outcome = send_chat_message(&transport, &message, &token).await?;
/// ```
#[derive(Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl WebhookTransport for ReqwestTransport {
    async fn post_json(&self, url: &str, body: String) -> anyhow::Result<u16> {
        let start = Instant::now();

        let response = self
            .client
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(reqwest::Error::without_url)?;

        let status = response.status().as_u16();
        // URL carries the token, keep it out of the logs
        tracing::debug!(
            status,
            duration_ms = start.elapsed().as_millis() as u64,
            "Webhook responded"
        );

        Ok(status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::notifications::testing::spawn_server;

    fn respond(path: &str) -> (u16, &'static str) {
        match path {
            "/hook" => (200, "ok"),
            _ => (500, "boom"),
        }
    }

    #[tokio::test]
    async fn test_posts_json_body() {
        let (base, captured) = spawn_server(respond).await;
        let transport = ReqwestTransport::new(reqwest::Client::new());

        let status = transport
            .post_json(&format!("{base}/hook?token=abc"), r#"{"text":"hi"}"#.to_string())
            .await
            .unwrap();

        assert_eq!(status, 200);
        let seen = captured.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].path, "/hook");
        assert_eq!(seen[0].query.as_deref(), Some("token=abc"));
        assert_eq!(seen[0].content_type.as_deref(), Some("application/json"));
        assert_eq!(seen[0].body, r#"{"text":"hi"}"#);
    }

    #[tokio::test]
    async fn test_error_status_is_returned_not_raised() {
        let (base, _captured) = spawn_server(respond).await;
        let transport = ReqwestTransport::new(reqwest::Client::new());

        let status = transport
            .post_json(&format!("{base}/missing"), "{}".to_string())
            .await
            .unwrap();

        assert_eq!(status, 500);
    }

    #[tokio::test]
    async fn test_transport_error_does_not_carry_token() {
        use crate::services::notifications::DispatchError;

        let transport = ReqwestTransport::new(reqwest::Client::new());

        // Unreachable host with the token in the query string
        let err = transport
            .post_json("http://127.0.0.1:1/hook?token=SECRET_TOKEN_123", "{}".to_string())
            .await
            .unwrap_err();
        let rendered = format!("{err:?} {err:#}");
        assert!(!rendered.contains("SECRET_TOKEN_123"), "token leaked: {rendered}");

        let err = DispatchError::transport("slack", err);
        let chain = format!("{:?}", anyhow::Error::from(err));
        assert!(!chain.contains("SECRET_TOKEN_123"), "token leaked: {chain}");
    }

    #[tokio::test]
    async fn test_connection_failure_is_an_error() {
        let transport = ReqwestTransport::new(reqwest::Client::new());

        let result = transport
            .post_json("http://127.0.0.1:1/hook", "{}".to_string())
            .await;

        assert!(result.is_err());
    }
}
