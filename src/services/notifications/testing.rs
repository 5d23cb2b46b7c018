//! In-memory provider fakes shared by the notification tests.

use super::email::EmailRequest;
use super::error::{DispatchError, DispatchResult};
use super::provider::{EmailClient, WebhookTransport};
use async_trait::async_trait;
use std::sync::Mutex;

/// Email client that records every call and answers with a canned result
pub struct RecordingEmailClient {
    calls: Mutex<Vec<(String, EmailRequest)>>,
    failure: Option<(u16, String)>,
}

impl RecordingEmailClient {
    pub fn succeeding() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            failure: None,
        }
    }

    pub fn failing_with_status(status: u16, message: &str) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            failure: Some((status, message.to_string())),
        }
    }

    pub fn calls(&self) -> Vec<(String, EmailRequest)> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl EmailClient for RecordingEmailClient {
    async fn send_text(&self, api_key: &str, request: &EmailRequest) -> DispatchResult<()> {
        self.calls
            .lock()
            .unwrap()
            .push((api_key.to_string(), request.clone()));

        match &self.failure {
            None => Ok(()),
            Some((status, message)) => Err(DispatchError::Provider {
                provider: "fake",
                status: *status,
                message: message.clone(),
            }),
        }
    }

    fn name(&self) -> &'static str {
        "fake"
    }
}

/// Webhook transport that records every post and answers with a canned status
pub struct RecordingTransport {
    posts: Mutex<Vec<(String, String)>>,
    status: Option<u16>,
}

impl RecordingTransport {
    pub fn with_status(status: u16) -> Self {
        Self {
            posts: Mutex::new(Vec::new()),
            status: Some(status),
        }
    }

    /// Transport whose every post fails before a response arrives
    pub fn unreachable() -> Self {
        Self {
            posts: Mutex::new(Vec::new()),
            status: None,
        }
    }

    pub fn posts(&self) -> Vec<(String, String)> {
        self.posts.lock().unwrap().clone()
    }

    pub fn post_count(&self) -> usize {
        self.posts.lock().unwrap().len()
    }
}

#[async_trait]
impl WebhookTransport for RecordingTransport {
    async fn post_json(&self, url: &str, body: String) -> anyhow::Result<u16> {
        self.posts.lock().unwrap().push((url.to_string(), body));

        match self.status {
            Some(status) => Ok(status),
            None => anyhow::bail!("connection refused"),
        }
    }
}

/// Request captured by a local test server
#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub path: String,
    pub query: Option<String>,
    pub content_type: Option<String>,
    pub authorization: Option<String>,
    pub body: String,
}

pub type Captured = std::sync::Arc<Mutex<Vec<CapturedRequest>>>;

/// Starts an axum server on an ephemeral local port.
///
/// Every request is recorded into the returned store and answered with the
/// status and body that `respond` picks for its path.
pub async fn spawn_server(
    respond: fn(&str) -> (u16, &'static str),
) -> (String, Captured) {
    use axum::Router;
    use axum::extract::{Request, State};
    use axum::http::StatusCode;
    use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};

    let captured: Captured = Default::default();

    let handler = move |State(store): State<Captured>, request: Request| async move {
        let (parts, body) = request.into_parts();
        let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();
        let header = |name: axum::http::HeaderName| {
            parts
                .headers
                .get(name)
                .and_then(|v| v.to_str().ok())
                .map(str::to_string)
        };
        let path = parts.uri.path().to_string();

        store.lock().unwrap().push(CapturedRequest {
            path: path.clone(),
            query: parts.uri.query().map(str::to_string),
            content_type: header(CONTENT_TYPE),
            authorization: header(AUTHORIZATION),
            body: String::from_utf8_lossy(&bytes).into_owned(),
        });

        let (status, body) = respond(&path);
        (StatusCode::from_u16(status).unwrap(), body)
    };

    let app = Router::new()
        .fallback(handler)
        .with_state(captured.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{addr}"), captured)
}
