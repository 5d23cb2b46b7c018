use std::time::Duration;

use crate::config::HttpSettings;

/// Builds the HTTP client shared by every provider
///
/// Construct it once at startup and hand clones to the providers; clones
/// share one connection pool.
///
/// # Features
/// - **Timeouts**: request and connect timeouts from `HttpSettings`
/// - **Connection pooling**: idle connections kept for reuse across sends
/// - **Compression**: gzip, deflate, brotli and zstd responses
/// - **Security**: Rustls for TLS (no OpenSSL dependency)
///
/// # Example
/// ```ignore
/// let http = build_http_client(&settings.http)?;
/// let transport = ReqwestTransport::new(http.clone());
/// let mailgun = MailgunClient::new(http, &settings.email.domain)?;
/// ```
pub fn build_http_client(settings: &HttpSettings) -> reqwest::Result<reqwest::Client> {
    reqwest::Client::builder()
        // Timeouts
        .timeout(Duration::from_secs(settings.timeout_seconds))
        .connect_timeout(Duration::from_secs(settings.connect_timeout_seconds))
        // Connection pooling
        .pool_max_idle_per_host(4)
        .pool_idle_timeout(Duration::from_secs(90))
        // Enable compression (gzip, deflate, brotli, zstd)
        .gzip(true)
        .deflate(true)
        .brotli(true)
        .zstd(true)
        .user_agent(settings.user_agent.as_str())
        .build()
}
