//! Outbound calls from the gateway to operation services.

use async_trait::async_trait;
use bytes::Bytes;
use http::StatusCode;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

use super::error::BackendError;

/// A successful (2xx, JSON) backend reply, kept as raw bytes so it can be
/// relayed without re-shaping.
#[derive(Debug, Clone)]
pub struct BackendReply {
    pub status: StatusCode,
    pub body: Bytes,
}

/// Something that can perform `GET <url>?a=..&b=..`.
#[async_trait]
pub trait Backend: Send + Sync {
    /// Call `url` with `a` and `b` passed through verbatim as query
    /// parameters.
    async fn call(&self, url: &str, a: &str, b: &str) -> Result<BackendReply, BackendError>;
}

/// Build the HTTP client used for backend calls.
///
/// Every request is bounded by `timeout_secs`.
pub fn build_client(timeout_secs: u64) -> reqwest::Result<Client> {
    Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .build()
}

/// [`Backend`] over HTTP with `reqwest`.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: Client,
}

impl HttpBackend {
    /// Wrap an existing client.
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Backend for HttpBackend {
    async fn call(&self, url: &str, a: &str, b: &str) -> Result<BackendReply, BackendError> {
        debug!("GET {} a={} b={}", url, a, b);

        let response = self
            .client
            .get(url)
            .query(&[("a", a), ("b", b)])
            .send()
            .await
            .map_err(|e| BackendError::transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| BackendError::transport(e.to_string()))?;

        if !status.is_success() {
            return Err(BackendError::Status { status, body });
        }

        serde_json::from_slice::<serde::de::IgnoredAny>(&body)
            .map_err(|e| BackendError::MalformedBody(e.to_string()))?;

        Ok(BackendReply { status, body })
    }
}
