// src/health/checker.rs
use crate::config::CheckConfig;
use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("failed to fetch URL: {0}")]
    Request(#[source] reqwest::Error),

    #[error("failed to fetch URL: request timed out after {0}s")]
    Timeout(u64),

    #[error("failed to read response body: {0}")]
    ReadBody(#[source] reqwest::Error),
}

/// Retrieves the raw health document for a check.
#[async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch(&self, config: &CheckConfig) -> Result<Vec<u8>, FetchError>;
}

/// Single-attempt HTTP GET against the configured URL.
///
/// A new client is built per fetch so TLS settings stay scoped to that
/// request, and the connection is dropped on every return path.
#[derive(Debug, Default, Clone, Copy)]
pub struct HttpFetcher;

impl HttpFetcher {
    pub fn new() -> Self {
        Self
    }

    fn client(config: &CheckConfig) -> Result<Client, FetchError> {
        Client::builder()
            .timeout(config.timeout())
            .danger_accept_invalid_certs(config.insecure_skip_verify)
            .user_agent(concat!("backend-healthcheck/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(FetchError::Client)
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, config: &CheckConfig) -> Result<Vec<u8>, FetchError> {
        let client = Self::client(config)?;

        debug!(url = %config.url, timeout_secs = config.timeout_secs, "fetching health document");

        let response = client.get(config.url.as_str()).send().await.map_err(|e| {
            if e.is_timeout() {
                FetchError::Timeout(config.timeout_secs)
            } else {
                FetchError::Request(e)
            }
        })?;

        // The body is evaluated whatever the status code says.
        let status = response.status();
        if !status.is_success() {
            debug!(%status, "health endpoint returned a non-success status");
        }

        let body = response.bytes().await.map_err(|e| {
            if e.is_timeout() {
                FetchError::Timeout(config.timeout_secs)
            } else {
                FetchError::ReadBody(e)
            }
        })?;

        debug!(bytes = body.len(), "received health document");
        Ok(body.to_vec())
    }
}
