//! HTTP client for the Post Studio generation endpoint
//!
//! Wraps `POST /v1/generate` behind a single call that either yields the
//! generated text or a typed [`GenerateError`]. One request per call, no
//! retry; the request is bounded by a timeout (15 seconds by default).

#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    dead_code
)]

mod error;

pub use error::{GenerateError, GenerateResult};

use std::sync::LazyLock;
use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};

/// Default bound on a single generation request
const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Maximum number of idle connections to maintain per host
const MAX_IDLE_CONNECTIONS_PER_HOST: usize = 10;

/// Shared HTTP client with connection pooling for all generation requests.
/// Timeouts are applied per request so they stay configurable per client.
static HTTP_CLIENT: LazyLock<Client> = LazyLock::new(|| {
    Client::builder()
        .pool_max_idle_per_host(MAX_IDLE_CONNECTIONS_PER_HOST)
        .user_agent(format!("generation-client/{}", env!("CARGO_PKG_VERSION")))
        .build()
        .expect("Failed to create HTTP client")
});

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    topic: &'a str,
    tone: &'a str,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    content: Option<String>,
}

/// Client for the content generation endpoint
#[derive(Debug, Clone)]
pub struct GenerationClient {
    base_url: String,
    request_timeout: Duration,
}

impl GenerationClient {
    /// Creates a client for the endpoint at `base_url`
    /// (e.g. `http://localhost:8001`)
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }

        Self {
            base_url,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }

    /// Overrides the per-request timeout
    #[must_use]
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Generates a post about `topic` written in `tone`
    ///
    /// Issues exactly one request; a timeout counts as an upstream fault.
    ///
    /// # Errors
    ///
    /// - [`GenerateError::BadRequest`] - the endpoint declined the input
    /// - [`GenerateError::UpstreamEmpty`] - the model produced no content
    /// - [`GenerateError::Upstream`] - network fault, timeout, or any
    ///   other non-success outcome
    pub async fn generate(&self, topic: &str, tone: &str) -> GenerateResult<String> {
        let request = GenerateRequest { topic, tone };
        let url = format!("{}/v1/generate", self.base_url);

        let response = HTTP_CLIENT
            .post(&url)
            .timeout(self.request_timeout)
            .json(&request)
            .send()
            .await
            .map_err(|err| {
                tracing::warn!("Generation request failed: {err}");
                GenerateError::from_transport(err)
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GenerateError::from_error_response(status, &body));
        }

        let payload: GenerateResponse =
            response.json().await.map_err(GenerateError::from_transport)?;

        let content = payload.content.as_deref().map_or("", str::trim);
        if content.is_empty() {
            return Err(GenerateError::UpstreamEmpty);
        }

        Ok(content.to_string())
    }
}
