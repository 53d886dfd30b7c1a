//! Google Gemini `generateContent` client

use std::sync::LazyLock;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::{GenerationProvider, ProviderError, ProviderResult};

/// Base URL of the Gemini REST API
const API_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Timeout for a single generation call
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Maximum number of idle connections to maintain per host
const MAX_IDLE_CONNECTIONS_PER_HOST: usize = 10;

/// Shared HTTP client with connection pooling for all provider requests.
/// This client is initialized once and reused for better performance.
static HTTP_CLIENT: LazyLock<Client> = LazyLock::new(|| {
    Client::builder()
        .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
        .pool_max_idle_per_host(MAX_IDLE_CONNECTIONS_PER_HOST)
        .user_agent(format!("post-studio-backend/{}", env!("CARGO_PKG_VERSION")))
        .build()
        .expect("Failed to create HTTP client")
});

#[derive(Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

/// Joins the text parts of the first candidate, `None` when the response
/// carries no non-empty text
fn extract_completion(response: &GenerateContentResponse) -> Option<String> {
    let text = response
        .candidates
        .first()?
        .content
        .as_ref()?
        .parts
        .iter()
        .filter_map(|part| part.text.as_deref())
        .collect::<Vec<_>>()
        .join("");

    if text.trim().is_empty() {
        None
    } else {
        Some(text)
    }
}

/// Provider backed by the Gemini `generateContent` REST API
pub struct GeminiProvider {
    api_key: String,
    model: String,
}

impl GeminiProvider {
    /// Creates a new provider for the given API key and model identifier
    #[must_use]
    pub const fn new(api_key: String, model: String) -> Self {
        Self { api_key, model }
    }
}

#[async_trait]
impl GenerationProvider for GeminiProvider {
    async fn complete(&self, prompt: &str) -> ProviderResult<String> {
        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
        };

        let url = format!("{API_BASE_URL}/models/{}:generateContent", self.model);

        let response = HTTP_CLIENT
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());

            return Err(ProviderError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let completion: GenerateContentResponse =
            response.json().await.map_err(ProviderError::Network)?;

        extract_completion(&completion).ok_or(ProviderError::EmptyCompletion)
    }
}
