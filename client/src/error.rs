//! Error types for generation requests

use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;

/// Result type for generation requests
pub type GenerateResult<T> = Result<T, GenerateError>;

/// Outcome of a failed generation request
#[derive(Error, Debug)]
pub enum GenerateError {
    /// The endpoint rejected the request, typically a missing or empty
    /// topic/tone; carries the endpoint's human-readable message
    #[error("{0}")]
    BadRequest(String),

    /// The model produced no usable content
    #[error("no content was generated")]
    UpstreamEmpty,

    /// Network failure, timeout, or an unexpected endpoint response
    #[error("content generation failed: {0}")]
    Upstream(String),
}

/// Error envelope returned by the endpoint
#[derive(Debug, Deserialize)]
struct ApiErrorResponse {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    code: String,
    message: String,
}

impl GenerateError {
    /// Maps a transport-level failure; timeouts are upstream faults too
    pub(crate) fn from_transport(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Upstream("request timed out".to_string())
        } else {
            Self::Upstream(err.to_string())
        }
    }

    /// Maps a non-success response, using the error envelope when the body
    /// carries one
    pub(crate) fn from_error_response(status: StatusCode, body: &str) -> Self {
        let envelope: Option<ApiErrorResponse> = serde_json::from_str(body).ok();

        if let Some(envelope) = envelope {
            if envelope.error.code == "upstream_empty" {
                return Self::UpstreamEmpty;
            }
            if status == StatusCode::BAD_REQUEST {
                return Self::BadRequest(envelope.error.message);
            }
        } else if status == StatusCode::BAD_REQUEST {
            return Self::BadRequest("invalid request".to_string());
        }

        Self::Upstream(format!("request failed with status {status}"))
    }
}
