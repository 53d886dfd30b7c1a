//! Universal error handling for the API

use aide::OperationOutput;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use schemars::JsonSchema;
use serde::Serialize;

use crate::provider::ProviderError;

/// API error response envelope returned to clients
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ApiErrorResponse {
    /// Whether the client should retry the request
    pub allow_retry: bool,
    /// Error details
    error: ErrorBody,
}

/// Error body containing code and message
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
struct ErrorBody {
    /// Machine-readable error code
    pub code: &'static str,
    /// Human-readable error message
    pub message: &'static str,
}

/// Application error type that wraps the API error response
#[derive(Debug)]
pub struct AppError {
    status: StatusCode,
    inner: ApiErrorResponse,
}

impl AppError {
    /// Create a new application error
    #[must_use]
    pub const fn new(
        status: StatusCode,
        code: &'static str,
        msg: &'static str,
        retry: bool,
    ) -> Self {
        Self {
            status,
            inner: ApiErrorResponse {
                allow_retry: retry,
                error: ErrorBody { code, message: msg },
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Log the error based on status code
        match self.status.as_u16() {
            400..=499 => tracing::warn!(
                "Client error: {} - {}",
                self.inner.error.code,
                self.inner.error.message
            ),
            500..=599 => tracing::error!(
                "Server error: {} - {}",
                self.inner.error.code,
                self.inner.error.message
            ),
            _ => {}
        }

        (self.status, Json(self.inner)).into_response()
    }
}

/// Convert provider errors to application errors.
///
/// Provider internals are logged but never forwarded to the caller; only
/// the empty-completion case is distinguishable from a generic failure.
impl From<ProviderError> for AppError {
    fn from(err: ProviderError) -> Self {
        use ProviderError::{Api, EmptyCompletion, Network};

        match &err {
            EmptyCompletion => {
                tracing::warn!("Model returned an empty completion");
                Self::new(
                    StatusCode::BAD_GATEWAY,
                    "upstream_empty",
                    "The model returned no content",
                    true,
                )
            }
            Network(source) => {
                tracing::error!("Provider network error: {source}");
                Self::new(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "generation_failed",
                    "Failed to generate content. Please try again.",
                    true,
                )
            }
            Api { status, message } => {
                tracing::error!("Provider returned status {status}: {message}");
                Self::new(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "generation_failed",
                    "Failed to generate content. Please try again.",
                    true,
                )
            }
        }
    }
}

impl OperationOutput for AppError {
    type Inner = ApiErrorResponse;

    fn operation_response(
        ctx: &mut aide::generate::GenContext,
        operation: &mut aide::openapi::Operation,
    ) -> Option<aide::openapi::Response> {
        Json::<ApiErrorResponse>::operation_response(ctx, operation)
    }
}
