//! Error types for generative model provider calls

use thiserror::Error;

/// Result type for provider operations
pub type ProviderResult<T> = Result<T, ProviderError>;

/// Errors that can occur while calling the model provider
#[derive(Error, Debug)]
pub enum ProviderError {
    /// The model responded but produced no usable text
    #[error("model returned an empty completion")]
    EmptyCompletion,

    /// Network error when communicating with the provider
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The provider returned a non-success status
    #[error("provider returned status {status}: {message}")]
    Api {
        /// HTTP status code reported by the provider
        status: u16,
        /// Raw error body, kept for logging only
        message: String,
    },
}
