//! Generative model provider integration
//!
//! The endpoint talks to the model through [`GenerationProvider`] so tests
//! can substitute a scripted implementation for the real API.

mod error;
mod gemini;
mod prompt;

pub use error::{ProviderError, ProviderResult};
pub use gemini::GeminiProvider;
pub use prompt::build_prompt;

use async_trait::async_trait;

/// A text-completion backend invoked once per generation request
#[async_trait]
pub trait GenerationProvider: Send + Sync {
    /// Generates text for the given prompt
    ///
    /// # Errors
    ///
    /// Returns `ProviderError` if the call fails or yields no usable text
    async fn complete(&self, prompt: &str) -> ProviderResult<String>;
}
