use std::sync::Arc;

use axum::{http::StatusCode, Extension, Json};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::{
    provider::{build_prompt, GenerationProvider, ProviderError},
    types::AppError,
};

/// Content generation request
///
/// Missing fields deserialize to empty strings so an absent field and an
/// empty one are rejected the same way.
#[derive(Debug, Default, Deserialize, Serialize, JsonSchema)]
#[serde(default)]
#[schemars(deny_unknown_fields)]
pub struct GenerateRequest {
    /// Subject of the post
    pub topic: String,
    /// Writing tone, matched case-insensitively
    pub tone: String,
}

/// Content generation response
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct GenerateResponse {
    /// Generated post text, trimmed
    pub content: String,
}

/// Generates a post about the requested topic in the requested tone
///
/// The tone is normalized (trimmed, lowercased) before it is embedded in
/// the prompt. The model is invoked exactly once; there is no retry.
///
/// # Errors
///
/// This function can return the following errors:
/// - `missing_field` (400) - `topic` or `tone` is empty after trimming
/// - `upstream_empty` (502) - the model returned no usable text
/// - `generation_failed` (500) - any other provider fault; the underlying
///   error is logged but not exposed
#[instrument(skip(provider, payload))]
pub async fn handler(
    Extension(provider): Extension<Arc<dyn GenerationProvider>>,
    Json(payload): Json<GenerateRequest>,
) -> Result<Json<GenerateResponse>, AppError> {
    let topic = payload.topic.trim();
    let tone = payload.tone.trim().to_lowercase();

    if topic.is_empty() || tone.is_empty() {
        return Err(AppError::new(
            StatusCode::BAD_REQUEST,
            "missing_field",
            "Both topic and tone are required",
            false,
        ));
    }

    let prompt = build_prompt(topic, &tone);
    let completion = provider.complete(&prompt).await?;

    // Providers are expected to reject empty completions themselves, but a
    // 200 with empty content must never leave this handler.
    let content = completion.trim();
    if content.is_empty() {
        return Err(ProviderError::EmptyCompletion.into());
    }

    tracing::info!("Generated {} bytes of content", content.len());

    Ok(Json(GenerateResponse {
        content: content.to_string(),
    }))
}
