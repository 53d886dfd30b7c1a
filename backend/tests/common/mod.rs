// Not every util is used in every test, so we allow dead code
#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use axum::{body::Body, http::Request, response::Response, Extension, Router};
use backend::provider::{GenerationProvider, ProviderError, ProviderResult};
use backend::routes;
use backend::types::Environment;
use tower::ServiceExt;

/// Scripted provider behaviors for router tests
pub enum StubResponse {
    /// Resolve successfully with the given text
    Success(String),
    /// Resolve successfully only after a delay
    Slow(Duration, String),
    /// Fail with an empty completion
    Empty,
    /// Fail with a provider fault carrying internal detail
    Failure(String),
}

/// Provider stub that records how it was called
pub struct StubProvider {
    response: StubResponse,
    calls: AtomicUsize,
    last_prompt: Mutex<Option<String>>,
}

impl StubProvider {
    pub fn new(response: StubResponse) -> Arc<Self> {
        Arc::new(Self {
            response,
            calls: AtomicUsize::new(0),
            last_prompt: Mutex::new(None),
        })
    }

    /// Number of times the endpoint invoked the provider
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// The prompt of the most recent invocation
    pub fn last_prompt(&self) -> Option<String> {
        self.last_prompt.lock().unwrap().clone()
    }
}

#[async_trait]
impl GenerationProvider for StubProvider {
    async fn complete(&self, prompt: &str) -> ProviderResult<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_prompt.lock().unwrap() = Some(prompt.to_string());

        match &self.response {
            StubResponse::Success(text) => Ok(text.clone()),
            StubResponse::Slow(delay, text) => {
                tokio::time::sleep(*delay).await;
                Ok(text.clone())
            }
            StubResponse::Empty => Err(ProviderError::EmptyCompletion),
            StubResponse::Failure(detail) => Err(ProviderError::Api {
                status: 500,
                message: detail.clone(),
            }),
        }
    }
}

/// Test setup wiring the real router to a stub provider
pub struct TestSetup {
    pub router: Router,
    pub provider: Arc<StubProvider>,
}

impl TestSetup {
    pub fn new(response: StubResponse) -> Self {
        let provider = StubProvider::new(response);
        let dyn_provider: Arc<dyn GenerationProvider> = provider.clone();

        let router: Router = routes::handler()
            .layer(Extension(Environment::Development))
            .layer(Extension(dyn_provider))
            .into();

        Self { router, provider }
    }

    pub async fn send_post_request(
        &self,
        route: &str,
        payload: serde_json::Value,
    ) -> Result<Response, Box<dyn std::error::Error>> {
        let request = Request::builder()
            .uri(route)
            .method("POST")
            .header("Content-Type", "application/json")
            .body(Body::from(payload.to_string()))?;

        let response = self.router.clone().oneshot(request).await?;
        Ok(response)
    }

    pub async fn send_get_request(
        &self,
        route: &str,
    ) -> Result<Response, Box<dyn std::error::Error>> {
        let request = Request::builder()
            .uri(route)
            .method("GET")
            .body(Body::empty())?;
        let response = self.router.clone().oneshot(request).await?;
        Ok(response)
    }

    pub async fn parse_response_body(
        &self,
        response: Response,
    ) -> Result<serde_json::Value, Box<dyn std::error::Error>> {
        use http_body_util::BodyExt;

        let body = response.into_body().collect().await?.to_bytes();
        let json = serde_json::from_slice(&body)?;
        Ok(json)
    }
}
