//! HTTP route handlers

mod docs;
mod health;

/// Version 1 API handlers
pub mod v1;

use aide::axum::{
    routing::{get, post},
    ApiRouter,
};

/// Creates the router with all handler routes
pub fn handler() -> ApiRouter {
    ApiRouter::new()
        .merge(docs::handler())
        .api_route("/health", get(health::handler))
        .api_route("/v1/generate", post(v1::generate::handler))
}
