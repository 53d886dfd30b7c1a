//! Post Studio backend service

#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    dead_code
)]

/// Generative model provider integrations
pub mod provider;

/// HTTP route handlers
pub mod routes;

/// Server setup and lifecycle
pub mod server;

/// Shared types, configuration and error handling
pub mod types;
