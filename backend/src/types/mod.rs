//! Shared request/response plumbing for the service

mod environment;
mod error;

pub use environment::Environment;
pub use error::{ApiErrorResponse, AppError};
