//! Environment configuration for different deployment stages

use std::env;

/// Application environment configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    /// Production environment
    Production,
    /// Staging environment
    Staging,
    /// Development environment
    Development,
}

/// Model used when `GEMINI_MODEL` is not set
const DEFAULT_GEMINI_MODEL: &str = "gemini-2.0-flash";

impl Environment {
    /// Creates an Environment from the `APP_ENV` environment variable
    ///
    /// # Panics
    ///
    /// Panics if `APP_ENV` contains an invalid value
    #[must_use]
    pub fn from_env() -> Self {
        let env = env::var("APP_ENV")
            .unwrap_or_else(|_| "development".to_string())
            .trim()
            .to_lowercase();

        match env.as_str() {
            "production" => Self::Production,
            "staging" => Self::Staging,
            "development" => Self::Development,
            _ => panic!("Invalid environment: {env}"),
        }
    }

    /// Whether to show API docs
    #[must_use]
    pub const fn show_api_docs(&self) -> bool {
        matches!(self, Self::Development | Self::Staging)
    }

    /// Returns the Gemini API key
    ///
    /// # Panics
    ///
    /// Panics if the `GEMINI_API_KEY` environment variable is not set
    #[must_use]
    pub fn gemini_api_key(&self) -> String {
        env::var("GEMINI_API_KEY").expect("GEMINI_API_KEY environment variable is not set")
    }

    /// Returns the Gemini model identifier used for content generation
    #[must_use]
    pub fn gemini_model(&self) -> String {
        env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_GEMINI_MODEL.to_string())
    }
}
