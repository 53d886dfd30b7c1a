use std::sync::Arc;

use backend::provider::{GeminiProvider, GenerationProvider};
use backend::{server, types::Environment};
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let environment = Environment::from_env();

    // Configure logging format based on environment
    // Use JSON format for staging/production, regular format for development
    match environment {
        Environment::Production | Environment::Staging => {
            fmt()
                .json()
                .with_env_filter(EnvFilter::from_default_env())
                .init();
        }
        Environment::Development => {
            fmt().with_env_filter(EnvFilter::from_default_env()).init();
        }
    }

    let provider: Arc<dyn GenerationProvider> = Arc::new(GeminiProvider::new(
        environment.gemini_api_key(),
        environment.gemini_model(),
    ));

    server::start(environment, provider).await
}
