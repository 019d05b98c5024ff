use dotenvy::dotenv;

mod api;
mod config;
mod setup;

use config::{app_config::AppConfig, gemini_config::GeminiConfig};
use setup::{dependency_injection::DependencyContainer, server::Server};

/// REST API entry point.
///
/// - config/: environment-driven settings (server, CORS, Gemini)
/// - setup/: dependency wiring and the HTTP server
/// - api/: route handlers, DTOs and error mapping
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Load environment variables, so `.env` can set RUST_LOG too
    dotenv().ok();

    // 2. Initialize tracing with RUST_LOG env filter
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // 3. Load configuration; a missing GOOGLE_GEMINI_KEY stops startup here
    let config = AppConfig::from_env();
    let gemini_config = GeminiConfig::from_env()?;

    // 4. Wire dependencies
    let container = DependencyContainer::new(gemini_config)?;

    // 5. Run server
    Server::run(config, container).await?;

    Ok(())
}
