mod api;
mod config;
mod setup;

use config::{app_config::AppConfig, settings::EnvSettings};
use setup::{dependency_injection::DependencyContainer, server::Server};

/// Reservations backend entry point
///
/// - config/: settings snapshot from `.env` + environment, server, CORS, security
/// - setup/: dependency injection and server setup
/// - api/: request context middleware, route handlers and DTOs
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize tracing with RUST_LOG env filter
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // 2. Load .env and snapshot the environment
    let settings = EnvSettings::load();

    // 3. Resolve configuration once
    let config = AppConfig::from_settings(&settings);

    // 4. Wire dependencies
    let container = DependencyContainer::new(config.database.clone());

    // 5. Run server
    Server::run(config, container).await?;

    Ok(())
}
