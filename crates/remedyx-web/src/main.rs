//! Remedyx Web Server
//!
//! Run with: cargo run -p remedyx-web

use tracing::info;
use tracing_subscriber::EnvFilter;

use remedyx_config::{Config, CONFIG_ENV, DEFAULT_CONFIG_PATH};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load()?;

    // Initialise structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.logging.filter)),
        )
        .init();

    info!("Starting Remedyx Web Server...");
    info!("Version: {}", env!("CARGO_PKG_VERSION"));
    match Config::resolve_path(std::env::var(CONFIG_ENV).ok()) {
        Some(path) => info!("Configuration loaded from {}", path.display()),
        None => info!("{} not found, using defaults", DEFAULT_CONFIG_PATH),
    }
    match config.investigator.seed {
        Some(seed) => info!("Efficacy draws seeded with {}", seed),
        None => info!("Efficacy draws seeded from entropy"),
    }

    let state = remedyx_web::state::AppState::from_config(&config);
    let app = remedyx_web::router::build_router(state);

    let listener = tokio::net::TcpListener::bind(config.server.listen_addr()).await?;
    info!("Server listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
