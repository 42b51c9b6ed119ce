use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use medical_journey_backend::config::AppConfig;
use medical_journey_backend::{create_router, initialize_backend};

#[tokio::main]
async fn main() -> Result<()> {
    let (config, config_source) = AppConfig::load()?;

    // RUST_LOG takes precedence over the configured filter
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_filter)),
        )
        .init();

    match &config_source {
        Some(path) => info!("Loaded configuration from {:?}", path),
        None => info!("No config file set, using defaults and environment"),
    }

    let app_state = initialize_backend(&config).await?;
    let app = create_router(app_state, &config)?;

    let addr = config.socket_addr()?;
    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
