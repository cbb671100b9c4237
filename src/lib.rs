pub mod api;
pub mod clinic;
pub mod config;
pub mod core_state;
pub mod db;
pub mod models;

use std::sync::Arc;

use thiserror::Error;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Error)]
pub enum RunError {
    #[error(transparent)]
    Config(#[from] config::ConfigError),
    #[error(transparent)]
    Core(#[from] core_state::CoreError),
    #[error(transparent)]
    Server(#[from] api::ServerError),
}

/// Start the HTTP backend and serve until Ctrl-C.
pub async fn run() -> Result<(), RunError> {
    // Missing .env is fine; the process environment still applies.
    let _ = dotenvy::dotenv();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);

    let cfg = config::ServerConfig::from_env()?;
    let core = Arc::new(core_state::CoreState::new(cfg.db_path));
    core.initialize()?;

    let server = api::start_api_server(core, cfg.bind_addr).await?;
    tracing::info!(addr = %server.local_addr(), "Listening");

    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Cannot listen for shutdown signal: {e}");
    }

    server.stop().await?;
    Ok(())
}
