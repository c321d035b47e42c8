use std::sync::Arc;

use anyhow::Context;
use availability_engine::InMemoryStore;
use availability_server::{
    config::ServerConfig, create_router, seed::load_seed_file, shutdown_signal, state::AppState,
};
use dotenv::dotenv;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("{}=info,tower_http=info", env!("CARGO_CRATE_NAME")).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::from_env().context("Failed to load configuration")?;
    info!(environment = config.environment.as_str(), "Configuration loaded");

    let store = match &config.seed_file {
        Some(path) => load_seed_file(path)?,
        None => {
            info!("SEED_FILE not set, starting with an empty store");
            InMemoryStore::new()
        }
    };

    let addr = config.server_addr();
    let app = create_router(AppState::new(Arc::new(store), config));

    let listener = TcpListener::bind(addr)
        .await
        .context("Failed to bind to address")?;
    info!("Listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Failed to serve application")?;

    info!("Server shut down");
    Ok(())
}
