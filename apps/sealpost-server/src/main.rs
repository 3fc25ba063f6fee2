//! Sealpost service entry point.

mod api;
mod config;
mod error;
mod state;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("sealpost_server=info,tower_http=info")),
        )
        .init();

    let config = Config::from_env()?;
    let addr = config.addr;
    let state = AppState::new(config.sealing_key, config.opening_key);
    let app = api::router(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Sealpost listening on http://{addr} (docs at /docs)");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    // Best effort; if signal handling fails we just run until killed.
    let _ = tokio::signal::ctrl_c().await;
    info!("shutdown signal received");
}
