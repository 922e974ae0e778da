//! UltraViab: Organ Viability Assessment API
//!
//! Main entry point for the HTTP gateway.

use std::sync::Arc;

use anyhow::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use ultraviab::adapters::http::{build_router, AppState};
use ultraviab::application::ScoringEngine;
use ultraviab::config::GatewayConfig;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting UltraViab API...");

    let config = GatewayConfig::from_env()?;
    let state = AppState::new(Arc::new(ScoringEngine::new()));
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    tracing::info!("Server listening on http://{}", config.addr);
    axum::serve(listener, app).await?;

    tracing::info!("UltraViab shutdown complete.");
    Ok(())
}
