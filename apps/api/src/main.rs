mod assistant;
mod catalog;
mod config;
mod errors;
mod extraction;
mod llm_client;
mod localization;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::assistant::JobAssistant;
use crate::config::Config;
use crate::llm_client::Backend;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed numeric env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Job Assistant API v{}", env!("CARGO_PKG_VERSION"));

    // Missing credentials only disable a backend; requests fall back or fail per call.
    for backend in Backend::ALL {
        if config.is_configured(backend) {
            info!("{backend} backend configured");
        } else {
            warn!("{backend} backend has no API key and is unavailable");
        }
    }

    let assistant = JobAssistant::from_config(&config).context("failed to build LLM clients")?;
    info!(
        "Backend attempt timeout: {}s, upload limit: {} bytes",
        config.backend_timeout.as_secs(),
        config.max_upload_bytes
    );

    // Build app state
    let state = AppState {
        assistant: Arc::new(assistant),
        config: config.clone(),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
