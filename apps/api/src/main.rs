mod analysis;
mod config;
mod errors;
mod export;
mod extraction;
mod llm_client;
mod models;
mod narrative;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::http::HeaderValue;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::llm_client::{ChatCompletion, LlmClient, LlmError};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Career Design API v{}", env!("CARGO_PKG_VERSION"));

    // Narrative backend is optional; decided once here.
    let narrator: Option<Arc<dyn ChatCompletion>> = match LlmClient::from_config(&config.narrative) {
        Ok(client) => {
            info!("Narrative client initialized (model: {})", client.model());
            Some(Arc::new(client))
        }
        Err(LlmError::NotConfigured) => {
            warn!("NARRATIVE_API_KEY not set; /api/narrative will return 503");
            None
        }
        Err(e) => return Err(e).context("Failed to build narrative client"),
    };

    let cors = build_cors(&config.cors_origins)?;

    let state = AppState {
        config: config.clone(),
        narrator,
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// CORS for the configured front-end origins.
fn build_cors(origins: &[String]) -> Result<CorsLayer> {
    let origins = origins
        .iter()
        .map(|o| {
            HeaderValue::from_str(o).with_context(|| format!("Invalid CORS origin '{o}'"))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(Any)
        .allow_headers(Any))
}
