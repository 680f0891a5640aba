//! Carrier Pricing - shipping quote service
//!
//! Prices deliveries between two postcodes, optionally per vehicle and per
//! carrier, and serves the quotes over HTTP as JSON.

use std::sync::Arc;

use tokio::net::TcpListener;

mod api;
mod catalog;
mod config;
mod domain;
mod engine;
mod error;
mod logging;

use crate::api::build_router;
use crate::config::Config;
use crate::engine::QuoteEngine;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// The quote engine.
    pub engine: Arc<QuoteEngine>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file (if present)
    if let Err(e) = dotenvy::dotenv() {
        eprintln!("Note: No .env file loaded ({e})");
    }

    // Load configuration
    let config = Config::load().map_err(|e| anyhow::anyhow!("Configuration error: {}", e))?;

    // Initialize logging
    logging::init(config.log.format);

    tracing::info!("Starting Carrier Pricing v{}", env!("CARGO_PKG_VERSION"));

    tracing::info!(
        host = %config.server.host,
        port = %config.server.port,
        catalog_source = ?config.catalog.source,
        log_format = ?config.log.format,
        "Configuration loaded"
    );

    // The catalog is loaded once; a bad catalog stops startup
    let catalog = catalog::open(&config.catalog).map_err(|e| {
        tracing::error!(error = %e, "Failed to load carrier catalog");
        anyhow::anyhow!("Catalog error: {}", e)
    })?;

    tracing::info!(catalog = catalog.name(), "Carrier catalog ready");

    let state = AppState {
        engine: Arc::new(QuoteEngine::new(catalog)),
    };

    // Build router
    let app = build_router(state);

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;

    tracing::info!(address = %addr, "Server listening");
    tracing::info!("Swagger UI available at http://{}/swagger-ui/", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
