use std::net::SocketAddr;

use axum::Router;
use common::utils::logging::{init_logging, LogFormat};
use configs::AppConfig;
use dotenvy::dotenv;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::routes;
use crate::state::AppState;

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Load `.env`, then the config file (or environment fallback).
pub fn load_config() -> anyhow::Result<AppConfig> {
    dotenv().ok();
    AppConfig::load_and_validate()
}

/// Initialize logging from the `[logging]` section.
pub fn init_logging_from(cfg: &AppConfig) {
    let format = LogFormat::parse(&cfg.logging.format).unwrap_or_default();
    init_logging(format, cfg.logging.filter.as_deref());
}

/// Build the application with fresh in-memory stores.
pub fn build_app() -> Router {
    routes::build_router(AppState::in_memory(), build_cors())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "cannot listen for ctrl-c; running until killed");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}

/// Public entry: build the app and run the HTTP server until Ctrl-C.
pub async fn run(cfg: AppConfig) -> anyhow::Result<()> {
    init_logging_from(&cfg);

    let app = build_app();
    let listener = tokio::net::TcpListener::bind(cfg.bind_addr()).await?;
    let addr: SocketAddr = listener.local_addr()?;
    info!(%addr, "starting warehouse server");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("server stopped");
    Ok(())
}
