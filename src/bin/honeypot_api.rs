//! Honeypot Radar API Server
//!
//! Usage:
//!   cargo run --bin honeypot_api
//!
//! Environment:
//!   PORT / HONEYPOT_API_PORT - Server port (default: 8080)
//!   HONEYPOT_API_HOST        - Server host (default: 0.0.0.0)
//!   RUST_LOG                 - Log level (default: info)
//!   plus every network override read by `EngineConfig::from_env`

use honeypot_radar::api::{create_router, handlers::AppState};
use honeypot_radar::utils::constants::{API_DEFAULT_PORT, APP_NAME, APP_VERSION};
use honeypot_radar::{EngineConfig, HoneypotEngine};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[tokio::main]
async fn main() -> eyre::Result<()> {
    dotenvy::dotenv().ok();

    FmtSubscriber::builder()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .compact()
        .init();

    let config = EngineConfig::from_env()?;
    for key in config.network_keys() {
        let profile = config.network(key)?;
        if profile.detector.is_none() {
            warn!("⚠️ {} has no detector configured; checks on it will fail", key);
        }
    }

    let state = Arc::new(AppState::new(HoneypotEngine::new(config)));
    let app = create_router(state);

    let host = std::env::var("HONEYPOT_API_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port: u16 = std::env::var("PORT")
        .or_else(|_| std::env::var("HONEYPOT_API_PORT"))
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(API_DEFAULT_PORT);

    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;

    info!("🚀 {} v{} API starting on http://{}", APP_NAME, APP_VERSION, addr);
    info!("Endpoints:");
    info!("  POST /v1/honeypot/check   - Full honeypot analysis");
    info!("  GET  /v1/networks         - Configured networks");
    info!("  GET  /v1/health           - Health check");

    let listener = TcpListener::bind(addr).await?;

    let shutdown_signal = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal)
        .await?;

    info!("🛑 {} API shutdown complete", APP_NAME);
    Ok(())
}
