//! API Route Configuration

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower::limit::ConcurrencyLimitLayer;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{self, AppState};
use super::middleware::logging_middleware;
use crate::utils::constants::API_MAX_CONCURRENT_ANALYSES;

/// Create the API router with all routes and middleware
pub fn create_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Each analysis fans out into many chain reads; cap how many run at once
    let checks = Router::new()
        .route("/honeypot/check", post(handlers::check_honeypot))
        .layer(ConcurrencyLimitLayer::new(API_MAX_CONCURRENT_ANALYSES));

    let api_v1 = Router::new()
        .route("/health", get(handlers::health_check))
        .route("/networks", get(handlers::list_networks))
        .merge(checks);

    Router::new()
        .nest("/v1", api_v1)
        .route("/health", get(handlers::health_check))
        .with_state(state)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(middleware::from_fn(logging_middleware))
}
