//! API Request Handlers

use axum::{
    extract::{rejection::JsonRejection, Json, State},
    http::StatusCode,
};
use std::sync::Arc;
use std::time::Instant;
use tracing::{info, warn};

use super::types::*;
use crate::core::engine::HoneypotEngine;
use crate::models::errors::AppError;
use crate::models::types::AnalysisReport;
use crate::utils::constants::APP_VERSION;

/// Shared application state
pub struct AppState {
    pub engine: HoneypotEngine,
    pub start_time: Instant,
}

impl AppState {
    pub fn new(engine: HoneypotEngine) -> Self {
        Self {
            engine,
            start_time: Instant::now(),
        }
    }

    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}

type ApiFailure = (StatusCode, Json<ApiResponse<()>>);

fn elapsed_ms(start: Instant) -> f64 {
    start.elapsed().as_secs_f64() * 1000.0
}

fn failure(err: &AppError, start: Instant) -> ApiFailure {
    let status =
        StatusCode::from_u16(err.code.http_status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (
        status,
        Json(ApiResponse::error(ApiError::from(err), elapsed_ms(start))),
    )
}

// ============================================
// Health Check
// ============================================

pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<ApiResponse<HealthData>> {
    let start = Instant::now();

    let data = HealthData {
        status: "healthy".to_string(),
        version: APP_VERSION.to_string(),
        uptime_seconds: state.uptime_seconds(),
    };

    Json(ApiResponse::success(data, elapsed_ms(start)))
}

// ============================================
// Networks
// ============================================

pub async fn list_networks(State(state): State<Arc<AppState>>) -> Json<ApiResponse<NetworksData>> {
    let start = Instant::now();
    let config = state.engine.config();

    let networks = config
        .network_keys()
        .into_iter()
        .filter_map(|key| config.networks.get(key))
        .map(NetworkInfo::from)
        .collect();

    Json(ApiResponse::success(NetworksData { networks }, elapsed_ms(start)))
}

// ============================================
// Honeypot Check
// ============================================

pub async fn check_honeypot(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<HoneypotCheckRequest>, JsonRejection>,
) -> Result<Json<ApiResponse<AnalysisReport>>, ApiFailure> {
    let start = Instant::now();

    let bad_request = |message: String| {
        (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::error(
                ApiError::bad_request(message),
                elapsed_ms(start),
            )),
        )
    };

    let Json(req) = payload.map_err(|rejection| bad_request(rejection.body_text()))?;

    if req.network.trim().is_empty() {
        return Err(bad_request("network is required".to_string()));
    }

    match state.engine.analyze(&req.network, &req.token_address).await {
        Ok(report) => {
            info!(
                network = %report.network,
                token = %report.token,
                is_honeypot = report.is_honeypot,
                latency_ms = %start.elapsed().as_millis(),
                "Honeypot check completed"
            );
            Ok(Json(ApiResponse::success(report, elapsed_ms(start))))
        }
        Err(err) => {
            warn!(
                code = err.code_str(),
                network = %req.network,
                token = %req.token_address,
                "Honeypot check failed: {}",
                err.message
            );
            Err(failure(&err, start))
        }
    }
}
