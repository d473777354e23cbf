//! API Request/Response Types

use serde::{Deserialize, Serialize};

use crate::models::config::NetworkProfile;
use crate::models::errors::AppError;

/// API Response wrapper
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ApiError>,
    pub latency_ms: f64,
    pub timestamp: i64,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(data: T, latency_ms: f64) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            latency_ms,
            timestamp: chrono::Utc::now().timestamp(),
        }
    }
}

impl ApiResponse<()> {
    pub fn error(error: ApiError, latency_ms: f64) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error),
            latency_ms,
            timestamp: chrono::Utc::now().timestamp(),
        }
    }
}

/// API Error
#[derive(Debug, Serialize)]
pub struct ApiError {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            code: "BAD_REQUEST".to_string(),
            message: message.into(),
            details: None,
        }
    }
}

impl From<&AppError> for ApiError {
    fn from(err: &AppError) -> Self {
        Self {
            code: err.code_str().to_string(),
            message: err.message.clone(),
            details: err.code.is_retryable().then(|| "retryable".to_string()),
        }
    }
}

// ============================================
// Honeypot Check
// ============================================

#[derive(Debug, Deserialize)]
pub struct HoneypotCheckRequest {
    pub network: String,
    pub token_address: String,
}

// ============================================
// Networks
// ============================================

#[derive(Debug, Serialize)]
pub struct NetworkInfo {
    pub key: String,
    pub name: String,
    pub chain_id: u64,
    pub native_symbol: String,
    pub routers: Vec<String>,
    pub has_detector: bool,
}

impl From<&NetworkProfile> for NetworkInfo {
    fn from(profile: &NetworkProfile) -> Self {
        Self {
            key: profile.key.clone(),
            name: profile.name.clone(),
            chain_id: profile.chain_id,
            native_symbol: profile.native_symbol.clone(),
            routers: profile.routers.keys().map(|v| v.to_string()).collect(),
            has_detector: profile.detector.is_some(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct NetworksData {
    pub networks: Vec<NetworkInfo>,
}

// ============================================
// Health
// ============================================

#[derive(Debug, Serialize)]
pub struct HealthData {
    pub status: String,
    pub version: String,
    pub uptime_seconds: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::errors::ErrorCode;

    #[test]
    fn test_api_error_from_app_error() {
        let err = AppError::not_a_contract("0xabc");
        let api: ApiError = (&err).into();
        assert_eq!(api.code, "NOT_A_CONTRACT");
        assert!(api.details.is_none());

        let err = AppError::new(ErrorCode::EndpointUnavailable, "down");
        let api: ApiError = (&err).into();
        assert_eq!(api.details.as_deref(), Some("retryable"));
    }

    #[test]
    fn test_request_shape() {
        let req: HoneypotCheckRequest = serde_json::from_str(
            r#"{"network":"unichainSepolia","token_address":"0x0000000000000000000000000000000000000001"}"#,
        )
        .unwrap();
        assert_eq!(req.network, "unichainSepolia");
    }
}
