//! Centralized Error Handling Module
//!
//! Every fatal outcome of an analysis carries a unique, stable error code so callers
//! can tell "network unreachable" from "not a contract" from "not a valid token".
//!
//! Non-fatal check failures never reach this type; they are folded into the report
//! as unsafe `CheckResult`s (see `ErrorCode::CheckDegraded`).

use std::fmt;

/// Application-wide error type
#[derive(Debug)]
pub struct AppError {
    /// Unique error code for logging/monitoring
    pub code: ErrorCode,
    /// Human-readable message
    pub message: String,
    /// Optional underlying error
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new AppError
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Create AppError with source error
    pub fn with_source(
        code: ErrorCode,
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            code,
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Get error code as string (for logging)
    pub fn code_str(&self) -> &'static str {
        self.code.as_str()
    }

    /// Is this one of the analysis-aborting categories?
    pub fn is_fatal(&self) -> bool {
        self.code.is_fatal()
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code.as_str(), self.message)
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}

/// Unique error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// No RPC endpoint answered in time with the expected chain id
    EndpointUnavailable,
    /// Target address has no deployed code
    NotAContract,
    /// The required detector contract read reverted or errored
    DetectorCallFailed,
    /// An optional check failed internally (never surfaced as a fatal error)
    CheckDegraded,
    /// Malformed address supplied by the caller
    InvalidInput,
    /// Network key is not configured
    UnsupportedNetwork,
    /// Invalid configuration value (env override that does not parse)
    ConfigInvalidValue,
}

impl ErrorCode {
    /// Get string representation of error code
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::EndpointUnavailable => "ENDPOINT_UNAVAILABLE",
            Self::NotAContract => "NOT_A_CONTRACT",
            Self::DetectorCallFailed => "DETECTOR_CALL_FAILED",
            Self::CheckDegraded => "CHECK_DEGRADED",
            Self::InvalidInput => "INVALID_INPUT",
            Self::UnsupportedNetwork => "UNSUPPORTED_NETWORK",
            Self::ConfigInvalidValue => "CFG_INVALID_VALUE",
        }
    }

    /// Get HTTP status code for API responses
    pub fn http_status(&self) -> u16 {
        match self {
            Self::InvalidInput | Self::UnsupportedNetwork => 400,
            Self::NotAContract => 422,
            Self::EndpointUnavailable => 503,
            Self::DetectorCallFailed => 502,
            _ => 500,
        }
    }

    /// Check if error is worth retrying later
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::EndpointUnavailable | Self::DetectorCallFailed)
    }

    /// Fatal categories abort the analysis; `CheckDegraded` never does
    pub fn is_fatal(&self) -> bool {
        !matches!(self, Self::CheckDegraded)
    }
}

// ============================================
// Convenience constructors
// ============================================

impl AppError {
    /// All endpoints failed; `last_error` is the final underlying failure
    pub fn endpoint_unavailable(network: &str, last_error: impl fmt::Display) -> Self {
        Self::new(
            ErrorCode::EndpointUnavailable,
            format!(
                "Unable to connect to {}. Please try again later. {}",
                network, last_error
            ),
        )
    }

    /// Target has no code
    pub fn not_a_contract(address: impl fmt::Display) -> Self {
        Self::new(
            ErrorCode::NotAContract,
            format!("Not a contract address: {}", address),
        )
    }

    /// Detector read failed
    pub fn detector_failed(msg: impl Into<String>) -> Self {
        Self::new(ErrorCode::DetectorCallFailed, msg)
    }

    /// Invalid caller input
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, msg)
    }

    /// Unknown network key
    pub fn unsupported_network(network: &str) -> Self {
        Self::new(
            ErrorCode::UnsupportedNetwork,
            format!("Unsupported network: {}", network),
        )
    }

    /// Bad configuration value
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigInvalidValue, msg)
    }
}

// ============================================
// Result type alias
// ============================================

/// Application Result type
pub type AppResult<T> = Result<T, AppError>;
