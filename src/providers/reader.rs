//! Read-only chain access
//!
//! Every check talks to the chain through `ChainReader`, so the engine can be driven
//! by a live JSON-RPC endpoint or by an in-memory fake in tests.

use alloy_primitives::{Address, Bytes};
use std::fmt;
use std::future::Future;

/// Why a chain read did not produce data
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadError {
    /// The call executed and reverted (function missing, require failed, ...)
    Reverted(String),
    /// Node answered with a JSON-RPC error that is not a revert
    Rpc { code: i64, message: String },
    /// HTTP / connection level failure
    Transport(String),
    /// Still rate limited after all retry attempts
    RateLimited,
    /// Deadline exceeded
    Timeout,
    /// Return data present but not decodable as the expected type
    Decode(String),
}

impl ReadError {
    /// A revert means "this function is not there" for optional extension reads
    pub fn is_revert(&self) -> bool {
        matches!(self, ReadError::Reverted(_))
    }
}

impl fmt::Display for ReadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReadError::Reverted(reason) if reason.is_empty() => write!(f, "execution reverted"),
            ReadError::Reverted(reason) => write!(f, "execution reverted: {}", reason),
            ReadError::Rpc { code, message } => write!(f, "RPC error: {} (code: {})", message, code),
            ReadError::Transport(msg) => write!(f, "Request failed: {}", msg),
            ReadError::RateLimited => write!(f, "Rate limited (HTTP 429)"),
            ReadError::Timeout => write!(f, "Connection timeout"),
            ReadError::Decode(msg) => write!(f, "Failed to decode return data: {}", msg),
        }
    }
}

impl std::error::Error for ReadError {}

/// Minimal read-only view of an EVM chain.
///
/// Implementations must be safe to query concurrently from several checks of one analysis.
pub trait ChainReader: Send + Sync {
    /// `eth_chainId`
    fn chain_id(&self) -> impl Future<Output = Result<u64, ReadError>> + Send;

    /// `eth_getCode` at the latest block
    fn get_code(&self, address: Address) -> impl Future<Output = Result<Bytes, ReadError>> + Send;

    /// `eth_call` at the latest block, raw return data
    fn call(
        &self,
        to: Address,
        data: Bytes,
    ) -> impl Future<Output = Result<Bytes, ReadError>> + Send;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_revert_classification() {
        assert!(ReadError::Reverted(String::new()).is_revert());
        assert!(!ReadError::Timeout.is_revert());
        assert!(!ReadError::Rpc {
            code: -32000,
            message: "header not found".into()
        }
        .is_revert());
    }

    #[test]
    fn test_display() {
        assert_eq!(ReadError::Timeout.to_string(), "Connection timeout");
        assert_eq!(
            ReadError::Reverted("Ownable: caller".into()).to_string(),
            "execution reverted: Ownable: caller"
        );
    }
}
