//! Contract Presence Guard

use alloy_primitives::Address;
use tracing::{debug, warn};

use crate::models::errors::{AppError, AppResult, ErrorCode};
use crate::providers::reader::ChainReader;

/// Fail with `NotAContract` unless `target` has deployed code.
///
/// Must complete before any other read is issued for the target.
pub async fn ensure_contract<R: ChainReader>(reader: &R, target: Address) -> AppResult<usize> {
    let code = reader.get_code(target).await.map_err(|e| {
        AppError::with_source(
            ErrorCode::EndpointUnavailable,
            format!("Failed to read code at {}: {}", target, e),
            e,
        )
    })?;

    if code.is_empty() {
        warn!("🚫 {} has no code", target);
        return Err(AppError::not_a_contract(target));
    }

    debug!("📦 {} has {} bytes of code", target, code.len());
    Ok(code.len())
}
