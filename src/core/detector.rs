//! Detector Bridge
//!
//! The on-chain detector is the authoritative signal source: a missing detector or a
//! failed read aborts the whole analysis.

use alloy_primitives::Address;
use tracing::{debug, error};

use crate::core::contracts::IHoneypotDetector;
use crate::core::probe::read;
use crate::models::config::NetworkProfile;
use crate::models::errors::{AppError, AppResult, ErrorCode};
use crate::models::types::DetectorSnapshot;
use crate::providers::reader::ChainReader;

impl From<IHoneypotDetector::TokenInfo> for DetectorSnapshot {
    fn from(info: IHoneypotDetector::TokenInfo) -> Self {
        Self {
            can_transfer: info.canTransfer,
            has_blacklist: info.hasBlacklist,
            has_pause_function: info.hasPauseFunction,
            has_owner: info.hasOwner,
            has_sell_restriction: info.hasSellRestriction,
            has_anti_whale: info.hasAntiWhale,
            liquidity: info.liquidity,
            has_liquidity: info.hasLiquidity,
            error: info.error,
        }
    }
}

pub async fn detect<R: ChainReader>(
    reader: &R,
    profile: &NetworkProfile,
    token: Address,
) -> AppResult<DetectorSnapshot> {
    let detector = profile.detector.ok_or_else(|| {
        AppError::detector_failed(format!(
            "No detector contract configured for {}",
            profile.key
        ))
    })?;

    let info = read(
        reader,
        detector,
        IHoneypotDetector::detectHoneypotCall {
            tokenAddress: token,
        },
    )
    .await
    .map_err(|e| {
        error!("❌ Detector {} failed for {}: {}", detector, token, e);
        AppError::with_source(
            ErrorCode::DetectorCallFailed,
            format!("Detector call failed: {}", e),
            e,
        )
    })?
    ._0;

    let snapshot = DetectorSnapshot::from(info);
    debug!("🛰️ Detector snapshot for {}: {:?}", token, snapshot);
    Ok(snapshot)
}
