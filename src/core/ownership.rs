//! Ownership Inspector

use alloy_primitives::Address;
use futures_util::FutureExt;
use tracing::{debug, warn};

use crate::core::contracts::IERC20Ext;
use crate::core::probe::{first_available, probe, Probe};
use crate::models::types::CheckResult;
use crate::providers::reader::ChainReader;

/// Classify the outcome of the owner probes.
///
/// Renounced means exactly the zero address. No accessor at all is treated as safe.
pub fn assess(owner: Probe<Address>) -> CheckResult {
    match owner {
        Probe::Found(owner) if owner.is_zero() => CheckResult::pass(),
        Probe::Found(_) => CheckResult::fail("Contract ownership not renounced"),
        Probe::Absent => CheckResult::pass_with("No owner function found"),
        Probe::Failed(_) => CheckResult::unverified("ownership"),
    }
}

/// `owner()` then `getOwner()`
pub async fn read_owner<R: ChainReader>(reader: &R, token: Address) -> Probe<Address> {
    first_available(vec![
        async move { probe(reader, token, IERC20Ext::ownerCall {}).await.map(|r| r._0) }.boxed(),
        async move {
            probe(reader, token, IERC20Ext::getOwnerCall {})
                .await
                .map(|r| r._0)
        }
        .boxed(),
    ])
    .await
}

pub async fn check_ownership<R: ChainReader>(reader: &R, token: Address) -> CheckResult {
    let owner = read_owner(reader, token).await;
    match &owner {
        Probe::Found(addr) => debug!("👤 Owner of {}: {}", token, addr),
        Probe::Absent => debug!("👤 {} exposes no owner accessor", token),
        Probe::Failed(e) => warn!("⚠️ Owner read failed for {}: {}", token, e),
    }
    assess(owner)
}
