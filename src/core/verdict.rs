//! Verdict Aggregator
//!
//! Merges the detector snapshot with the locally computed checks and applies the
//! honeypot rule. Pure: the same inputs always yield the same report.

use alloy_primitives::Address;

use crate::core::buy_tax::BuyTaxOutcome;
use crate::core::bytecode::ScanOutcome;
use crate::models::types::{AnalysisReport, CheckResult, DetectorSnapshot, TokenMetadata};

/// Honeypot rule, any one clause trips it:
/// transfer blocked without a detector error, blacklist together with pause,
/// sell restriction without liquidity, or no liquidity at all.
pub fn is_honeypot(d: &DetectorSnapshot) -> bool {
    (!d.can_transfer && d.error.is_empty())
        || (d.has_blacklist && d.has_pause_function)
        || (d.has_sell_restriction && !d.has_liquidity)
        || !d.has_liquidity
}

/// Results of every check computed off the detector
#[derive(Debug, Clone, PartialEq)]
pub struct LocalChecks {
    pub token_info: TokenMetadata,
    pub ownership: CheckResult,
    pub buy_tax: BuyTaxOutcome,
    pub sell_tax: CheckResult,
    pub pool_liquidity: CheckResult,
    pub bytecode: ScanOutcome,
    pub transaction_limit: CheckResult,
}

pub fn aggregate(
    network: &str,
    chain_id: u64,
    token: Address,
    detector: DetectorSnapshot,
    local: LocalChecks,
) -> AnalysisReport {
    let d = &detector;
    let liquidity = CheckResult::flag(d.has_liquidity, "Insufficient liquidity")
        .with_value(d.liquidity_value());

    AnalysisReport {
        network: network.to_string(),
        chain_id,
        token,
        token_info: local.token_info,
        can_transfer: CheckResult::flag(d.can_transfer, "Token cannot be transferred"),
        has_blacklist: CheckResult::flag(!d.has_blacklist, "Contract has blacklist functionality"),
        has_pause_function: CheckResult::flag(
            !d.has_pause_function,
            "Trading can be paused by owner",
        ),
        has_owner: CheckResult::flag(!d.has_owner, "Contract has an owner with special privileges"),
        has_sell_restriction: CheckResult::flag(
            !d.has_sell_restriction,
            "Token has sell restrictions",
        ),
        has_anti_whale: CheckResult::flag(!d.has_anti_whale, "Token has anti-whale mechanics"),
        liquidity,
        ownership: local.ownership,
        buy_tax: local.buy_tax.result,
        buy_tax_router: local.buy_tax.router,
        sell_tax: local.sell_tax,
        pool_liquidity: local.pool_liquidity,
        blacklist_scan: local.bytecode.blacklist,
        pause_scan: local.bytecode.pause,
        transaction_limit: local.transaction_limit,
        is_honeypot: is_honeypot(d),
        error: if d.error.is_empty() {
            None
        } else {
            Some(d.error.clone())
        },
        detector,
    }
}
