//! Sell Tax Checker

use alloy_primitives::{Address, Bytes, U256};
use tracing::{debug, warn};

use crate::core::contracts::IERC20Ext;
use crate::core::probe::{probe, Probe};
use crate::models::types::CheckResult;
use crate::providers::reader::ChainReader;
use crate::utils::constants::{MAX_SAFE_TAX_PERCENT, WORST_CASE_TAX_PERCENT};

/// `sellFee()` is in basis-point-like hundredths of a percent
pub fn fee_to_percent(fee: U256) -> f64 {
    let raw: u128 = fee.try_into().unwrap_or(u128::MAX);
    raw as f64 / 100.0
}

/// Fee heuristic over bytecode for tokens without a `sellFee()` accessor.
///
/// Always 0: no pattern is implemented, so a missing accessor is not evidence of a zero fee.
pub fn estimate_fee_from_bytecode(_code: &Bytes) -> f64 {
    0.0
}

pub fn assess(tax_percent: f64) -> CheckResult {
    let result = if tax_percent <= MAX_SAFE_TAX_PERCENT {
        CheckResult::pass()
    } else {
        CheckResult::fail(format!("High sell tax: {}%", tax_percent))
    };
    result.with_value(tax_percent)
}

pub async fn check_sell_tax<R: ChainReader>(reader: &R, token: Address) -> CheckResult {
    match probe(reader, token, IERC20Ext::sellFeeCall {}).await {
        Probe::Found(fee) => assess(fee_to_percent(fee._0)),
        Probe::Absent => {
            debug!("No sellFee() on {}, using bytecode fallback", token);
            match reader.get_code(token).await {
                Ok(code) => assess(estimate_fee_from_bytecode(&code)),
                Err(e) => {
                    warn!("⚠️ Sell tax unverifiable for {}: {}", token, e);
                    CheckResult::unverified("sell tax").with_value(WORST_CASE_TAX_PERCENT)
                }
            }
        }
        Probe::Failed(e) => {
            warn!("⚠️ sellFee() read failed for {}: {}", token, e);
            CheckResult::unverified("sell tax").with_value(WORST_CASE_TAX_PERCENT)
        }
    }
}
