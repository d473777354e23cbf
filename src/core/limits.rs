//! Max transaction / wallet limit check

use alloy_primitives::{Address, U256};
use eyre::{eyre, Result};
use futures_util::FutureExt;
use tracing::{debug, warn};

use crate::core::contracts::IERC20Ext;
use crate::core::probe::{first_available, probe, read, Probe};
use crate::models::types::CheckResult;
use crate::providers::reader::ChainReader;
use crate::utils::constants::MIN_SAFE_TX_LIMIT_PERCENT;

/// Limit as a percentage of total supply
pub fn limit_percent(max_amount: U256, total_supply: U256) -> Result<f64> {
    if total_supply.is_zero() {
        return Err(eyre!("total supply is zero"));
    }
    let max: f64 = max_amount.to_string().parse()?;
    let supply: f64 = total_supply.to_string().parse()?;
    Ok(max / supply * 100.0)
}

pub fn assess(percent: f64) -> CheckResult {
    let result = if percent >= MIN_SAFE_TX_LIMIT_PERCENT {
        CheckResult::pass()
    } else {
        CheckResult::fail("Low maximum transaction limit")
    };
    result.with_value(percent)
}

pub async fn check_transaction_limit<R: ChainReader>(reader: &R, token: Address) -> CheckResult {
    let max_amount = first_available(vec![
        async move {
            probe(reader, token, IERC20Ext::maxTransactionAmountCall {})
                .await
                .map(|r| r._0)
        }
        .boxed(),
        async move {
            probe(reader, token, IERC20Ext::maxWalletSizeCall {})
                .await
                .map(|r| r._0)
        }
        .boxed(),
    ])
    .await;

    let max_amount = match max_amount {
        Probe::Found(amount) => amount,
        Probe::Absent => return CheckResult::pass_with("No transaction limits found"),
        Probe::Failed(e) => {
            warn!("⚠️ Transaction limit read failed for {}: {}", token, e);
            return CheckResult::unverified("transaction limits");
        }
    };

    match supply_share(reader, token, max_amount).await {
        Ok(percent) => {
            debug!("🚧 {} caps transactions at {:.4}% of supply", token, percent);
            assess(percent)
        }
        Err(e) => {
            warn!("⚠️ Transaction limit unverifiable for {}: {}", token, e);
            CheckResult::unverified("transaction limits")
        }
    }
}

async fn supply_share<R: ChainReader>(reader: &R, token: Address, max_amount: U256) -> Result<f64> {
    let total_supply = read(reader, token, IERC20Ext::totalSupplyCall {}).await?._0;
    limit_percent(max_amount, total_supply)
}
