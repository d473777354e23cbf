//! Router Tax Simulator
//!
//! Quotes a 1-unit native buy on every configured router and derives the implied tax
//! against the token's balance at the zero address. The lowest tax across routers is kept.
//!
//! Keeping the minimum reports the best case a buyer can reach; a token that taxes
//! differently per router is under-reported.

use alloy_primitives::aliases::U24;
use alloy_primitives::{Address, U160, U256};
use eyre::{eyre, Result};
use futures_util::future::join_all;
use tracing::{debug, warn};

use crate::core::contracts::{IERC20Ext, IQuoter, IUniswapV2Router, IUniswapV3Router};
use crate::core::probe::read;
use crate::models::config::NetworkProfile;
use crate::models::types::{CheckResult, RouterVersion};
use crate::providers::reader::ChainReader;
use crate::utils::constants::{
    quote_amount_in, MAX_SAFE_TAX_PERCENT, V3_QUOTE_FEE_TIER, WORST_CASE_TAX_PERCENT,
};

/// Simulated tax for one router
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RouterTax {
    pub router: RouterVersion,
    pub tax_percent: f64,
}

/// Buy-tax check output
#[derive(Debug, Clone, PartialEq)]
pub struct BuyTaxOutcome {
    pub result: CheckResult,
    pub router: Option<RouterVersion>,
}

/// `(quoted - reference) * 100 / quoted`, integer division truncating toward zero.
///
/// Negative when the reference exceeds the quote.
pub fn implied_tax_percent(quoted: U256, reference: U256) -> Result<f64> {
    if quoted.is_zero() {
        return Err(eyre!("router quoted zero output"));
    }
    let hundred = U256::from(100u64);
    let tax = if quoted >= reference {
        let pct = (quoted - reference).saturating_mul(hundred) / quoted;
        i64::try_from(pct).unwrap_or(i64::MAX)
    } else {
        let pct = (reference - quoted).saturating_mul(hundred) / quoted;
        i64::try_from(pct).map(|v| -v).unwrap_or(i64::MIN)
    };
    Ok(tax as f64)
}

/// Lowest tax across successful routers; ties keep the first seen
pub fn select_lowest(results: &[RouterTax]) -> Option<RouterTax> {
    results.iter().fold(None, |best: Option<RouterTax>, candidate| match best {
        Some(b) if b.tax_percent <= candidate.tax_percent => Some(b),
        _ => Some(*candidate),
    })
}

/// Turn the selection into a check result
pub fn assess(best: Option<RouterTax>) -> BuyTaxOutcome {
    match best {
        Some(best) => {
            let result = if best.tax_percent <= MAX_SAFE_TAX_PERCENT {
                CheckResult::pass()
            } else {
                CheckResult::fail(format!(
                    "High buy tax: {:.2}% ({})",
                    best.tax_percent, best.router
                ))
            };
            BuyTaxOutcome {
                result: result.with_value(best.tax_percent),
                router: Some(best.router),
            }
        }
        None => {
            debug!(
                "No router answered, buy tax stays at worst case {}%",
                WORST_CASE_TAX_PERCENT
            );
            BuyTaxOutcome {
                result: CheckResult::unverified("buy tax").with_value(0.0),
                router: None,
            }
        }
    }
}

/// Simulate on every configured router concurrently and keep the lowest tax
pub async fn check_buy_tax<R: ChainReader>(
    reader: &R,
    profile: &NetworkProfile,
    token: Address,
) -> BuyTaxOutcome {
    let simulations = profile.routers.iter().map(|(version, router)| async move {
        match simulate_router(reader, profile, *version, *router, token).await {
            Ok(tax_percent) => {
                debug!("💸 {} router tax: {}%", version, tax_percent);
                Some(RouterTax {
                    router: *version,
                    tax_percent,
                })
            }
            Err(e) => {
                warn!("⚠️ Failed to check tax with {} router: {}", version, e);
                None
            }
        }
    });

    let results: Vec<RouterTax> = join_all(simulations).await.into_iter().flatten().collect();
    assess(select_lowest(&results))
}

async fn simulate_router<R: ChainReader>(
    reader: &R,
    profile: &NetworkProfile,
    version: RouterVersion,
    router: Address,
    token: Address,
) -> Result<f64> {
    match version {
        RouterVersion::V2 => {
            let weth = read(reader, router, IUniswapV2Router::WETHCall {}).await?._0;
            let amounts = read(
                reader,
                router,
                IUniswapV2Router::getAmountsOutCall {
                    amountIn: quote_amount_in(),
                    path: vec![weth, token],
                },
            )
            .await?
            .amounts;
            let quoted = *amounts
                .get(1)
                .ok_or_else(|| eyre!("getAmountsOut returned {} amounts", amounts.len()))?;
            let reference = zero_address_balance(reader, token).await?;
            implied_tax_percent(quoted, reference)
        }
        RouterVersion::V3 => {
            let quoter = profile
                .quoter
                .ok_or_else(|| eyre!("no v3 quoter configured for {}", profile.key))?;
            let weth = read(reader, router, IUniswapV3Router::WETH9Call {}).await?._0;
            let quoted = read(
                reader,
                quoter,
                IQuoter::quoteExactInputSingleCall {
                    tokenIn: weth,
                    tokenOut: token,
                    fee: U24::from(V3_QUOTE_FEE_TIER),
                    amountIn: quote_amount_in(),
                    sqrtPriceLimitX96: U160::ZERO,
                },
            )
            .await?
            .amountOut;
            let reference = zero_address_balance(reader, token).await?;
            implied_tax_percent(quoted, reference)
        }
        RouterVersion::V4 => {
            warn!("v4 buy simulation not implemented, reporting 0% (unverified)");
            Ok(0.0)
        }
    }
}

async fn zero_address_balance<R: ChainReader>(reader: &R, token: Address) -> Result<U256> {
    Ok(read(
        reader,
        token,
        IERC20Ext::balanceOfCall {
            account: Address::ZERO,
        },
    )
    .await?
    ._0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tax(router: RouterVersion, tax_percent: f64) -> RouterTax {
        RouterTax { router, tax_percent }
    }

    #[test]
    fn test_implied_tax() {
        assert_eq!(
            implied_tax_percent(U256::from(100u64), U256::from(85u64)).unwrap(),
            15.0
        );
        assert_eq!(
            implied_tax_percent(U256::from(1000u64), U256::ZERO).unwrap(),
            100.0
        );
        assert_eq!(
            implied_tax_percent(U256::from(100u64), U256::from(150u64)).unwrap(),
            -50.0
        );
        assert!(implied_tax_percent(U256::ZERO, U256::from(1u64)).is_err());
    }

    #[test]
    fn test_implied_tax_truncates() {
        // 1/3 of 100 = 33.33.. -> 33
        assert_eq!(
            implied_tax_percent(U256::from(3u64), U256::from(2u64)).unwrap(),
            33.0
        );
    }

    #[test]
    fn test_select_lowest() {
        let best = select_lowest(&[tax(RouterVersion::V2, 15.0), tax(RouterVersion::V3, 4.0)]);
        assert_eq!(best, Some(tax(RouterVersion::V3, 4.0)));
        assert_eq!(select_lowest(&[]), None);
        let tie = select_lowest(&[tax(RouterVersion::V2, 5.0), tax(RouterVersion::V3, 5.0)]);
        assert_eq!(tie.unwrap().router, RouterVersion::V2);
    }

    #[test]
    fn test_assess() {
        let safe = assess(Some(tax(RouterVersion::V3, 4.0)));
        assert!(safe.result.safe);
        assert_eq!(safe.result.value, Some(4.0));
        assert_eq!(safe.router, Some(RouterVersion::V3));

        let high = assess(Some(tax(RouterVersion::V2, 15.0)));
        assert!(!high.result.safe);
        assert_eq!(high.result.message, "High buy tax: 15.00% (v2)");

        let boundary = assess(Some(tax(RouterVersion::V2, 10.0)));
        assert!(boundary.result.safe);
    }

    #[test]
    fn test_assess_without_routers() {
        let outcome = assess(None);
        assert!(!outcome.result.safe);
        assert_eq!(outcome.result.message, "Unable to verify buy tax");
        assert_eq!(outcome.result.value, Some(0.0));
        assert_eq!(outcome.router, None);
    }
}
