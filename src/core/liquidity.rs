//! Liquidity Assessor
//!
//! Reads the token-side reserve of the (token, wrapped native) pool and converts it to
//! whole token units.

use alloy_primitives::{Address, U256};
use eyre::Result;
use tracing::{debug, warn};

use crate::core::contracts::{IERC20Ext, IUniswapV2Pair};
use crate::core::pair::locate_pair;
use crate::core::probe::read;
use crate::models::config::NetworkProfile;
use crate::models::types::CheckResult;
use crate::providers::reader::ChainReader;
use crate::utils::constants::{to_token_units, MIN_SAFE_LIQUIDITY_UNITS};

/// Pick the reserve that belongs to `token`
pub fn token_reserve(token: Address, token0: Address, reserve0: U256, reserve1: U256) -> U256 {
    // Address equality is over raw bytes, so checksum casing never matters
    if token0 == token {
        reserve0
    } else {
        reserve1
    }
}

pub fn assess(units: f64) -> CheckResult {
    if units >= MIN_SAFE_LIQUIDITY_UNITS {
        CheckResult::pass().with_value(units)
    } else {
        CheckResult::fail("Low liquidity").with_value(units)
    }
}

pub async fn check_liquidity<R: ChainReader>(
    reader: &R,
    profile: &NetworkProfile,
    token: Address,
) -> CheckResult {
    match pool_units(reader, profile, token).await {
        Ok(Some(units)) => assess(units),
        Ok(None) => {
            debug!("No liquidity pool found for {}", token);
            CheckResult::fail("No liquidity pool found").with_value(0.0)
        }
        Err(e) => {
            warn!("⚠️ Error checking liquidity for {}: {}", token, e);
            CheckResult::unverified("liquidity").with_value(0.0)
        }
    }
}

/// Token-side reserve in whole units, `None` without a pool
async fn pool_units<R: ChainReader>(
    reader: &R,
    profile: &NetworkProfile,
    token: Address,
) -> Result<Option<f64>> {
    let Some(pair) = locate_pair(reader, profile.factory, token, profile.wrapped_native).await?
    else {
        return Ok(None);
    };

    let token0 = read(reader, pair, IUniswapV2Pair::token0Call {}).await?._0;
    let reserves = read(reader, pair, IUniswapV2Pair::getReservesCall {}).await?;
    let decimals = read(reader, token, IERC20Ext::decimalsCall {}).await?._0;

    let reserve = token_reserve(
        token,
        token0,
        U256::from(reserves.reserve0),
        U256::from(reserves.reserve1),
    );
    let units = to_token_units(reserve, decimals);
    debug!(
        "💧 Pair {} holds {} units of {} (decimals {})",
        pair, units, token, decimals
    );
    Ok(Some(units))
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::address;

    #[test]
    fn test_token_reserve_selection() {
        let token = address!("1111111111111111111111111111111111111111");
        let other = address!("2222222222222222222222222222222222222222");
        let r0 = U256::from(5u64);
        let r1 = U256::from(9u64);
        assert_eq!(token_reserve(token, token, r0, r1), r0);
        assert_eq!(token_reserve(token, other, r0, r1), r1);
    }

    #[test]
    fn test_assess() {
        assert!(assess(1000.0).safe);
        let low = assess(0.5);
        assert!(!low.safe);
        assert_eq!(low.message, "Low liquidity");
        assert_eq!(low.value, Some(0.5));
    }
}
