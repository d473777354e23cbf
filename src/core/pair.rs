//! Pair Locator

use alloy_primitives::Address;
use tracing::debug;

use crate::core::contracts::IUniswapV2Factory;
use crate::core::probe::probe;
use crate::providers::reader::{ChainReader, ReadError};

/// Find the (token, wrapped native) pool through `factory`.
///
/// Pools are not keyed canonically across deployments, so both argument orders are tried.
/// A zero address or a missing `getPair` counts as "no pair for this order".
pub async fn locate_pair<R: ChainReader>(
    reader: &R,
    factory: Address,
    token: Address,
    wrapped_native: Address,
) -> Result<Option<Address>, ReadError> {
    for (token_a, token_b) in [(token, wrapped_native), (wrapped_native, token)] {
        let pair = probe(
            reader,
            factory,
            IUniswapV2Factory::getPairCall {
                tokenA: token_a,
                tokenB: token_b,
            },
        )
        .await
        .into_option()?
        .map(|r| r.pair)
        .filter(|pair| !pair.is_zero());

        if let Some(pair) = pair {
            debug!("🔎 Found pair {} via getPair({}, {})", pair, token_a, token_b);
            return Ok(Some(pair));
        }
    }

    debug!("🔎 No pair for {} against {}", token, wrapped_native);
    Ok(None)
}
