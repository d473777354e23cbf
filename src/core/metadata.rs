//! Token Metadata

use alloy_primitives::Address;
use tracing::debug;

use crate::core::contracts::IERC20Ext;
use crate::core::probe::probe;
use crate::models::types::TokenMetadata;
use crate::providers::reader::ChainReader;

/// Standard ERC20 reads, concurrently; any that fail are left empty
pub async fn read_metadata<R: ChainReader>(reader: &R, token: Address) -> TokenMetadata {
    let (name, symbol, decimals, total_supply) = tokio::join!(
        probe(reader, token, IERC20Ext::nameCall {}),
        probe(reader, token, IERC20Ext::symbolCall {}),
        probe(reader, token, IERC20Ext::decimalsCall {}),
        probe(reader, token, IERC20Ext::totalSupplyCall {}),
    );

    let metadata = TokenMetadata {
        name: name.into_option().ok().flatten().map(|r| r._0),
        symbol: symbol.into_option().ok().flatten().map(|r| r._0),
        decimals: decimals.into_option().ok().flatten().map(|r| r._0),
        total_supply: total_supply.into_option().ok().flatten().map(|r| r._0),
    };
    debug!(
        "🏷️ {}: name={:?} symbol={:?} decimals={:?}",
        token, metadata.name, metadata.symbol, metadata.decimals
    );
    metadata
}
