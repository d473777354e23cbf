//! Endpoint resolution
//!
//! Walks a network's RPC list once, in order, and keeps the first endpoint that answers
//! `eth_chainId` within the deadline with the expected id.

use std::time::Duration;
use tracing::{info, warn};

use crate::models::config::NetworkProfile;
use crate::models::errors::{AppError, AppResult};
use crate::providers::reader::ChainReader;
use crate::providers::rpc::{mask_url, RpcConnection};

/// A reader bound to a verified chain id
#[derive(Debug, Clone)]
pub struct Connection<R> {
    pub reader: R,
    pub chain_id: u64,
    /// Masked URL of the accepted endpoint
    pub endpoint: String,
}

/// Resolve a live JSON-RPC connection for `profile`
pub async fn resolve_rpc(
    profile: &NetworkProfile,
    endpoint_timeout: Duration,
    read_timeout: Duration,
) -> AppResult<Connection<RpcConnection>> {
    resolve_endpoint(profile, endpoint_timeout, |url| {
        RpcConnection::new(url, read_timeout)
    })
    .await
}

/// Resolve with a caller-supplied connector (one call per candidate URL)
pub async fn resolve_endpoint<R, F>(
    profile: &NetworkProfile,
    endpoint_timeout: Duration,
    connect: F,
) -> AppResult<Connection<R>>
where
    R: ChainReader,
    F: Fn(&str) -> eyre::Result<R>,
{
    let mut last_error = String::from("no RPC endpoints configured");

    for url in profile.rpc_urls.iter() {
        let masked = mask_url(url);

        let reader = match connect(url) {
            Ok(reader) => reader,
            Err(e) => {
                warn!("⚠️ Failed to connect to {}: {}", masked, e);
                last_error = e.to_string();
                continue;
            }
        };

        match tokio::time::timeout(endpoint_timeout, reader.chain_id()).await {
            Ok(Ok(chain_id)) if chain_id == profile.chain_id => {
                info!("🔗 Connected to {} via {}", profile.key, masked);
                return Ok(Connection {
                    reader,
                    chain_id,
                    endpoint: masked,
                });
            }
            Ok(Ok(chain_id)) => {
                warn!(
                    "⚠️ {} reports chain {} (expected {})",
                    masked, chain_id, profile.chain_id
                );
                last_error = format!(
                    "chain id mismatch: expected {}, got {}",
                    profile.chain_id, chain_id
                );
            }
            Ok(Err(e)) => {
                warn!("⚠️ Failed to connect to {}: {}", masked, e);
                last_error = e.to_string();
            }
            Err(_) => {
                warn!("⚠️ Failed to connect to {}: Connection timeout", masked);
                last_error = "Connection timeout".to_string();
            }
        }
    }

    Err(AppError::endpoint_unavailable(&profile.key, last_error))
}
