//! Check Orchestrator
//!
//! Pipeline per analysis:
//! 1. Validate the token address (no network traffic on bad input)
//! 2. Resolve a live endpoint for the network
//! 3. Presence guard: the target must have code
//! 4. Scatter every check concurrently, gather, aggregate
//!
//! Only the endpoint resolver, the presence guard and the detector can abort an analysis.
//! Every other check degrades to an unsafe "Unable to verify ..." result.

use alloy_primitives::Address;
use std::future::Future;
use std::str::FromStr;
use std::sync::Arc;
use tracing::{info, warn};

use crate::core::buy_tax::check_buy_tax;
use crate::core::bytecode::scan_bytecode;
use crate::core::detector::detect;
use crate::core::limits::check_transaction_limit;
use crate::core::liquidity::check_liquidity;
use crate::core::metadata::read_metadata;
use crate::core::ownership::check_ownership;
use crate::core::presence::ensure_contract;
use crate::core::sell_tax::check_sell_tax;
use crate::core::verdict::{aggregate, LocalChecks};
use crate::models::config::{EngineConfig, NetworkProfile};
use crate::models::errors::{AppError, AppResult};
use crate::models::types::AnalysisReport;
use crate::providers::reader::ChainReader;
use crate::providers::resolver::resolve_rpc;

/// Stateless analysis engine; cheap to clone and share between requests
#[derive(Clone)]
pub struct HoneypotEngine {
    config: Arc<EngineConfig>,
}

impl HoneypotEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Analyze `token` on `network` over a freshly resolved JSON-RPC connection
    pub async fn analyze(&self, network: &str, token: &str) -> AppResult<AnalysisReport> {
        let token = parse_token_address(token)?;
        let profile = self.config.network(network)?;

        info!("🔍 Checking token {} on {}", token, profile.key);
        let connection = resolve_rpc(
            profile,
            self.config.endpoint_timeout,
            self.config.read_timeout,
        )
        .await?;

        analyze_with(&connection.reader, profile, token).await
    }
}

/// Parse a caller-supplied token address
pub fn parse_token_address(raw: &str) -> AppResult<Address> {
    let trimmed = raw.trim();
    let valid_shape = trimmed.len() == 42
        && trimmed.starts_with("0x")
        && trimmed[2..].chars().all(|c| c.is_ascii_hexdigit());
    if !valid_shape {
        return Err(AppError::invalid_input(format!(
            "Invalid token address: {}",
            trimmed
        )));
    }
    Address::from_str(trimmed)
        .map_err(|e| AppError::invalid_input(format!("Invalid token address {}: {}", trimmed, e)))
}

/// Run the full check set against an already connected reader
pub async fn analyze_with<R: ChainReader>(
    reader: &R,
    profile: &NetworkProfile,
    token: Address,
) -> AppResult<AnalysisReport> {
    ensure_contract(reader, token).await?;

    let (
        detector,
        token_info,
        ownership,
        buy_tax,
        sell_tax,
        pool_liquidity,
        bytecode,
        transaction_limit,
    ) = tokio::try_join!(
        detect(reader, profile, token),
        infallible(read_metadata(reader, token)),
        infallible(check_ownership(reader, token)),
        infallible(check_buy_tax(reader, profile, token)),
        infallible(check_sell_tax(reader, token)),
        infallible(check_liquidity(reader, profile, token)),
        infallible(scan_bytecode(reader, token)),
        infallible(check_transaction_limit(reader, token)),
    )?;

    let report = aggregate(
        &profile.key,
        profile.chain_id,
        token,
        detector,
        LocalChecks {
            token_info,
            ownership,
            buy_tax,
            sell_tax,
            pool_liquidity,
            bytecode,
            transaction_limit,
        },
    );

    if report.is_honeypot {
        warn!(
            "🚨 {} on {} flagged as honeypot ({} checks failed)",
            token,
            profile.key,
            report.failed_checks()
        );
    } else {
        info!(
            "✅ {} on {} shows no honeypot signals ({} checks failed)",
            token,
            profile.key,
            report.failed_checks()
        );
    }
    Ok(report)
}

/// Lift a check that cannot fail into the gather
async fn infallible<T>(check: impl Future<Output = T>) -> AppResult<T> {
    Ok(check.await)
}
