//! Engine configuration
//!
//! Built once at process start from `utils::constants` plus environment overrides,
//! then handed to the engine. Nothing in here is mutated after construction.

use alloy_primitives::Address;
use std::collections::{BTreeMap, HashMap};
use std::str::FromStr;
use std::time::Duration;
use tracing::{debug, info};

use crate::models::errors::{AppError, AppResult};
use crate::models::types::RouterVersion;
use crate::utils::constants::{
    get_network_defaults, NetworkDefaults, DEFAULT_READ_TIMEOUT_SECS, ENDPOINT_TIMEOUT_SECS,
    SUPPORTED_NETWORKS,
};

/// Everything the engine needs to know about one chain
#[derive(Debug, Clone, PartialEq)]
pub struct NetworkProfile {
    /// Short key, e.g. `polygon`
    pub key: String,
    pub chain_id: u64,
    pub name: String,
    pub native_symbol: String,
    pub wrapped_native: Address,
    /// Candidate endpoints, tried in order
    pub rpc_urls: Vec<String>,
    pub factory: Address,
    pub routers: BTreeMap<RouterVersion, Address>,
    /// Quoter used for v3 buy simulations
    pub quoter: Option<Address>,
    pub detector: Option<Address>,
}

impl NetworkProfile {
    /// Profile from compiled-in defaults only
    pub fn from_defaults(defaults: &NetworkDefaults) -> Self {
        Self {
            key: defaults.key.to_string(),
            chain_id: defaults.chain_id,
            name: defaults.display_name.to_string(),
            native_symbol: defaults.native_symbol.to_string(),
            wrapped_native: defaults.wrapped_native,
            rpc_urls: defaults.public_rpcs.iter().map(|s| s.to_string()).collect(),
            factory: defaults.factory,
            routers: BTreeMap::new(),
            quoter: None,
            detector: defaults.detector,
        }
    }

    /// Merge environment overrides on top of the defaults.
    ///
    /// For prefix `POLYGON`: `POLYGON_RPC` (comma separated, tried before public RPCs),
    /// `POLYGON_ROUTER` / `POLYGON_ROUTER_V2|V3|V4`, `POLYGON_QUOTER_V3`, `POLYGON_DETECTOR`.
    fn from_lookup<F>(defaults: &NetworkDefaults, lookup: &F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut profile = Self::from_defaults(defaults);
        let prefix = defaults.env_prefix;

        if let Some(urls) = lookup(&format!("{}_RPC", prefix)) {
            let mut env_urls: Vec<String> = urls
                .split(',')
                .map(|u| u.trim().to_string())
                .filter(|u| !u.is_empty())
                .collect();
            env_urls.retain(|u| !profile.rpc_urls.contains(u));
            env_urls.append(&mut profile.rpc_urls);
            profile.rpc_urls = env_urls;
        }

        let router_keys = [
            (format!("{}_ROUTER", prefix), RouterVersion::V2),
            (format!("{}_ROUTER_V2", prefix), RouterVersion::V2),
            (format!("{}_ROUTER_V3", prefix), RouterVersion::V3),
            (format!("{}_ROUTER_V4", prefix), RouterVersion::V4),
        ];
        for (key, version) in router_keys.iter() {
            if let Some(address) = parse_address_var(lookup, key)? {
                profile.routers.insert(*version, address);
            }
        }

        if let Some(quoter) = parse_address_var(lookup, &format!("{}_QUOTER_V3", prefix))? {
            profile.quoter = Some(quoter);
        }
        if let Some(detector) = parse_address_var(lookup, &format!("{}_DETECTOR", prefix))? {
            profile.detector = Some(detector);
        }

        debug!(
            network = %profile.key,
            endpoints = profile.rpc_urls.len(),
            routers = profile.routers.len(),
            detector = profile.detector.is_some(),
            "Network profile loaded"
        );
        Ok(profile)
    }
}

/// Read an optional address variable; empty values are ignored, garbage is an error
fn parse_address_var<F>(lookup: &F, key: &str) -> AppResult<Option<Address>>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) if !raw.trim().is_empty() => Address::from_str(raw.trim())
            .map(Some)
            .map_err(|_| AppError::invalid_config(format!("{} is not a valid address", key))),
        _ => Ok(None),
    }
}

/// Immutable engine configuration
#[derive(Debug, Clone)]
pub struct EngineConfig {
    pub networks: HashMap<String, NetworkProfile>,
    /// Deadline per endpoint liveness check
    pub endpoint_timeout: Duration,
    /// Deadline per on-chain read
    pub read_timeout: Duration,
}

impl EngineConfig {
    /// Empty configuration, networks added with `with_network`
    pub fn new() -> Self {
        Self {
            networks: HashMap::new(),
            endpoint_timeout: Duration::from_secs(ENDPOINT_TIMEOUT_SECS),
            read_timeout: Duration::from_secs(DEFAULT_READ_TIMEOUT_SECS),
        }
    }

    /// Built-in networks without any environment overrides
    pub fn builtin() -> Self {
        SUPPORTED_NETWORKS
            .iter()
            .filter_map(|key| get_network_defaults(key))
            .fold(Self::new(), |config, defaults| {
                config.with_network(NetworkProfile::from_defaults(&defaults))
            })
    }

    /// Built-in networks merged with process environment
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as `from_env`, with an injectable variable source
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::new();

        for key in SUPPORTED_NETWORKS.iter() {
            if let Some(defaults) = get_network_defaults(key) {
                config = config.with_network(NetworkProfile::from_lookup(&defaults, &lookup)?);
            }
        }

        if let Some(raw) = lookup("HONEYPOT_READ_TIMEOUT_SECS") {
            let secs: u64 = raw.trim().parse().map_err(|_| {
                AppError::invalid_config("HONEYPOT_READ_TIMEOUT_SECS must be a whole number")
            })?;
            config.read_timeout = Duration::from_secs(secs.max(1));
        }

        info!(
            "⚙️ Loaded {} networks (read timeout {}s)",
            config.networks.len(),
            config.read_timeout.as_secs()
        );
        Ok(config)
    }

    pub fn with_network(mut self, profile: NetworkProfile) -> Self {
        self.networks.insert(profile.key.clone(), profile);
        self
    }

    pub fn with_timeouts(mut self, endpoint_timeout: Duration, read_timeout: Duration) -> Self {
        self.endpoint_timeout = endpoint_timeout;
        self.read_timeout = read_timeout;
        self
    }

    /// Look up a network by key
    pub fn network(&self, key: &str) -> AppResult<&NetworkProfile> {
        self.networks
            .get(key)
            .ok_or_else(|| AppError::unsupported_network(key))
    }

    /// Configured network keys, sorted
    pub fn network_keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.networks.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::errors::ErrorCode;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_builtin_networks() {
        let config = EngineConfig::builtin();
        assert_eq!(
            config.network_keys(),
            vec!["arbitrum", "polygon", "unichain", "unichainSepolia"]
        );
        assert_eq!(config.network("arbitrum").unwrap().chain_id, 42161);
        assert_eq!(config.endpoint_timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_unknown_network() {
        let err = EngineConfig::builtin().network("solana").unwrap_err();
        assert_eq!(err.code, ErrorCode::UnsupportedNetwork);
    }

    #[test]
    fn test_env_rpc_comes_first() {
        let config = EngineConfig::from_lookup(env(&[(
            "POLYGON_RPC",
            "https://private.example/rpc, https://polygon-rpc.com",
        )]))
        .unwrap();
        let polygon = config.network("polygon").unwrap();
        assert_eq!(
            polygon.rpc_urls,
            vec!["https://private.example/rpc", "https://polygon-rpc.com"]
        );
    }

    #[test]
    fn test_env_routers_and_quoter() {
        let config = EngineConfig::from_lookup(env(&[
            (
                "UNICHAIN_SEPOLIA_ROUTER_V2",
                "0x1111111111111111111111111111111111111111",
            ),
            (
                "UNICHAIN_SEPOLIA_ROUTER_V3",
                "0x2222222222222222222222222222222222222222",
            ),
            ("UNICHAIN_SEPOLIA_ROUTER_V4", ""),
            (
                "UNICHAIN_SEPOLIA_QUOTER_V3",
                "0x3333333333333333333333333333333333333333",
            ),
        ]))
        .unwrap();
        let sepolia = config.network("unichainSepolia").unwrap();
        assert_eq!(sepolia.routers.len(), 2);
        assert!(sepolia.routers.contains_key(&RouterVersion::V3));
        assert!(sepolia.quoter.is_some());
    }

    #[test]
    fn test_invalid_address_override() {
        let err = EngineConfig::from_lookup(env(&[("ARBITRUM_DETECTOR", "0x...")])).unwrap_err();
        assert_eq!(err.code, ErrorCode::ConfigInvalidValue);
    }

    #[test]
    fn test_read_timeout_override() {
        let config =
            EngineConfig::from_lookup(env(&[("HONEYPOT_READ_TIMEOUT_SECS", "15")])).unwrap();
        assert_eq!(config.read_timeout, Duration::from_secs(15));
    }
}
