//! Constants Module - Single Source of Truth
//!
//! Chain ids, contract addresses, thresholds and timeouts used across the engine.
//! Other modules must not hardcode any of these values.

use alloy_primitives::{address, Address, U256};

// ============================================
// APPLICATION CONSTANTS
// ============================================

/// Application name
pub const APP_NAME: &str = "HoneypotRadar";

/// Application version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// User-Agent for JSON-RPC requests
pub const USER_AGENT: &str = concat!("HoneypotRadar/", env!("CARGO_PKG_VERSION"));

// ============================================
// TIMEOUTS
// ============================================

/// Deadline for a single endpoint liveness check (eth_chainId)
pub const ENDPOINT_TIMEOUT_SECS: u64 = 10;

/// Default deadline for every other on-chain read
pub const DEFAULT_READ_TIMEOUT_SECS: u64 = 12;

/// Attempts for a rate-limited read (HTTP 429) before giving up
pub const RATE_LIMIT_MAX_ATTEMPTS: u32 = 3;

/// Base backoff delay for rate-limited reads (milliseconds)
pub const RATE_LIMIT_BASE_DELAY_MS: u64 = 250;

// ============================================
// HTTP API
// ============================================

/// Default API port (overridden by PORT / HONEYPOT_API_PORT)
pub const API_DEFAULT_PORT: u16 = 8080;

/// Analyses served concurrently by the API before requests queue
pub const API_MAX_CONCURRENT_ANALYSES: usize = 32;

// ============================================
// SAFETY THRESHOLDS
// ============================================

/// Buy/sell tax above this percentage is unsafe
pub const MAX_SAFE_TAX_PERCENT: f64 = 10.0;

/// Pool reserve (in whole token units) below this is unsafe
pub const MIN_SAFE_LIQUIDITY_UNITS: f64 = 1000.0;

/// Max transaction / wallet limit below this share of supply is unsafe
pub const MIN_SAFE_TX_LIMIT_PERCENT: f64 = 1.0;

/// Buy tax assumed before any router answered
pub const WORST_CASE_TAX_PERCENT: f64 = 100.0;

/// Uniswap v3 fee tier used for quotes (0.3%)
pub const V3_QUOTE_FEE_TIER: u32 = 3000;

/// Amount of native asset quoted per simulated buy (1 unit, 18 decimals)
pub fn quote_amount_in() -> U256 {
    U256::from(1_000_000_000_000_000_000u128)
}

// ============================================
// CHAIN IDS
// ============================================

/// Polygon PoS
pub const CHAIN_ID_POLYGON: u64 = 137;
/// Arbitrum One
pub const CHAIN_ID_ARBITRUM: u64 = 42161;
/// Unichain mainnet
pub const CHAIN_ID_UNICHAIN: u64 = 130;
/// Unichain Sepolia testnet
pub const CHAIN_ID_UNICHAIN_SEPOLIA: u64 = 1301;

// ============================================
// NETWORK KEYS
// ============================================

pub const NETWORK_POLYGON: &str = "polygon";
pub const NETWORK_ARBITRUM: &str = "arbitrum";
pub const NETWORK_UNICHAIN: &str = "unichain";
pub const NETWORK_UNICHAIN_SEPOLIA: &str = "unichainSepolia";

/// All built-in networks, in display order
pub const SUPPORTED_NETWORKS: [&str; 4] = [
    NETWORK_POLYGON,
    NETWORK_ARBITRUM,
    NETWORK_UNICHAIN,
    NETWORK_UNICHAIN_SEPOLIA,
];

/// Static description of a built-in network.
/// Environment-provided values (RPC URLs, routers, detectors) are merged in `models::config`.
#[derive(Debug, Clone, Copy)]
pub struct NetworkDefaults {
    pub key: &'static str,
    pub chain_id: u64,
    pub display_name: &'static str,
    pub native_symbol: &'static str,
    pub wrapped_native: Address,
    pub factory: Address,
    pub public_rpcs: &'static [&'static str],
    pub detector: Option<Address>,
    /// Environment prefix, e.g. `POLYGON` for `POLYGON_RPC`
    pub env_prefix: &'static str,
}

/// Get built-in defaults for a network key
pub fn get_network_defaults(key: &str) -> Option<NetworkDefaults> {
    match key {
        NETWORK_POLYGON => Some(NetworkDefaults {
            key: NETWORK_POLYGON,
            chain_id: CHAIN_ID_POLYGON,
            display_name: "Polygon",
            native_symbol: "MATIC",
            wrapped_native: address!("0d500b1d8e8ef31e21c99d1db9a6444d3adf1270"),
            factory: address!("5757371414417b8C6CAad45bAeF941aBc7d3Ab32"),
            public_rpcs: &["https://polygon-rpc.com"],
            detector: None,
            env_prefix: "POLYGON",
        }),
        NETWORK_ARBITRUM => Some(NetworkDefaults {
            key: NETWORK_ARBITRUM,
            chain_id: CHAIN_ID_ARBITRUM,
            display_name: "Arbitrum One",
            native_symbol: "ETH",
            wrapped_native: address!("82aF49447D8a07e3bd95BD0d56f35241523fBab1"),
            factory: address!("c35DADB65012eC5796536bD9864eD8773aBc74C4"),
            public_rpcs: &["https://arb1.arbitrum.io/rpc"],
            detector: None,
            env_prefix: "ARBITRUM",
        }),
        NETWORK_UNICHAIN => Some(NetworkDefaults {
            key: NETWORK_UNICHAIN,
            chain_id: CHAIN_ID_UNICHAIN,
            display_name: "Unichain",
            native_symbol: "ETH",
            wrapped_native: address!("4200000000000000000000000000000000000006"),
            factory: address!("5C69bEe701ef814a2B6a3EDD4B1652CB9cc5aA6f"),
            public_rpcs: &["https://mainnet.unichain.org"],
            detector: None,
            env_prefix: "UNICHAIN_MAINNET",
        }),
        NETWORK_UNICHAIN_SEPOLIA => Some(NetworkDefaults {
            key: NETWORK_UNICHAIN_SEPOLIA,
            chain_id: CHAIN_ID_UNICHAIN_SEPOLIA,
            display_name: "Unichain Sepolia",
            native_symbol: "ETH",
            wrapped_native: address!("4200000000000000000000000000000000000006"),
            factory: address!("5C69bEe701ef814a2B6a3EDD4B1652CB9cc5aA6f"),
            public_rpcs: &["https://sepolia.unichain.org"],
            detector: Some(address!("B1FFBAB3836908459f6f0f795dd1D978e9CB8818")),
            env_prefix: "UNICHAIN_SEPOLIA",
        }),
        _ => None,
    }
}

// ============================================
// DANGEROUS FUNCTION SIGNATURES
// ============================================

/// Canonical signatures whose selectors indicate blacklist capability
pub const BLACKLIST_SIGNATURES: [&str; 7] = [
    "blacklist(address)",
    "addBlacklist(address)",
    "setBlacklist(address,bool)",
    "addToBlacklist(address)",
    "blacklistAddress(address)",
    "setBots(address[],bool)",
    "setBot(address,bool)",
];

/// Canonical signatures whose selectors indicate pause capability
pub const PAUSE_SIGNATURES: [&str; 3] = ["pause()", "unpause()", "setPaused(bool)"];

// ============================================
// CONVERSION UTILITIES
// ============================================

/// Convert a raw token amount into whole units using `decimals`
#[inline]
pub fn to_token_units(raw: U256, decimals: u8) -> f64 {
    let raw_u128: u128 = raw.try_into().unwrap_or(u128::MAX);
    raw_u128 as f64 / 10f64.powi(decimals as i32)
}

/// Check if a network key is built in
#[inline]
pub fn is_network_supported(key: &str) -> bool {
    SUPPORTED_NETWORKS.contains(&key)
}
