//! Honeypot Radar Library
//!
//! Token safety heuristic engine for EVM networks. For one token it:
//! - connects to the first healthy RPC endpoint of the network
//! - confirms the address is a contract
//! - runs the detector contract, tax, liquidity, ownership, bytecode and limit checks concurrently
//! - folds everything into one report with a honeypot verdict

pub mod api;
pub mod core;
pub mod models;
pub mod providers;
pub mod utils;

pub use crate::core::{analyze_with, is_honeypot, parse_token_address, HoneypotEngine, Probe};
pub use models::{
    AnalysisReport, AppError, AppResult, CheckResult, DetectorSnapshot, EngineConfig, ErrorCode,
    NetworkProfile, RouterVersion, TokenMetadata,
};
pub use providers::{ChainReader, Connection, ReadError, RpcConnection};
