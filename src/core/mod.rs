//! Core Module - Checks, verdict and orchestration

pub mod buy_tax;
pub mod bytecode;
pub mod contracts;
pub mod detector;
pub mod engine;
pub mod limits;
pub mod liquidity;
pub mod metadata;
pub mod ownership;
pub mod pair;
pub mod presence;
pub mod probe;
pub mod sell_tax;
pub mod verdict;

pub use engine::{analyze_with, parse_token_address, HoneypotEngine};
pub use probe::Probe;
pub use verdict::is_honeypot;
