//! Bytecode Signature Scanner
//!
//! Searches deployed code for the 4-byte selectors of known dangerous functions.
//! The match is a raw substring search, not disassembly: constants that happen to contain
//! the same bytes produce false positives, and proxies hide their implementation.

use alloy_primitives::{keccak256, Address};
use tracing::{debug, warn};

use crate::models::types::CheckResult;
use crate::providers::reader::ChainReader;
use crate::utils::constants::{BLACKLIST_SIGNATURES, PAUSE_SIGNATURES};

lazy_static::lazy_static! {
    static ref BLACKLIST_SELECTORS: Vec<[u8; 4]> = BLACKLIST_SIGNATURES.iter().map(|s| selector(s)).collect();
    static ref PAUSE_SELECTORS: Vec<[u8; 4]> = PAUSE_SIGNATURES.iter().map(|s| selector(s)).collect();
}

/// First four bytes of keccak256 over the canonical signature
pub fn selector(signature: &str) -> [u8; 4] {
    let hash = keccak256(signature.as_bytes());
    [hash[0], hash[1], hash[2], hash[3]]
}

fn contains_any(code: &[u8], selectors: &[[u8; 4]]) -> bool {
    code.windows(4)
        .any(|window| selectors.iter().any(|sel| window == sel.as_slice()))
}

/// Per-category findings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BytecodeFindings {
    pub has_blacklist: bool,
    pub has_pause: bool,
}

impl BytecodeFindings {
    pub fn scan(code: &[u8]) -> Self {
        Self {
            has_blacklist: contains_any(code, &BLACKLIST_SELECTORS),
            has_pause: contains_any(code, &PAUSE_SELECTORS),
        }
    }
}

/// Blacklist and pause scan results
#[derive(Debug, Clone, PartialEq)]
pub struct ScanOutcome {
    pub blacklist: CheckResult,
    pub pause: CheckResult,
}

impl ScanOutcome {
    pub fn from_findings(findings: BytecodeFindings) -> Self {
        Self {
            blacklist: CheckResult::flag(
                !findings.has_blacklist,
                "Contract contains blacklist functions",
            ),
            pause: CheckResult::flag(!findings.has_pause, "Transfers can be paused by owner"),
        }
    }

    fn unverified() -> Self {
        Self {
            blacklist: CheckResult::unverified("blacklist"),
            pause: CheckResult::unverified("transfer pause"),
        }
    }
}

pub async fn scan_bytecode<R: ChainReader>(reader: &R, token: Address) -> ScanOutcome {
    match reader.get_code(token).await {
        Ok(code) => {
            let findings = BytecodeFindings::scan(&code);
            debug!(
                "🔬 Bytecode scan of {}: blacklist={} pause={}",
                token, findings.has_blacklist, findings.has_pause
            );
            ScanOutcome::from_findings(findings)
        }
        Err(e) => {
            warn!("⚠️ Bytecode unavailable for {}: {}", token, e);
            ScanOutcome::unverified()
        }
    }
}
