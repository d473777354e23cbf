//! Type definitions for the token safety engine
//! All per-analysis data structures: check results, detector snapshot, final report

use alloy_primitives::{Address, U256};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Outcome of a single check.
///
/// `message` is empty when the check passed, unless the pass needs an explanation
/// (e.g. "No owner function found").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckResult {
    pub safe: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
}

impl CheckResult {
    /// Passed, nothing to report
    pub fn pass() -> Self {
        Self {
            safe: true,
            message: String::new(),
            value: None,
        }
    }

    /// Passed, with an explanatory note
    pub fn pass_with(message: impl Into<String>) -> Self {
        Self {
            safe: true,
            message: message.into(),
            value: None,
        }
    }

    /// Failed with a reason
    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            safe: false,
            message: message.into(),
            value: None,
        }
    }

    /// Check could not run; never treated as safe
    pub fn unverified(what: &str) -> Self {
        Self::fail(format!("Unable to verify {}", what))
    }

    /// Safe when `safe`, otherwise failed with `message`
    pub fn flag(safe: bool, message: &str) -> Self {
        if safe {
            Self::pass()
        } else {
            Self::fail(message)
        }
    }

    pub fn with_value(mut self, value: f64) -> Self {
        self.value = Some(value);
        self
    }
}

/// Record returned by the on-chain detector contract, field order matches the ABI tuple
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectorSnapshot {
    pub can_transfer: bool,
    pub has_blacklist: bool,
    pub has_pause_function: bool,
    pub has_owner: bool,
    pub has_sell_restriction: bool,
    pub has_anti_whale: bool,
    pub liquidity: U256,
    pub has_liquidity: bool,
    pub error: String,
}

impl DetectorSnapshot {
    /// Detector liquidity as a float for display
    pub fn liquidity_value(&self) -> f64 {
        let raw: u128 = self.liquidity.try_into().unwrap_or(u128::MAX);
        raw as f64
    }
}

/// Exchange router generation
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RouterVersion {
    /// `getAmountsOut` style router
    V2,
    /// Concentrated liquidity, priced through a quoter contract
    V3,
    /// Not simulated yet
    V4,
}

impl RouterVersion {
    pub fn as_str(&self) -> &'static str {
        match self {
            RouterVersion::V2 => "v2",
            RouterVersion::V3 => "v3",
            RouterVersion::V4 => "v4",
        }
    }
}

impl fmt::Display for RouterVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RouterVersion {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "v2" => Ok(RouterVersion::V2),
            "v3" => Ok(RouterVersion::V3),
            "v4" => Ok(RouterVersion::V4),
            other => Err(format!("unknown router version: {}", other)),
        }
    }
}

/// Standard token reads; each is optional because extension-less or odd tokens exist
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenMetadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub decimals: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_supply: Option<U256>,
}

/// Final, immutable output of one analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    pub network: String,
    pub chain_id: u64,
    pub token: Address,
    pub token_info: TokenMetadata,

    // Detector-derived signals
    pub can_transfer: CheckResult,
    pub has_blacklist: CheckResult,
    pub has_pause_function: CheckResult,
    pub has_owner: CheckResult,
    pub has_sell_restriction: CheckResult,
    pub has_anti_whale: CheckResult,
    pub liquidity: CheckResult,

    // Locally computed signals
    pub ownership: CheckResult,
    pub buy_tax: CheckResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub buy_tax_router: Option<RouterVersion>,
    pub sell_tax: CheckResult,
    pub pool_liquidity: CheckResult,
    pub blacklist_scan: CheckResult,
    pub pause_scan: CheckResult,
    pub transaction_limit: CheckResult,

    pub detector: DetectorSnapshot,
    pub is_honeypot: bool,
    pub error: Option<String>,
}

impl AnalysisReport {
    /// Named view over every check, in display order
    pub fn checks(&self) -> Vec<(&'static str, &CheckResult)> {
        vec![
            ("Transferable", &self.can_transfer),
            ("Blacklist", &self.has_blacklist),
            ("Pause function", &self.has_pause_function),
            ("Owner privileges", &self.has_owner),
            ("Sell restriction", &self.has_sell_restriction),
            ("Anti-whale", &self.has_anti_whale),
            ("Detector liquidity", &self.liquidity),
            ("Ownership", &self.ownership),
            ("Buy tax", &self.buy_tax),
            ("Sell tax", &self.sell_tax),
            ("Pool liquidity", &self.pool_liquidity),
            ("Blacklist bytecode", &self.blacklist_scan),
            ("Pause bytecode", &self.pause_scan),
            ("Transaction limit", &self.transaction_limit),
        ]
    }

    /// Number of checks that did not pass
    pub fn failed_checks(&self) -> usize {
        self.checks().iter().filter(|(_, c)| !c.safe).count()
    }

    /// Pretty print the report
    pub fn summary(&self) -> String {
        let verdict = if self.is_honeypot {
            "🚨 HONEYPOT"
        } else {
            "✅ NO HONEYPOT SIGNALS"
        };
        let label = match (&self.token_info.symbol, &self.token_info.name) {
            (Some(symbol), Some(name)) => format!("{} ({})", name, symbol),
            (Some(symbol), None) => symbol.clone(),
            (None, Some(name)) => name.clone(),
            (None, None) => "Unknown token".to_string(),
        };

        let mut output = format!("\n{} | {} | {}\n", verdict, label, self.token);
        output.push_str(&format!(
            "   Network: {} (chain {})\n",
            self.network, self.chain_id
        ));
        if let Some(ref error) = self.error {
            output.push_str(&format!("   Detector error: {}\n", error));
        }
        output.push_str("   Checks:\n");
        for (name, check) in self.checks() {
            let mark = if check.safe { "✅" } else { "❌" };
            let value = check
                .value
                .map(|v| format!(" [{:.2}]", v))
                .unwrap_or_default();
            if check.message.is_empty() {
                output.push_str(&format!("     {} {}{}\n", mark, name, value));
            } else {
                output.push_str(&format!(
                    "     {} {}{}: {}\n",
                    mark, name, value, check.message
                ));
            }
        }
        if let Some(router) = self.buy_tax_router {
            output.push_str(&format!("   Buy tax router: {}\n", router));
        }
        output
    }
}
