//! RPC Client Module - JSON-RPC over HTTP
//!
//! 1. One `RpcConnection` per endpoint URL, owned by a single analysis
//! 2. Gzip + User-Agent headers on every request
//! 3. Rate-limited requests (HTTP 429 / -32005) retried with jittered exponential backoff
//! 4. Every read bounded by the configured read timeout
//! 5. Reverts reported distinctly from transport failures

use alloy_primitives::{Address, Bytes, U64};
use eyre::{eyre, Result};
use rand::Rng;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT_ENCODING, USER_AGENT};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, warn};

use crate::providers::reader::{ChainReader, ReadError};
use crate::utils::constants::{
    RATE_LIMIT_BASE_DELAY_MS, RATE_LIMIT_MAX_ATTEMPTS, USER_AGENT as USER_AGENT_CONST,
};

/// Jitter percentage for retry delay
const RETRY_JITTER_PERCENT: u64 = 20;

/// Connection to a single JSON-RPC endpoint
#[derive(Clone)]
pub struct RpcConnection {
    url: String,
    /// HTTP client with custom headers (gzip enabled)
    client: reqwest::Client,
    read_timeout: Duration,
}

impl RpcConnection {
    /// Create a connection handle; no network traffic happens here
    pub fn new(url: &str, read_timeout: Duration) -> Result<Self> {
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(eyre!("Unsupported RPC URL scheme: {}", mask_url(url)));
        }

        Ok(Self {
            url: url.to_string(),
            client: Self::build_client(read_timeout)?,
            read_timeout,
        })
    }

    fn build_client(timeout: Duration) -> Result<reqwest::Client> {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_CONST));
        headers.insert("Content-Type", HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT_ENCODING, HeaderValue::from_static("gzip"));

        reqwest::Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .gzip(true)
            .build()
            .map_err(|e| eyre!("Failed to build HTTP client: {}", e))
    }

    /// Endpoint URL (masked for logging)
    pub fn masked_url(&self) -> String {
        mask_url(&self.url)
    }

    /// Execute a JSON-RPC request, bounded by the read timeout
    pub async fn request<T: DeserializeOwned>(
        &self,
        method: &str,
        params: serde_json::Value,
    ) -> Result<T, ReadError> {
        let payload = serde_json::json!({
            "jsonrpc": "2.0",
            "method": method,
            "params": params,
            "id": 1
        });

        match tokio::time::timeout(self.read_timeout, self.request_with_retry(&payload)).await {
            Ok(result) => result,
            Err(_) => {
                debug!("⏱️ {} timed out on {}", method, self.masked_url());
                Err(ReadError::Timeout)
            }
        }
    }

    /// Retry only while rate limited; anything else is returned immediately
    async fn request_with_retry<T: DeserializeOwned>(
        &self,
        payload: &serde_json::Value,
    ) -> Result<T, ReadError> {
        let mut last_error = ReadError::RateLimited;

        for attempt in 0..RATE_LIMIT_MAX_ATTEMPTS {
            if attempt > 0 {
                let final_delay = backoff_delay_ms(attempt);
                debug!(
                    "⏳ Retry {}/{} after {}ms",
                    attempt + 1,
                    RATE_LIMIT_MAX_ATTEMPTS,
                    final_delay
                );
                tokio::time::sleep(Duration::from_millis(final_delay)).await;
            }

            match self.execute(payload).await {
                Err(ReadError::RateLimited) => {
                    warn!(
                        "⏳ Rate limited on {}, backing off (attempt {}/{})",
                        self.masked_url(),
                        attempt + 1,
                        RATE_LIMIT_MAX_ATTEMPTS
                    );
                    last_error = ReadError::RateLimited;
                }
                other => return other,
            }
        }

        Err(last_error)
    }

    /// Execute single RPC request
    async fn execute<T: DeserializeOwned>(
        &self,
        payload: &serde_json::Value,
    ) -> Result<T, ReadError> {
        let response = self
            .client
            .post(&self.url)
            .json(payload)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ReadError::Timeout
                } else {
                    ReadError::Transport(e.to_string())
                }
            })?;

        let status = response.status();
        if status == 429 {
            return Err(ReadError::RateLimited);
        }
        if !status.is_success() {
            return Err(ReadError::Transport(format!("HTTP error: {}", status)));
        }

        let json: RpcResponse<T> = response
            .json()
            .await
            .map_err(|e| ReadError::Transport(format!("Failed to parse response: {}", e)))?;

        if let Some(error) = json.error {
            return Err(error.into_read_error());
        }

        json.result
            .ok_or_else(|| ReadError::Transport("No result in response".to_string()))
    }
}

impl ChainReader for RpcConnection {
    async fn chain_id(&self) -> Result<u64, ReadError> {
        let id: U64 = self.request("eth_chainId", serde_json::json!([])).await?;
        Ok(id.to::<u64>())
    }

    async fn get_code(&self, address: Address) -> Result<Bytes, ReadError> {
        let raw: String = self
            .request("eth_getCode", serde_json::json!([address, "latest"]))
            .await?;
        decode_code(&raw)
    }

    async fn call(&self, to: Address, data: Bytes) -> Result<Bytes, ReadError> {
        self.request(
            "eth_call",
            serde_json::json!([{ "to": to, "data": data }, "latest"]),
        )
        .await
    }
}

/// Some nodes answer `0x0` instead of `0x` for accounts without code
fn decode_code(raw: &str) -> Result<Bytes, ReadError> {
    let digits = raw.strip_prefix("0x").unwrap_or(raw);
    if digits.is_empty() || digits == "0" {
        return Ok(Bytes::new());
    }
    hex::decode(digits)
        .map(Bytes::from)
        .map_err(|e| ReadError::Decode(format!("invalid code hex {}: {}", raw, e)))
}

/// Hide API keys embedded in endpoint URLs (`.../v2/<key>`, `.../<32+ char key>`)
pub fn mask_url(url: &str) -> String {
    if let Some((base, _)) = url.split_once("/v2/") {
        return format!("{}/v2/***HIDDEN***", base);
    }
    match url.rsplit_once('/') {
        Some((base, last)) if last.len() >= 32 && last.chars().all(|c| c.is_ascii_alphanumeric()) => {
            format!("{}/***HIDDEN***", base)
        }
        _ => url.to_string(),
    }
}

/// Exponential backoff with ±20% jitter
fn backoff_delay_ms(attempt: u32) -> u64 {
    let base_delay = RATE_LIMIT_BASE_DELAY_MS * 2_u64.pow(attempt.saturating_sub(1));
    let jitter_range = (base_delay * RETRY_JITTER_PERCENT) / 100;
    let jitter: i64 =
        rand::thread_rng().gen_range(-(jitter_range as i64)..=(jitter_range as i64));
    (base_delay as i64 + jitter).max(50) as u64
}

/// JSON-RPC response structure
#[derive(Debug, Deserialize)]
struct RpcResponse<T> {
    result: Option<T>,
    error: Option<RpcError>,
}

/// JSON-RPC error structure
#[derive(Debug, Clone, Deserialize)]
pub struct RpcError {
    pub code: i64,
    pub message: String,
    #[serde(default)]
    pub data: Option<serde_json::Value>,
}

impl RpcError {
    /// Rate limit error (code -32005 or message)
    pub fn is_rate_limit(&self) -> bool {
        self.code == -32005 || self.message.to_lowercase().contains("rate limit")
    }

    /// Execution reverted (geth uses code 3, most others -32000 with a message)
    pub fn is_revert(&self) -> bool {
        self.code == 3 || self.message.to_lowercase().contains("revert")
    }

    fn into_read_error(self) -> ReadError {
        if self.is_rate_limit() {
            ReadError::RateLimited
        } else if self.is_revert() {
            let reason = self
                .message
                .split_once(':')
                .map(|(_, r)| r.trim().to_string())
                .unwrap_or_default();
            ReadError::Reverted(reason)
        } else {
            ReadError::Rpc {
                code: self.code,
                message: self.message,
            }
        }
    }
}
