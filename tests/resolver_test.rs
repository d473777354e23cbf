//! Endpoint resolution over fake connections

mod common;

use common::*;
use honeypot_radar::providers::resolve_endpoint;
use honeypot_radar::{ErrorCode, NetworkProfile};
use std::time::Duration;

fn with_urls(urls: &[&str]) -> NetworkProfile {
    let mut profile = profile(&[]);
    profile.rpc_urls = urls.iter().map(|u| u.to_string()).collect();
    profile
}

/// One fake per URL: "wrong" reports another chain, "slow" never answers in time,
/// "down" cannot be connected to
fn connect(url: &str) -> eyre::Result<FakeChain> {
    match url {
        u if u.contains("wrong") => Ok(FakeChain::new(137)),
        u if u.contains("slow") => Ok(FakeChain::new(1301).slow_chain_id(Duration::from_secs(5))),
        u if u.contains("down") => Err(eyre::eyre!("connection refused")),
        _ => Ok(FakeChain::new(1301)),
    }
}

#[tokio::test]
async fn test_first_matching_endpoint_wins() {
    let profile = with_urls(&["https://good-a.test", "https://good-b.test"]);

    let connection = resolve_endpoint(&profile, Duration::from_millis(200), connect)
        .await
        .unwrap();

    assert_eq!(connection.chain_id, 1301);
    assert!(connection.endpoint.contains("good-a"));
}

#[tokio::test]
async fn test_mismatched_chain_is_skipped() {
    let profile = with_urls(&["https://wrong.test", "https://good.test"]);

    let connection = resolve_endpoint(&profile, Duration::from_millis(200), connect)
        .await
        .unwrap();

    assert_eq!(connection.chain_id, profile.chain_id);
    assert!(connection.endpoint.contains("good"));
}

#[tokio::test]
async fn test_slow_and_unreachable_endpoints_are_skipped() {
    let profile = with_urls(&["https://down.test", "https://slow.test", "https://good.test"]);

    let connection = resolve_endpoint(&profile, Duration::from_millis(50), connect)
        .await
        .unwrap();

    assert!(connection.endpoint.contains("good"));
}

#[tokio::test]
async fn test_all_endpoints_failing() {
    let profile = with_urls(&["https://wrong.test", "https://slow.test"]);

    let err = resolve_endpoint(&profile, Duration::from_millis(50), connect)
        .await
        .unwrap_err();

    assert_eq!(err.code, ErrorCode::EndpointUnavailable);
    assert!(err.to_string().contains("testnet"));
    assert!(err.to_string().contains("Connection timeout"));
}

#[tokio::test]
async fn test_mismatch_only_never_connects() {
    let profile = with_urls(&["https://wrong-a.test", "https://wrong-b.test"]);

    let err = resolve_endpoint(&profile, Duration::from_millis(50), connect)
        .await
        .unwrap_err();

    assert_eq!(err.code, ErrorCode::EndpointUnavailable);
    assert!(err.to_string().contains("chain id mismatch"));
}

#[tokio::test]
async fn test_empty_url_list() {
    let profile = with_urls(&[]);

    let err = resolve_endpoint(&profile, Duration::from_millis(50), connect)
        .await
        .unwrap_err();

    assert_eq!(err.code, ErrorCode::EndpointUnavailable);
}
