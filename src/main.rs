//! Honeypot Radar CLI
//!
//! Usage:
//!   honeypot_radar <network> <token> [--json]
//!   honeypot_radar --list-networks
//!
//! Environment (also read from `.env`):
//!   POLYGON_RPC, ARBITRUM_RPC, UNICHAIN_MAINNET_RPC, UNICHAIN_SEPOLIA_RPC
//!   <PREFIX>_ROUTER[_V2|_V3|_V4], <PREFIX>_QUOTER_V3, <PREFIX>_DETECTOR
//!   HONEYPOT_READ_TIMEOUT_SECS, RUST_LOG

use clap::Parser;
use eyre::Result;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use honeypot_radar::utils::constants::{APP_NAME, APP_VERSION};
use honeypot_radar::{EngineConfig, HoneypotEngine};

#[derive(Parser, Debug)]
#[command(name = "honeypot_radar", version, about = "Check a token for honeypot characteristics")]
struct Args {
    /// Network key (polygon, arbitrum, unichain, unichainSepolia)
    #[arg(required_unless_present = "list_networks")]
    network: Option<String>,

    /// Token contract address (0x...)
    #[arg(required_unless_present = "list_networks")]
    token: Option<String>,

    /// Print the report as JSON instead of a summary
    #[arg(long)]
    json: bool,

    /// List configured networks and exit
    #[arg(long)]
    list_networks: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    FmtSubscriber::builder()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    let args = Args::parse();
    let config = EngineConfig::from_env()?;

    if args.list_networks {
        println!("{} v{} networks:", APP_NAME, APP_VERSION);
        for key in config.network_keys() {
            let profile = config.network(key)?;
            let routers: Vec<String> = profile.routers.keys().map(|v| v.to_string()).collect();
            println!(
                "  {:<16} chain {:<6} {:<6} routers [{}] detector {}",
                profile.key,
                profile.chain_id,
                profile.native_symbol,
                routers.join(", "),
                profile
                    .detector
                    .map(|d| d.to_string())
                    .unwrap_or_else(|| "none".to_string())
            );
        }
        return Ok(());
    }

    let (Some(network), Some(token)) = (args.network, args.token) else {
        eyre::bail!("network and token are required");
    };

    let engine = HoneypotEngine::new(config);
    match engine.analyze(&network, &token).await {
        Ok(report) => {
            if args.json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("{}", report.summary());
            }
            Ok(())
        }
        Err(err) => {
            eprintln!("❌ {}", err);
            std::process::exit(match err.code.http_status() {
                400 => 2,
                _ => 1,
            });
        }
    }
}
