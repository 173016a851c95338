//! Game contract deployer
//!
//! Deploys the epic-game contract with the compiled-in item roster and
//! boss, then mints the bootstrap token set one confirmation at a time.

use std::fs;

use anyhow::{Context, Result};
use tracing::{error, info};

use epicgame_host::{assemble_bootstrap, Config, Orchestrator, RpcClient};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    info!("===========================================");
    info!("        epic-game contract deployer");
    info!("===========================================");

    let config = Config::from_env();
    info!("Configuration:");
    info!("  RPC:      {}", config.rpc_url);
    info!("  From:     {}", config.from_address);
    info!("  Bytecode: {}", config.bytecode_path);

    let bytecode = load_bytecode(&config.bytecode_path)?;
    let (request, plan) = assemble_bootstrap()?;

    let client = RpcClient::new(&config);
    let mut orchestrator = Orchestrator::new(client);

    match orchestrator.run(&bytecode, &request, &plan).await {
        Ok(report) => {
            info!(
                "Bootstrap complete: {} mints on {}",
                report.minted, report.contract_address
            );
            Ok(())
        }
        Err(err) => {
            error!("bootstrap failed: {:#}", anyhow::Error::from(err));
            std::process::exit(1);
        }
    }
}

/// Read the compiled creation bytecode (hex, with or without a 0x prefix).
fn load_bytecode(path: &str) -> Result<Vec<u8>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("reading creation bytecode from {path}"))?;
    let stripped = raw.trim().trim_start_matches("0x");
    hex::decode(stripped).context("creation bytecode is not valid hex")
}
