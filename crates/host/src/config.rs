//! Configuration

use serde::{Deserialize, Serialize};
use std::env;

/// Orchestrator configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    /// RPC URL of the target node
    pub rpc_url: String,
    /// Sender account (must be unlocked on the node)
    pub from_address: String,
    /// Path to the compiled contract creation bytecode (hex file)
    pub bytecode_path: String,
    /// Gas limit per transaction
    pub gas: u64,
    /// Receipt poll interval in milliseconds
    pub poll_interval_ms: u64,
    /// Confirmation timeout in seconds
    pub confirm_timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rpc_url: "http://localhost:8545".to_string(),
            // Anvil account 0
            from_address: "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266".to_string(),
            bytecode_path: "artifacts/MyEpicGame.bin".to_string(),
            gas: 6_000_000,
            poll_interval_ms: 1_000,
            confirm_timeout_secs: 120,
        }
    }
}

impl Config {
    /// Load from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            rpc_url: env::var("RPC_URL").unwrap_or(defaults.rpc_url),
            from_address: env::var("FROM_ADDRESS").unwrap_or(defaults.from_address),
            bytecode_path: env::var("BYTECODE_PATH").unwrap_or(defaults.bytecode_path),
            gas: env::var("GAS_LIMIT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.gas),
            poll_interval_ms: env::var("POLL_INTERVAL_MS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.poll_interval_ms),
            confirm_timeout_secs: env::var("CONFIRM_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.confirm_timeout_secs),
        }
    }
}
