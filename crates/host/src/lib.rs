//! Host-side orchestration for the epic-game contract bootstrap

pub mod abi;
pub mod chain;
pub mod config;
pub mod deployer;
pub mod error;
pub mod minter;
pub mod orchestrator;
pub mod rpc;

pub use chain::{ChainClient, ChainError, TxReceipt};
pub use config::Config;
pub use deployer::ContractHandle;
pub use error::BootstrapError;
pub use orchestrator::{assemble_bootstrap, BootstrapReport, Orchestrator, RunState};
pub use rpc::RpcClient;
