//! Error taxonomy for the bootstrap run
//!
//! Nothing below the run wrapper recovers from these; the process adapter
//! prints the full chain and exits non-zero.

use thiserror::Error;

use epicgame_core::ConfigurationError;

use crate::chain::ChainError;

/// Top-level failure of a bootstrap run.
#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error("invalid deployment parameters")]
    Configuration(#[from] ConfigurationError),
    #[error("contract deployment failed")]
    Deployment(#[source] ChainError),
    #[error("mint #{ordinal} failed")]
    Mint {
        ordinal: usize,
        #[source]
        source: ChainError,
    },
}
