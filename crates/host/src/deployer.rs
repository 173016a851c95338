//! Deployment coordination

use tracing::info;

use epicgame_core::DeploymentRequest;

use crate::abi;
use crate::chain::{ChainClient, ChainError};
use crate::error::BootstrapError;

/// Callable handle to the deployed game contract. Created on deployment
/// confirmation, dropped at process exit, never persisted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContractHandle {
    address: String,
}

impl ContractHandle {
    pub fn address(&self) -> &str {
        &self.address
    }
}

/// Deploy the game contract and wait until the creation transaction is
/// mined. Nothing is minted unless this confirms.
pub async fn deploy(
    client: &dyn ChainClient,
    creation_bytecode: &[u8],
    request: &DeploymentRequest,
) -> Result<ContractHandle, BootstrapError> {
    let mut data = creation_bytecode.to_vec();
    data.extend_from_slice(&abi::constructor_args(request));

    let tx_hash = client
        .send_deployment(&data)
        .await
        .map_err(BootstrapError::Deployment)?;
    let receipt = client
        .wait_confirmed(&tx_hash)
        .await
        .map_err(BootstrapError::Deployment)?;
    let address = receipt
        .contract_address
        .ok_or_else(|| BootstrapError::Deployment(ChainError::MissingContractAddress(tx_hash)))?;

    info!("Contract deployed to: {}", address);
    Ok(ContractHandle { address })
}
