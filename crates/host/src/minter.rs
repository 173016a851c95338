//! Mint submission
//!
//! One mint at a time: submit, wait for the confirmation, report. Token
//! numbering on-chain depends on submission order, so a mint is never
//! submitted while the previous one is still pending.

use tracing::{info, warn};

use crate::abi;
use crate::chain::{ChainClient, ChainError};
use crate::deployer::ContractHandle;
use crate::error::BootstrapError;

/// Submit one mint and wait for its confirmation. `ordinal` is 1-based and
/// names the mint in the status line and in any error.
pub async fn mint_item(
    client: &dyn ChainClient,
    handle: &ContractHandle,
    ordinal: usize,
    item_index: u64,
) -> Result<(), BootstrapError> {
    let calldata = abi::mint_item_calldata(item_index);

    let outcome: Result<(), ChainError> = async {
        let tx_hash = client.send_call(handle.address(), &calldata).await?;
        client.wait_confirmed(&tx_hash).await?;
        Ok(())
    }
    .await;

    match outcome {
        Ok(()) => {
            info!("Minted NFT #{}", ordinal);
            Ok(())
        }
        Err(source) => {
            warn!("mint sequence aborted, {} mints confirmed", ordinal - 1);
            Err(BootstrapError::Mint { ordinal, source })
        }
    }
}
