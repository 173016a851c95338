//! Chain collaborator boundary
//!
//! The node is consumed, never reimplemented: submission hands back a
//! pending transaction hash, confirmation blocks until that hash is mined.

use async_trait::async_trait;
use thiserror::Error;

/// 0x-prefixed transaction hash, as the node returns it.
pub type TxHash = String;

/// Parsed transaction receipt. Existence means the transaction was mined;
/// `contract_address` is only present on creation receipts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TxReceipt {
    pub tx_hash: TxHash,
    pub status: bool,
    pub contract_address: Option<String>,
    pub block_number: Option<u64>,
}

/// Failures at the node boundary.
#[derive(Debug, Error)]
pub enum ChainError {
    #[error("http transport error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("rpc error {code}: {message}")]
    Rpc { code: i64, message: String },
    #[error("malformed rpc response: {0}")]
    InvalidResponse(String),
    #[error("transaction {0} reverted")]
    Reverted(TxHash),
    #[error("transaction {tx_hash} unconfirmed after {waited_secs}s")]
    ConfirmationTimeout { tx_hash: TxHash, waited_secs: u64 },
    #[error("creation receipt for {0} carries no contract address")]
    MissingContractAddress(TxHash),
}

/// Submission and confirmation surface of the node. The production
/// implementation speaks JSON-RPC; tests substitute a scripted fake.
#[async_trait]
pub trait ChainClient: Send + Sync {
    /// Submit a contract-creation transaction. Returns the pending tx hash.
    async fn send_deployment(&self, data: &[u8]) -> Result<TxHash, ChainError>;

    /// Submit a call transaction to a deployed contract.
    async fn send_call(&self, to: &str, data: &[u8]) -> Result<TxHash, ChainError>;

    /// Block until `tx_hash` is mined and return its receipt.
    async fn wait_confirmed(&self, tx_hash: &str) -> Result<TxReceipt, ChainError>;
}

#[cfg(test)]
pub(crate) mod fake {
    use std::collections::HashSet;
    use std::sync::Mutex;

    use super::*;

    /// One observed interaction with the fake node, in arrival order.
    #[derive(Clone, Debug, PartialEq, Eq)]
    pub enum Call {
        Deploy,
        Mint { to: String, item_index: u64 },
        Wait { tx_hash: TxHash },
    }

    /// Scripted chain collaborator. Hands out hashes "0xtx0", "0xtx1", ...
    /// in submission order and records every interaction so tests can
    /// assert the exact interleaving of submissions and confirmations.
    pub struct FakeChain {
        calls: Mutex<Vec<Call>>,
        pub contract_address: String,
        pub omit_contract_address: bool,
        /// Submission ordinals (0-based, deployment included) that reject.
        pub fail_send: HashSet<usize>,
        /// Hashes whose confirmation wait rejects.
        pub fail_wait: HashSet<TxHash>,
        submitted: Mutex<usize>,
        deploy_hashes: Mutex<HashSet<TxHash>>,
    }

    impl FakeChain {
        pub fn new() -> Self {
            Self {
                calls: Mutex::new(Vec::new()),
                contract_address: "0x000000000000000000000000000000000000beef".to_string(),
                omit_contract_address: false,
                fail_send: HashSet::new(),
                fail_wait: HashSet::new(),
                submitted: Mutex::new(0),
                deploy_hashes: Mutex::new(HashSet::new()),
            }
        }

        pub fn failing_send(mut self, nth: usize) -> Self {
            self.fail_send.insert(nth);
            self
        }

        pub fn failing_wait(mut self, tx_hash: &str) -> Self {
            self.fail_wait.insert(tx_hash.to_string());
            self
        }

        pub fn log(&self) -> Vec<Call> {
            self.calls.lock().unwrap().clone()
        }

        fn next_hash(&self) -> Result<TxHash, ChainError> {
            let mut submitted = self.submitted.lock().unwrap();
            let nth = *submitted;
            *submitted += 1;
            if self.fail_send.contains(&nth) {
                return Err(ChainError::Rpc {
                    code: -32000,
                    message: format!("submission {nth} rejected"),
                });
            }
            Ok(format!("0xtx{nth}"))
        }

        /// Item index from the trailing word of `mintItem(uint256)` calldata.
        fn item_index(data: &[u8]) -> u64 {
            let mut bytes = [0u8; 8];
            bytes.copy_from_slice(&data[data.len() - 8..]);
            u64::from_be_bytes(bytes)
        }
    }

    #[async_trait]
    impl ChainClient for FakeChain {
        async fn send_deployment(&self, _data: &[u8]) -> Result<TxHash, ChainError> {
            self.calls.lock().unwrap().push(Call::Deploy);
            let hash = self.next_hash()?;
            self.deploy_hashes.lock().unwrap().insert(hash.clone());
            Ok(hash)
        }

        async fn send_call(&self, to: &str, data: &[u8]) -> Result<TxHash, ChainError> {
            self.calls.lock().unwrap().push(Call::Mint {
                to: to.to_string(),
                item_index: Self::item_index(data),
            });
            self.next_hash()
        }

        async fn wait_confirmed(&self, tx_hash: &str) -> Result<TxReceipt, ChainError> {
            self.calls.lock().unwrap().push(Call::Wait {
                tx_hash: tx_hash.to_string(),
            });
            if self.fail_wait.contains(tx_hash) {
                return Err(ChainError::Reverted(tx_hash.to_string()));
            }
            let is_deploy = self.deploy_hashes.lock().unwrap().contains(tx_hash);
            let contract_address = (is_deploy && !self.omit_contract_address)
                .then(|| self.contract_address.clone());
            Ok(TxReceipt {
                tx_hash: tx_hash.to_string(),
                status: true,
                contract_address,
                block_number: Some(1),
            })
        }
    }
}
