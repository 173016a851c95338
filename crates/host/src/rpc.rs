//! JSON-RPC chain client
//!
//! Speaks to an Ethereum-compatible node with unlocked accounts:
//! `eth_sendTransaction` for submission, `eth_getTransactionReceipt`
//! polling for confirmation.

use std::time::Duration;

use async_trait::async_trait;
use serde_json::{json, Value};
use tokio::time::{sleep, Instant};
use tracing::debug;

use crate::chain::{ChainClient, ChainError, TxHash, TxReceipt};
use crate::config::Config;

/// Production [`ChainClient`] over HTTP JSON-RPC.
pub struct RpcClient {
    http_client: reqwest::Client,
    rpc_url: String,
    from_address: String,
    gas: u64,
    poll_interval: Duration,
    confirm_timeout: Duration,
}

impl RpcClient {
    pub fn new(config: &Config) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            rpc_url: config.rpc_url.clone(),
            from_address: config.from_address.clone(),
            gas: config.gas,
            poll_interval: Duration::from_millis(config.poll_interval_ms),
            confirm_timeout: Duration::from_secs(config.confirm_timeout_secs),
        }
    }

    /// Make RPC call
    async fn rpc_call(&self, method: &str, params: Value) -> Result<Value, ChainError> {
        let request = json!({
            "jsonrpc": "2.0",
            "method": method,
            "params": params,
            "id": 1
        });

        let response = self
            .http_client
            .post(&self.rpc_url)
            .json(&request)
            .send()
            .await?
            .json::<Value>()
            .await?;

        if let Some(error) = response.get("error") {
            let code = error.get("code").and_then(Value::as_i64).unwrap_or(0);
            let message = error
                .get("message")
                .and_then(Value::as_str)
                .unwrap_or("unknown")
                .to_string();
            return Err(ChainError::Rpc { code, message });
        }

        response
            .get("result")
            .cloned()
            .ok_or_else(|| ChainError::InvalidResponse("no result field".to_string()))
    }

    async fn send_transaction(&self, tx: Value) -> Result<TxHash, ChainError> {
        let result = self.rpc_call("eth_sendTransaction", json!([tx])).await?;
        result
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| ChainError::InvalidResponse(format!("tx hash is not a string: {result}")))
    }

    fn parse_receipt(tx_hash: &str, receipt: &Value) -> TxReceipt {
        // Nodes without post-Byzantium receipts omit the status field.
        let status = match receipt.get("status").and_then(Value::as_str) {
            Some("0x1") | None => true,
            Some(_) => false,
        };
        let contract_address = receipt
            .get("contractAddress")
            .and_then(Value::as_str)
            .map(str::to_string);
        let block_number = receipt
            .get("blockNumber")
            .and_then(Value::as_str)
            .and_then(|s| u64::from_str_radix(s.trim_start_matches("0x"), 16).ok());

        TxReceipt {
            tx_hash: tx_hash.to_string(),
            status,
            contract_address,
            block_number,
        }
    }
}

#[async_trait]
impl ChainClient for RpcClient {
    async fn send_deployment(&self, data: &[u8]) -> Result<TxHash, ChainError> {
        let tx = json!({
            "from": self.from_address,
            "data": format!("0x{}", hex::encode(data)),
            "gas": format!("{:#x}", self.gas),
        });
        self.send_transaction(tx).await
    }

    async fn send_call(&self, to: &str, data: &[u8]) -> Result<TxHash, ChainError> {
        let tx = json!({
            "from": self.from_address,
            "to": to,
            "data": format!("0x{}", hex::encode(data)),
            "gas": format!("{:#x}", self.gas),
        });
        self.send_transaction(tx).await
    }

    async fn wait_confirmed(&self, tx_hash: &str) -> Result<TxReceipt, ChainError> {
        let deadline = Instant::now() + self.confirm_timeout;
        loop {
            let result = self
                .rpc_call("eth_getTransactionReceipt", json!([tx_hash]))
                .await?;

            if !result.is_null() {
                let receipt = Self::parse_receipt(tx_hash, &result);
                if !receipt.status {
                    return Err(ChainError::Reverted(tx_hash.to_string()));
                }
                if let Some(block) = receipt.block_number {
                    debug!("{} mined in block {}", tx_hash, block);
                }
                return Ok(receipt);
            }

            if Instant::now() >= deadline {
                return Err(ChainError::ConfirmationTimeout {
                    tx_hash: tx_hash.to_string(),
                    waited_secs: self.confirm_timeout.as_secs(),
                });
            }
            sleep(self.poll_interval).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_receipt_success() {
        let receipt = json!({
            "status": "0x1",
            "contractAddress": "0x000000000000000000000000000000000000beef",
            "blockNumber": "0x10",
        });
        let parsed = RpcClient::parse_receipt("0xabc", &receipt);
        assert!(parsed.status);
        assert_eq!(
            parsed.contract_address.as_deref(),
            Some("0x000000000000000000000000000000000000beef")
        );
        assert_eq!(parsed.block_number, Some(16));
    }

    #[test]
    fn test_parse_receipt_failed_status() {
        let receipt = json!({ "status": "0x0", "contractAddress": null });
        let parsed = RpcClient::parse_receipt("0xabc", &receipt);
        assert!(!parsed.status);
        assert_eq!(parsed.contract_address, None);
    }

    #[test]
    fn test_parse_receipt_without_status_counts_as_mined() {
        let receipt = json!({ "blockNumber": "0x1" });
        let parsed = RpcClient::parse_receipt("0xabc", &receipt);
        assert!(parsed.status);
    }
}
