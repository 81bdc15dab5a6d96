//! # Outbound Ports (Driven Ports)
//!
//! The node client SPI required by the verifier, plus a mock for tests.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use shared_types::TxHash;

use crate::domain::{ChainClientError, TransactionReceipt};

/// Read-only client against a blockchain node.
///
/// Calls are independent, idempotent round-trips; they may be retried
/// freely and run in parallel with unrelated work.
#[async_trait]
pub trait BlockchainClient: Send + Sync {
    /// Fetch the receipt for `tx_hash`, `None` while no receipt exists.
    async fn get_transaction_receipt(
        &self,
        tx_hash: &TxHash,
    ) -> Result<Option<TransactionReceipt>, ChainClientError>;

    /// Current chain height (latest block number).
    async fn get_chain_height(&self) -> Result<u64, ChainClientError>;
}

// =============================================================================
// Mock Implementation for Testing
// =============================================================================

/// Mock node client for testing.
#[derive(Clone, Default)]
pub struct MockChainClient {
    /// Receipts by transaction hash.
    pub receipts: HashMap<TxHash, TransactionReceipt>,
    /// Reported chain height.
    pub height: u64,
    /// Should every call fail?
    pub should_fail: bool,
    /// Artificial latency before answering, for deadline tests.
    pub latency: Option<Duration>,
}

impl MockChainClient {
    /// Client that knows a single mined receipt.
    pub fn with_receipt(tx_hash: &str, succeeded: bool, block_number: u64, height: u64) -> Self {
        let mut receipts = HashMap::new();
        receipts.insert(
            tx_hash.to_string(),
            TransactionReceipt {
                transaction_hash: tx_hash.to_string(),
                succeeded,
                block_number: Some(block_number),
            },
        );
        Self {
            receipts,
            height,
            ..Default::default()
        }
    }

    async fn simulate_latency(&self) {
        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }
    }
}

#[async_trait]
impl BlockchainClient for MockChainClient {
    async fn get_transaction_receipt(
        &self,
        tx_hash: &TxHash,
    ) -> Result<Option<TransactionReceipt>, ChainClientError> {
        self.simulate_latency().await;
        if self.should_fail {
            return Err(ChainClientError::Network("mock failure".to_string()));
        }
        Ok(self.receipts.get(tx_hash).cloned())
    }

    async fn get_chain_height(&self) -> Result<u64, ChainClientError> {
        self.simulate_latency().await;
        if self.should_fail {
            return Err(ChainClientError::Network("mock failure".to_string()));
        }
        Ok(self.height)
    }
}
