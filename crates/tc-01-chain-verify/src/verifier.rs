//! # Chain Verifier Service
//!
//! Folds a receipt query and a height query into a single three-valued
//! [`VerificationOutcome`]. The node client is constructor-injected; there
//! is no process-wide client instance.

use std::time::Duration;

use async_trait::async_trait;
use shared_types::TxHash;
use tracing::{debug, warn};

use crate::domain::{ChainClientError, VerificationOutcome};
use crate::ports::inbound::TransactionVerifier;
use crate::ports::outbound::BlockchainClient;

/// Default per-verification deadline.
pub const DEFAULT_DEADLINE: Duration = Duration::from_secs(5);

/// Advisory transaction verifier over a [`BlockchainClient`].
pub struct ChainVerifier<C: BlockchainClient> {
    /// Injected node client.
    client: C,
    /// Deadline after which the outcome degrades to `Unavailable`.
    deadline: Duration,
}

impl<C: BlockchainClient> ChainVerifier<C> {
    /// Create a verifier with the default deadline.
    pub fn new(client: C) -> Self {
        Self {
            client,
            deadline: DEFAULT_DEADLINE,
        }
    }

    /// Override the verification deadline.
    pub fn with_deadline(mut self, deadline: Duration) -> Self {
        self.deadline = deadline;
        self
    }

    async fn query(&self, tx_hash: &TxHash) -> Result<VerificationOutcome, ChainClientError> {
        let Some(receipt) = self.client.get_transaction_receipt(tx_hash).await? else {
            debug!("[tc-01] no receipt yet for {tx_hash}");
            return Ok(VerificationOutcome::Pending);
        };
        let Some(block_number) = receipt.block_number else {
            debug!("[tc-01] receipt for {tx_hash} not yet in a block");
            return Ok(VerificationOutcome::Pending);
        };

        let height = self.client.get_chain_height().await?;
        Ok(VerificationOutcome::confirmed(
            receipt.succeeded,
            block_number,
            height,
        ))
    }
}

#[async_trait]
impl<C: BlockchainClient> TransactionVerifier for ChainVerifier<C> {
    async fn verify(&self, tx_hash: &TxHash) -> VerificationOutcome {
        match tokio::time::timeout(self.deadline, self.query(tx_hash)).await {
            Ok(Ok(outcome)) => outcome,
            Ok(Err(err)) => {
                warn!("[tc-01] verification unavailable for {tx_hash}: {err}");
                VerificationOutcome::Unavailable
            }
            Err(_) => {
                warn!(
                    "[tc-01] verification of {tx_hash} exceeded {:?}",
                    self.deadline
                );
                VerificationOutcome::Unavailable
            }
        }
    }
}
