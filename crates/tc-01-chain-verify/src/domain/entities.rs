//! # Domain Entities
//!
//! Receipt data as reported by a blockchain node, and the three-valued
//! verification outcome.

use serde::{Deserialize, Serialize};
use shared_types::{OnChainInfo, TxHash, VerificationStatus};

/// A transaction receipt as fetched from a node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionReceipt {
    /// Transaction this receipt belongs to.
    pub transaction_hash: TxHash,
    /// Whether execution succeeded.
    pub succeeded: bool,
    /// Block the transaction was mined in; absent while still pending.
    pub block_number: Option<u64>,
}

/// Result of an advisory verification attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerificationOutcome {
    /// Receipt found in a block.
    Confirmed(OnChainInfo),
    /// No receipt yet, or the receipt has no block number. Not an error.
    Pending,
    /// The node could not be queried before the deadline. Callers must
    /// treat this as "unknown", never as "failed".
    Unavailable,
}

impl VerificationOutcome {
    /// Build a confirmed outcome from a mined receipt and the chain height.
    pub fn confirmed(succeeded: bool, block_number: u64, chain_height: u64) -> Self {
        let status = if succeeded {
            VerificationStatus::Success
        } else {
            VerificationStatus::Failed
        };
        Self::Confirmed(OnChainInfo {
            status,
            block_number,
            // The height snapshot may lag the receipt's block.
            confirmations: chain_height.saturating_sub(block_number) + 1,
        })
    }

    /// On-chain info when the outcome is `Confirmed`.
    pub fn into_on_chain_info(self) -> Option<OnChainInfo> {
        match self {
            Self::Confirmed(info) => Some(info),
            Self::Pending | Self::Unavailable => None,
        }
    }
}
