//! # Domain Errors
//!
//! Failures a blockchain client can report. All of them are swallowed at
//! the verifier boundary and degraded to
//! [`VerificationOutcome::Unavailable`](crate::VerificationOutcome::Unavailable);
//! nothing in this module ever reaches a ledger caller.

use thiserror::Error;

/// Errors from the blockchain node client.
#[derive(Debug, Clone, Error)]
pub enum ChainClientError {
    /// Transport or provider failure.
    #[error("network error: {0}")]
    Network(String),

    /// The node did not answer within the client's own deadline.
    #[error("node request timed out")]
    Timeout,

    /// The node answered with a receipt the client could not interpret.
    #[error("malformed receipt for {tx_hash}: {reason}")]
    MalformedReceipt {
        /// Transaction the receipt belongs to.
        tx_hash: String,
        /// What was wrong with it.
        reason: String,
    },
}
