//! # Inbound Ports (Driving Ports)
//!
//! The verification API this subsystem exposes to the ledger.

use async_trait::async_trait;
use shared_types::TxHash;

use crate::domain::VerificationOutcome;

/// Advisory transaction verification.
///
/// Implementations never fail: every provider error is folded into
/// [`VerificationOutcome::Unavailable`], and a missing receipt is
/// [`VerificationOutcome::Pending`]. The ledger attaches on-chain info
/// only on a `Confirmed` outcome and accepts the entry regardless.
#[async_trait]
pub trait TransactionVerifier: Send + Sync {
    /// Check `tx_hash` against the chain.
    async fn verify(&self, tx_hash: &TxHash) -> VerificationOutcome;
}
