//! # TC-01 Chain Verification
//!
//! Advisory on-chain cross-checks for submitted log entries.
//!
//! ## Purpose
//!
//! Given a transaction hash, query a blockchain node for the receipt and
//! the current chain height, and report one of three outcomes:
//!
//! - `Confirmed`: receipt found in a block; carries status, block number
//!   and confirmation depth
//! - `Pending`: no receipt yet, or the receipt has no block number
//! - `Unavailable`: the node could not be reached before the deadline
//!
//! Verification is advisory. It never gates acceptance of a log entry, and
//! a provider failure is degraded to `Unavailable` rather than propagated:
//! "unknown" and "confirmed failed" are distinct outcomes and must never
//! be conflated.
//!
//! ## Module Structure
//!
//! ```text
//! tc-01-chain-verify/
//! ├── domain/          # TransactionReceipt, VerificationOutcome, errors
//! ├── ports/           # TransactionVerifier API, BlockchainClient SPI
//! └── verifier.rs      # ChainVerifier service
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod domain;
pub mod ports;
pub mod verifier;

// Re-exports
pub use domain::{ChainClientError, TransactionReceipt, VerificationOutcome};
pub use ports::{BlockchainClient, MockChainClient, TransactionVerifier};
pub use verifier::ChainVerifier;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
