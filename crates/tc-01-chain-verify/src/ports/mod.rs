//! Ports layer: inbound verification API, outbound node client SPI.

pub mod inbound;
pub mod outbound;

pub use inbound::TransactionVerifier;
pub use outbound::{BlockchainClient, MockChainClient};
