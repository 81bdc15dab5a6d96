//! Adapters layer: concrete implementations of the outbound ports.

pub mod memory_store;

pub use memory_store::InMemoryContractStore;
