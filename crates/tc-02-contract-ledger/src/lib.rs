//! # TC-02 Contract Ledger
//!
//! The system's authority for a trade contract's lifecycle. Each contract
//! is tracked as an append-only sequence of action log entries; the latest
//! snapshot and the five-step completion map are derived from that
//! history, never stored authoritatively anywhere else.
//!
//! ## Responsibilities
//!
//! - Validate and normalize candidate log entries
//! - Fold an accepted entry into the contract's snapshot (copy-on-write),
//!   rejecting inconsistent logistics mutations
//! - Derive the lifecycle step-status map by replaying stored history
//! - Serialize merges per contract address while keeping distinct
//!   contracts fully parallel
//! - Notify participants after commit, fire-and-forget
//!
//! ## Hexagonal Architecture
//!
//! - **Domain Layer** (`domain/`): pure validation, merge and derivation
//!   logic, no I/O dependencies
//! - **Ports Layer** (`ports/`): `ContractLedgerApi` inbound trait,
//!   `ContractStore` / `RoleResolver` / `Notifier` / `TimeSource` outbound
//!   traits
//! - **Adapters Layer** (`adapters/`): in-memory store
//! - **Service** (`service.rs`): the submit pipeline wiring it together
//!
//! ## Failure Semantics
//!
//! Validation and conflict errors abort a submission before any
//! persistence; store failures abort the whole operation and propagate;
//! notification failures are logged and never surface to the caller.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

// Re-export main types for convenience
pub use domain::{
    derive_step_status, merge, normalize_entry, ConflictError, EntryCandidate, LedgerConfig,
    LedgerError, NotificationPayload, NotifyError, RoleResolverError, StoreError, ValidationError,
};
pub use ports::{
    ContractLedgerApi, ContractStore, FixedTimeSource, MockNotifier, MockRoleResolver, Notifier,
    RoleResolver, SystemTimeSource, TimeSource,
};
pub use adapters::InMemoryContractStore;
pub use service::ContractLedgerService;
