//! # Inbound Ports (Driving Ports)
//!
//! The primary API of the contract ledger, transport-agnostic. HTTP
//! routing, authentication and request shaping live outside this crate
//! and call in through this trait.

use async_trait::async_trait;
use shared_types::{Address, ContractState, LogEntry, StepReport};

use crate::domain::errors::LedgerError;
use crate::domain::value_objects::EntryCandidate;

/// Primary API for the contract ledger.
#[async_trait]
pub trait ContractLedgerApi: Send + Sync {
    /// Validate, optionally verify on-chain, merge, persist, and notify.
    ///
    /// Returns the accepted entry, with on-chain info attached when
    /// `verify_on_chain` was set and the receipt was confirmed. A
    /// verification that is pending or unavailable never blocks
    /// acceptance.
    ///
    /// ## Errors
    ///
    /// - `Validation`: malformed candidate; nothing persisted
    /// - `Conflict`: logistics mutation contradicts current state;
    ///   nothing persisted
    /// - `Storage`: the atomic append-and-commit failed
    async fn submit_log_entry(
        &self,
        candidate: EntryCandidate,
        verify_on_chain: bool,
    ) -> Result<LogEntry, LedgerError>;

    /// Latest snapshot for a contract.
    ///
    /// ## Errors
    ///
    /// - `NotFound`: no submissions recorded for this address
    async fn get_snapshot(&self, contract_address: &Address)
        -> Result<ContractState, LedgerError>;

    /// Step completion map plus last action, derived by replaying the
    /// stored history.
    ///
    /// ## Errors
    ///
    /// - `NotFound`: no submissions recorded for this address
    async fn get_step_status(&self, contract_address: &Address)
        -> Result<StepReport, LedgerError>;

    /// Full ordered history for a contract.
    ///
    /// ## Errors
    ///
    /// - `NotFound`: no submissions recorded for this address
    async fn get_history(&self, contract_address: &Address)
        -> Result<Vec<LogEntry>, LedgerError>;
}
