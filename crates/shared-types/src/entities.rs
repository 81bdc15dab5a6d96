//! # Core Domain Entities
//!
//! Defines the entities of the trade-contract ledger.
//!
//! ## Clusters
//!
//! - **Ledger**: [`LogEntry`], [`ContractState`]
//! - **Roles**: [`RoleBindings`]
//! - **Verification**: [`OnChainInfo`], [`VerificationStatus`]

use serde::{Deserialize, Serialize};

use crate::actions::ActionPayload;

/// A participant or contract account address (hex string, e.g. `"0xE"`).
pub type Address = String;

/// A blockchain transaction hash.
pub type TxHash = String;

/// Milliseconds since the Unix epoch.
pub type Timestamp = u64;

/// Outcome reported by a transaction receipt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerificationStatus {
    /// The transaction executed successfully on-chain.
    Success,
    /// The transaction was mined but reverted.
    Failed,
}

/// On-chain confirmation data attached to a verified log entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OnChainInfo {
    /// Receipt status.
    pub status: VerificationStatus,
    /// Block the transaction was mined in.
    pub block_number: u64,
    /// `chain_height - block_number + 1` at verification time.
    pub confirmations: u64,
}

/// Contract roles as known to an external registry.
///
/// Used as a fallback when a contract's first log entry under-specifies
/// its participants.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleBindings {
    /// Exporter account, if registered.
    pub exporter: Option<Address>,
    /// Importer account, if registered.
    pub importer: Option<Address>,
    /// Registered logistics participants.
    #[serde(default)]
    pub logistics: Vec<Address>,
}

/// One immutable recorded action against a contract.
///
/// History per contract is append-only and ordered by arrival; entries are
/// never mutated or deleted after commit. Timestamps are non-decreasing,
/// with ties broken by append order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogEntry {
    /// Address of the trade contract this entry belongs to.
    pub contract_address: Address,
    /// Action tag exactly as submitted (e.g. `deploy`, `addLogistic`).
    pub action: String,
    /// Hash of the transaction backing this action.
    pub transaction_hash: TxHash,
    /// Account that performed the action.
    pub actor_address: Address,
    /// Acceptance time, server-assigned when the submitter omits it.
    pub timestamp: Timestamp,
    /// Exporter role hint; may ride on any action.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exporter: Option<Address>,
    /// Importer role hint; may ride on any action.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub importer: Option<Address>,
    /// Free-form progress marker carried by some entries.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stage: Option<String>,
    /// Typed action-specific data.
    pub payload: ActionPayload,
    /// Advisory on-chain confirmation data, when verification succeeded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on_chain: Option<OnChainInfo>,
}

/// The latest derived view of one contract.
///
/// Snapshots are produced exclusively by the state merger as a pure fold
/// over `(prior, entry)`; a prior snapshot is never mutated in place, which
/// is what allows concurrent readers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractState {
    /// Exporter account; unknown until some entry or the role registry
    /// supplies it, never silently cleared afterwards.
    pub exporter: Option<Address>,
    /// Importer account; same lifecycle as `exporter`.
    pub importer: Option<Address>,
    /// Logistics participants, duplicate-free, in insertion order.
    pub logistics: Vec<Address>,
    /// Action of the most recently merged entry.
    pub status: String,
    /// Progress marker; starts at [`ContractState::INITIAL_STAGE`].
    pub current_stage: String,
    /// Timestamp of the last merge.
    pub last_updated: Timestamp,
}

impl ContractState {
    /// Stage assigned to a contract's first snapshot.
    pub const INITIAL_STAGE: &'static str = "1";

    /// Whether `address` is currently a logistics participant.
    pub fn has_logistic(&self, address: &str) -> bool {
        self.logistics.iter().any(|l| l == address)
    }

    /// All current participants: exporter, importer, then logistics.
    pub fn participants(&self) -> Vec<Address> {
        let mut out = Vec::with_capacity(2 + self.logistics.len());
        if let Some(exporter) = &self.exporter {
            out.push(exporter.clone());
        }
        if let Some(importer) = &self.importer {
            out.push(importer.clone());
        }
        out.extend(self.logistics.iter().cloned());
        out
    }
}
