//! # Value Objects
//!
//! Inbound candidate shape, service configuration, and the notification
//! payload fanned out after a commit.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use shared_types::{Address, LogEntry, Timestamp, TxHash};
use uuid::Uuid;

/// A candidate log entry as submitted by a caller, before validation.
///
/// `extra` is the wire-level supplementary bag; validation turns it into
/// a typed payload and role/stage hints.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryCandidate {
    /// Target contract address.
    pub contract_address: Address,
    /// Action tag.
    pub action: String,
    /// Backing transaction hash.
    pub transaction_hash: TxHash,
    /// Submitting account.
    pub actor_address: Address,
    /// Caller-supplied timestamp; assigned at acceptance when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<Timestamp>,
    /// Supplementary fields (`exporter`, `importer`, `logistic`, `stage`,
    /// `requiredAmount`, ...).
    #[serde(default)]
    pub extra: BTreeMap<String, Value>,
}

/// Ledger service configuration.
#[derive(Debug, Clone, Default)]
pub struct LedgerConfig {
    /// Administrators copied on every contract notification.
    pub admins: Vec<Address>,
}

/// Payload handed to the notifier after a committed merge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationPayload {
    /// Correlation id for tracing the fan-out.
    pub correlation_id: Uuid,
    /// Contract the entry was committed against.
    pub contract_address: Address,
    /// Committed action tag.
    pub action: String,
    /// Acting account.
    pub actor_address: Address,
    /// Commit timestamp.
    pub timestamp: Timestamp,
}

impl NotificationPayload {
    /// Build the payload for a committed entry.
    pub fn for_entry(entry: &LogEntry) -> Self {
        Self {
            correlation_id: Uuid::new_v4(),
            contract_address: entry.contract_address.clone(),
            action: entry.action.clone(),
            actor_address: entry.actor_address.clone(),
            timestamp: entry.timestamp,
        }
    }
}
