//! # Action Payloads
//!
//! The wire format carries a free-form `extra` map alongside each action
//! tag. Inside the system every known action is a typed payload, parsed
//! once at the validation boundary; only genuinely unknown actions keep a
//! generic map.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::entities::Address;

/// Canonical action tags.
pub mod action {
    /// Contract deployment.
    pub const DEPLOY: &str = "deploy";
    /// Importer deposit.
    pub const DEPOSIT: &str = "deposit";
    /// Importer approval.
    pub const APPROVE_IMPORTER: &str = "approveImporter";
    /// Legacy spelling of [`APPROVE_IMPORTER`].
    pub const APPROVE_IMPORTER_LEGACY: &str = "approve_importer";
    /// Exporter approval.
    pub const APPROVE_EXPORTER: &str = "approveExporter";
    /// Legacy spelling of [`APPROVE_EXPORTER`].
    pub const APPROVE_EXPORTER_LEGACY: &str = "approve_exporter";
    /// Contract finalization.
    pub const FINALIZE: &str = "finalize";
    /// Add a logistics participant.
    pub const ADD_LOGISTIC: &str = "addLogistic";
    /// Remove a logistics participant.
    pub const REMOVE_LOGISTIC: &str = "removeLogistic";
}

/// Typed action-specific data for a [`crate::LogEntry`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum ActionPayload {
    /// Contract deployment; may carry the initial logistics set.
    Deploy {
        /// Initial logistics participants.
        #[serde(default)]
        logistics: Vec<Address>,
    },
    /// Importer deposit.
    Deposit {
        /// Amount the contract requires, as submitted.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        required_amount: Option<String>,
    },
    /// Importer approval.
    ApproveImporter,
    /// Exporter approval.
    ApproveExporter,
    /// Contract finalization.
    Finalize,
    /// Add one logistics participant.
    AddLogistic {
        /// Participant to add.
        logistic: Address,
    },
    /// Remove one logistics participant.
    RemoveLogistic {
        /// Participant to remove.
        logistic: Address,
    },
    /// Free-form action outside the known vocabulary.
    Other {
        /// Supplementary fields as submitted.
        #[serde(default)]
        extra: BTreeMap<String, Value>,
    },
}

impl ActionPayload {
    /// The logistics participant targeted by an add/remove, if any.
    pub fn logistic(&self) -> Option<&Address> {
        match self {
            Self::AddLogistic { logistic } | Self::RemoveLogistic { logistic } => Some(logistic),
            _ => None,
        }
    }
}
