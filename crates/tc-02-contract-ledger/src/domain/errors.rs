//! # Domain Errors
//!
//! The ledger's error taxonomy. The split matters to callers: a
//! `Validation` error means "your input was invalid, resubmit corrected",
//! a `Conflict` means "inspect current state and retry with a corrected
//! action", `NotFound` means "nothing recorded yet", and `Storage` means
//! "the write could not complete".

use shared_types::Address;
use thiserror::Error;

/// A candidate entry was malformed. Raised before any persistence.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is absent or empty. Field names are wire names.
    #[error("missing or empty required field: {field}")]
    MissingField {
        /// Wire name of the offending field.
        field: &'static str,
    },

    /// A supplementary field is present but has the wrong shape.
    #[error("malformed value for `{key}`: {reason}")]
    MalformedExtra {
        /// Key within the `extra` map.
        key: String,
        /// What was wrong with the value.
        reason: String,
    },
}

/// A logistics mutation contradicts the current snapshot. Raised before
/// any persistence; the prior snapshot is left untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConflictError {
    /// `addLogistic` for an address already in the set.
    #[error("logistic already added: {0}")]
    LogisticAlreadyAdded(Address),

    /// `removeLogistic` for an address not in the set.
    #[error("logistic not found: {0}")]
    LogisticNotFound(Address),
}

/// Persistence failure. Always fatal for the submission that hit it.
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    /// Underlying I/O failure.
    #[error("storage I/O error: {message}")]
    Io {
        /// Driver-level description.
        message: String,
    },

    /// A record could not be encoded or decoded.
    #[error("storage serialization error: {message}")]
    Serialization {
        /// Driver-level description.
        message: String,
    },

    /// The store is unreachable.
    #[error("storage unavailable: {message}")]
    Unavailable {
        /// Driver-level description.
        message: String,
    },
}

/// Role registry lookup failure. Degraded to "roles unknown" by the
/// service, never surfaced to the submitter.
#[derive(Debug, Clone, Error)]
#[error("role lookup failed: {0}")]
pub struct RoleResolverError(pub String);

/// Notification delivery failure. Logged after commit, never surfaced.
#[derive(Debug, Clone, Error)]
#[error("notification failed: {0}")]
pub struct NotifyError(pub String);

/// Errors surfaced by the ledger API.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// The candidate entry was malformed.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// The entry conflicts with the contract's current state.
    #[error("conflict with current state: {0}")]
    Conflict(#[from] ConflictError),

    /// No history exists for this contract address.
    #[error("no contract recorded at {0}")]
    NotFound(Address),

    /// The persistence layer failed; nothing was committed.
    #[error("storage failure: {0}")]
    Storage(#[from] StoreError),
}
