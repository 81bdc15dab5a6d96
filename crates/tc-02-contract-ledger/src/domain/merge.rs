//! # Snapshot Merge
//!
//! Folds one accepted log entry into a contract's prior snapshot,
//! producing the next snapshot. The fold is a pure, deterministic function
//! of `(prior, entry)` and never mutates the prior snapshot in place;
//! replaying a history therefore always reproduces the same final state.

use shared_types::{ActionPayload, Address, ContractState, LogEntry, RoleBindings, Timestamp};

use crate::domain::errors::ConflictError;
use crate::domain::invariants::invariant_unique_logistics;

/// Fold `entry` into `prior`, producing the next snapshot.
///
/// `resolved` carries registry roles, consulted only when `prior` is
/// absent (a contract's first entry) and the entry itself under-specifies
/// the participants. `now` becomes the snapshot's `last_updated`.
///
/// ## Errors
///
/// - [`ConflictError::LogisticAlreadyAdded`]: `addLogistic` for a present
///   address
/// - [`ConflictError::LogisticNotFound`]: `removeLogistic` for an absent
///   address
///
/// Both leave `prior` untouched; nothing is partially applied.
pub fn merge(
    prior: Option<&ContractState>,
    entry: &LogEntry,
    resolved: Option<&RoleBindings>,
    now: Timestamp,
) -> Result<ContractState, ConflictError> {
    let mut next = match prior {
        Some(prev) => prev.clone(),
        None => initial_state(entry, resolved),
    };

    // Roles only move unknown -> known, or are explicitly overwritten.
    if let Some(exporter) = &entry.exporter {
        next.exporter = Some(exporter.clone());
    }
    if let Some(importer) = &entry.importer {
        next.importer = Some(importer.clone());
    }

    next.status = entry.action.clone();
    if let Some(stage) = &entry.stage {
        next.current_stage = stage.clone();
    }
    next.last_updated = now;

    apply_logistics(&mut next, entry)?;
    debug_assert!(invariant_unique_logistics(&next));

    Ok(next)
}

/// Synthesize the baseline for a contract's first entry.
fn initial_state(entry: &LogEntry, resolved: Option<&RoleBindings>) -> ContractState {
    let fallback = resolved.cloned().unwrap_or_default();

    let mut logistics = Vec::new();
    if let ActionPayload::Deploy {
        logistics: initial, ..
    } = &entry.payload
    {
        for address in initial {
            push_unique(&mut logistics, address);
        }
    }
    if logistics.is_empty() {
        for address in &fallback.logistics {
            push_unique(&mut logistics, address);
        }
    }

    ContractState {
        exporter: fallback.exporter,
        importer: fallback.importer,
        logistics,
        status: entry.action.clone(),
        current_stage: ContractState::INITIAL_STAGE.to_string(),
        last_updated: entry.timestamp,
    }
}

fn apply_logistics(state: &mut ContractState, entry: &LogEntry) -> Result<(), ConflictError> {
    match &entry.payload {
        ActionPayload::AddLogistic { logistic } => {
            if state.has_logistic(logistic) {
                return Err(ConflictError::LogisticAlreadyAdded(logistic.clone()));
            }
            state.logistics.push(logistic.clone());
        }
        ActionPayload::RemoveLogistic { logistic } => {
            let Some(position) = state.logistics.iter().position(|l| l == logistic) else {
                return Err(ConflictError::LogisticNotFound(logistic.clone()));
            };
            state.logistics.remove(position);
        }
        _ => {}
    }
    Ok(())
}

fn push_unique(logistics: &mut Vec<Address>, address: &Address) {
    if !logistics.iter().any(|l| l == address) {
        logistics.push(address.clone());
    }
}
