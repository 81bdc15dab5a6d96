//! # Candidate Validation
//!
//! Turns an [`EntryCandidate`] into a normalized [`LogEntry`]: required
//! fields checked, the `extra` bag parsed into a typed payload and
//! role/stage hints, and the timestamp assigned when the caller omitted
//! it. Pure over `(candidate, now)`; no side effects beyond normalization.

use std::collections::BTreeMap;

use serde_json::Value;
use shared_types::{action, ActionPayload, Address, LogEntry, Timestamp};

use crate::domain::errors::ValidationError;
use crate::domain::value_objects::EntryCandidate;

/// Validate and normalize a candidate entry.
pub fn normalize_entry(
    candidate: EntryCandidate,
    now: Timestamp,
) -> Result<LogEntry, ValidationError> {
    require_non_empty("contractAddress", &candidate.contract_address)?;
    require_non_empty("action", &candidate.action)?;
    require_non_empty("transactionHash", &candidate.transaction_hash)?;
    require_non_empty("actorAddress", &candidate.actor_address)?;

    let exporter = optional_string(&candidate.extra, "exporter")?;
    let importer = optional_string(&candidate.extra, "importer")?;
    let stage = optional_string(&candidate.extra, "stage")?;
    let payload = parse_payload(&candidate.action, &candidate.extra)?;

    Ok(LogEntry {
        contract_address: candidate.contract_address,
        action: candidate.action,
        transaction_hash: candidate.transaction_hash,
        actor_address: candidate.actor_address,
        timestamp: candidate.timestamp.unwrap_or(now),
        exporter,
        importer,
        stage,
        payload,
        on_chain: None,
    })
}

fn parse_payload(
    action_tag: &str,
    extra: &BTreeMap<String, Value>,
) -> Result<ActionPayload, ValidationError> {
    match action_tag {
        action::DEPLOY => Ok(ActionPayload::Deploy {
            logistics: string_list(extra, "logistics")?,
        }),
        action::DEPOSIT => Ok(ActionPayload::Deposit {
            required_amount: amount_string(extra, "requiredAmount")?,
        }),
        action::APPROVE_IMPORTER | action::APPROVE_IMPORTER_LEGACY => {
            Ok(ActionPayload::ApproveImporter)
        }
        action::APPROVE_EXPORTER | action::APPROVE_EXPORTER_LEGACY => {
            Ok(ActionPayload::ApproveExporter)
        }
        action::FINALIZE => Ok(ActionPayload::Finalize),
        action::ADD_LOGISTIC => Ok(ActionPayload::AddLogistic {
            logistic: required_string(extra, "logistic")?,
        }),
        action::REMOVE_LOGISTIC => Ok(ActionPayload::RemoveLogistic {
            logistic: required_string(extra, "logistic")?,
        }),
        _ => Ok(ActionPayload::Other {
            extra: extra.clone(),
        }),
    }
}

fn require_non_empty(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::MissingField { field });
    }
    Ok(())
}

/// A string-valued `extra` field, `None` when absent.
fn optional_string(
    extra: &BTreeMap<String, Value>,
    key: &str,
) -> Result<Option<Address>, ValidationError> {
    match extra.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) if !s.trim().is_empty() => Ok(Some(s.clone())),
        Some(Value::String(_)) => Err(ValidationError::MalformedExtra {
            key: key.to_string(),
            reason: "must not be empty".to_string(),
        }),
        Some(other) => Err(ValidationError::MalformedExtra {
            key: key.to_string(),
            reason: format!("expected string, got {other}"),
        }),
    }
}

/// A string-valued `extra` field that must be present.
fn required_string(extra: &BTreeMap<String, Value>, key: &str) -> Result<Address, ValidationError> {
    optional_string(extra, key)?.ok_or(ValidationError::MalformedExtra {
        key: key.to_string(),
        reason: "required for this action".to_string(),
    })
}

/// A list of strings, empty when absent.
fn string_list(
    extra: &BTreeMap<String, Value>,
    key: &str,
) -> Result<Vec<Address>, ValidationError> {
    match extra.get(key) {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| match item {
                Value::String(s) if !s.trim().is_empty() => Ok(s.clone()),
                other => Err(ValidationError::MalformedExtra {
                    key: key.to_string(),
                    reason: format!("expected list of strings, got element {other}"),
                }),
            })
            .collect(),
        Some(other) => Err(ValidationError::MalformedExtra {
            key: key.to_string(),
            reason: format!("expected list of strings, got {other}"),
        }),
    }
}

/// An amount field; numbers are normalized to their string form.
fn amount_string(
    extra: &BTreeMap<String, Value>,
    key: &str,
) -> Result<Option<String>, ValidationError> {
    match extra.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(other) => Err(ValidationError::MalformedExtra {
            key: key.to_string(),
            reason: format!("expected string or number, got {other}"),
        }),
    }
}
