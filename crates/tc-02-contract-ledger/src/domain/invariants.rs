//! # Domain Invariants
//!
//! Business rules every snapshot and derivation must satisfy. Checked via
//! `debug_assert!` in the merge path and asserted directly in tests.

use std::collections::BTreeSet;

use shared_types::{ContractState, StepStatus};

/// Invariant: the logistics set never contains the same address twice.
pub fn invariant_unique_logistics(state: &ContractState) -> bool {
    let mut seen = BTreeSet::new();
    state.logistics.iter().all(|l| seen.insert(l.as_str()))
}

/// Invariant: known roles never regress to unknown across a merge.
pub fn invariant_roles_preserved(prior: &ContractState, next: &ContractState) -> bool {
    !(prior.exporter.is_some() && next.exporter.is_none())
        && !(prior.importer.is_some() && next.importer.is_none())
}

/// Invariant: step flags only ever gain as history grows.
pub fn invariant_monotonic_steps(earlier: &StepStatus, later: &StepStatus) -> bool {
    (!earlier.deploy || later.deploy)
        && (!earlier.deposit || later.deposit)
        && (!earlier.approve_importer || later.approve_importer)
        && (!earlier.approve_exporter || later.approve_exporter)
        && (!earlier.finalize || later.finalize)
}
