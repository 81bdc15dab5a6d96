//! # Step Derivation
//!
//! Replays a contract's full ordered history into the five-flag step
//! completion map. Read-only and side-effect free; can be recomputed at
//! any time and always agrees with the snapshot's `status` for the most
//! recent action.

use shared_types::{LogEntry, Step, StepReport, StepStatus};

/// Derive the step completion map and last action from `history`.
///
/// Flags are monotonic: an entry outside the step vocabulary never clears
/// a flag set by an earlier entry.
pub fn derive_step_status(history: &[LogEntry]) -> StepReport {
    let mut step_status = StepStatus::default();
    for entry in history {
        if let Some(step) = Step::from_action(&entry.action) {
            step_status.mark(step);
        }
    }

    StepReport {
        step_status,
        last_action: history.last().cloned(),
    }
}
