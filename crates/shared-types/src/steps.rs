//! # Lifecycle Steps
//!
//! The fixed five-step completion vocabulary derived from a contract's
//! history. Step flags are monotonic: once a step has been observed it is
//! never unset by a later entry.

use serde::{Deserialize, Serialize};

use crate::actions::action;
use crate::entities::LogEntry;

/// One of the five fixed lifecycle steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Step {
    /// Contract deployed.
    Deploy,
    /// Deposit made.
    Deposit,
    /// Importer approved.
    ApproveImporter,
    /// Exporter approved.
    ApproveExporter,
    /// Contract finalized.
    Finalize,
}

impl Step {
    /// All steps, in lifecycle order.
    pub const ALL: [Step; 5] = [
        Step::Deploy,
        Step::Deposit,
        Step::ApproveImporter,
        Step::ApproveExporter,
        Step::Finalize,
    ];

    /// Map an action tag onto its step, accepting legacy spellings.
    pub fn from_action(action_tag: &str) -> Option<Self> {
        match action_tag {
            action::DEPLOY => Some(Self::Deploy),
            action::DEPOSIT => Some(Self::Deposit),
            action::APPROVE_IMPORTER | action::APPROVE_IMPORTER_LEGACY => {
                Some(Self::ApproveImporter)
            }
            action::APPROVE_EXPORTER | action::APPROVE_EXPORTER_LEGACY => {
                Some(Self::ApproveExporter)
            }
            action::FINALIZE => Some(Self::Finalize),
            _ => None,
        }
    }
}

/// Completion flags for the five lifecycle steps.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StepStatus {
    /// `deploy` observed.
    pub deploy: bool,
    /// `deposit` observed.
    pub deposit: bool,
    /// `approveImporter` (or legacy spelling) observed.
    pub approve_importer: bool,
    /// `approveExporter` (or legacy spelling) observed.
    pub approve_exporter: bool,
    /// `finalize` observed.
    pub finalize: bool,
}

impl StepStatus {
    /// Set the flag for `step`. Flags only ever move `false -> true`.
    pub fn mark(&mut self, step: Step) {
        match step {
            Step::Deploy => self.deploy = true,
            Step::Deposit => self.deposit = true,
            Step::ApproveImporter => self.approve_importer = true,
            Step::ApproveExporter => self.approve_exporter = true,
            Step::Finalize => self.finalize = true,
        }
    }

    /// Whether `step` has been completed.
    pub fn is_complete(&self, step: Step) -> bool {
        match step {
            Step::Deploy => self.deploy,
            Step::Deposit => self.deposit,
            Step::ApproveImporter => self.approve_importer,
            Step::ApproveExporter => self.approve_exporter,
            Step::Finalize => self.finalize,
        }
    }
}

/// Step completion flags plus the most recent action, as derived from a
/// contract's full ordered history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StepReport {
    /// Completion flags.
    pub step_status: StepStatus,
    /// Last element of the history, absent for an empty history.
    pub last_action: Option<LogEntry>,
}
