//! Domain layer: pure validation, merge, and derivation logic.

pub mod errors;
pub mod invariants;
pub mod merge;
pub mod steps;
pub mod validation;
pub mod value_objects;

pub use errors::{
    ConflictError, LedgerError, NotifyError, RoleResolverError, StoreError, ValidationError,
};
pub use merge::merge;
pub use steps::derive_step_status;
pub use validation::normalize_entry;
pub use value_objects::{EntryCandidate, LedgerConfig, NotificationPayload};
