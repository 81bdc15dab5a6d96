//! Ports layer: inbound ledger API, outbound collaborator SPIs.

pub mod inbound;
pub mod outbound;

pub use inbound::ContractLedgerApi;
pub use outbound::{
    ContractStore, FixedTimeSource, MockNotifier, MockRoleResolver, Notifier, RoleResolver,
    SystemTimeSource, TimeSource,
};
