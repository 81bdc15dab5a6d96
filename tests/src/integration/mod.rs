//! Cross-subsystem integration flows.

pub mod concurrency;
pub mod fixtures;
pub mod lifecycle_flows;
pub mod verification_flows;
