//! # Shared Types Crate
//!
//! This crate contains the domain entities shared across the TradeChain
//! subsystems: action log entries, contract snapshots, and the step-status
//! vocabulary.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All cross-subsystem types are defined here.
//! - **Typed payloads**: Known actions carry a typed [`ActionPayload`];
//!   downstream code never probes an untyped field bag.
//! - **Append-only history**: A committed [`LogEntry`] is immutable; the
//!   snapshot is always re-derivable from the entry sequence.

pub mod actions;
pub mod entities;
pub mod steps;

pub use actions::*;
pub use entities::*;
pub use steps::*;
