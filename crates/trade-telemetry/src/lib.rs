//! # Trade Telemetry
//!
//! Structured logging bootstrap shared by every TradeChain service.
//! Subsystems emit `tracing` events with a `[tc-NN]` prefix; this crate
//! owns the subscriber wiring so binaries and tests configure output in
//! one place.

pub mod config;
pub mod tracing_setup;

pub use config::TelemetryConfig;
pub use tracing_setup::init_tracing;

use thiserror::Error;

/// Telemetry initialization errors.
#[derive(Debug, Error)]
pub enum TelemetryError {
    /// The log filter directive could not be parsed.
    #[error("invalid log filter: {0}")]
    InvalidFilter(String),

    /// A global subscriber was already installed.
    #[error("subscriber already initialized: {0}")]
    AlreadyInitialized(String),
}
