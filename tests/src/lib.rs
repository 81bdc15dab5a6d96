//! # TradeChain Test Suite
//!
//! Unified test crate containing:
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! └── integration/      # Cross-subsystem flows
//!     ├── lifecycle_flows.rs    # deploy -> ... -> finalize pipelines
//!     ├── concurrency.rs        # same-contract serialization races
//!     └── verification_flows.rs # advisory on-chain checks
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p tc-tests
//!
//! # By category
//! cargo test -p tc-tests integration::
//! ```

#![allow(dead_code)]

pub mod integration;
