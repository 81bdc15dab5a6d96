//! # Outbound Ports (Driven Ports)
//!
//! SPIs the ledger requires from its collaborators, plus mock
//! implementations for testing. Implementations of the real store,
//! registry and notification transport live outside this crate.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use async_trait::async_trait;
use parking_lot::Mutex;
use shared_types::{Address, ContractState, LogEntry, RoleBindings, Timestamp};

use crate::domain::errors::{NotifyError, RoleResolverError, StoreError};
use crate::domain::value_objects::NotificationPayload;

/// Persistence for per-contract history and snapshots.
#[async_trait]
pub trait ContractStore: Send + Sync {
    /// Latest snapshot, `None` when nothing was recorded yet.
    async fn get_snapshot(
        &self,
        contract_address: &Address,
    ) -> Result<Option<ContractState>, StoreError>;

    /// Full ordered history; empty when nothing was recorded yet.
    async fn get_history(&self, contract_address: &Address)
        -> Result<Vec<LogEntry>, StoreError>;

    /// Append `entry` and replace the snapshot with `next_state`.
    ///
    /// Must be atomic: the history append and the snapshot replacement
    /// land together or not at all.
    async fn append_and_commit(
        &self,
        contract_address: &Address,
        entry: LogEntry,
        next_state: ContractState,
    ) -> Result<(), StoreError>;
}

/// Fallback role lookup, consulted only when a contract's first entry
/// under-specifies its participants.
#[async_trait]
pub trait RoleResolver: Send + Sync {
    /// Roles registered for `contract_address`.
    async fn resolve_roles(
        &self,
        contract_address: &Address,
    ) -> Result<RoleBindings, RoleResolverError>;
}

/// Best-effort notification fan-out. Runs after the commit; a failure
/// never invalidates the merge.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Deliver `payload` to `recipients`.
    async fn notify(
        &self,
        recipients: &[Address],
        payload: &NotificationPayload,
    ) -> Result<(), NotifyError>;
}

/// Abstract interface for time operations (for testability).
pub trait TimeSource: Send + Sync {
    /// Current timestamp in milliseconds since epoch.
    fn now_millis(&self) -> Timestamp;
}

/// Wall-clock time source.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemTimeSource;

impl TimeSource for SystemTimeSource {
    fn now_millis(&self) -> Timestamp {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    }
}

// =============================================================================
// Mock Implementations for Testing
// =============================================================================

/// Mock role resolver for testing.
#[derive(Clone, Default)]
pub struct MockRoleResolver {
    /// Roles returned for every contract.
    pub bindings: RoleBindings,
    /// Should lookups fail?
    pub should_fail: bool,
}

#[async_trait]
impl RoleResolver for MockRoleResolver {
    async fn resolve_roles(
        &self,
        _contract_address: &Address,
    ) -> Result<RoleBindings, RoleResolverError> {
        if self.should_fail {
            return Err(RoleResolverError("mock failure".to_string()));
        }
        Ok(self.bindings.clone())
    }
}

/// Mock notifier that records every delivery.
#[derive(Clone, Default)]
pub struct MockNotifier {
    /// Deliveries observed so far.
    pub sent: Arc<Mutex<Vec<(Vec<Address>, NotificationPayload)>>>,
    /// Should deliveries fail?
    pub should_fail: bool,
}

impl MockNotifier {
    /// Number of deliveries observed.
    pub fn delivery_count(&self) -> usize {
        self.sent.lock().len()
    }
}

#[async_trait]
impl Notifier for MockNotifier {
    async fn notify(
        &self,
        recipients: &[Address],
        payload: &NotificationPayload,
    ) -> Result<(), NotifyError> {
        if self.should_fail {
            return Err(NotifyError("mock failure".to_string()));
        }
        self.sent
            .lock()
            .push((recipients.to_vec(), payload.clone()));
        Ok(())
    }
}

/// Deterministic time source for testing.
#[derive(Default)]
pub struct FixedTimeSource {
    millis: AtomicU64,
}

impl FixedTimeSource {
    /// Start the clock at `millis`.
    pub fn at(millis: Timestamp) -> Self {
        Self {
            millis: AtomicU64::new(millis),
        }
    }

    /// Advance the clock.
    pub fn tick(&self, delta: Timestamp) {
        self.millis.fetch_add(delta, Ordering::SeqCst);
    }
}

impl TimeSource for FixedTimeSource {
    fn now_millis(&self) -> Timestamp {
        self.millis.load(Ordering::SeqCst)
    }
}
