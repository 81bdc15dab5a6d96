//! # Contract Ledger Service
//!
//! The main service implementing the ledger API.
//!
//! ## Architecture
//!
//! This service:
//! 1. Implements `ContractLedgerApi` for submissions and reads
//! 2. Serializes merges per contract address; distinct contracts never
//!    contend
//! 3. Uses dependency injection for all external dependencies
//!
//! ## Submission pipeline
//!
//! validate -> optional advisory verification -> per-contract lock ->
//! load snapshot -> resolve roles (first entry only) -> merge -> atomic
//! append-and-commit -> unlock -> fire-and-forget notification

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;
use shared_types::{Address, ContractState, LogEntry, RoleBindings, StepReport};
use tc_01_chain_verify::{TransactionVerifier, VerificationOutcome};
use tracing::{debug, info, warn};

use crate::domain::errors::LedgerError;
use crate::domain::merge::merge;
use crate::domain::steps::derive_step_status;
use crate::domain::validation::normalize_entry;
use crate::domain::value_objects::{EntryCandidate, LedgerConfig, NotificationPayload};
use crate::ports::inbound::ContractLedgerApi;
use crate::ports::outbound::{ContractStore, Notifier, RoleResolver, TimeSource};

/// The Contract Ledger Service.
///
/// Generic over its collaborators so tests can inject doubles for any of
/// them; no collaborator is ever reached through process-wide state.
pub struct ContractLedgerService<S, R, N, T, V>
where
    S: ContractStore,
    R: RoleResolver,
    N: Notifier + 'static,
    T: TimeSource,
    V: TransactionVerifier,
{
    /// History and snapshot persistence.
    store: S,
    /// Fallback role registry.
    roles: R,
    /// Post-commit fan-out; shared with spawned delivery tasks.
    notifier: Arc<N>,
    /// Time source for acceptance timestamps.
    time: T,
    /// Advisory on-chain verification.
    verifier: V,
    /// Service configuration.
    config: LedgerConfig,
    /// One async mutex per contract address. Writers for the same
    /// contract queue here; the map itself is only held long enough to
    /// clone the entry's lock handle.
    write_locks: Mutex<HashMap<Address, Arc<tokio::sync::Mutex<()>>>>,
}

impl<S, R, N, T, V> ContractLedgerService<S, R, N, T, V>
where
    S: ContractStore,
    R: RoleResolver,
    N: Notifier + 'static,
    T: TimeSource,
    V: TransactionVerifier,
{
    /// Create a new Contract Ledger Service with the given dependencies.
    pub fn new(store: S, roles: R, notifier: N, time: T, verifier: V, config: LedgerConfig) -> Self {
        Self {
            store,
            roles,
            notifier: Arc::new(notifier),
            time,
            verifier,
            config,
            write_locks: Mutex::new(HashMap::new()),
        }
    }

    fn contract_lock(&self, contract_address: &Address) -> Arc<tokio::sync::Mutex<()>> {
        let mut locks = self.write_locks.lock();
        locks
            .entry(contract_address.clone())
            .or_insert_with(|| Arc::new(tokio::sync::Mutex::new(())))
            .clone()
    }

    /// Registry lookup for a contract's first entry, when the entry
    /// itself does not name both parties. Failures degrade to "roles
    /// unknown"; the submission proceeds.
    async fn resolve_missing_roles(&self, entry: &LogEntry) -> Option<RoleBindings> {
        if entry.exporter.is_some() && entry.importer.is_some() {
            return None;
        }
        match self.roles.resolve_roles(&entry.contract_address).await {
            Ok(bindings) => Some(bindings),
            Err(err) => {
                warn!(
                    "[tc-02] role lookup failed for {}: {err}",
                    entry.contract_address
                );
                None
            }
        }
    }

    /// Fan out to the contract's participants and the configured admins.
    /// Runs on its own task after the commit; failure is logged only.
    fn dispatch_notification(&self, entry: &LogEntry, next_state: &ContractState) {
        let mut recipients = next_state.participants();
        for admin in &self.config.admins {
            if !recipients.contains(admin) {
                recipients.push(admin.clone());
            }
        }
        if recipients.is_empty() {
            return;
        }

        let payload = NotificationPayload::for_entry(entry);
        let notifier = Arc::clone(&self.notifier);
        tokio::spawn(async move {
            if let Err(err) = notifier.notify(&recipients, &payload).await {
                warn!(
                    "[tc-02] notification {} for {} failed: {err}",
                    payload.correlation_id, payload.contract_address
                );
            }
        });
    }
}

#[async_trait]
impl<S, R, N, T, V> ContractLedgerApi for ContractLedgerService<S, R, N, T, V>
where
    S: ContractStore,
    R: RoleResolver,
    N: Notifier + 'static,
    T: TimeSource,
    V: TransactionVerifier,
{
    async fn submit_log_entry(
        &self,
        candidate: EntryCandidate,
        verify_on_chain: bool,
    ) -> Result<LogEntry, LedgerError> {
        let now = self.time.now_millis();
        let mut entry = normalize_entry(candidate, now)?;

        if verify_on_chain {
            match self.verifier.verify(&entry.transaction_hash).await {
                VerificationOutcome::Confirmed(info) => entry.on_chain = Some(info),
                VerificationOutcome::Pending => {
                    debug!(
                        "[tc-02] {} not yet confirmed, accepting without receipt",
                        entry.transaction_hash
                    );
                }
                VerificationOutcome::Unavailable => {
                    debug!(
                        "[tc-02] verification unavailable for {}, accepting as unknown",
                        entry.transaction_hash
                    );
                }
            }
        }

        let lock = self.contract_lock(&entry.contract_address);
        let guard = lock.lock().await;

        let prior = self.store.get_snapshot(&entry.contract_address).await?;
        let resolved = if prior.is_none() {
            self.resolve_missing_roles(&entry).await
        } else {
            None
        };

        let next_state = merge(prior.as_ref(), &entry, resolved.as_ref(), now)?;
        self.store
            .append_and_commit(&entry.contract_address, entry.clone(), next_state.clone())
            .await?;
        drop(guard);

        info!(
            "[tc-02] committed {} for {} (stage {})",
            entry.action, entry.contract_address, next_state.current_stage
        );
        self.dispatch_notification(&entry, &next_state);

        Ok(entry)
    }

    async fn get_snapshot(
        &self,
        contract_address: &Address,
    ) -> Result<ContractState, LedgerError> {
        self.store
            .get_snapshot(contract_address)
            .await?
            .ok_or_else(|| LedgerError::NotFound(contract_address.clone()))
    }

    async fn get_step_status(
        &self,
        contract_address: &Address,
    ) -> Result<StepReport, LedgerError> {
        let history = self.store.get_history(contract_address).await?;
        if history.is_empty() {
            return Err(LedgerError::NotFound(contract_address.clone()));
        }
        Ok(derive_step_status(&history))
    }

    async fn get_history(&self, contract_address: &Address) -> Result<Vec<LogEntry>, LedgerError> {
        let history = self.store.get_history(contract_address).await?;
        if history.is_empty() {
            return Err(LedgerError::NotFound(contract_address.clone()));
        }
        Ok(history)
    }
}
