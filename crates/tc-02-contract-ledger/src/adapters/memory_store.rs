//! # In-Memory Contract Store
//!
//! `ContractStore` implementation backed by a process-local map. The
//! write lock spans the history append and the snapshot replacement, so
//! a commit is atomic with respect to every reader.

use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::RwLock;
use shared_types::{Address, ContractState, LogEntry};

use crate::domain::errors::StoreError;
use crate::ports::outbound::ContractStore;

struct ContractRecord {
    history: Vec<LogEntry>,
    snapshot: ContractState,
}

/// In-memory implementation of `ContractStore`.
#[derive(Default)]
pub struct InMemoryContractStore {
    records: RwLock<HashMap<Address, ContractRecord>>,
}

impl InMemoryContractStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of contracts with recorded history.
    pub fn contract_count(&self) -> usize {
        self.records.read().len()
    }
}

#[async_trait]
impl ContractStore for InMemoryContractStore {
    async fn get_snapshot(
        &self,
        contract_address: &Address,
    ) -> Result<Option<ContractState>, StoreError> {
        let records = self.records.read();
        Ok(records.get(contract_address).map(|r| r.snapshot.clone()))
    }

    async fn get_history(
        &self,
        contract_address: &Address,
    ) -> Result<Vec<LogEntry>, StoreError> {
        let records = self.records.read();
        Ok(records
            .get(contract_address)
            .map(|r| r.history.clone())
            .unwrap_or_default())
    }

    async fn append_and_commit(
        &self,
        contract_address: &Address,
        entry: LogEntry,
        next_state: ContractState,
    ) -> Result<(), StoreError> {
        let mut records = self.records.write();
        match records.get_mut(contract_address) {
            Some(record) => {
                record.history.push(entry);
                record.snapshot = next_state;
            }
            None => {
                records.insert(
                    contract_address.clone(),
                    ContractRecord {
                        history: vec![entry],
                        snapshot: next_state,
                    },
                );
            }
        }
        Ok(())
    }
}
