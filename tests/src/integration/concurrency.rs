//! # Concurrency Flow Tests
//!
//! Exercises the per-contract serialization invariant: merges for one
//! contract address commit one at a time, while distinct contracts
//! proceed in parallel.

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crate::integration::fixtures::*;
    use tc_02_contract_ledger::{ConflictError, ContractLedgerApi, LedgerError};

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_duplicate_add_logistic_single_winner() {
        let (ledger, _) = ledger();
        let ledger = Arc::new(ledger);
        ledger
            .submit_log_entry(deploy("0xRace", "0xE", "0xI"), false)
            .await
            .unwrap();

        let a = {
            let ledger = Arc::clone(&ledger);
            tokio::spawn(async move {
                ledger
                    .submit_log_entry(add_logistic("0xRace", "0xL2"), false)
                    .await
            })
        };
        let b = {
            let ledger = Arc::clone(&ledger);
            tokio::spawn(async move {
                ledger
                    .submit_log_entry(add_logistic("0xRace", "0xL2"), false)
                    .await
            })
        };

        let results = [a.await.unwrap(), b.await.unwrap()];
        let successes = results.iter().filter(|r| r.is_ok()).count();
        assert_eq!(successes, 1, "exactly one submission must win");

        let conflict = results.into_iter().find(|r| r.is_err()).unwrap();
        assert!(matches!(
            conflict.unwrap_err(),
            LedgerError::Conflict(ConflictError::LogisticAlreadyAdded(ref l)) if l == "0xL2"
        ));

        let snapshot = ledger.get_snapshot(&"0xRace".to_string()).await.unwrap();
        assert_eq!(snapshot.logistics, vec!["0xL2"]);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_distinct_contracts_proceed_in_parallel() {
        let (ledger, _) = ledger();
        let ledger = Arc::new(ledger);

        let mut handles = Vec::new();
        for i in 0..8 {
            let ledger = Arc::clone(&ledger);
            handles.push(tokio::spawn(async move {
                let contract = format!("0xPar{i}");
                ledger
                    .submit_log_entry(deploy(&contract, "0xE", "0xI"), false)
                    .await?;
                ledger
                    .submit_log_entry(add_logistic(&contract, "0xL1"), false)
                    .await
            }));
        }

        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        for i in 0..8 {
            let snapshot = ledger
                .get_snapshot(&format!("0xPar{i}"))
                .await
                .unwrap();
            assert_eq!(snapshot.logistics, vec!["0xL1"]);
        }
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_history_length_matches_committed_entries_under_contention() {
        let (ledger, _) = ledger();
        let ledger = Arc::new(ledger);
        ledger
            .submit_log_entry(deploy("0xBusy", "0xE", "0xI"), false)
            .await
            .unwrap();

        // 16 writers race distinct logistics; all must commit exactly once.
        let mut handles = Vec::new();
        for i in 0..16 {
            let ledger = Arc::clone(&ledger);
            handles.push(tokio::spawn(async move {
                ledger
                    .submit_log_entry(add_logistic("0xBusy", &format!("0xL{i}")), false)
                    .await
            }));
        }
        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        let history = ledger.get_history(&"0xBusy".to_string()).await.unwrap();
        assert_eq!(history.len(), 17);

        let snapshot = ledger.get_snapshot(&"0xBusy".to_string()).await.unwrap();
        assert_eq!(snapshot.logistics.len(), 16);
    }
}
