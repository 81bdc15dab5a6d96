//! # Lifecycle Flow Tests
//!
//! Drives full contract lifecycles through the public ledger API over the
//! in-memory store: snapshots, step derivation, logistics mutations,
//! and the error taxonomy surfaced to callers.

#[cfg(test)]
mod tests {
    use crate::integration::fixtures::*;
    use tc_02_contract_ledger::{ConflictError, ContractLedgerApi, LedgerError};

    #[tokio::test]
    async fn test_full_lifecycle_to_finalize() {
        let (ledger, _) = ledger();
        let address = "0xTrade1".to_string();

        ledger
            .submit_log_entry(deploy("0xTrade1", "0xE", "0xI"), false)
            .await
            .unwrap();
        ledger
            .submit_log_entry(candidate("0xTrade1", "deposit"), false)
            .await
            .unwrap();
        ledger
            .submit_log_entry(candidate("0xTrade1", "approveImporter"), false)
            .await
            .unwrap();
        ledger
            .submit_log_entry(candidate("0xTrade1", "approveExporter"), false)
            .await
            .unwrap();
        ledger
            .submit_log_entry(candidate("0xTrade1", "finalize"), false)
            .await
            .unwrap();

        let snapshot = ledger.get_snapshot(&address).await.unwrap();
        assert_eq!(snapshot.status, "finalize");
        assert_eq!(snapshot.exporter.as_deref(), Some("0xE"));
        assert_eq!(snapshot.importer.as_deref(), Some("0xI"));

        let report = ledger.get_step_status(&address).await.unwrap();
        assert!(report.step_status.deploy);
        assert!(report.step_status.deposit);
        assert!(report.step_status.approve_importer);
        assert!(report.step_status.approve_exporter);
        assert!(report.step_status.finalize);
        assert_eq!(report.last_action.unwrap().action, "finalize");

        let history = ledger.get_history(&address).await.unwrap();
        assert_eq!(history.len(), 5);
    }

    #[tokio::test]
    async fn test_snapshot_always_agrees_with_derivation() {
        let (ledger, _) = ledger();
        let address = "0xTrade2".to_string();

        for c in [
            deploy("0xTrade2", "0xE", "0xI"),
            add_logistic("0xTrade2", "0xL1"),
            candidate("0xTrade2", "deposit"),
        ] {
            ledger.submit_log_entry(c, false).await.unwrap();

            let snapshot = ledger.get_snapshot(&address).await.unwrap();
            let report = ledger.get_step_status(&address).await.unwrap();
            assert_eq!(report.last_action.unwrap().action, snapshot.status);
        }
    }

    #[tokio::test]
    async fn test_logistics_add_remove_flow() {
        let (ledger, _) = ledger();
        let address = "0xTrade3".to_string();

        ledger
            .submit_log_entry(deploy("0xTrade3", "0xE", "0xI"), false)
            .await
            .unwrap();
        ledger
            .submit_log_entry(add_logistic("0xTrade3", "0xL1"), false)
            .await
            .unwrap();
        ledger
            .submit_log_entry(add_logistic("0xTrade3", "0xL2"), false)
            .await
            .unwrap();

        let err = ledger
            .submit_log_entry(add_logistic("0xTrade3", "0xL1"), false)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            LedgerError::Conflict(ConflictError::LogisticAlreadyAdded(_))
        ));

        ledger
            .submit_log_entry(remove_logistic("0xTrade3", "0xL1"), false)
            .await
            .unwrap();
        let err = ledger
            .submit_log_entry(remove_logistic("0xTrade3", "0xL1"), false)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            LedgerError::Conflict(ConflictError::LogisticNotFound(_))
        ));

        let snapshot = ledger.get_snapshot(&address).await.unwrap();
        assert_eq!(snapshot.logistics, vec!["0xL2"]);
        // Conflicting submissions never entered the history.
        assert_eq!(ledger.get_history(&address).await.unwrap().len(), 4);
    }

    #[tokio::test]
    async fn test_unknown_contract_reads_are_not_found() {
        let (ledger, _) = ledger();
        let address = "0xNobody".to_string();

        assert!(matches!(
            ledger.get_snapshot(&address).await.unwrap_err(),
            LedgerError::NotFound(ref a) if a == "0xNobody"
        ));
        assert!(matches!(
            ledger.get_step_status(&address).await.unwrap_err(),
            LedgerError::NotFound(_)
        ));
        assert!(matches!(
            ledger.get_history(&address).await.unwrap_err(),
            LedgerError::NotFound(_)
        ));
    }

    #[tokio::test]
    async fn test_free_form_actions_flow_through() {
        let (ledger, _) = ledger();
        let address = "0xTrade4".to_string();

        ledger
            .submit_log_entry(deploy("0xTrade4", "0xE", "0xI"), false)
            .await
            .unwrap();

        let mut custom = candidate("0xTrade4", "customsCleared");
        custom.extra.insert("stage".to_string(), "3".into());
        ledger.submit_log_entry(custom, false).await.unwrap();

        let snapshot = ledger.get_snapshot(&address).await.unwrap();
        assert_eq!(snapshot.status, "customsCleared");
        assert_eq!(snapshot.current_stage, "3");

        // Outside the fixed vocabulary: no step flag moved.
        let report = ledger.get_step_status(&address).await.unwrap();
        assert!(report.step_status.deploy);
        assert!(!report.step_status.deposit);
    }

    #[tokio::test]
    async fn test_notifications_fan_out_per_commit() {
        let (ledger, notifier) = ledger();

        ledger
            .submit_log_entry(deploy("0xTrade5", "0xE", "0xI"), false)
            .await
            .unwrap();
        ledger
            .submit_log_entry(add_logistic("0xTrade5", "0xL1"), false)
            .await
            .unwrap();

        tokio::time::sleep(std::time::Duration::from_millis(30)).await;

        let sent = notifier.sent.lock().clone();
        assert_eq!(sent.len(), 2);
        // The second fan-out sees the newly added logistics participant.
        let (recipients, payload) = &sent[1];
        assert!(recipients.contains(&"0xL1".to_string()));
        assert!(recipients.contains(&"0xAdmin".to_string()));
        assert_eq!(payload.action, "addLogistic");
    }
}
