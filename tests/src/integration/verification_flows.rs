//! # Verification Flow Tests
//!
//! Advisory on-chain checks through the full submit pipeline: a
//! confirmed receipt is attached to the committed entry, while pending
//! and unavailable outcomes never block acceptance.

#[cfg(test)]
mod tests {
    use crate::integration::fixtures::*;
    use shared_types::VerificationStatus;
    use tc_01_chain_verify::MockChainClient;
    use tc_02_contract_ledger::ContractLedgerApi;

    #[tokio::test]
    async fn test_confirmed_receipt_attached_and_persisted() {
        let (ledger, _) =
            ledger_with_client(MockChainClient::with_receipt("0xMined", true, 100, 105));

        let mut c = deploy("0xV1", "0xE", "0xI");
        c.transaction_hash = "0xMined".to_string();
        let entry = ledger.submit_log_entry(c, true).await.unwrap();

        let info = entry.on_chain.unwrap();
        assert_eq!(info.status, VerificationStatus::Success);
        assert_eq!(info.block_number, 100);
        assert_eq!(info.confirmations, 6);

        // The stored history carries the receipt too.
        let history = ledger.get_history(&"0xV1".to_string()).await.unwrap();
        assert!(history[0].on_chain.is_some());
    }

    #[tokio::test]
    async fn test_reverted_receipt_recorded_as_failed() {
        let (ledger, _) =
            ledger_with_client(MockChainClient::with_receipt("0xBad", false, 50, 50));

        let mut c = deploy("0xV2", "0xE", "0xI");
        c.transaction_hash = "0xBad".to_string();
        let entry = ledger.submit_log_entry(c, true).await.unwrap();

        // A confirmed-failed receipt is still recorded; the entry itself
        // is accepted.
        let info = entry.on_chain.unwrap();
        assert_eq!(info.status, VerificationStatus::Failed);
        assert!(ledger.get_snapshot(&"0xV2".to_string()).await.is_ok());
    }

    #[tokio::test]
    async fn test_pending_transaction_accepted_without_receipt() {
        // Client knows no receipts at all.
        let (ledger, _) = ledger_with_client(MockChainClient {
            height: 10,
            ..Default::default()
        });

        let entry = ledger
            .submit_log_entry(deploy("0xV3", "0xE", "0xI"), true)
            .await
            .unwrap();
        assert!(entry.on_chain.is_none());
        assert!(ledger.get_snapshot(&"0xV3".to_string()).await.is_ok());
    }

    #[tokio::test]
    async fn test_provider_outage_accepted_as_unknown() {
        let (ledger, _) = ledger_with_client(MockChainClient {
            should_fail: true,
            ..Default::default()
        });

        let entry = ledger
            .submit_log_entry(deploy("0xV4", "0xE", "0xI"), true)
            .await
            .unwrap();
        assert!(entry.on_chain.is_none());
    }

    #[tokio::test]
    async fn test_opt_out_never_touches_the_chain() {
        // A client that would fail loudly if consulted.
        let (ledger, _) = ledger_with_client(MockChainClient {
            should_fail: true,
            ..Default::default()
        });

        let entry = ledger
            .submit_log_entry(deploy("0xV5", "0xE", "0xI"), false)
            .await
            .unwrap();
        assert!(entry.on_chain.is_none());
        assert!(ledger.get_snapshot(&"0xV5".to_string()).await.is_ok());
    }
}
