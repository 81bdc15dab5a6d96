//! Shared fixtures for the integration flows.

use std::collections::BTreeMap;
use std::sync::Once;

use tc_01_chain_verify::{ChainVerifier, MockChainClient};
use tc_02_contract_ledger::{
    ContractLedgerService, EntryCandidate, FixedTimeSource, InMemoryContractStore, LedgerConfig,
    MockNotifier, MockRoleResolver,
};
use trade_telemetry::{init_tracing, TelemetryConfig};

/// Deterministic base timestamp for every flow.
pub const NOW: u64 = 1_700_000_000_000;

static TELEMETRY: Once = Once::new();

/// Install the tracing subscriber once for the whole suite.
pub fn init_test_telemetry() {
    TELEMETRY.call_once(|| {
        let _ = init_tracing(&TelemetryConfig::default());
    });
}

/// The fully-mocked service wiring used across the suite.
pub type TestLedger = ContractLedgerService<
    InMemoryContractStore,
    MockRoleResolver,
    MockNotifier,
    FixedTimeSource,
    ChainVerifier<MockChainClient>,
>;

/// Ledger over an empty store, recording notifier, fixed clock, and the
/// given chain client.
pub fn ledger_with_client(client: MockChainClient) -> (TestLedger, MockNotifier) {
    init_test_telemetry();
    let notifier = MockNotifier::default();
    let service = ContractLedgerService::new(
        InMemoryContractStore::new(),
        MockRoleResolver::default(),
        notifier.clone(),
        FixedTimeSource::at(NOW),
        ChainVerifier::new(client),
        LedgerConfig {
            admins: vec!["0xAdmin".to_string()],
        },
    );
    (service, notifier)
}

/// Ledger with a default (empty) chain client.
pub fn ledger() -> (TestLedger, MockNotifier) {
    ledger_with_client(MockChainClient::default())
}

/// Candidate with no supplementary fields.
pub fn candidate(contract: &str, action_tag: &str) -> EntryCandidate {
    EntryCandidate {
        contract_address: contract.to_string(),
        action: action_tag.to_string(),
        transaction_hash: format!("0xT-{contract}-{action_tag}"),
        actor_address: "0xActor".to_string(),
        timestamp: None,
        extra: BTreeMap::new(),
    }
}

/// Deploy candidate naming both parties.
pub fn deploy(contract: &str, exporter: &str, importer: &str) -> EntryCandidate {
    let mut c = candidate(contract, "deploy");
    c.extra.insert("exporter".to_string(), exporter.into());
    c.extra.insert("importer".to_string(), importer.into());
    c
}

/// `addLogistic` candidate for one participant.
pub fn add_logistic(contract: &str, logistic: &str) -> EntryCandidate {
    let mut c = candidate(contract, "addLogistic");
    c.extra.insert("logistic".to_string(), logistic.into());
    c
}

/// `removeLogistic` candidate for one participant.
pub fn remove_logistic(contract: &str, logistic: &str) -> EntryCandidate {
    let mut c = candidate(contract, "removeLogistic");
    c.extra.insert("logistic".to_string(), logistic.into());
    c
}
