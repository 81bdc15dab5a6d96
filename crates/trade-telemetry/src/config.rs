//! Telemetry configuration from environment variables.

use std::env;

/// Configuration for structured logging.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    /// Service name stamped on every log line
    pub service_name: String,

    /// Log level filter (trace, debug, info, warn, error)
    pub log_level: String,

    /// Whether to emit JSON formatted logs (containers/production)
    pub json_logs: bool,

    /// Network identifier (testnet, mainnet, devnet)
    pub network: String,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            service_name: "trade-ledger".to_string(),
            log_level: "info".to_string(),
            json_logs: false,
            network: "testnet".to_string(),
        }
    }
}

impl TelemetryConfig {
    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `TC_SERVICE_NAME`: Service name (default: trade-ledger)
    /// - `TC_LOG_LEVEL` or `RUST_LOG`: Log level (default: info)
    /// - `TC_JSON_LOGS`: Enable JSON logs (default: false, true in containers)
    /// - `TC_NETWORK`: Network name (default: testnet)
    pub fn from_env() -> Self {
        let is_container =
            env::var("KUBERNETES_SERVICE_HOST").is_ok() || env::var("DOCKER_CONTAINER").is_ok();

        Self {
            service_name: env::var("TC_SERVICE_NAME").unwrap_or_else(|_| "trade-ledger".to_string()),

            log_level: env::var("TC_LOG_LEVEL")
                .or_else(|_| env::var("RUST_LOG"))
                .unwrap_or_else(|_| "info".to_string()),

            json_logs: env::var("TC_JSON_LOGS")
                .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
                .unwrap_or(is_container),

            network: env::var("TC_NETWORK").unwrap_or_else(|_| "testnet".to_string()),
        }
    }

    /// Service name qualified by network, e.g. `trade-ledger.testnet`.
    pub fn full_service_name(&self) -> String {
        format!("{}.{}", self.service_name, self.network)
    }
}
