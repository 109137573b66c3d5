//! Gateway endpoint configuration types.

use serde::{Deserialize, Serialize};

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Remote gateway endpoint configuration.
///
/// The base URL is fixed at initialization and immutable for the
/// process lifetime; every client operation targets it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GatewayConfig {
    /// Base URL of the gateway endpoint.
    pub base_url: String,

    /// Request timeout in seconds.
    pub timeout_seconds: u64,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8080/".to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECS,
        }
    }
}
