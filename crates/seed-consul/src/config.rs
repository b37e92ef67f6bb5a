use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{ConsulError, ConsulResult};

/// Default agent address, matching the Consul CLI.
pub const DEFAULT_ADDRESS: &str = "127.0.0.1:8500";

/// Timeout applied when `timeout_secs` is zero.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Connection settings for a Consul agent.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsulConfig {
    /// Agent address, `host:port` or a full URL.
    pub address: String,
    /// Scheme used when `address` has none.
    pub scheme: String,
    /// Datacenter to query. `None` uses the agent's own datacenter.
    pub datacenter: Option<String>,
    /// ACL token sent as `X-Consul-Token`.
    pub token: Option<String>,
    /// Whole-request timeout in seconds. Zero means [`DEFAULT_TIMEOUT`].
    pub timeout_secs: u64,
}

impl Default for ConsulConfig {
    fn default() -> Self {
        Self {
            address: DEFAULT_ADDRESS.into(),
            scheme: "http".into(),
            datacenter: None,
            token: None,
            timeout_secs: 0,
        }
    }
}

impl ConsulConfig {
    /// Config for the agent at `address` with every other setting defaulted.
    pub fn with_address(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            ..Self::default()
        }
    }

    /// The effective request timeout.
    pub fn timeout(&self) -> Duration {
        if self.timeout_secs == 0 {
            DEFAULT_TIMEOUT
        } else {
            Duration::from_secs(self.timeout_secs)
        }
    }

    /// The base URL of the agent, without a trailing slash.
    pub fn base_url(&self) -> ConsulResult<String> {
        let address = self.address.trim();
        if address.is_empty() {
            return Err(ConsulError::EmptyAddress);
        }
        let url = if address.contains("://") {
            address.to_string()
        } else {
            if self.scheme.is_empty() {
                return Err(ConsulError::InvalidAddress {
                    address: address.to_string(),
                    reason: "no scheme in address and none configured".into(),
                });
            }
            format!("{}://{address}", self.scheme)
        };
        Ok(url.trim_end_matches('/').to_string())
    }
}
