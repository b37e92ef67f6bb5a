use async_trait::async_trait;
use reqwest::{StatusCode, Url};
use seed_store::{KvStore, StoreError, StoreResult};
use seed_types::Entry;
use tracing::debug;

use crate::config::ConsulConfig;
use crate::error::{ConsulError, ConsulResult};
use crate::wire::decode_entries;

/// Header carrying the ACL token.
pub const TOKEN_HEADER: &str = "X-Consul-Token";

/// Consul KV store reached over HTTP.
///
/// Every request carries the datacenter and token given at construction.
#[derive(Clone, Debug)]
pub struct ConsulKv {
    client: reqwest::Client,
    base_url: String,
    base: Url,
    datacenter: Option<String>,
    token: Option<String>,
}

impl ConsulKv {
    /// Build a client from `config`.
    ///
    /// Fails if the address is empty or not a URL, or the HTTP client cannot
    /// be built.
    pub fn new(config: &ConsulConfig) -> ConsulResult<Self> {
        let base_url = config.base_url()?;
        let base = Url::parse(&base_url).map_err(|e| ConsulError::InvalidAddress {
            address: base_url.clone(),
            reason: e.to_string(),
        })?;
        if base.cannot_be_a_base() {
            return Err(ConsulError::InvalidAddress {
                address: base_url,
                reason: "address cannot carry a path".into(),
            });
        }
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| ConsulError::Client(e.to_string()))?;

        Ok(Self {
            client,
            base_url,
            base,
            datacenter: config.datacenter.clone().filter(|dc| !dc.is_empty()),
            token: config.token.clone().filter(|t| !t.is_empty()),
        })
    }

    /// The agent base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The datacenter sent with each request, if any.
    pub fn datacenter(&self) -> Option<&str> {
        self.datacenter.as_deref()
    }

    /// URL of `key` under `/v1/kv/`, each path component percent-encoded so
    /// `?`, `#` and `%` stay part of the key.
    fn kv_url(&self, key: &str) -> Url {
        let mut url = self.base.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments
                .pop_if_empty()
                .extend(["v1", "kv"])
                .extend(key.trim_start_matches('/').split('/'));
        }
        url
    }

    async fn fetch(&self, key: &str, recurse: bool) -> StoreResult<Vec<Entry>> {
        let mut request = self.client.get(self.kv_url(key));
        if recurse {
            request = request.query(&[("recurse", "true")]);
        }
        if let Some(dc) = &self.datacenter {
            request = request.query(&[("dc", dc.as_str())]);
        }
        if let Some(token) = &self.token {
            request = request.header(TOKEN_HEADER, token.as_str());
        }

        let response = request
            .send()
            .await
            .map_err(|e| StoreError::Transport(e.to_string()))?;
        let status = response.status();
        debug!(key, recurse, status = status.as_u16(), "consul kv request");

        if status == StatusCode::NOT_FOUND {
            return Ok(Vec::new());
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(StoreError::Status {
                status: status.as_u16(),
                body: body.trim().to_string(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| StoreError::Transport(e.to_string()))?;
        decode_entries(&body)
    }
}

#[async_trait]
impl KvStore for ConsulKv {
    async fn get(&self, key: &str) -> StoreResult<Option<Entry>> {
        Ok(self.fetch(key, false).await?.into_iter().next())
    }

    async fn list(&self, prefix: &str) -> StoreResult<Vec<Entry>> {
        self.fetch(prefix, true).await
    }
}
