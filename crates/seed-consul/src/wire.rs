//! JSON shapes of the Consul KV HTTP API.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::{Deserialize, Serialize};
use seed_store::{StoreError, StoreResult};
use seed_types::{Entry, ModifyIndex};

/// One element of a `/v1/kv` response body.
///
/// `Value` is base64 encoded, and `null` for folder markers.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct KvPair {
    pub key: String,
    #[serde(default)]
    pub value: Option<String>,
    pub modify_index: u64,
    #[serde(default)]
    pub create_index: u64,
    #[serde(default)]
    pub flags: u64,
}

impl KvPair {
    /// Build the wire form of an entry.
    pub fn from_entry(entry: &Entry) -> Self {
        Self {
            key: entry.key.clone(),
            value: entry.value.as_deref().map(|v| STANDARD.encode(v)),
            modify_index: entry.modify_index.get(),
            create_index: entry.modify_index.get(),
            flags: 0,
        }
    }

    /// Decode into an [`Entry`].
    pub fn into_entry(self) -> StoreResult<Entry> {
        let value = match self.value {
            Some(encoded) => Some(STANDARD.decode(encoded.as_bytes()).map_err(|e| {
                StoreError::Decode(format!("invalid base64 value for {}: {e}", self.key))
            })?),
            None => None,
        };
        Ok(Entry {
            key: self.key,
            value,
            modify_index: ModifyIndex::new(self.modify_index),
        })
    }
}

/// Decode a `/v1/kv` response body into entries, keeping the server's order.
pub fn decode_entries(body: &[u8]) -> StoreResult<Vec<Entry>> {
    let pairs: Vec<KvPair> =
        serde_json::from_slice(body).map_err(|e| StoreError::Decode(e.to_string()))?;
    pairs.into_iter().map(KvPair::into_entry).collect()
}
