//! The [`KeyResolver`]: one point lookup, then at most one folder listing.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use seed_store::KvStore;
use seed_types::{Entry, Resolved};
use tracing::debug;

use crate::error::{ResolveError, ResolveResult};
use crate::keys::{relative_key, validate_key, RelativeKeys};

/// Tunables for [`KeyResolver`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// How listed keys become keys of the flattened object.
    pub relative_keys: RelativeKeys,
}

/// Resolves keys against a [`KvStore`].
///
/// The resolver holds no mutable state. A single instance can serve any
/// number of concurrent `resolve` calls.
#[derive(Debug)]
pub struct KeyResolver<S> {
    store: S,
    config: ResolverConfig,
}

impl<S: KvStore> KeyResolver<S> {
    /// Create a resolver with the default configuration.
    pub fn new(store: S) -> Self {
        Self::with_config(store, ResolverConfig::default())
    }

    /// Create a resolver with an explicit configuration.
    pub fn with_config(store: S, config: ResolverConfig) -> Self {
        Self { store, config }
    }

    /// The underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// The active configuration.
    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Resolve `key` to a direct value, a flattened folder, or nothing.
    ///
    /// A direct value at `key` always wins; the folder is only listed when the
    /// point lookup finds nothing. A flattened folder reports the modification
    /// index of the first listed entry, whether or not that entry carries a
    /// value. Any store error aborts resolution and is returned unchanged.
    pub async fn resolve(&self, key: &str) -> ResolveResult<Resolved> {
        validate_key(key)?;

        if let Some(entry) = self.store.get(key).await? {
            debug!(key, version = %entry.modify_index, "direct hit");
            let payload = entry.value_lossy().unwrap_or_default();
            return Ok(Resolved::value(payload, entry.modify_index));
        }

        debug!(key, "no direct value; listing folder");
        let entries = self.store.list(key).await?;
        let Some(first) = entries.first() else {
            debug!(key, "key not found");
            return Ok(Resolved::Absent);
        };

        let payload = flatten(key, &entries, self.config.relative_keys)?;
        debug!(
            key,
            listed = entries.len(),
            version = %first.modify_index,
            "flattened folder"
        );
        Ok(Resolved::value(payload, first.modify_index))
    }
}

/// Flatten the value-bearing `entries` of the folder `key` into a JSON object.
///
/// Folder markers are skipped. When two entries map to the same relative key
/// the later one wins. Object keys are emitted in lexicographic order.
pub fn flatten(key: &str, entries: &[Entry], mode: RelativeKeys) -> ResolveResult<String> {
    let mut object: BTreeMap<String, String> = BTreeMap::new();
    for entry in entries {
        let Some(value) = entry.value_lossy() else {
            continue;
        };
        object.insert(relative_key(key, &entry.key, mode), value);
    }
    serde_json::to_string(&object).map_err(|e| ResolveError::Serialization(e.to_string()))
}
