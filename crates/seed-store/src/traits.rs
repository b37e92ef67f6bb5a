use async_trait::async_trait;
use seed_types::Entry;

use crate::error::StoreResult;

/// Read access to a hierarchical key-value store.
///
/// Keys are path-like (`app/db/host`). A key that ends with `/` and carries no
/// value is a folder marker. Implementations must be thread-safe and hold no
/// per-call state, so a single handle can serve concurrent lookups.
#[async_trait]
pub trait KvStore: Send + Sync {
    /// Look up the entry stored at exactly `key`.
    ///
    /// Returns `Ok(None)` if no entry exists at that key.
    async fn get(&self, key: &str) -> StoreResult<Option<Entry>>;

    /// List every entry whose key starts with `prefix`, including folder
    /// markers, in the store's listing order.
    ///
    /// Returns an empty vector if nothing lives under the prefix.
    async fn list(&self, prefix: &str) -> StoreResult<Vec<Entry>>;
}
