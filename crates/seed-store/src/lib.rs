//! Key-value store interface for seed.
//!
//! The resolver reaches a coordination service only through the two read
//! operations of [`KvStore`]: a point lookup and a prefix listing. Transport,
//! authentication and datacenter selection are fixed when a store is built.
//!
//! # Storage Backends
//!
//! - [`InMemoryKvStore`] -- `BTreeMap`-based store for tests and embedding
//! - `seed_consul::ConsulKv` -- Consul KV over HTTP (separate crate)
//!
//! # Design Rules
//!
//! 1. Listings are returned in the store's own order (lexicographic by key).
//! 2. A missing key is `Ok(None)` / an empty listing, never an error.
//! 3. All backend errors are propagated, never silently ignored.

pub mod error;
pub mod memory;
pub mod traits;

pub use error::{StoreError, StoreResult};
pub use memory::InMemoryKvStore;
pub use traits::KvStore;
