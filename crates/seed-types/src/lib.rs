//! Foundation types for seed.
//!
//! Every other seed crate depends on `seed-types`. The types here model what a
//! key-value coordination service hands back and what the resolver hands on.
//!
//! # Key Types
//!
//! - [`Entry`] — One key/value record, or a folder marker with no value
//! - [`ModifyIndex`] — Monotonic per-change index assigned by the store
//! - [`Resolved`] — Outcome of resolving a key: a value with its index, or absent

pub mod entry;
pub mod index;
pub mod resolved;

pub use entry::Entry;
pub use index::ModifyIndex;
pub use resolved::Resolved;
