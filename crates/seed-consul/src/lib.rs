//! Consul KV backend for seed.
//!
//! [`ConsulKv`] implements [`seed_store::KvStore`] on top of the Consul HTTP
//! API. The datacenter and ACL token are fixed at construction and sent with
//! every request.

pub mod client;
pub mod config;
pub mod error;
pub mod wire;

#[cfg(test)]
mod mock;

pub use client::ConsulKv;
pub use config::ConsulConfig;
pub use error::{ConsulError, ConsulResult};
