use thiserror::Error;

/// Errors raised while building a Consul client.
///
/// Request-time failures are reported as `seed_store::StoreError`.
#[derive(Debug, Error)]
pub enum ConsulError {
    #[error("address is empty")]
    EmptyAddress,

    #[error("invalid address {address}: {reason}")]
    InvalidAddress { address: String, reason: String },

    #[error("http client error: {0}")]
    Client(String),
}

pub type ConsulResult<T> = Result<T, ConsulError>;
