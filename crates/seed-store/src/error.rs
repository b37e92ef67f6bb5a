/// Errors from key-value store operations.
///
/// Errors are cloneable and comparable so they can be surfaced unchanged
/// through the resolver and asserted on in tests.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// The request never produced a response (connect, timeout, TLS).
    #[error("transport error: {0}")]
    Transport(String),

    /// The store answered with an unexpected status.
    #[error("unexpected status {status}: {body}")]
    Status { status: u16, body: String },

    /// The response could not be decoded.
    #[error("decode error: {0}")]
    Decode(String),

    /// The store is unavailable (poisoned lock, closed handle).
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
