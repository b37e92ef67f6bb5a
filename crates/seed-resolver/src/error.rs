use thiserror::Error;

/// Errors that can occur while resolving a key.
///
/// A key that does not exist is not an error; see `Resolved::Absent`.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// The key was rejected before any store call.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The backing store failed during lookup or listing.
    #[error("store error: {0}")]
    Store(#[from] seed_store::StoreError),

    /// The flattened folder could not be encoded.
    #[error("serialization error: {0}")]
    Serialization(String),
}

pub type ResolveResult<T> = Result<T, ResolveError>;
