//! Key resolution for seed.
//!
//! Given a path-like key, [`KeyResolver`] decides whether it names a single
//! stored value or a folder of sibling keys. A folder is flattened into one
//! JSON object mapping each child's relative key to its value, so an
//! application can seed its configuration from either shape.
//!
//! # Modules
//!
//! - [`error`] — [`ResolveError`] and the result alias
//! - [`keys`] — key validation and relative-key derivation
//! - [`resolver`] — [`KeyResolver`] and [`ResolverConfig`]

pub mod error;
pub mod keys;
pub mod resolver;

pub use error::{ResolveError, ResolveResult};
pub use keys::{folder_prefix, relative_key, validate_key, RelativeKeys};
pub use resolver::{flatten, KeyResolver, ResolverConfig};
