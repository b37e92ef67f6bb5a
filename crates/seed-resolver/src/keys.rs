//! Key validation and relative-key derivation.
//!
//! Keys use `/` as the hierarchy separator. A folder named `app/db` owns every
//! key under `app/db/`; a child's relative key is what remains after that
//! prefix is taken away.

use serde::{Deserialize, Serialize};

use crate::error::{ResolveError, ResolveResult};

/// Separator between key path components.
pub const SEPARATOR: char = '/';

/// Validate a key before resolution.
///
/// The only requirement is that the key is non-empty. Everything else is up
/// to the store.
///
/// # Examples
///
/// ```
/// use seed_resolver::validate_key;
///
/// assert!(validate_key("app/db").is_ok());
/// assert!(validate_key("").is_err());
/// ```
pub fn validate_key(key: &str) -> ResolveResult<()> {
    if key.is_empty() {
        return Err(ResolveError::InvalidArgument("key is empty".into()));
    }
    Ok(())
}

/// The prefix that children of the folder `key` share (`"<key>/"`).
pub fn folder_prefix(key: &str) -> String {
    format!("{key}{SEPARATOR}")
}

/// How a listed entry's key is turned into a key of the flattened object.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RelativeKeys {
    /// Strip `"<key>/"` once, and only when it leads the entry key. Entry keys
    /// that do not start with it are kept whole.
    #[default]
    Prefix,
    /// Remove every occurrence of `"<key>/"` anywhere in the entry key.
    Literal,
}

/// Derive the relative key of `entry_key` inside the folder `key`.
///
/// # Examples
///
/// ```
/// use seed_resolver::{relative_key, RelativeKeys};
///
/// assert_eq!(relative_key("a", "a/b", RelativeKeys::Prefix), "b");
/// assert_eq!(relative_key("a", "a/x/a/b", RelativeKeys::Prefix), "x/a/b");
/// assert_eq!(relative_key("a", "a/x/a/b", RelativeKeys::Literal), "x/b");
/// ```
pub fn relative_key(key: &str, entry_key: &str, mode: RelativeKeys) -> String {
    let prefix = folder_prefix(key);
    match mode {
        RelativeKeys::Prefix => entry_key
            .strip_prefix(prefix.as_str())
            .unwrap_or(entry_key)
            .to_string(),
        RelativeKeys::Literal => entry_key.replace(prefix.as_str(), ""),
    }
}
