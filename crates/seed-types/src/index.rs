use std::fmt;

use serde::{Deserialize, Serialize};

/// Modification index assigned by the backing store on every mutation.
///
/// The index is monotonic per key, but the resolver treats it only as an
/// opaque freshness token. It is never compared across keys.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModifyIndex(u64);

impl ModifyIndex {
    /// Wrap a raw index value.
    pub const fn new(index: u64) -> Self {
        Self(index)
    }

    /// The zero index. Stores never hand this out for a written key.
    pub const fn zero() -> Self {
        Self(0)
    }

    /// The raw index value.
    pub const fn get(&self) -> u64 {
        self.0
    }

    /// The index following this one.
    pub fn next(&self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

impl From<u64> for ModifyIndex {
    fn from(index: u64) -> Self {
        Self(index)
    }
}

impl From<ModifyIndex> for u64 {
    fn from(index: ModifyIndex) -> Self {
        index.0
    }
}

impl fmt::Debug for ModifyIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ModifyIndex({})", self.0)
    }
}

impl fmt::Display for ModifyIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
