use serde::{Deserialize, Serialize};

use crate::index::ModifyIndex;

/// The outcome of resolving a key against the store.
///
/// Absence is a normal result, not an error: the key exists neither as a
/// value nor as a folder.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Resolved {
    /// Nothing is stored at or under the key.
    Absent,
    /// A direct value, or a folder flattened into a JSON object.
    Value {
        /// The value text.
        payload: String,
        /// Modification index reported alongside the payload.
        version: ModifyIndex,
    },
}

impl Resolved {
    /// Construct a `Value` result.
    pub fn value(payload: impl Into<String>, version: ModifyIndex) -> Self {
        Self::Value {
            payload: payload.into(),
            version,
        }
    }

    /// Returns `true` if the key was not found.
    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// The payload, if any.
    pub fn payload(&self) -> Option<&str> {
        match self {
            Self::Absent => None,
            Self::Value { payload, .. } => Some(payload),
        }
    }

    /// The reported modification index, if any.
    pub fn version(&self) -> Option<ModifyIndex> {
        match self {
            Self::Absent => None,
            Self::Value { version, .. } => Some(*version),
        }
    }

    /// Convert into `(payload, version)`, or `None` when absent.
    pub fn into_parts(self) -> Option<(String, ModifyIndex)> {
        match self {
            Self::Absent => None,
            Self::Value { payload, version } => Some((payload, version)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_accessors() {
        let r = Resolved::Absent;
        assert!(r.is_absent());
        assert!(r.payload().is_none());
        assert!(r.version().is_none());
        assert!(r.into_parts().is_none());
    }

    #[test]
    fn value_accessors() {
        let r = Resolved::value("postgres://db", ModifyIndex::new(5));
        assert!(!r.is_absent());
        assert_eq!(r.payload(), Some("postgres://db"));
        assert_eq!(r.version(), Some(ModifyIndex::new(5)));
        assert_eq!(
            r.into_parts(),
            Some(("postgres://db".to_string(), ModifyIndex::new(5)))
        );
    }
}
