use serde::{Deserialize, Serialize};

use crate::index::ModifyIndex;

/// A single record returned by the backing key-value store.
///
/// An entry without a value is a folder marker: it names a structural prefix
/// such as `app/db/` and carries no data of its own.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Full key of the record (e.g. "app/db/host").
    pub key: String,
    /// Raw value bytes, or `None` for a folder marker.
    pub value: Option<Vec<u8>>,
    /// Index of the last mutation of this record.
    pub modify_index: ModifyIndex,
}

impl Entry {
    /// Create a value-bearing entry.
    pub fn new(key: impl Into<String>, value: impl Into<Vec<u8>>, modify_index: ModifyIndex) -> Self {
        Self {
            key: key.into(),
            value: Some(value.into()),
            modify_index,
        }
    }

    /// Create a folder marker entry.
    pub fn folder(key: impl Into<String>, modify_index: ModifyIndex) -> Self {
        Self {
            key: key.into(),
            value: None,
            modify_index,
        }
    }

    /// Returns `true` if this entry is a folder marker.
    pub fn is_folder(&self) -> bool {
        self.value.is_none()
    }

    /// The value decoded as UTF-8, replacing invalid sequences.
    ///
    /// Returns `None` for folder markers.
    pub fn value_lossy(&self) -> Option<String> {
        self.value
            .as_deref()
            .map(|bytes| String::from_utf8_lossy(bytes).into_owned())
    }
}
