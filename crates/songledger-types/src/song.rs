//! Song schema.

use serde::{Deserialize, Serialize};

/// One song inside a playlist snapshot.
///
/// `hash` is the stable identity key: it is the only field used for
/// membership comparisons across snapshots. The descriptive fields may
/// legitimately differ between snapshots of the same song (renames,
/// metadata cleanup) without affecting identity.
///
/// All descriptive fields default when absent, so a malformed entry with a
/// missing `hash` deserializes with an empty hash and falls into a single
/// "missing key" bucket instead of failing the whole payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Song {
    /// Stable identity key
    #[serde(default)]
    pub hash: String,
    /// Song title
    #[serde(default)]
    pub name: String,
    /// Artist
    #[serde(default)]
    pub author: String,
    /// Album title
    #[serde(default)]
    pub album: String,
    /// Duration in milliseconds
    #[serde(default)]
    pub timelen: u64,
}

impl Song {
    /// Construct a song with only identity and display fields set.
    pub fn new(hash: impl Into<String>, name: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            hash: hash.into(),
            name: name.into(),
            author: author.into(),
            album: String::new(),
            timelen: 0,
        }
    }
}
