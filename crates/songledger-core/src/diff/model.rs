//! Playlist diff output types.
//!
//! All types implement `Debug, Clone, Serialize, Deserialize, PartialEq`.
//! Sections are ordered `Vec`s so serialization is deterministic for a
//! given input order.

use serde::{Deserialize, Serialize};
use songledger_types::Song;

/// The added/removed/unchanged partition of two song collections.
///
/// Membership is decided purely by `hash`. `same` carries the *current*
/// version of each shared song, so metadata drift (renames and the like) is
/// reported using the live side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaylistDiff {
    /// Songs present now but absent from the backup
    pub added: Vec<Song>,
    /// Songs present in the backup but gone now
    pub removed: Vec<Song>,
    /// Songs present on both sides, taken from the current side
    pub same: Vec<Song>,
    /// Derived counts
    pub summary: DiffSummary,
}

/// Count summary for a [`PlaylistDiff`].
///
/// `current_total` and `backup_total` are raw input lengths, not
/// de-duplicated counts; with duplicate hashes in an input they can exceed
/// `added_count + same_count` (or `removed_count + same_count`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiffSummary {
    pub added_count: usize,
    pub removed_count: usize,
    pub same_count: usize,
    pub current_total: usize,
    pub backup_total: usize,
}

/// One entry of a multi-backup comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackupDiffEntry {
    /// Id of the compared backup
    pub backup_id: i64,
    /// Playlist name recorded in that backup
    pub backup_name: String,
    /// Creation time of that backup, milliseconds since epoch
    pub backup_time: i64,
    /// Diff of the current playlist against that backup
    pub diff: PlaylistDiff,
}
