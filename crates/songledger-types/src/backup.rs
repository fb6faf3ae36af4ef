//! Persisted backup record types.

use crate::song::Song;
use serde::{Deserialize, Serialize};

/// A full backup record, songs included.
///
/// Backups are immutable point-in-time records: no field is ever mutated
/// after creation. "Updating" a backup means creating a new one; the only
/// other lifecycle event is a hard delete.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Backup {
    /// Generated row id, unique and never reused after deletion
    pub id: i64,
    /// Source playlist identifier
    pub playlist_id: String,
    /// Playlist display name at backup time
    pub playlist_name: String,
    /// The song list as it was at backup time
    pub songs: Vec<Song>,
    /// Always equals `songs.len()`, enforced at write time
    pub song_count: i64,
    /// Creation time, milliseconds since epoch (server clock)
    pub backup_time: i64,
    /// Optional caller note, empty when absent
    pub note: String,
    /// Owning identity in canonical form
    pub user_id: String,
}

/// A backup row without the songs payload, as returned by list queries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackupSummary {
    pub id: i64,
    pub playlist_id: String,
    pub playlist_name: String,
    pub song_count: i64,
    pub backup_time: i64,
    pub note: String,
    pub user_id: String,
}

/// Aggregate statistics over the backups table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackupStats {
    /// Number of backup rows
    pub total: i64,
    /// Sum of `song_count` over those rows (0 when there are none)
    pub total_songs: i64,
}
