//! Diff computation.
//!
//! The core entry point is [`compare_playlists`], which partitions two song
//! collections by hash in O(n+m). [`compare_multiple_backups`] maps it over
//! a sequence of stored backups.

use crate::diff::model::{BackupDiffEntry, DiffSummary, PlaylistDiff};
use indexmap::IndexMap;
use songledger_types::{Backup, Song};

/// Index a song sequence by hash, preserving first-insertion order.
///
/// A duplicate hash within the input overwrites the earlier song but keeps
/// its original position, so dedup-by-hash is implicit and order is stable.
fn index_by_hash(songs: &[Song]) -> IndexMap<&str, &Song> {
    let mut map = IndexMap::with_capacity(songs.len());
    for song in songs {
        map.insert(song.hash.as_str(), song);
    }
    map
}

/// Compare a live playlist against a backed-up song list.
///
/// Membership is decided by `hash` alone. The three output sections follow
/// the iteration order of the relevant side's map: `added` and `same` in
/// current order, `removed` in backup order. `same` carries the current
/// version of each song so metadata drift shows the live state.
///
/// Never errors: empty inputs and entries without a hash (which collapse
/// into the empty-string bucket) are ordinary data.
pub fn compare_playlists(current: &[Song], backup: &[Song]) -> PlaylistDiff {
    let current_map = index_by_hash(current);
    let backup_map = index_by_hash(backup);

    let added: Vec<Song> = current_map
        .values()
        .filter(|song| !backup_map.contains_key(song.hash.as_str()))
        .map(|song| (*song).clone())
        .collect();

    let removed: Vec<Song> = backup_map
        .values()
        .filter(|song| !current_map.contains_key(song.hash.as_str()))
        .map(|song| (*song).clone())
        .collect();

    let same: Vec<Song> = current_map
        .values()
        .filter(|song| backup_map.contains_key(song.hash.as_str()))
        .map(|song| (*song).clone())
        .collect();

    let summary = DiffSummary {
        added_count: added.len(),
        removed_count: removed.len(),
        same_count: same.len(),
        current_total: current.len(),
        backup_total: backup.len(),
    };

    PlaylistDiff {
        added,
        removed,
        same,
        summary,
    }
}

/// Compare the current playlist against several backups at once.
///
/// One independent diff per backup, in input order. Cost is O(k·(n+m)) for
/// k backups.
pub fn compare_multiple_backups(current: &[Song], backups: &[Backup]) -> Vec<BackupDiffEntry> {
    backups
        .iter()
        .map(|backup| BackupDiffEntry {
            backup_id: backup.id,
            backup_name: backup.playlist_name.clone(),
            backup_time: backup.backup_time,
            diff: compare_playlists(current, &backup.songs),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn song(hash: &str) -> Song {
        Song::new(hash, format!("song-{hash}"), "artist")
    }

    #[test]
    fn test_basic_partition() {
        let current = vec![song("a"), song("b")];
        let backup = vec![song("b"), song("c")];
        let diff = compare_playlists(&current, &backup);

        assert_eq!(diff.added.len(), 1);
        assert_eq!(diff.added[0].hash, "a");
        assert_eq!(diff.removed.len(), 1);
        assert_eq!(diff.removed[0].hash, "c");
        assert_eq!(diff.same.len(), 1);
        assert_eq!(diff.same[0].hash, "b");
        assert_eq!(
            diff.summary,
            DiffSummary {
                added_count: 1,
                removed_count: 1,
                same_count: 1,
                current_total: 2,
                backup_total: 2,
            }
        );
    }

    #[test]
    fn test_duplicate_hash_overwrites_in_place() {
        let mut first = song("x");
        first.name = "old name".into();
        let mut second = song("x");
        second.name = "new name".into();

        let current = vec![first, song("y"), second];
        let diff = compare_playlists(&current, &[]);

        // Deduped by hash, later entry wins, original position kept.
        assert_eq!(diff.added.len(), 2);
        assert_eq!(diff.added[0].hash, "x");
        assert_eq!(diff.added[0].name, "new name");
        assert_eq!(diff.added[1].hash, "y");
        // Raw totals still count the duplicate.
        assert_eq!(diff.summary.current_total, 3);
        assert_eq!(diff.summary.added_count, 2);
    }

    #[test]
    fn test_same_reports_current_metadata() {
        let mut backed_up = song("h");
        backed_up.name = "Old Title".into();
        let mut live = song("h");
        live.name = "New Title".into();

        let diff = compare_playlists(&[live], &[backed_up]);
        assert_eq!(diff.same[0].name, "New Title");
    }

    #[test]
    fn test_missing_hash_bucket() {
        // Songs without a hash all share the empty-string key.
        let current = vec![Song::new("", "no hash 1", "a"), Song::new("", "no hash 2", "b")];
        let diff = compare_playlists(&current, &[]);
        assert_eq!(diff.added.len(), 1);
        assert_eq!(diff.added[0].name, "no hash 2");
        assert_eq!(diff.summary.current_total, 2);
    }

    #[test]
    fn test_multi_backup_order_preserved() {
        let current = vec![song("a")];
        let backups = vec![
            Backup {
                id: 2,
                playlist_id: "p".into(),
                playlist_name: "Second".into(),
                songs: vec![song("a")],
                song_count: 1,
                backup_time: 200,
                note: String::new(),
                user_id: String::new(),
            },
            Backup {
                id: 1,
                playlist_id: "p".into(),
                playlist_name: "First".into(),
                songs: vec![song("b")],
                song_count: 1,
                backup_time: 100,
                note: String::new(),
                user_id: String::new(),
            },
        ];

        let entries = compare_multiple_backups(&current, &backups);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].backup_id, 2);
        assert_eq!(entries[0].diff.summary.same_count, 1);
        assert_eq!(entries[1].backup_id, 1);
        assert_eq!(entries[1].diff.summary.added_count, 1);
        assert_eq!(entries[1].diff.summary.removed_count, 1);
    }
}
