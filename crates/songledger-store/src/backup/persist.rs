//! Backup write operations.
//!
//! Creation is the only place a backup row is built: required fields are
//! validated here, the song list is serialized to an opaque JSON blob,
//! `song_count` is derived from the list length, and the caller identity is
//! canonicalized exactly once. Rows are immutable afterwards; the only
//! other mutation is a hard delete.

#![allow(clippy::result_large_err)]

use crate::errors::{backup_not_found, from_rusqlite, invalid_backup_id, missing_field, Result};
use rusqlite::Connection;
use songledger_types::{canonical_user_id, CreateBackupRequest};

/// Insert a new backup row and return its generated id.
///
/// Fails with `InvalidInput` when `playlist_id`, `playlist_name`, or
/// `songs` is absent. An empty song list is a valid, distinct backup state
/// and is accepted (`song_count` 0).
///
/// # Errors
///
/// - `InvalidInput` — a required field is absent
/// - `Serialization` — the song list could not be encoded
/// - `Persistence` — the insert failed
pub fn create_backup(conn: &Connection, request: &CreateBackupRequest) -> Result<i64> {
    let playlist_id = request
        .playlist_id
        .as_deref()
        .ok_or_else(|| missing_field("playlistId"))?;
    let playlist_name = request
        .playlist_name
        .as_deref()
        .ok_or_else(|| missing_field("playlistName"))?;
    let songs = request
        .songs
        .as_deref()
        .ok_or_else(|| missing_field("songs"))?;

    // Write-boundary canonicalization: read paths never clean stored ids.
    let user_id = canonical_user_id(request.user_id.as_deref());
    let note = request.note.clone().unwrap_or_default();

    // The blob is opaque to the store; its internal shape is never queried.
    let songs_json = serde_json::to_string(songs)?;
    let song_count = songs.len() as i64;
    let backup_time = chrono::Utc::now().timestamp_millis();

    conn.execute(
        "INSERT INTO backups (playlist_id, playlist_name, songs, song_count, backup_time, note, user_id)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        rusqlite::params![
            playlist_id,
            playlist_name,
            songs_json,
            song_count,
            backup_time,
            note,
            user_id
        ],
    )
    .map_err(from_rusqlite)?;

    let backup_id = conn.last_insert_rowid();

    tracing::debug!(
        backup_id = backup_id,
        playlist_id = %playlist_id,
        song_count = song_count,
        "Created backup"
    );

    Ok(backup_id)
}

/// Hard-delete a backup row.
///
/// A second delete of the same id deterministically reports `NotFound`;
/// row ids are never reused.
///
/// # Errors
///
/// - `InvalidInput` — `id` is not a positive integer
/// - `NotFound` — no row with that id exists
/// - `Persistence` — the delete failed
pub fn delete_backup(conn: &Connection, id: i64) -> Result<()> {
    if id <= 0 {
        return Err(invalid_backup_id("delete_backup", id));
    }

    let removed = conn
        .execute("DELETE FROM backups WHERE id = ?1", [id])
        .map_err(from_rusqlite)?;

    if removed == 0 {
        return Err(backup_not_found("delete_backup", id));
    }

    tracing::debug!(backup_id = id, "Deleted backup");

    Ok(())
}
