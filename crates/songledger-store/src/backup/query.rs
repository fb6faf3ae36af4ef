//! Read-only backup query operations.
//!
//! Listing uses one predefined statement per filter combination rather than
//! dynamic SQL assembly. Identity-scoped branches match both the canonical
//! and the legacy `.0`-suffixed form of a user id: rows written before
//! write-boundary canonicalization existed (or by still-running legacy
//! writers) carry the suffixed variant. The migration runner backfills old
//! rows, so this dual-form OR is a shim to drop once legacy writers are
//! gone, not a permanent feature.

#![allow(clippy::result_large_err)]

use crate::errors::{backup_not_found, from_rusqlite, invalid_backup_id, Result};
use rusqlite::{Connection, OptionalExtension};
use songledger_types::{
    canonical_user_id, legacy_user_id, Backup, BackupStats, BackupSummary, ListFilter,
};

/// Default page size when the caller sends no usable limit.
const DEFAULT_LIMIT: i64 = 50;
/// Hard ceiling on page size.
const MAX_LIMIT: i64 = 1000;

/// Clamp a caller-supplied limit into `[1, 1000]`.
///
/// Absent, zero, or negative values fall back to the default of 50;
/// anything above the ceiling is capped at 1000. Never rejects.
pub fn clamp_limit(limit: Option<i64>) -> i64 {
    match limit {
        Some(n) if n >= 1 => n.min(MAX_LIMIT),
        _ => DEFAULT_LIMIT,
    }
}

const SUMMARY_COLUMNS: &str =
    "id, playlist_id, playlist_name, song_count, backup_time, note, user_id";

/// List backup summaries, newest `backup_time` first.
///
/// `playlist_id` and `user_id` filters combine conjunctively when both are
/// present. The songs payload is never read by this query.
pub fn list_backups(conn: &Connection, filter: &ListFilter) -> Result<Vec<BackupSummary>> {
    let limit = clamp_limit(filter.limit);
    let user_id = filter
        .user_id
        .as_deref()
        .map(|raw| canonical_user_id(Some(raw)));

    let rows = match (filter.playlist_id.as_deref(), user_id.as_deref()) {
        (Some(playlist_id), Some(uid)) => {
            let mut stmt = conn
                .prepare(&format!(
                    "SELECT {SUMMARY_COLUMNS}
                     FROM backups
                     WHERE playlist_id = ?1 AND (user_id = ?2 OR user_id = ?3)
                     ORDER BY backup_time DESC
                     LIMIT ?4"
                ))
                .map_err(from_rusqlite)?;
            let result: std::result::Result<Vec<_>, _> = stmt
                .query_map(
                    rusqlite::params![playlist_id, uid, legacy_user_id(uid), limit],
                    row_to_summary,
                )
                .map_err(from_rusqlite)?
                .collect();
            result.map_err(from_rusqlite)?
        }
        (Some(playlist_id), None) => {
            let mut stmt = conn
                .prepare(&format!(
                    "SELECT {SUMMARY_COLUMNS}
                     FROM backups
                     WHERE playlist_id = ?1
                     ORDER BY backup_time DESC
                     LIMIT ?2"
                ))
                .map_err(from_rusqlite)?;
            let result: std::result::Result<Vec<_>, _> = stmt
                .query_map(rusqlite::params![playlist_id, limit], row_to_summary)
                .map_err(from_rusqlite)?
                .collect();
            result.map_err(from_rusqlite)?
        }
        (None, Some(uid)) => {
            let mut stmt = conn
                .prepare(&format!(
                    "SELECT {SUMMARY_COLUMNS}
                     FROM backups
                     WHERE user_id = ?1 OR user_id = ?2
                     ORDER BY backup_time DESC
                     LIMIT ?3"
                ))
                .map_err(from_rusqlite)?;
            let result: std::result::Result<Vec<_>, _> = stmt
                .query_map(
                    rusqlite::params![uid, legacy_user_id(uid), limit],
                    row_to_summary,
                )
                .map_err(from_rusqlite)?
                .collect();
            result.map_err(from_rusqlite)?
        }
        (None, None) => {
            let mut stmt = conn
                .prepare(&format!(
                    "SELECT {SUMMARY_COLUMNS}
                     FROM backups
                     ORDER BY backup_time DESC
                     LIMIT ?1"
                ))
                .map_err(from_rusqlite)?;
            let result: std::result::Result<Vec<_>, _> = stmt
                .query_map([limit], row_to_summary)
                .map_err(from_rusqlite)?
                .collect();
            result.map_err(from_rusqlite)?
        }
    };

    Ok(rows)
}

/// Fetch a full backup by id, songs payload deserialized.
///
/// # Errors
///
/// - `InvalidInput` — `id` is not a positive integer
/// - `NotFound` — no row with that id exists
/// - `Serialization` — the stored songs blob failed to decode
pub fn get_backup(conn: &Connection, id: i64) -> Result<Backup> {
    if id <= 0 {
        return Err(invalid_backup_id("get_backup", id));
    }

    let row = conn
        .query_row(
            "SELECT id, playlist_id, playlist_name, songs, song_count, backup_time, note, user_id
             FROM backups WHERE id = ?1",
            [id],
            |row| {
                Ok((
                    row.get::<_, i64>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, String>(2)?,
                    row.get::<_, String>(3)?,
                    row.get::<_, i64>(4)?,
                    row.get::<_, i64>(5)?,
                    row.get::<_, String>(6)?,
                    row.get::<_, String>(7)?,
                ))
            },
        )
        .optional()
        .map_err(from_rusqlite)?
        .ok_or_else(|| backup_not_found("get_backup", id))?;

    let (id, playlist_id, playlist_name, songs_json, song_count, backup_time, note, user_id) = row;
    let songs = serde_json::from_str(&songs_json)?;

    Ok(Backup {
        id,
        playlist_id,
        playlist_name,
        songs,
        song_count,
        backup_time,
        note,
        user_id,
    })
}

/// Aggregate statistics, globally or scoped to one logical identity.
///
/// The identity is canonicalized and dual-matched the same way `list`
/// matches it, so both operations agree on what one identity means.
pub fn backup_stats(conn: &Connection, user_id: Option<&str>) -> Result<BackupStats> {
    let to_stats = |row: &rusqlite::Row<'_>| {
        Ok(BackupStats {
            total: row.get(0)?,
            total_songs: row.get(1)?,
        })
    };

    match user_id {
        Some(raw) => {
            let uid = canonical_user_id(Some(raw));
            conn.query_row(
                "SELECT COUNT(*), COALESCE(SUM(song_count), 0)
                 FROM backups
                 WHERE user_id = ?1 OR user_id = ?2",
                rusqlite::params![uid, legacy_user_id(&uid)],
                to_stats,
            )
            .map_err(from_rusqlite)
        }
        None => conn
            .query_row(
                "SELECT COUNT(*), COALESCE(SUM(song_count), 0) FROM backups",
                [],
                to_stats,
            )
            .map_err(from_rusqlite),
    }
}

fn row_to_summary(row: &rusqlite::Row<'_>) -> rusqlite::Result<BackupSummary> {
    Ok(BackupSummary {
        id: row.get(0)?,
        playlist_id: row.get(1)?,
        playlist_name: row.get(2)?,
        song_count: row.get(3)?,
        backup_time: row.get(4)?,
        note: row.get(5)?,
        user_id: row.get(6)?,
    })
}
