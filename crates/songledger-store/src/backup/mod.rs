//! Backup persistence layer.
//!
//! One append-mostly `backups` table holds every playlist snapshot. Each
//! operation is a single atomic SQLite statement; SQLite serializes writes
//! and no operation here spans more than one logical write.
//!
//! ## Responsibilities
//!
//! - Create immutable backup rows (`song_count` derived at write time,
//!   `user_id` canonicalized at this boundary)
//! - List summaries (songs payload excluded), newest first
//! - Fetch full backups with the songs payload deserialized
//! - Hard delete, aggregate stats
//!
//! ## Non-Responsibilities
//!
//! - Diff computation (handled by `songledger-core`)
//! - HTTP translation (handled by `songledger-api`)

pub mod persist;
pub mod query;

// Re-export primary operations
pub use persist::{create_backup, delete_backup};
pub use query::{backup_stats, clamp_limit, get_backup, list_backups};
