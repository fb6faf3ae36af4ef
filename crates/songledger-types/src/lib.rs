//! Core types shared across SongLedger crates
//!
//! This crate provides the data definitions used by the store, the diff
//! engine, and the API facade:
//!
//! - **Schema types**: Song, Backup, BackupSummary, BackupStats
//! - **Request types**: CreateBackupRequest, ListFilter
//! - **Identity**: canonical user-id normalization

pub mod backup;
pub mod identity;
pub mod request;
pub mod song;

pub use backup::{Backup, BackupStats, BackupSummary};
pub use identity::{canonical_user_id, legacy_user_id};
pub use request::{CreateBackupRequest, ListFilter};
pub use song::Song;
