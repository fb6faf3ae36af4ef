//! SongLedger Store - SQLite persistence for playlist backups
//!
//! Provides:
//! - SQLite schema with migrations framework
//! - Backup creation, listing, retrieval, deletion, and aggregate stats
//! - Connection handling with explicit, caller-owned lifetimes

pub mod backup;
pub mod db;
pub mod errors;
pub mod migrations;

// Re-export key types
pub use errors::Result;
