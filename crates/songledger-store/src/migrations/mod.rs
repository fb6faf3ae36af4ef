//! Migration framework
//!
//! Provides:
//! - Migration runner with checksums
//! - Idempotent application
//! - Embedded SQL migrations
//! - Legacy user-id backfill

mod checksums;
mod embedded;
mod runner;

pub use runner::apply_migrations;
