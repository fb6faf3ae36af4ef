//! SongLedger core - diff engine, error facility, logging
//!
//! Provides:
//! - Playlist diff engine (pure, no I/O)
//! - Canonical structured error type with a stable kind taxonomy
//! - Logging initialization profiles

pub mod diff;
pub mod errors;
pub mod logging;

pub use errors::{LedgerError, LedgerErrorKind, Result};
