//! Playlist diff engine.
//!
//! Compares two song collections by their stable `hash` identity key and
//! produces an added/removed/unchanged partition plus derived reports.
//!
//! ## Entry point
//!
//! ```
//! use songledger_core::diff::{compare_playlists, render_diff_report};
//! use songledger_types::Song;
//!
//! let current = vec![Song::new("a", "A", "X")];
//! let backup = vec![Song::new("b", "B", "Y")];
//! let diff = compare_playlists(&current, &backup);
//! let report = render_diff_report(&diff);
//! assert!(report.contains("Added: 1"));
//! ```
//!
//! ## Guarantees
//!
//! - **Pure**: no I/O, no shared state, re-entrant from any number of callers.
//! - **Total**: any input is treated as a possibly-empty song sequence; the
//!   engine never errors. Entries without a hash share the empty-string key.
//! - **Order-preserving**: output sections follow first-insertion order of
//!   each input; duplicate hashes within one input silently overwrite
//!   earlier entries without moving them.

pub mod engine;
pub mod model;
pub mod report;

pub use engine::{compare_multiple_backups, compare_playlists};
pub use model::{BackupDiffEntry, DiffSummary, PlaylistDiff};
pub use report::{export_diff_to_csv, render_diff_report};
