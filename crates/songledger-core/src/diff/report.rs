//! Human-readable and CSV renderers for playlist diffs.

use crate::diff::model::PlaylistDiff;

/// Render a fixed-template text report of a [`PlaylistDiff`].
///
/// Overview counts first, then a numbered `name - author` list per
/// non-empty section. Informational only; the structured diff is the
/// source of truth.
pub fn render_diff_report(diff: &PlaylistDiff) -> String {
    let summary = &diff.summary;
    let mut out = String::new();

    out.push_str("# Playlist diff report\n\n");
    out.push_str("## Overview\n");
    out.push_str(&format!("- Current songs: {}\n", summary.current_total));
    out.push_str(&format!("- Backup songs: {}\n", summary.backup_total));
    out.push_str(&format!("- Added: {}\n", summary.added_count));
    out.push_str(&format!("- Removed: {}\n", summary.removed_count));
    out.push_str(&format!("- Unchanged: {}\n\n", summary.same_count));

    if !diff.added.is_empty() {
        out.push_str(&format!("## Added songs ({})\n", diff.added.len()));
        for (index, song) in diff.added.iter().enumerate() {
            out.push_str(&format!("{}. {} - {}\n", index + 1, song.name, song.author));
        }
        out.push('\n');
    }

    if !diff.removed.is_empty() {
        out.push_str(&format!("## Removed songs ({})\n", diff.removed.len()));
        for (index, song) in diff.removed.iter().enumerate() {
            out.push_str(&format!("{}. {} - {}\n", index + 1, song.name, song.author));
        }
        out.push('\n');
    }

    out
}

/// Export a diff's added and removed rows as CSV text.
///
/// Header `type,name,author,album,hash`, added rows first, then removed.
/// Fields are comma-joined with no quoting or escaping of embedded commas.
/// That is an acknowledged limitation of this export format, kept as-is
/// until the format is explicitly extended to RFC-4180 quoting.
pub fn export_diff_to_csv(diff: &PlaylistDiff) -> String {
    let mut csv = String::from("type,name,author,album,hash\n");

    for song in &diff.added {
        csv.push_str(&format!(
            "added,{},{},{},{}\n",
            song.name, song.author, song.album, song.hash
        ));
    }

    for song in &diff.removed {
        csv.push_str(&format!(
            "removed,{},{},{},{}\n",
            song.name, song.author, song.album, song.hash
        ));
    }

    csv
}
