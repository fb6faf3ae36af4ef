// Test suite for the migration framework
// Tests schema creation, idempotency, version ledger, and on-disk open.

use rusqlite::Connection;
use songledger_store::{db, migrations::apply_migrations};
use tempfile::TempDir;

#[test]
fn test_migrations_create_backups_table() {
    let mut conn = Connection::open_in_memory().unwrap();
    apply_migrations(&mut conn).unwrap();

    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM backups", [], |row| row.get(0))
        .unwrap();
    assert_eq!(count, 0);
}

#[test]
fn test_migrations_create_indexes() {
    let mut conn = Connection::open_in_memory().unwrap();
    apply_migrations(&mut conn).unwrap();

    let names: Vec<String> = {
        let mut stmt = conn
            .prepare("SELECT name FROM sqlite_master WHERE type = 'index' AND tbl_name = 'backups'")
            .unwrap();
        let rows = stmt.query_map([], |row| row.get(0)).unwrap();
        rows.collect::<Result<_, _>>().unwrap()
    };

    assert!(names.iter().any(|n| n == "idx_backups_playlist_id"));
    assert!(names.iter().any(|n| n == "idx_backups_backup_time"));
    assert!(names.iter().any(|n| n == "idx_backups_user_id"));
}

#[test]
fn test_schema_version_recorded_with_checksum() {
    let mut conn = Connection::open_in_memory().unwrap();
    apply_migrations(&mut conn).unwrap();

    let (migration_id, checksum): (String, String) = conn
        .query_row(
            "SELECT migration_id, checksum FROM schema_version",
            [],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )
        .unwrap();
    assert_eq!(migration_id, "001_backups");
    assert_eq!(checksum.len(), 64);
}

#[test]
fn test_migrations_idempotent_across_reopen() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("ledger.db");

    {
        let mut conn = db::open(&path).unwrap();
        db::configure(&conn).unwrap();
        apply_migrations(&mut conn).unwrap();
        conn.execute(
            "INSERT INTO backups (playlist_id, playlist_name, songs, song_count, backup_time, note, user_id)
             VALUES ('p', 'n', '[]', 0, 1, '', '')",
            [],
        )
        .unwrap();
    }

    // Reopen: migrations re-apply cleanly and data survives.
    let mut conn = db::open(&path).unwrap();
    db::configure(&conn).unwrap();
    apply_migrations(&mut conn).unwrap();

    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM backups", [], |row| row.get(0))
        .unwrap();
    assert_eq!(count, 1);
}
