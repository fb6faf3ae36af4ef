// Integration tests for create → get round-trip stability.
// The songs sequence retrieved via get must be structurally equal, order
// and fields included, to the sequence passed to create.

use rusqlite::Connection;
use songledger_store::backup::{create_backup, get_backup, list_backups};
use songledger_types::{CreateBackupRequest, ListFilter, Song};

fn setup_test_db() -> Connection {
    let mut conn = Connection::open_in_memory().unwrap();
    songledger_store::migrations::apply_migrations(&mut conn).unwrap();
    conn
}

#[test]
fn test_songs_round_trip_exactly() {
    let conn = setup_test_db();

    let songs = vec![
        Song {
            hash: "h-one".into(),
            name: "遠い音楽".into(),
            author: "Artist, with comma".into(),
            album: "Album \"quoted\"".into(),
            timelen: 203_500,
        },
        Song {
            hash: "h-two".into(),
            name: String::new(),
            author: String::new(),
            album: String::new(),
            timelen: 0,
        },
        Song::new("h-three", "Plain", "Someone"),
    ];

    let request = CreateBackupRequest {
        playlist_id: Some("pl-9".into()),
        playlist_name: Some("Round Trip".into()),
        songs: Some(songs.clone()),
        note: Some("before the festival".into()),
        user_id: Some("777".into()),
    };

    let id = create_backup(&conn, &request).unwrap();
    let backup = get_backup(&conn, id).unwrap();

    assert_eq!(backup.songs, songs);
    assert_eq!(backup.playlist_id, "pl-9");
    assert_eq!(backup.playlist_name, "Round Trip");
    assert_eq!(backup.note, "before the festival");
    assert_eq!(backup.user_id, "777");
    assert_eq!(backup.song_count, 3);
    assert!(backup.backup_time > 0);
}

#[test]
fn test_list_excludes_songs_payload_but_matches_row() {
    let conn = setup_test_db();

    let request = CreateBackupRequest {
        playlist_id: Some("pl-1".into()),
        playlist_name: Some("Summaries".into()),
        songs: Some(vec![Song::new("a", "A", "X")]),
        note: None,
        user_id: Some("42".into()),
    };
    let id = create_backup(&conn, &request).unwrap();

    let rows = list_backups(&conn, &ListFilter::default()).unwrap();
    assert_eq!(rows.len(), 1);
    let summary = &rows[0];

    let full = get_backup(&conn, id).unwrap();
    assert_eq!(summary.id, full.id);
    assert_eq!(summary.playlist_id, full.playlist_id);
    assert_eq!(summary.playlist_name, full.playlist_name);
    assert_eq!(summary.song_count, full.song_count);
    assert_eq!(summary.backup_time, full.backup_time);
    assert_eq!(summary.user_id, full.user_id);
}

#[test]
fn test_backups_are_independent_snapshots() {
    let conn = setup_test_db();

    let make = |songs: Vec<Song>| CreateBackupRequest {
        playlist_id: Some("pl-1".into()),
        playlist_name: Some("Same Playlist".into()),
        songs: Some(songs),
        note: None,
        user_id: None,
    };

    let first = create_backup(&conn, &make(vec![Song::new("a", "A", "X")])).unwrap();
    let second =
        create_backup(&conn, &make(vec![Song::new("a", "A", "X"), Song::new("b", "B", "Y")]))
            .unwrap();

    // The earlier snapshot is untouched by the later one.
    assert_eq!(get_backup(&conn, first).unwrap().songs.len(), 1);
    assert_eq!(get_backup(&conn, second).unwrap().songs.len(), 2);
}
