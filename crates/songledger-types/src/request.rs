//! Typed request structures for the facade boundary.
//!
//! Every recognized field is explicit and optional, so absence,
//! empty-string, and zero are distinguished rather than collapsed by
//! truthiness checks. Validation of required fields happens at the store's
//! write boundary.

use crate::song::Song;
use serde::{Deserialize, Serialize};

/// Payload for creating a backup.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBackupRequest {
    pub playlist_id: Option<String>,
    pub playlist_name: Option<String>,
    pub songs: Option<Vec<Song>>,
    pub note: Option<String>,
    pub user_id: Option<String>,
}

/// Filters for listing backups.
///
/// `playlist_id` and `user_id` combine conjunctively when both are set.
/// `limit` is a raw caller value; the store clamps it into `[1, 1000]`
/// (invalid or absent values fall back to the default of 50).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListFilter {
    pub playlist_id: Option<String>,
    pub user_id: Option<String>,
    pub limit: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_fields_deserialize_to_none() {
        let req: CreateBackupRequest = serde_json::from_str("{}").unwrap();
        assert!(req.playlist_id.is_none());
        assert!(req.songs.is_none());
    }

    #[test]
    fn test_empty_string_is_not_absence() {
        let req: CreateBackupRequest =
            serde_json::from_str(r#"{"playlistId":""}"#).unwrap();
        assert_eq!(req.playlist_id.as_deref(), Some(""));
    }

    #[test]
    fn test_empty_songs_is_not_absence() {
        let req: CreateBackupRequest = serde_json::from_str(r#"{"songs":[]}"#).unwrap();
        assert_eq!(req.songs.as_deref(), Some(&[] as &[Song]));
    }
}
