//! Error handling for songledger-store
//!
//! Wraps songledger-core LedgerError with store-specific helpers

use songledger_core::errors::{LedgerError, LedgerErrorKind};

/// Result type alias using LedgerError
pub type Result<T> = std::result::Result<T, LedgerError>;

/// Create a migration error
pub fn migration_error(migration_id: &str, reason: &str) -> LedgerError {
    LedgerError::new(LedgerErrorKind::Persistence)
        .with_op("migration")
        .with_message(format!("Migration {} failed: {}", migration_id, reason))
}

/// Create a missing-required-field error
pub fn missing_field(field: &str) -> LedgerError {
    LedgerError::new(LedgerErrorKind::InvalidInput)
        .with_op("create_backup")
        .with_message(format!("missing required field `{}`", field))
}

/// Create an invalid backup id error
pub fn invalid_backup_id(op: &str, id: i64) -> LedgerError {
    LedgerError::new(LedgerErrorKind::InvalidInput)
        .with_op(op)
        .with_message(format!("backup id must be a positive integer, got {}", id))
}

/// Create a backup-not-found error
pub fn backup_not_found(op: &str, id: i64) -> LedgerError {
    LedgerError::new(LedgerErrorKind::NotFound)
        .with_op(op)
        .with_entity_id(id.to_string())
        .with_message("backup not found")
}

/// Create a database error from rusqlite::Error
pub fn from_rusqlite(err: rusqlite::Error) -> LedgerError {
    LedgerError::new(LedgerErrorKind::Persistence)
        .with_op("sqlite")
        .with_message(err.to_string())
}
