/// Result type alias using LedgerError
pub type Result<T> = std::result::Result<T, LedgerError>;

/// Canonical error kind taxonomy
///
/// This taxonomy provides a stable, structured classification of all errors
/// in the SongLedger system. Each kind maps to a stable error code that can
/// be used for programmatic handling, testing, and API status mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedgerErrorKind {
    /// Missing required field, malformed or non-positive id, bad payload
    InvalidInput,
    /// Referenced backup does not exist
    NotFound,
    /// JSON encoding/decoding of a songs payload failed
    Serialization,
    /// Underlying SQLite operation failed
    Persistence,
    /// Internal invariant breach
    Internal,
}

impl LedgerErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            LedgerErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            LedgerErrorKind::NotFound => "ERR_NOT_FOUND",
            LedgerErrorKind::Serialization => "ERR_SERIALIZATION",
            LedgerErrorKind::Persistence => "ERR_PERSISTENCE",
            LedgerErrorKind::Internal => "ERR_INTERNAL",
        }
    }
}

/// Canonical structured error type
///
/// Carries a classification kind plus optional operation and entity context
/// for diagnostics. Built fluently:
///
/// ```
/// use songledger_core::errors::{LedgerError, LedgerErrorKind};
///
/// let err = LedgerError::new(LedgerErrorKind::NotFound)
///     .with_op("get_backup")
///     .with_entity_id("42")
///     .with_message("backup not found");
/// assert_eq!(err.code(), "ERR_NOT_FOUND");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerError {
    kind: LedgerErrorKind,
    op: Option<String>,
    entity_id: Option<String>,
    message: String,
}

impl LedgerError {
    /// Create a new error with the specified kind
    pub fn new(kind: LedgerErrorKind) -> Self {
        Self {
            kind,
            op: None,
            entity_id: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add entity ID context
    pub fn with_entity_id(mut self, id: impl Into<String>) -> Self {
        self.entity_id = Some(id.into());
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> LedgerErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Get the operation context, if any
    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    /// Get the entity ID context, if any
    pub fn entity_id(&self) -> Option<&str> {
        self.entity_id.as_deref()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for LedgerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(entity_id) = &self.entity_id {
            write!(f, " (entity_id: {})", entity_id)?;
        }
        Ok(())
    }
}

impl std::error::Error for LedgerError {}

impl From<serde_json::Error> for LedgerError {
    fn from(err: serde_json::Error) -> Self {
        LedgerError::new(LedgerErrorKind::Serialization).with_message(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kind_codes() {
        let cases = [
            (LedgerErrorKind::InvalidInput, "ERR_INVALID_INPUT"),
            (LedgerErrorKind::NotFound, "ERR_NOT_FOUND"),
            (LedgerErrorKind::Serialization, "ERR_SERIALIZATION"),
            (LedgerErrorKind::Persistence, "ERR_PERSISTENCE"),
            (LedgerErrorKind::Internal, "ERR_INTERNAL"),
        ];
        for (kind, expected_code) in cases {
            assert_eq!(kind.code(), expected_code, "Wrong code for {:?}", kind);
        }
    }

    #[test]
    fn test_display_includes_context() {
        let err = LedgerError::new(LedgerErrorKind::NotFound)
            .with_op("delete_backup")
            .with_entity_id("7")
            .with_message("backup not found");
        let text = err.to_string();
        assert!(text.contains("ERR_NOT_FOUND"));
        assert!(text.contains("delete_backup"));
        assert!(text.contains("entity_id: 7"));
    }

    #[test]
    fn test_from_serde_json_error() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: LedgerError = parse_err.into();
        assert_eq!(err.kind(), LedgerErrorKind::Serialization);
    }
}
