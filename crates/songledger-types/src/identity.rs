//! User identity canonicalization.
//!
//! The upstream identity provider has been observed to emit numeric-looking
//! identities with a spurious trailing `.0` (a numeric-to-string coercion
//! somewhere upstream). Canonicalization happens exactly once, at the write
//! boundary; read paths never clean stored data.

/// Canonical form of a raw user identity.
///
/// Strips a single trailing `.0` artifact; everything else passes through
/// unchanged. Absent identities canonicalize to the empty string.
/// Idempotent: canonicalizing a canonical identity is a no-op.
pub fn canonical_user_id(raw: Option<&str>) -> String {
    match raw {
        Some(id) => id.strip_suffix(".0").unwrap_or(id).to_string(),
        None => String::new(),
    }
}

/// The legacy `.0`-suffixed variant of a canonical identity.
///
/// Lookup-side shim only: records persisted before canonicalization existed
/// may still carry this form, so identity-scoped queries match both.
pub fn legacy_user_id(canonical: &str) -> String {
    format!("{}.0", canonical)
}
