//! ID generation utilities.
//!
//! This module provides request-ID generation and timestamp helpers for
//! envelopes and registry bookkeeping.

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Generate a unique request ID.
///
/// Returns a UUID v4 string prefixed with "req_".
///
/// # Example
///
/// ```rust
/// use protonorm_core::identifier::generate_request_id;
///
/// let id = generate_request_id();
/// assert!(id.starts_with("req_"));
/// assert_eq!(id.len(), 36); // "req_" + 32 hex chars
/// ```
#[must_use]
pub fn generate_request_id() -> String {
    format!("req_{}", Uuid::new_v4().simple())
}

/// Get the current UTC timestamp.
#[must_use]
pub fn now_utc() -> DateTime<Utc> {
    Utc::now()
}

/// Type-safe wrapper for a request ID.
///
/// Request IDs are opaque: they are assigned by the caller or orchestrator
/// and never interpreted by the normalization layer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct RequestId(String);

impl RequestId {
    /// Create a new, freshly generated request ID.
    #[must_use]
    pub fn new() -> Self {
        Self(generate_request_id())
    }

    /// Create from an existing string.
    #[must_use]
    pub fn from_string(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Get the ID as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for RequestId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for RequestId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for RequestId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl AsRef<str> for RequestId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_request_id() {
        let id = generate_request_id();
        assert!(id.starts_with("req_"));
        assert_eq!(id.len(), 36);
    }

    #[test]
    fn test_generate_unique_ids() {
        let id1 = generate_request_id();
        let id2 = generate_request_id();
        assert_ne!(id1, id2);
    }

    #[test]
    fn test_request_id_type() {
        let id = RequestId::new();
        assert!(id.as_str().starts_with("req_"));

        let from_str = RequestId::from_string("req_custom");
        assert_eq!(from_str.as_str(), "req_custom");
    }

    #[test]
    fn test_serde_roundtrip() {
        let id = RequestId::new();
        let json = serde_json::to_string(&id).unwrap();
        let parsed: RequestId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, parsed);
    }
}
