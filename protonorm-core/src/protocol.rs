//! Protocol family tags.
//!
//! A [`Protocol`] names the response-shape family an agent speaks. The set
//! is open: the extractor registry can introduce new tags without any
//! change to the detector, so the well-known constants below are a
//! vocabulary, not a closed enum.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

/// A lowercase protocol family tag.
///
/// Tags are normalized to lowercase on construction so that comparisons,
/// hint matching, and registry lookups are all case-insensitive.
///
/// # Example
///
/// ```rust
/// use protonorm_core::Protocol;
///
/// let tag = Protocol::new("A2A");
/// assert_eq!(tag, Protocol::A2A);
/// assert!(!tag.is_unknown());
/// assert!(Protocol::UNKNOWN.is_unknown());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Protocol(Cow<'static, str>);

impl Protocol {
    /// The parts-based family (A2A-style responses).
    pub const A2A: Self = Self(Cow::Borrowed("a2a"));

    /// The direct-content family (ACP-style responses).
    pub const ACP: Self = Self(Cow::Borrowed("acp"));

    /// Model Context Protocol agents.
    pub const MCP: Self = Self(Cow::Borrowed("mcp"));

    /// No protocol family could be determined.
    pub const UNKNOWN: Self = Self(Cow::Borrowed("unknown"));

    /// Create a new protocol tag, trimming and lowercasing the input.
    #[must_use]
    pub fn new(tag: impl AsRef<str>) -> Self {
        Self(Cow::Owned(tag.as_ref().trim().to_lowercase()))
    }

    /// Get the tag as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this is the [`Protocol::UNKNOWN`] tag.
    #[must_use]
    pub fn is_unknown(&self) -> bool {
        *self == Self::UNKNOWN
    }
}

impl Default for Protocol {
    fn default() -> Self {
        Self::UNKNOWN
    }
}

impl std::fmt::Display for Protocol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Protocol {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for Protocol {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl AsRef<str> for Protocol {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalizes_case_and_whitespace() {
        assert_eq!(Protocol::new(" A2A "), Protocol::A2A);
        assert_eq!(Protocol::new("Acp"), Protocol::ACP);
        assert_eq!(Protocol::new("custom-rpc").as_str(), "custom-rpc");
    }

    #[test]
    fn test_unknown() {
        assert!(Protocol::UNKNOWN.is_unknown());
        assert!(Protocol::new("unknown").is_unknown());
        assert!(!Protocol::A2A.is_unknown());
        assert_eq!(Protocol::default(), Protocol::UNKNOWN);
    }

    #[test]
    fn test_serde_is_transparent() {
        let json = serde_json::to_string(&Protocol::ACP).unwrap();
        assert_eq!(json, "\"acp\"");
        let parsed: Protocol = serde_json::from_str("\"a2a\"").unwrap();
        assert_eq!(parsed, Protocol::A2A);
    }
}
