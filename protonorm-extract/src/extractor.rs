//! The extractor trait and its outcome type.
//!
//! Each protocol family implements [`ProtocolExtractor`]. "This extractor
//! found nothing" is an expected, non-exceptional outcome, so extraction
//! reports a value ([`ExtractOutcome`]) rather than an error: a miss
//! carries the warnings gathered along the way and the caller moves on to
//! the next fallback tier.

use protonorm_core::{ContentPart, Protocol};
use serde_json::Value as JsonValue;

/// Content pulled out of a payload by one extractor.
#[derive(Debug, Clone, Default)]
pub struct Extraction {
    /// The extracted human-readable text.
    pub text: String,
    /// Structured parts, when the extractor supports decomposition.
    pub parts: Vec<ContentPart>,
    /// Notes about any extractor-internal fallback that was used.
    pub warnings: Vec<String>,
}

impl Extraction {
    /// Create an extraction carrying only text.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            parts: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Attach structured parts.
    #[must_use]
    pub fn with_parts(mut self, parts: Vec<ContentPart>) -> Self {
        self.parts = parts;
        self
    }

    /// Attach warnings.
    #[must_use]
    pub fn with_warnings(mut self, warnings: Vec<String>) -> Self {
        self.warnings = warnings;
        self
    }
}

/// The result of asking one extractor for content.
#[derive(Debug, Clone)]
pub enum ExtractOutcome {
    /// The extractor produced usable text.
    Found(Extraction),
    /// The extractor found nothing it understands.
    Miss {
        /// Warnings gathered before giving up (malformed elements, etc.).
        warnings: Vec<String>,
    },
}

impl ExtractOutcome {
    /// A miss with no warnings.
    #[must_use]
    pub fn miss() -> Self {
        Self::Miss {
            warnings: Vec::new(),
        }
    }

    /// Whether content was found.
    #[must_use]
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }
}

/// A per-protocol extraction strategy.
///
/// Implementations must be pure: no I/O, no shared mutable state, the same
/// payload always producing the same outcome. This keeps the whole
/// normalization layer safe to call concurrently without coordination.
pub trait ProtocolExtractor: Send + Sync {
    /// The protocol family tag this extractor handles.
    fn protocol(&self) -> Protocol;

    /// Attempt to extract content from a payload.
    fn extract(&self, payload: &JsonValue) -> ExtractOutcome;
}

/// A boxed extractor, as stored by the registry.
pub type BoxedExtractor = Box<dyn ProtocolExtractor>;

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed;

    impl ProtocolExtractor for Fixed {
        fn protocol(&self) -> Protocol {
            Protocol::new("fixed")
        }

        fn extract(&self, _payload: &JsonValue) -> ExtractOutcome {
            ExtractOutcome::Found(Extraction::text("always"))
        }
    }

    #[test]
    fn test_outcome_is_found() {
        assert!(ExtractOutcome::Found(Extraction::text("x")).is_found());
        assert!(!ExtractOutcome::miss().is_found());
    }

    #[test]
    fn test_trait_is_object_safe() {
        let boxed: BoxedExtractor = Box::new(Fixed);
        assert_eq!(boxed.protocol().as_str(), "fixed");
        assert!(boxed.extract(&serde_json::json!({})).is_found());
    }

    #[test]
    fn test_extraction_builders() {
        let extraction = Extraction::text("hello")
            .with_parts(vec![ContentPart::text("hello")])
            .with_warnings(vec!["note".to_string()]);
        assert_eq!(extraction.text, "hello");
        assert_eq!(extraction.parts.len(), 1);
        assert_eq!(extraction.warnings, vec!["note".to_string()]);
    }
}
