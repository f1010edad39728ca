//! Extractor registry.
//!
//! Maps protocol tags to extractors. Adding support for a new protocol
//! family is a registration here, not a branch edit in the detector or
//! the normalizer.

use indexmap::IndexMap;
use protonorm_core::Protocol;
use tracing::debug;

use crate::direct::DirectContentExtractor;
use crate::extractor::{BoxedExtractor, ProtocolExtractor};
use crate::parts::PartsExtractor;

/// An insertion-ordered table of protocol extractors.
///
/// # Example
///
/// ```rust
/// use protonorm_extract::ExtractorRegistry;
/// use protonorm_core::Protocol;
///
/// let registry = ExtractorRegistry::with_defaults();
/// assert!(registry.contains(&Protocol::A2A));
/// assert!(registry.contains(&Protocol::ACP));
/// ```
#[derive(Default)]
pub struct ExtractorRegistry {
    extractors: IndexMap<Protocol, BoxedExtractor>,
}

impl ExtractorRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry with the built-in extractors registered:
    /// parts-based (`a2a`) and direct-content (`acp`).
    #[must_use]
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(PartsExtractor::new());
        registry.register(DirectContentExtractor::new());
        registry
    }

    /// Register an extractor under its own protocol tag.
    ///
    /// A later registration for the same tag replaces the earlier one.
    pub fn register(&mut self, extractor: impl ProtocolExtractor + 'static) {
        let tag = extractor.protocol();
        debug!(protocol = %tag, "registering extractor");
        self.extractors.insert(tag, Box::new(extractor));
    }

    /// Look up the extractor for a tag.
    #[must_use]
    pub fn get(&self, protocol: &Protocol) -> Option<&dyn ProtocolExtractor> {
        self.extractors.get(protocol).map(|boxed| boxed.as_ref())
    }

    /// Whether a tag has a registered extractor.
    #[must_use]
    pub fn contains(&self, protocol: &Protocol) -> bool {
        self.extractors.contains_key(protocol)
    }

    /// The registered tags, in registration order.
    #[must_use]
    pub fn tags(&self) -> Vec<Protocol> {
        self.extractors.keys().cloned().collect()
    }

    /// Number of registered extractors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.extractors.len()
    }

    /// Whether the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.extractors.is_empty()
    }
}

impl std::fmt::Debug for ExtractorRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExtractorRegistry")
            .field("tags", &self.tags())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extractor::{ExtractOutcome, Extraction};
    use serde_json::Value as JsonValue;

    struct Echo(&'static str);

    impl ProtocolExtractor for Echo {
        fn protocol(&self) -> Protocol {
            Protocol::new(self.0)
        }

        fn extract(&self, _payload: &JsonValue) -> ExtractOutcome {
            ExtractOutcome::Found(Extraction::text(self.0))
        }
    }

    #[test]
    fn test_defaults() {
        let registry = ExtractorRegistry::with_defaults();
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.tags(), vec![Protocol::A2A, Protocol::ACP]);
    }

    #[test]
    fn test_register_new_family() {
        let mut registry = ExtractorRegistry::with_defaults();
        registry.register(Echo("mcp"));
        assert!(registry.contains(&Protocol::MCP));
        assert_eq!(registry.tags().len(), 3);
    }

    #[test]
    fn test_reregistration_replaces() {
        let mut registry = ExtractorRegistry::new();
        registry.register(Echo("x"));
        registry.register(Echo("x"));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_get_unknown_tag() {
        let registry = ExtractorRegistry::with_defaults();
        assert!(registry.get(&Protocol::new("smoke-signals")).is_none());
    }
}
