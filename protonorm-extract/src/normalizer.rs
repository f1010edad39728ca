//! The normalization entry point.
//!
//! [`Normalizer::normalize`] is the single public operation of this
//! layer: one envelope in, one [`NormalizedContent`] out. The call is
//! total. Extractor misses cascade to the next fallback tier and are
//! reported through `warnings`; nothing is ever surfaced as an error.

use protonorm_core::{NormalizedContent, ResponseEnvelope};
use tracing::{debug, warn};

use crate::detect::ProtocolDetector;
use crate::direct::DirectContentExtractor;
use crate::extractor::{ExtractOutcome, ProtocolExtractor};
use crate::fallback::FallbackExtractor;
use crate::registry::ExtractorRegistry;

const NO_CONTENT: &str = "No content available";

/// Protocol-aware response normalizer.
///
/// Holds an [`ExtractorRegistry`] and the shared [`FallbackExtractor`].
/// The normalizer is stateless between calls and safe to share across
/// threads; each call only reads its input and allocates its output.
///
/// # Example
///
/// ```rust
/// use protonorm_core::ResponseEnvelope;
/// use protonorm_extract::Normalizer;
///
/// let normalizer = Normalizer::new();
/// let envelope = ResponseEnvelope::new(
///     "acp-hello",
///     serde_json::json!({"content": "Hello!"}),
/// );
///
/// let normalized = normalizer.normalize(&envelope);
/// assert_eq!(normalized.text, "Hello!");
/// assert_eq!(normalized.protocol.as_str(), "acp");
/// ```
#[derive(Debug)]
pub struct Normalizer {
    registry: ExtractorRegistry,
    fallback: FallbackExtractor,
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Normalizer {
    /// Create a normalizer with the default extractor registry.
    #[must_use]
    pub fn new() -> Self {
        Self::with_registry(ExtractorRegistry::with_defaults())
    }

    /// Create a normalizer around a custom extractor registry.
    #[must_use]
    pub fn with_registry(registry: ExtractorRegistry) -> Self {
        Self {
            registry,
            fallback: FallbackExtractor::new(),
        }
    }

    /// The extractor registry in use.
    #[must_use]
    pub fn registry(&self) -> &ExtractorRegistry {
        &self.registry
    }

    /// A detector recognizing exactly the registered protocol tags.
    #[must_use]
    pub fn detector(&self) -> ProtocolDetector {
        ProtocolDetector::new(self.registry.tags())
    }

    /// Normalize one envelope into presentable content.
    ///
    /// Always returns: empty payloads produce a diagnostic placeholder,
    /// extractor misses cascade to the generic fallback, and every
    /// degradation is recorded in the result's `warnings`.
    #[must_use]
    pub fn normalize(&self, envelope: &ResponseEnvelope) -> NormalizedContent {
        let detection = self.detector().detect(envelope);
        let protocol = detection.protocol.clone();
        debug!(
            request_id = %envelope.request_id,
            protocol = %protocol,
            confidence = detection.confidence,
            "normalizing envelope"
        );

        let Some(payload) = envelope.payload() else {
            return NormalizedContent::new(NO_CONTENT, protocol)
                .with_warnings(vec!["payload is empty; nothing to extract".to_string()]);
        };

        let mut warnings = Vec::new();

        if protocol.is_unknown() {
            // Detection ambiguity: try the generic content-field
            // heuristics before resorting to the deep search.
            match DirectContentExtractor::new().extract(payload) {
                ExtractOutcome::Found(extraction) => {
                    warnings.extend(extraction.warnings);
                    warnings.push(
                        "protocol unknown; content found via generic field heuristics".to_string(),
                    );
                    return NormalizedContent::new(extraction.text, protocol)
                        .with_warnings(warnings);
                }
                ExtractOutcome::Miss {
                    warnings: missed_with,
                } => warnings.extend(missed_with),
            }
        } else if let Some(extractor) = self.registry.get(&protocol) {
            match extractor.extract(payload) {
                ExtractOutcome::Found(extraction) => {
                    warnings.extend(extraction.warnings);
                    return NormalizedContent::new(extraction.text, protocol)
                        .with_parts(extraction.parts)
                        .with_warnings(warnings);
                }
                ExtractOutcome::Miss {
                    warnings: missed_with,
                } => {
                    warnings.extend(missed_with);
                    warnings.push(format!("'{protocol}' extractor found no content"));
                }
            }
        } else {
            warnings.push(format!("no extractor registered for '{protocol}'"));
        }

        warn!(
            request_id = %envelope.request_id,
            protocol = %protocol,
            "falling back to generic extraction"
        );
        let extraction = self.fallback.extract(payload);
        warnings.extend(extraction.warnings);
        NormalizedContent::new(extraction.text, protocol).with_warnings(warnings)
    }
}

/// Normalize one envelope with the default registry.
///
/// Convenience wrapper for callers that do not need a custom
/// [`ExtractorRegistry`].
#[must_use]
pub fn normalize(envelope: &ResponseEnvelope) -> NormalizedContent {
    Normalizer::new().normalize(envelope)
}
