//! # protonorm-extract
//!
//! Protocol detection and response extraction for protonorm.
//!
//! This crate turns a heterogeneous agent response envelope into a single
//! presentable [`NormalizedContent`](protonorm_core::NormalizedContent).
//!
//! ## Core Concepts
//!
//! - **[`ProtocolDetector`]**: classifies an envelope into a protocol
//!   family (explicit hint, agent-ID match, payload shape) with a
//!   confidence score
//! - **[`ProtocolExtractor`]**: the per-family extraction strategy trait
//! - **[`PartsExtractor`]**: the parts-based family (A2A-style ordered
//!   typed segments)
//! - **[`DirectContentExtractor`]**: the direct-content family (ACP-style
//!   flat named fields)
//! - **[`FallbackExtractor`]**: generic deep search used when every
//!   specific extractor missed
//! - **[`ExtractorRegistry`]**: injectable tag → extractor table; adding
//!   a protocol family is a registration, not a branch edit
//! - **[`Normalizer`]**: the public entry point; total, never errors
//!
//! ## Example
//!
//! ```rust
//! use protonorm_core::ResponseEnvelope;
//! use protonorm_extract::normalize;
//!
//! let envelope: ResponseEnvelope = serde_json::from_value(serde_json::json!({
//!     "protocol": "a2a",
//!     "agent_id": "a2a-math",
//!     "response_data": {"parts": [
//!         {"kind": "text", "text": "The answer is "},
//!         {"kind": "text", "text": "4"},
//!     ]},
//! }))
//! .unwrap();
//!
//! let normalized = normalize(&envelope);
//! assert_eq!(normalized.text, "The answer is 4");
//! assert_eq!(normalized.protocol.as_str(), "a2a");
//! assert!(normalized.warnings.is_empty());
//! ```
//!
//! ## Extending with a new protocol family
//!
//! ```rust
//! use protonorm_core::Protocol;
//! use protonorm_extract::{
//!     ExtractOutcome, Extraction, ExtractorRegistry, Normalizer, ProtocolExtractor,
//! };
//!
//! struct StatusLineExtractor;
//!
//! impl ProtocolExtractor for StatusLineExtractor {
//!     fn protocol(&self) -> Protocol {
//!         Protocol::new("statusline")
//!     }
//!
//!     fn extract(&self, payload: &serde_json::Value) -> ExtractOutcome {
//!         match payload.get("line").and_then(|v| v.as_str()) {
//!             Some(line) => ExtractOutcome::Found(Extraction::text(line)),
//!             None => ExtractOutcome::miss(),
//!         }
//!     }
//! }
//!
//! let mut registry = ExtractorRegistry::with_defaults();
//! registry.register(StatusLineExtractor);
//! let normalizer = Normalizer::with_registry(registry);
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod detect;
pub mod direct;
pub mod extractor;
pub mod fallback;
pub mod normalizer;
pub mod parts;
pub mod registry;

// Re-exports
pub use detect::{
    Detection, ProtocolDetector, CONFIDENCE_AGENT_ID, CONFIDENCE_HINT, CONFIDENCE_STRUCTURAL,
};
pub use direct::DirectContentExtractor;
pub use extractor::{BoxedExtractor, ExtractOutcome, Extraction, ProtocolExtractor};
pub use fallback::FallbackExtractor;
pub use normalizer::{normalize, Normalizer};
pub use parts::PartsExtractor;
pub use registry::ExtractorRegistry;

/// Prelude for common imports.
pub mod prelude {
    pub use crate::detect::{Detection, ProtocolDetector};
    pub use crate::extractor::{ExtractOutcome, Extraction, ProtocolExtractor};
    pub use crate::normalizer::{normalize, Normalizer};
    pub use crate::registry::ExtractorRegistry;
}
