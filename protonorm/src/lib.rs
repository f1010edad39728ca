//! # protonorm - protocol-aware agent response normalization
//!
//! Multi-protocol AI agent systems receive responses in several wire
//! shapes: A2A-style ordered "parts", ACP-style flat `content` fields,
//! and whatever a custom agent decided to emit. protonorm takes one such
//! response envelope and produces a single presentable result: text that
//! is always there, structured parts when the protocol supports them,
//! and warnings describing any fallback that was used along the way.
//!
//! ## Quick Start
//!
//! ```rust
//! use protonorm::prelude::*;
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
//! assert_eq!(normalized.protocol, Protocol::A2A);
//! ```
//!
//! ## Key Properties
//!
//! - **Total**: `normalize` always returns content; empty or malformed
//!   payloads produce a diagnostic placeholder, never an error
//! - **Protocol-aware**: explicit hints, agent-ID conventions, and
//!   payload shape all feed detection, in that order
//! - **Extensible**: protocol families live in an injectable
//!   [`ExtractorRegistry`]; adding one is a registration, not a branch
//!   edit
//! - **Pure**: no I/O, no shared state; safe to call concurrently from
//!   any number of threads
//!
//! ## Architecture
//!
//! protonorm is organized as a workspace of focused crates:
//!
//! - [`protonorm_core`] - Envelope, normalized content, protocol tags
//! - [`protonorm_extract`] - Detection, extractors, fallback, normalizer
//! - `protonorm-registry` - In-memory agent registry (feature `registry`)
//!
//! ## Feature Flags
//!
//! | Feature | Description | Default |
//! |---------|-------------|---------|
//! | `registry` | In-memory agent registry with capability lookup | ❌ |
//! | `full` | All features | ❌ |

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod direct;

pub use protonorm_core::{
    envelope_from_str, generate_request_id, now_utc, ContentPart, EnvelopeError, EnvelopeResult,
    NormalizedContent, Protocol, RequestId, ResponseEnvelope,
};
pub use protonorm_extract::{
    normalize, Detection, DirectContentExtractor, ExtractOutcome, Extraction, ExtractorRegistry,
    FallbackExtractor, Normalizer, PartsExtractor, ProtocolDetector, ProtocolExtractor,
};

#[cfg(feature = "registry")]
pub use protonorm_registry::{
    AgentCard, AgentEntry, AgentRegistry, AgentStatus, Capability, CardBuilder, Provider,
    RegistryConfig, RegistryError, RegistryResult, RegistryStats,
};

/// Prelude module for common imports.
///
/// ```rust
/// use protonorm::prelude::*;
/// ```
pub mod prelude {
    pub use protonorm_core::prelude::*;
    pub use protonorm_extract::prelude::*;

    #[cfg(feature = "registry")]
    pub use protonorm_registry::prelude::*;

    pub use crate::direct::{normalize_str, normalize_value};
}
