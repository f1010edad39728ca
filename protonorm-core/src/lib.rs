//! # protonorm-core
//!
//! Core types for the protonorm agent response normalization library.
//!
//! This crate provides the foundational types shared across the protonorm
//! workspace:
//!
//! - **Envelopes**: [`ResponseEnvelope`], the outer wrapper handed to the
//!   normalization layer for every agent invocation
//! - **Normalized output**: [`NormalizedContent`] and [`ContentPart`]
//! - **Protocol tags**: [`Protocol`], an open set of lowercase family tags
//! - **Identifiers**: request-ID generation and timestamp helpers
//! - **Errors**: envelope parsing errors
//!
//! ## Example
//!
//! ```rust
//! use protonorm_core::{Protocol, ResponseEnvelope};
//!
//! let envelope = ResponseEnvelope::new(
//!     "a2a-math",
//!     serde_json::json!({"parts": [{"kind": "text", "text": "42"}]}),
//! )
//! .with_protocol_hint("a2a");
//!
//! assert_eq!(envelope.agent_id, "a2a-math");
//! assert_eq!(envelope.protocol_hint.as_deref(), Some("a2a"));
//! assert_eq!(Protocol::A2A.as_str(), "a2a");
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod content;
pub mod envelope;
pub mod errors;
pub mod identifier;
pub mod protocol;

// Re-exports for convenience
pub use content::{ContentPart, NormalizedContent};
pub use envelope::ResponseEnvelope;
pub use errors::{envelope_from_str, EnvelopeError, EnvelopeResult};
pub use identifier::{generate_request_id, now_utc, RequestId};
pub use protocol::Protocol;

/// Prelude module for common imports.
///
/// ```rust
/// use protonorm_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::content::{ContentPart, NormalizedContent};
    pub use crate::envelope::ResponseEnvelope;
    pub use crate::errors::{envelope_from_str, EnvelopeError, EnvelopeResult};
    pub use crate::identifier::{generate_request_id, now_utc, RequestId};
    pub use crate::protocol::Protocol;
}
