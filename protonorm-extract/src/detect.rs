//! Protocol detection.
//!
//! Classifies an envelope into a protocol family using, in order: the
//! caller's explicit hint, a substring match on the agent ID, and finally
//! the shape of the payload itself. Each rule carries a fixed confidence;
//! the first rule that fires wins. Detection never fails, it only
//! degrades to `unknown` with zero confidence.

use protonorm_core::{Protocol, ResponseEnvelope};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use tracing::debug;

use crate::direct::DIRECT_FIELDS;
use crate::parts::find_parts;

/// Confidence assigned to a recognized explicit hint.
pub const CONFIDENCE_HINT: f32 = 0.9;

/// Confidence assigned to a structural payload match.
pub const CONFIDENCE_STRUCTURAL: f32 = 0.8;

/// Confidence assigned to an agent-ID substring match.
pub const CONFIDENCE_AGENT_ID: f32 = 0.7;

/// A protocol classification with its confidence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Detection {
    /// The detected protocol family tag, or `unknown`.
    pub protocol: Protocol,
    /// Confidence in `[0, 1]`. Zero when nothing matched.
    pub confidence: f32,
}

impl Detection {
    fn unknown() -> Self {
        Self {
            protocol: Protocol::UNKNOWN,
            confidence: 0.0,
        }
    }
}

/// Stateless, rule-ordered protocol detector.
///
/// The detector is pure: detecting the same unmodified envelope twice
/// yields the same tag and confidence both times.
#[derive(Debug, Clone)]
pub struct ProtocolDetector {
    known: Vec<Protocol>,
}

impl Default for ProtocolDetector {
    fn default() -> Self {
        Self::new(vec![Protocol::A2A, Protocol::ACP])
    }
}

impl ProtocolDetector {
    /// Create a detector that recognizes the given tags.
    ///
    /// Registries hand their registered tag list here so that newly
    /// registered protocol families become detectable via hints and
    /// agent IDs without any detector change.
    #[must_use]
    pub fn new(known: Vec<Protocol>) -> Self {
        Self { known }
    }

    /// The tags this detector recognizes.
    #[must_use]
    pub fn known_tags(&self) -> &[Protocol] {
        &self.known
    }

    /// Classify an envelope into a protocol family.
    #[must_use]
    pub fn detect(&self, envelope: &ResponseEnvelope) -> Detection {
        // 1. An explicit hint is authoritative when recognized.
        if let Some(hint) = &envelope.protocol_hint {
            let tag = Protocol::new(hint);
            if self.known.contains(&tag) {
                debug!(protocol = %tag, "detected via explicit hint");
                return Detection {
                    protocol: tag,
                    confidence: CONFIDENCE_HINT,
                };
            }
        }

        // 2. Agent IDs conventionally embed the protocol ("a2a-math").
        let agent_id = envelope.agent_id.to_lowercase();
        for tag in &self.known {
            if !tag.as_str().is_empty() && agent_id.contains(tag.as_str()) {
                debug!(protocol = %tag, agent_id = %envelope.agent_id, "detected via agent ID");
                return Detection {
                    protocol: tag.clone(),
                    confidence: CONFIDENCE_AGENT_ID,
                };
            }
        }

        // 3. Structural inspection of the payload.
        if let Some(payload) = envelope.payload() {
            if find_parts(payload).is_some() {
                debug!("detected parts-based family via payload shape");
                return Detection {
                    protocol: Protocol::A2A,
                    confidence: CONFIDENCE_STRUCTURAL,
                };
            }
            if has_direct_content_field(payload) {
                debug!("detected direct-content family via payload shape");
                return Detection {
                    protocol: Protocol::ACP,
                    confidence: CONFIDENCE_STRUCTURAL,
                };
            }
        }

        Detection::unknown()
    }
}

fn has_direct_content_field(payload: &JsonValue) -> bool {
    payload.as_object().is_some_and(|obj| {
        DIRECT_FIELDS
            .iter()
            .any(|field| obj.get(*field).is_some_and(JsonValue::is_string))
    })
}
