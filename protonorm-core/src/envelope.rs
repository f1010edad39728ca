//! Response envelopes.
//!
//! A [`ResponseEnvelope`] is the outer wrapper an orchestrating caller
//! builds around one agent invocation's raw response. The normalization
//! layer reads it exactly once and never mutates it.

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::identifier::RequestId;

/// The outer wrapper for one agent invocation's response.
///
/// The envelope is constructed by an upstream caller (which owns the
/// actual network call) and handed to the normalization layer. The
/// `payload` is an arbitrary JSON value whose shape is protocol-dependent
/// and otherwise unconstrained; `None` is treated as an empty payload.
///
/// Deserialization accepts the wire aliases used by the original
/// orchestrator: `protocol` for `protocol_hint` and `response_data` for
/// `payload`.
///
/// # Example
///
/// ```rust
/// use protonorm_core::ResponseEnvelope;
///
/// let envelope: ResponseEnvelope = serde_json::from_value(serde_json::json!({
///     "protocol": "acp",
///     "agent_id": "acp-hello",
///     "response_data": {"content": "Hello!"},
/// }))
/// .unwrap();
///
/// assert_eq!(envelope.protocol_hint.as_deref(), Some("acp"));
/// assert!(envelope.payload.is_some());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResponseEnvelope {
    /// Opaque identifier, unique per invocation. Generated when absent.
    #[serde(default)]
    pub request_id: RequestId,
    /// Identifier of the downstream agent that produced the response.
    ///
    /// Not validated against any registry by the normalization layer.
    pub agent_id: String,
    /// Human-readable agent name, when the caller knows it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agent_name: Option<String>,
    /// Optional protocol tag. Authoritative when it names a registered
    /// protocol family.
    #[serde(
        default,
        alias = "protocol",
        skip_serializing_if = "Option::is_none"
    )]
    pub protocol_hint: Option<String>,
    /// The protocol-dependent response payload. `None` and JSON `null`
    /// are both treated as an empty payload.
    #[serde(default, alias = "response_data")]
    pub payload: Option<JsonValue>,
    /// Whether the upstream call succeeded, as reported by the caller.
    #[serde(default = "default_success")]
    pub success: bool,
}

fn default_success() -> bool {
    true
}

impl ResponseEnvelope {
    /// Create an envelope for an agent's payload with a fresh request ID.
    pub fn new(agent_id: impl Into<String>, payload: JsonValue) -> Self {
        Self {
            request_id: RequestId::new(),
            agent_id: agent_id.into(),
            agent_name: None,
            protocol_hint: None,
            payload: Some(payload),
            success: true,
        }
    }

    /// Create an envelope with no payload at all.
    pub fn empty(agent_id: impl Into<String>) -> Self {
        Self {
            request_id: RequestId::new(),
            agent_id: agent_id.into(),
            agent_name: None,
            protocol_hint: None,
            payload: None,
            success: true,
        }
    }

    /// Set the request ID.
    #[must_use]
    pub fn with_request_id(mut self, request_id: impl Into<RequestId>) -> Self {
        self.request_id = request_id.into();
        self
    }

    /// Set the human-readable agent name.
    #[must_use]
    pub fn with_agent_name(mut self, name: impl Into<String>) -> Self {
        self.agent_name = Some(name.into());
        self
    }

    /// Set the protocol hint.
    #[must_use]
    pub fn with_protocol_hint(mut self, hint: impl Into<String>) -> Self {
        self.protocol_hint = Some(hint.into());
        self
    }

    /// Mark the upstream call as failed.
    #[must_use]
    pub fn failed(mut self) -> Self {
        self.success = false;
        self
    }

    /// The payload, with JSON `null` collapsed to `None`.
    #[must_use]
    pub fn payload(&self) -> Option<&JsonValue> {
        match &self.payload {
            Some(JsonValue::Null) | None => None,
            Some(value) => Some(value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_builder_methods() {
        let envelope = ResponseEnvelope::new("a2a-math", serde_json::json!({"x": 1}))
            .with_agent_name("Math Agent")
            .with_protocol_hint("a2a")
            .with_request_id("req_fixed");

        assert_eq!(envelope.agent_id, "a2a-math");
        assert_eq!(envelope.agent_name.as_deref(), Some("Math Agent"));
        assert_eq!(envelope.protocol_hint.as_deref(), Some("a2a"));
        assert_eq!(envelope.request_id.as_str(), "req_fixed");
        assert!(envelope.success);
    }

    #[test]
    fn test_wire_aliases() {
        let envelope: ResponseEnvelope = serde_json::from_value(serde_json::json!({
            "protocol": "a2a",
            "agent_id": "a2a-math",
            "response_data": {"raw_response": {"parts": []}},
        }))
        .unwrap();

        assert_eq!(envelope.protocol_hint.as_deref(), Some("a2a"));
        assert!(envelope.payload.is_some());
        assert!(envelope.success);
        assert!(envelope.request_id.as_str().starts_with("req_"));
    }

    #[test]
    fn test_null_payload_is_empty() {
        let envelope: ResponseEnvelope = serde_json::from_value(serde_json::json!({
            "agent_id": "mystery-agent",
            "response_data": null,
        }))
        .unwrap();

        assert!(envelope.payload().is_none());

        let envelope = ResponseEnvelope::empty("mystery-agent");
        assert!(envelope.payload().is_none());
    }

    #[test]
    fn test_failed() {
        let envelope = ResponseEnvelope::empty("agent").failed();
        assert!(!envelope.success);
    }
}
