//! Direct normalization functions.
//!
//! These functions normalize raw envelope JSON in one call, without
//! constructing a [`Normalizer`](protonorm_extract::Normalizer) or the
//! envelope by hand. Use them for one-off conversions, scripts, and
//! simple integrations; anything that needs a custom extractor registry
//! should build a `Normalizer` instead.
//!
//! # Examples
//!
//! ```rust
//! use protonorm::direct::normalize_str;
//!
//! let normalized = normalize_str(
//!     r#"{"protocol": "acp", "agent_id": "acp-hello", "response_data": {"content": "Hello!"}}"#,
//! )
//! .unwrap();
//!
//! assert_eq!(normalized.text, "Hello!");
//! assert_eq!(normalized.protocol.as_str(), "acp");
//! ```

use protonorm_core::{envelope_from_str, EnvelopeResult, NormalizedContent, ResponseEnvelope};
use serde_json::Value as JsonValue;

/// Normalize an envelope given as a JSON string.
///
/// # Errors
///
/// Returns an [`protonorm_core::EnvelopeError`] when the string is not
/// valid envelope JSON. Once the envelope parses, normalization itself
/// cannot fail.
pub fn normalize_str(json: &str) -> EnvelopeResult<NormalizedContent> {
    let envelope = envelope_from_str(json)?;
    Ok(protonorm_extract::normalize(&envelope))
}

/// Normalize an envelope given as a JSON value.
///
/// # Errors
///
/// Returns an [`protonorm_core::EnvelopeError`] when the value does not
/// deserialize into a [`ResponseEnvelope`].
pub fn normalize_value(value: JsonValue) -> EnvelopeResult<NormalizedContent> {
    let envelope: ResponseEnvelope = serde_json::from_value(value)
        .map_err(protonorm_core::EnvelopeError::JsonParse)?;
    Ok(protonorm_extract::normalize(&envelope))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_normalize_str() {
        let normalized = normalize_str(
            r#"{"protocol": "a2a", "agent_id": "a2a-math", "response_data": {"parts": [{"kind": "text", "text": "4"}]}}"#,
        )
        .unwrap();
        assert_eq!(normalized.text, "4");
        assert_eq!(normalized.protocol.as_str(), "a2a");
    }

    #[test]
    fn test_normalize_str_rejects_bad_json() {
        assert!(normalize_str("{").is_err());
    }

    #[test]
    fn test_normalize_value() {
        let normalized = normalize_value(json!({
            "agent_id": "mystery",
            "response_data": {"deep": {"note": "recovered text"}},
        }))
        .unwrap();
        assert_eq!(normalized.text, "recovered text");
        assert!(normalized.protocol.is_unknown());
    }
}
