//! Normalized content types.
//!
//! [`NormalizedContent`] is the single output shape of the normalization
//! layer: best-effort text, the resolved protocol tag, optional structured
//! parts, and any warnings accumulated while extracting.

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::protocol::Protocol;

/// The normalization layer's output for one envelope.
///
/// `text` is always present: when nothing could be extracted it carries a
/// diagnostic placeholder rather than being empty or absent. One envelope
/// maps to exactly one `NormalizedContent`; the value is immutable once
/// returned.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NormalizedContent {
    /// Best-effort human-readable text. Never empty.
    pub text: String,
    /// The resolved protocol family tag, or `unknown`.
    pub protocol: Protocol,
    /// Ordered structured sub-content, for protocols whose extractor
    /// supports structured decomposition. Empty otherwise.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parts: Vec<ContentPart>,
    /// Human-readable notes describing any fallback that was used.
    /// Empty when the primary extractor succeeded cleanly.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

impl NormalizedContent {
    /// Create normalized content with no parts and no warnings.
    pub fn new(text: impl Into<String>, protocol: Protocol) -> Self {
        Self {
            text: text.into(),
            protocol,
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

    /// Whether any extraction fallback was used.
    #[must_use]
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Whether structured parts were extracted.
    #[must_use]
    pub fn is_structured(&self) -> bool {
        !self.parts.is_empty()
    }
}

/// A typed segment of structured agent output.
///
/// Serialized with a `kind` discriminator matching the parts-based wire
/// format (`{"kind": "text", "text": "..."}`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ContentPart {
    /// Plain text segment.
    Text {
        /// The text content.
        text: String,
    },
    /// Fenced code block.
    Code {
        /// Language tag, when the agent provided one.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        language: Option<String>,
        /// The code itself.
        code: String,
    },
    /// A tool invocation requested by the agent.
    ToolCall {
        /// Tool name.
        name: String,
        /// Tool arguments as raw JSON.
        #[serde(default)]
        arguments: JsonValue,
    },
    /// The result of a tool invocation.
    ToolResult {
        /// Tool name, when known.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        name: Option<String>,
        /// The result as raw JSON.
        #[serde(default)]
        result: JsonValue,
    },
    /// An image reference.
    Image {
        /// Image URL, when present.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        url: Option<String>,
        /// Alt text, when present.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        alt: Option<String>,
    },
    /// Arbitrary structured data.
    Data {
        /// The data payload.
        #[serde(default)]
        data: JsonValue,
    },
}

impl ContentPart {
    /// Create a text part.
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text { text: text.into() }
    }

    /// Create a code part.
    pub fn code(language: Option<String>, code: impl Into<String>) -> Self {
        Self::Code {
            language,
            code: code.into(),
        }
    }

    /// The text content, if this is a text part.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text { text } => Some(text),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_new_has_no_parts_or_warnings() {
        let content = NormalizedContent::new("hello", Protocol::ACP);
        assert_eq!(content.text, "hello");
        assert!(!content.has_warnings());
        assert!(!content.is_structured());
    }

    #[test]
    fn test_with_parts_and_warnings() {
        let content = NormalizedContent::new("hello", Protocol::A2A)
            .with_parts(vec![ContentPart::text("hello")])
            .with_warnings(vec!["used fallback".to_string()]);
        assert!(content.is_structured());
        assert!(content.has_warnings());
    }

    #[test]
    fn test_part_kind_tagging() {
        let json = serde_json::to_value(ContentPart::text("hi")).unwrap();
        assert_eq!(json, serde_json::json!({"kind": "text", "text": "hi"}));

        let part: ContentPart = serde_json::from_value(serde_json::json!({
            "kind": "code",
            "language": "rust",
            "code": "fn main() {}",
        }))
        .unwrap();
        assert_eq!(
            part,
            ContentPart::code(Some("rust".to_string()), "fn main() {}")
        );
    }

    #[test]
    fn test_as_text() {
        assert_eq!(ContentPart::text("hi").as_text(), Some("hi"));
        assert_eq!(
            ContentPart::Data {
                data: serde_json::json!({})
            }
            .as_text(),
            None
        );
    }

    #[test]
    fn test_empty_collections_skipped_in_json() {
        let json = serde_json::to_string(&NormalizedContent::new("x", Protocol::ACP)).unwrap();
        assert!(!json.contains("parts"));
        assert!(!json.contains("warnings"));
    }
}
