//! Extractor for the parts-based family (A2A-style responses).
//!
//! Payloads in this family carry an ordered list of typed "part" objects,
//! usually nested somewhere under the response (`result.message.parts`,
//! `raw_response.parts`, ...). Text parts are concatenated; when there are
//! none, non-text parts are rendered to a readable form instead.

use protonorm_core::{ContentPart, Protocol};
use serde_json::{Map, Value as JsonValue};
use tracing::{debug, warn};

use crate::extractor::{ExtractOutcome, Extraction, ProtocolExtractor};

/// How deep below the payload root to look for a `parts` array.
const PARTS_SEARCH_DEPTH: usize = 4;

/// Extractor for payloads that represent content as a list of typed parts.
#[derive(Debug, Clone, Copy, Default)]
pub struct PartsExtractor;

impl PartsExtractor {
    /// Create a new parts-based extractor.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl ProtocolExtractor for PartsExtractor {
    fn protocol(&self) -> Protocol {
        Protocol::A2A
    }

    fn extract(&self, payload: &JsonValue) -> ExtractOutcome {
        let mut warnings = Vec::new();

        if let Some(obj) = payload.as_object() {
            if obj.get("parts").is_some_and(|v| !v.is_array()) {
                warnings.push("'parts' field is present but not a list".to_string());
            }
        }

        let Some(raw_parts) = find_parts(payload) else {
            return ExtractOutcome::Miss { warnings };
        };

        let mut parsed = Vec::new();
        for (index, raw) in raw_parts.iter().enumerate() {
            let Some(obj) = raw.as_object() else {
                warn!(index, "skipping malformed part: not an object");
                warnings.push(format!("skipped malformed part at index {index}: not an object"));
                continue;
            };
            if let Some(part) = parse_part(obj) {
                parsed.push(part);
            }
            // A part with neither `kind` nor `text` is silently skipped.
        }

        let texts: Vec<&str> = parsed
            .iter()
            .filter_map(ContentPart::as_text)
            .map(str::trim)
            .filter(|text| !text.is_empty())
            .collect();

        if !texts.is_empty() {
            return ExtractOutcome::Found(
                Extraction::text(texts.join(" "))
                    .with_parts(parsed)
                    .with_warnings(warnings),
            );
        }

        let rendered: Vec<String> = parsed.iter().filter_map(render_non_text).collect();
        if !rendered.is_empty() {
            debug!(parts = parsed.len(), "no text parts; rendering non-text parts");
            warnings.push("no text parts found; rendered non-text parts".to_string());
            return ExtractOutcome::Found(
                Extraction::text(rendered.join("\n\n"))
                    .with_parts(parsed)
                    .with_warnings(warnings),
            );
        }

        ExtractOutcome::Miss { warnings }
    }
}

/// Locate a plausible `parts` array at or below the payload root.
///
/// The array must be empty or contain at least one object tagged with
/// `kind` or carrying a `text` field; anything else (say, an array of
/// numbers that happens to be named `parts`) is not a match.
pub(crate) fn find_parts(payload: &JsonValue) -> Option<&Vec<JsonValue>> {
    find_parts_at(payload, 0)
}

fn find_parts_at(value: &JsonValue, depth: usize) -> Option<&Vec<JsonValue>> {
    let obj = value.as_object()?;

    if let Some(JsonValue::Array(parts)) = obj.get("parts") {
        if looks_like_parts(parts) {
            return Some(parts);
        }
    }

    if depth >= PARTS_SEARCH_DEPTH {
        return None;
    }

    obj.values()
        .filter(|v| v.is_object())
        .find_map(|v| find_parts_at(v, depth + 1))
}

fn looks_like_parts(parts: &[JsonValue]) -> bool {
    parts.is_empty()
        || parts.iter().any(|part| {
            part.as_object()
                .is_some_and(|obj| obj.contains_key("kind") || obj.contains_key("text"))
        })
}

/// Parse one raw part object into a [`ContentPart`].
///
/// Returns `None` for a part with neither `kind` nor `text`.
fn parse_part(obj: &Map<String, JsonValue>) -> Option<ContentPart> {
    let kind = obj.get("kind").and_then(JsonValue::as_str);
    let text = obj.get("text").and_then(JsonValue::as_str);

    match kind {
        Some("text") => Some(ContentPart::text(text.unwrap_or_default())),
        // A part without a discriminator but with text is treated as text.
        None => text.map(ContentPart::text),
        Some("code") => {
            let code = obj
                .get("code")
                .and_then(JsonValue::as_str)
                .or(text)
                .unwrap_or_default();
            let language = obj
                .get("language")
                .and_then(JsonValue::as_str)
                .map(str::to_string);
            Some(ContentPart::code(language, code))
        }
        Some("tool_call" | "tool-call") => Some(ContentPart::ToolCall {
            name: obj
                .get("name")
                .or_else(|| obj.get("tool"))
                .and_then(JsonValue::as_str)
                .unwrap_or("unknown")
                .to_string(),
            arguments: obj
                .get("arguments")
                .or_else(|| obj.get("args"))
                .or_else(|| obj.get("input"))
                .cloned()
                .unwrap_or(JsonValue::Null),
        }),
        Some("tool_result" | "tool-result") => Some(ContentPart::ToolResult {
            name: obj
                .get("name")
                .or_else(|| obj.get("tool"))
                .and_then(JsonValue::as_str)
                .map(str::to_string),
            result: obj
                .get("result")
                .or_else(|| obj.get("output"))
                .or_else(|| obj.get("content"))
                .cloned()
                .unwrap_or(JsonValue::Null),
        }),
        Some("image") => Some(ContentPart::Image {
            url: obj
                .get("url")
                .or_else(|| obj.get("uri"))
                .and_then(JsonValue::as_str)
                .map(str::to_string),
            alt: obj
                .get("alt")
                .or_else(|| obj.get("alt_text"))
                .or_else(|| obj.get("description"))
                .and_then(JsonValue::as_str)
                .map(str::to_string),
        }),
        // Unrecognized kinds are preserved as opaque data parts.
        Some(_) => Some(ContentPart::Data {
            data: JsonValue::Object(obj.clone()),
        }),
    }
}

/// Render a non-text part to a readable string.
fn render_non_text(part: &ContentPart) -> Option<String> {
    match part {
        ContentPart::Text { .. } => None,
        ContentPart::Code { language, code } => Some(format!(
            "```{}\n{}\n```",
            language.as_deref().unwrap_or_default(),
            code
        )),
        ContentPart::ToolCall { name, .. } => Some(format!("Tool Call: {name}")),
        ContentPart::ToolResult { result, .. } => Some(match result {
            JsonValue::String(s) => s.clone(),
            other => other.to_string(),
        }),
        ContentPart::Image { url, alt } => Some(format!(
            "Image: {}",
            alt.as_deref().or(url.as_deref()).unwrap_or("unknown")
        )),
        ContentPart::Data { data } => Some(data.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn extract_text(payload: JsonValue) -> String {
        match PartsExtractor::new().extract(&payload) {
            ExtractOutcome::Found(extraction) => extraction.text,
            ExtractOutcome::Miss { .. } => panic!("expected extraction to succeed"),
        }
    }

    #[test]
    fn test_concatenates_text_parts() {
        let text = extract_text(json!({
            "parts": [
                {"kind": "text", "text": "Hello "},
                {"kind": "text", "text": "world!"},
            ]
        }));
        assert_eq!(text, "Hello world!");
    }

    #[test]
    fn test_kindless_part_with_text_is_text() {
        let text = extract_text(json!({"parts": [{"text": "Hello from agent"}]}));
        assert_eq!(text, "Hello from agent");
    }

    #[test]
    fn test_finds_nested_parts() {
        let text = extract_text(json!({
            "raw_response": {
                "parts": [
                    {"kind": "text", "text": "The answer is "},
                    {"kind": "text", "text": "4"},
                ]
            }
        }));
        assert_eq!(text, "The answer is 4");
    }

    #[test]
    fn test_part_without_kind_or_text_is_skipped() {
        let text = extract_text(json!({
            "parts": [
                {"mystery": true},
                {"kind": "text", "text": "kept"},
            ]
        }));
        assert_eq!(text, "kept");
    }

    #[test]
    fn test_malformed_part_entry_warns_and_continues() {
        let payload = json!({"parts": [42, {"kind": "text", "text": "still here"}]});
        match PartsExtractor::new().extract(&payload) {
            ExtractOutcome::Found(extraction) => {
                assert_eq!(extraction.text, "still here");
                assert_eq!(extraction.warnings.len(), 1);
                assert!(extraction.warnings[0].contains("index 0"));
            }
            ExtractOutcome::Miss { .. } => panic!("one good part should be enough"),
        }
    }

    #[test]
    fn test_renders_non_text_parts_when_no_text() {
        let payload = json!({
            "parts": [
                {"kind": "code", "language": "rust", "code": "fn main() {}"},
                {"kind": "tool_call", "name": "search", "arguments": {"q": "rust"}},
                {"kind": "tool_result", "result": "found 3 hits"},
                {"kind": "image", "alt": "a crab"},
            ]
        });
        match PartsExtractor::new().extract(&payload) {
            ExtractOutcome::Found(extraction) => {
                assert_eq!(
                    extraction.text,
                    "```rust\nfn main() {}\n```\n\nTool Call: search\n\nfound 3 hits\n\nImage: a crab"
                );
                assert!(!extraction.warnings.is_empty());
            }
            ExtractOutcome::Miss { .. } => panic!("non-text parts should render"),
        }
    }

    #[test]
    fn test_tool_result_stringifies_non_string() {
        let payload = json!({"parts": [{"kind": "tool_result", "result": {"hits": 3}}]});
        match PartsExtractor::new().extract(&payload) {
            ExtractOutcome::Found(extraction) => {
                assert_eq!(extraction.text, r#"{"hits":3}"#);
            }
            ExtractOutcome::Miss { .. } => panic!("tool result should render"),
        }
    }

    #[test]
    fn test_parts_not_a_list_is_a_miss_with_warning() {
        let payload = json!({"parts": "oops"});
        match PartsExtractor::new().extract(&payload) {
            ExtractOutcome::Miss { warnings } => {
                assert_eq!(warnings.len(), 1);
                assert!(warnings[0].contains("not a list"));
            }
            ExtractOutcome::Found(_) => panic!("a string 'parts' field is not extractable"),
        }
    }

    #[test]
    fn test_empty_parts_is_a_miss() {
        let payload = json!({"parts": []});
        assert!(!PartsExtractor::new().extract(&payload).is_found());
    }

    #[test]
    fn test_no_parts_at_all_is_a_miss() {
        assert!(!PartsExtractor::new().extract(&json!({"content": "hi"})).is_found());
        assert!(!PartsExtractor::new().extract(&json!("just a string")).is_found());
    }

    #[test]
    fn test_structured_parts_preserved_in_order() {
        let payload = json!({
            "parts": [
                {"kind": "text", "text": "intro"},
                {"kind": "code", "code": "x = 1"},
            ]
        });
        match PartsExtractor::new().extract(&payload) {
            ExtractOutcome::Found(extraction) => {
                assert_eq!(extraction.parts.len(), 2);
                assert_eq!(extraction.parts[0], ContentPart::text("intro"));
                assert_eq!(extraction.parts[1], ContentPart::code(None, "x = 1"));
            }
            ExtractOutcome::Miss { .. } => panic!("expected parts"),
        }
    }

    #[test]
    fn test_find_parts_respects_depth_limit() {
        let too_deep = json!({
            "a": {"b": {"c": {"d": {"e": {"parts": [{"kind": "text", "text": "hidden"}]}}}}}
        });
        assert!(find_parts(&too_deep).is_none());
    }

    #[test]
    fn test_whitespace_only_text_parts_fall_through() {
        let payload = json!({
            "parts": [
                {"kind": "text", "text": "   "},
                {"kind": "tool_call", "name": "noop"},
            ]
        });
        match PartsExtractor::new().extract(&payload) {
            ExtractOutcome::Found(extraction) => {
                assert_eq!(extraction.text, "Tool Call: noop");
            }
            ExtractOutcome::Miss { .. } => panic!("tool call should render"),
        }
    }
}
