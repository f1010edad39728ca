//! Extractor for the direct-content family (ACP-style responses).
//!
//! Payloads in this family expose the response text under a flat named
//! field. The extractor tries a fixed priority list of field names and
//! accepts the first non-empty string; anything below the top-priority
//! `content` field is reported in the warnings.

use protonorm_core::Protocol;
use serde_json::{Map, Value as JsonValue};
use tracing::debug;

use crate::extractor::{ExtractOutcome, Extraction, ProtocolExtractor};

/// Named fields probed in priority order.
pub(crate) const DIRECT_FIELDS: [&str; 5] = ["content", "response", "output", "message", "text"];

/// Fields probed inside an object-valued `output`.
const OUTPUT_NESTED_FIELDS: [&str; 3] = ["result", "content", "message"];

/// Metadata fields probed as a last resort before the generic fallback.
const METADATA_FIELDS: [&str; 2] = ["summary", "description"];

/// Extractor for payloads that expose text under a flat named field.
#[derive(Debug, Clone, Copy, Default)]
pub struct DirectContentExtractor;

impl DirectContentExtractor {
    /// Create a new direct-content extractor.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl ProtocolExtractor for DirectContentExtractor {
    fn protocol(&self) -> Protocol {
        Protocol::ACP
    }

    fn extract(&self, payload: &JsonValue) -> ExtractOutcome {
        // A payload that is itself a string needs no field lookup.
        if let Some(text) = non_empty_str(payload) {
            return ExtractOutcome::Found(Extraction::text(text));
        }

        let Some(obj) = payload.as_object() else {
            return ExtractOutcome::miss();
        };

        for field in DIRECT_FIELDS {
            let Some(value) = obj.get(field) else {
                continue;
            };
            if let Some(text) = non_empty_str(value) {
                debug!(field, "direct-content field matched");
                let mut extraction = Extraction::text(text);
                if field != "content" {
                    extraction
                        .warnings
                        .push(format!("content extracted from lower-priority field '{field}'"));
                }
                return ExtractOutcome::Found(extraction);
            }
            if field == "output" {
                if let Some(nested) = value.as_object() {
                    if let Some((path, text)) = probe_fields(nested, &OUTPUT_NESTED_FIELDS, "output")
                    {
                        return found_with_note(text, &path);
                    }
                }
            }
        }

        // One level of nesting under `data`, same priority list.
        if let Some(data) = obj.get("data").and_then(JsonValue::as_object) {
            if let Some((path, text)) = probe_fields(data, &DIRECT_FIELDS, "data") {
                return found_with_note(text, &path);
            }
        }

        if let Some(metadata) = obj.get("metadata").and_then(JsonValue::as_object) {
            if let Some((path, text)) = probe_fields(metadata, &METADATA_FIELDS, "metadata") {
                return found_with_note(text, &path);
            }
        }

        ExtractOutcome::miss()
    }
}

fn found_with_note(text: String, path: &str) -> ExtractOutcome {
    debug!(field = path, "direct-content field matched");
    ExtractOutcome::Found(Extraction::text(text).with_warnings(vec![format!(
        "content extracted from lower-priority field '{path}'"
    )]))
}

fn probe_fields(
    obj: &Map<String, JsonValue>,
    fields: &[&str],
    prefix: &str,
) -> Option<(String, String)> {
    fields.iter().find_map(|field| {
        obj.get(*field)
            .and_then(non_empty_str)
            .map(|text| (format!("{prefix}.{field}"), text))
    })
}

fn non_empty_str(value: &JsonValue) -> Option<String> {
    let trimmed = value.as_str()?.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
