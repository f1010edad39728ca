//! Last-resort generic extraction.
//!
//! When no protocol-specific extractor produced content, the fallback
//! walks the whole payload collecting string leaves, filters out values
//! that look technical rather than human-readable, and returns the
//! longest survivor. It never fails: with nothing left to return, it
//! renders the payload itself as pretty JSON so a human can still
//! inspect the raw data.

use regex::Regex;
use serde_json::Value as JsonValue;
use tracing::debug;

use crate::extractor::Extraction;

/// Path segments containing any of these markers are considered
/// technical bookkeeping, not content.
const TECHNICAL_MARKERS: [&str; 6] = ["id", "timestamp", "version", "type", "status", "code"];

/// Values this short are never useful content.
const MIN_CANDIDATE_LEN: usize = 3;

/// UUID-like values: 20 or more hex/dash characters.
const UUID_LIKE_PATTERN: &str = "^[0-9a-fA-F-]{20,}$";

/// Generic deep-search extractor used when every specific extractor missed.
#[derive(Debug, Clone)]
pub struct FallbackExtractor {
    uuid_like: Option<Regex>,
}

impl Default for FallbackExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FallbackExtractor {
    /// Create a new fallback extractor.
    #[must_use]
    pub fn new() -> Self {
        Self {
            uuid_like: Regex::new(UUID_LIKE_PATTERN).ok(),
        }
    }

    /// Recover the most plausible text from an arbitrary payload.
    ///
    /// Always produces text: when no candidate survives the filters the
    /// result is a diagnostic rendering of the payload as pretty JSON.
    pub fn extract(&self, payload: &JsonValue) -> Extraction {
        let mut candidates: Vec<(String, &str)> = Vec::new();
        collect_strings(payload, String::new(), &mut candidates);

        let mut best: Option<(&str, &str)> = None;
        for (path, value) in &candidates {
            let trimmed = value.trim();
            if trimmed.chars().count() < MIN_CANDIDATE_LEN {
                continue;
            }
            if path_is_technical(path) {
                continue;
            }
            if self
                .uuid_like
                .as_ref()
                .is_some_and(|re| re.is_match(trimmed))
            {
                continue;
            }
            // Longest candidate wins; first found breaks ties.
            if best.map_or(true, |(_, current)| {
                trimmed.chars().count() > current.chars().count()
            }) {
                best = Some((path, trimmed));
            }
        }

        match best {
            Some((path, text)) => {
                debug!(path, candidates = candidates.len(), "fallback search found content");
                Extraction::text(text)
                    .with_warnings(vec![format!("content recovered by deep search at '{path}'")])
            }
            None => {
                debug!(candidates = candidates.len(), "fallback search found nothing usable");
                Extraction::text(diagnostic(payload)).with_warnings(vec![
                    "no plausible text content found; payload rendered as JSON".to_string(),
                ])
            }
        }
    }
}

fn collect_strings<'a>(
    value: &'a JsonValue,
    path: String,
    out: &mut Vec<(String, &'a str)>,
) {
    match value {
        JsonValue::String(s) => out.push((path, s.as_str())),
        JsonValue::Object(obj) => {
            for (key, child) in obj {
                let child_path = if path.is_empty() {
                    key.clone()
                } else {
                    format!("{path}.{key}")
                };
                collect_strings(child, child_path, out);
            }
        }
        JsonValue::Array(items) => {
            for (index, child) in items.iter().enumerate() {
                collect_strings(child, format!("{path}[{index}]"), out);
            }
        }
        _ => {}
    }
}

fn path_is_technical(path: &str) -> bool {
    path.split('.').any(|segment| {
        let segment = segment.to_lowercase();
        TECHNICAL_MARKERS
            .iter()
            .any(|marker| segment.contains(marker))
    })
}

fn diagnostic(payload: &JsonValue) -> String {
    let pretty =
        serde_json::to_string_pretty(payload).unwrap_or_else(|_| payload.to_string());
    format!("No content available\n\n```json\n{pretty}\n```")
}
