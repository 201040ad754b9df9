//! Locate and decode a JSON value embedded in raw model output

use crate::scanner::balanced_span;
use serde_json::Value;
use tracing::debug;

/// Why no JSON value could be pulled out of the text.
///
/// Both variants escalate to the no-result classifier; the distinction is
/// kept for diagnostics only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ExtractionFailure {
    /// No complete candidate anywhere in the text
    NoCandidate,
    /// A balanced span was found but did not decode as JSON
    InvalidCandidate,
}

/// Extract the first decodable JSON value from `text`.
///
/// Tries a fenced code block first - models routinely wrap their payload in
/// markdown fences - and falls back to scanning the full text for the first
/// balanced `{...}` or `[...]` span. A fenced block that fails to decode is
/// not fatal; the span scan still runs over the whole text.
pub(crate) fn extract_value(text: &str) -> Result<Value, ExtractionFailure> {
    if let Some(block) = fenced_block(text) {
        match serde_json::from_str(block) {
            Ok(value) => return Ok(value),
            Err(e) => {
                debug!("fenced block is not valid JSON ({}), falling back to span scan", e);
            }
        }
    }

    match balanced_span(text, 0) {
        Some(span) => serde_json::from_str(span).map_err(|e| {
            debug!("balanced span is not valid JSON: {}", e);
            ExtractionFailure::InvalidCandidate
        }),
        None => Err(ExtractionFailure::NoCandidate),
    }
}

/// Resolve the decoded value into the raw item list.
///
/// Accepts either `{"items": [...]}` or a bare `[...]`. Any other shape is
/// "valid but meaningless" and yields `None`.
pub(crate) fn resolve_items(value: Value) -> Option<Vec<Value>> {
    match value {
        Value::Array(items) => Some(items),
        Value::Object(mut map) => match map.remove("items") {
            Some(Value::Array(items)) => Some(items),
            _ => None,
        },
        _ => None,
    }
}

/// The inner block of the first ``` fence, with an optional `json` tag
/// stripped case-insensitively. `None` when there is no complete fence.
fn fenced_block(text: &str) -> Option<&str> {
    let open = text.find("```")?;
    let mut inner = &text[open + 3..];
    if let Some(tag) = inner.get(..4) {
        if tag.eq_ignore_ascii_case("json") {
            inner = &inner[4..];
        }
    }
    let close = inner.find("```")?;
    Some(inner[..close].trim())
}
