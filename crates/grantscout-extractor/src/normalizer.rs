//! Reconcile raw model items into canonical grant records
//!
//! Deterministic, order-preserving pipeline: per-item shape reconciliation,
//! truncation to the requested count, source-URL filtering with a keep-all
//! override, and the confidence floor. No re-sorting happens anywhere.

use grantscout_domain::{GrantRecord, GrantType, RawGrantItem};
use serde_json::Value;
use tracing::{debug, warn};

/// Confidence assigned when the model reported none (or exactly zero).
const CONFIDENCE_FALLBACK: f64 = 0.2;

/// Maximum number of `reasons` entries kept per record.
const MAX_REASONS: usize = 3;

/// Normalize raw decoded items into at most `top_k` canonical records.
///
/// Rules, in order:
/// 1. decode each item; entries that are not objects are logged and skipped
/// 2. reconcile keys, infer `grant_type`, coerce `confidence`
/// 3. truncate to `top_k` (before any filtering - later items never fill in
///    for dropped earlier ones)
/// 4. drop items with an empty `source_url`, unless that would drop every
///    item, in which case the unfiltered truncated list is kept
/// 5. raise an exact-0.0 confidence to the fallback value
pub(crate) fn normalize_items(items: Vec<Value>, top_k: usize) -> Vec<GrantRecord> {
    let mut records: Vec<GrantRecord> = Vec::new();
    for (idx, item) in items.into_iter().enumerate() {
        match serde_json::from_value::<RawGrantItem>(item) {
            Ok(raw) => records.push(normalize_item(raw)),
            Err(e) => warn!("Skipping undecodable item {}: {}", idx, e),
        }
    }

    records.truncate(top_k);

    if records.iter().any(|r| !r.source_url.is_empty()) {
        records.retain(|r| !r.source_url.is_empty());
    } else if !records.is_empty() {
        // Better to show unverifiable results than none at all
        debug!("All {} items lack a source_url, keeping them anyway", records.len());
    }

    for record in &mut records {
        if record.confidence == 0.0 {
            record.confidence = CONFIDENCE_FALLBACK;
        }
    }

    records
}

/// Reconcile one raw item onto the canonical record shape.
fn normalize_item(raw: RawGrantItem) -> GrantRecord {
    // Tag inference looks at the raw `title` key only, never at `name`
    let grant_type = match raw.grant_type.as_deref().and_then(GrantType::from_tag) {
        Some(tag) => tag,
        None => GrantType::infer_from_title(raw.title.as_deref().unwrap_or("")),
    };

    GrantRecord {
        title: first_non_empty([raw.title, raw.name]),
        summary: first_non_empty([raw.summary, raw.description]),
        source_url: first_non_empty([raw.source_url, raw.url, raw.link]),
        grant_type,
        deadline: raw.deadline,
        amount_max: raw.amount_max,
        rate_max: raw.rate_max,
        area: raw.area,
        municipality: raw.municipality,
        industry: raw.industry,
        confidence: coerce_confidence(raw.confidence),
        reasons: coerce_reasons(raw.reasons),
    }
}

/// First alias candidate that is present and non-empty, else `""`.
fn first_non_empty<const N: usize>(candidates: [Option<String>; N]) -> String {
    candidates
        .into_iter()
        .flatten()
        .find(|s| !s.is_empty())
        .unwrap_or_default()
}

/// Parse the raw confidence as a real number; anything unparsable is 0.0.
fn coerce_confidence(value: Option<Value>) -> f64 {
    match value {
        Some(Value::Number(n)) => n.as_f64().unwrap_or(0.0),
        Some(Value::String(s)) => s.trim().parse().unwrap_or(0.0),
        _ => 0.0,
    }
}

/// Keep up to [`MAX_REASONS`] string entries; anything else is dropped.
fn coerce_reasons(value: Option<Value>) -> Vec<String> {
    match value {
        Some(Value::Array(entries)) => entries
            .into_iter()
            .filter_map(|v| match v {
                Value::String(s) => Some(s),
                _ => None,
            })
            .take(MAX_REASONS)
            .collect(),
        _ => Vec::new(),
    }
}
