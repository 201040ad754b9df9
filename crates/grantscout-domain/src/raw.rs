//! Loosely-typed raw items as decoded from model output

use serde::Deserialize;
use serde_json::Value;

/// A raw grant item exactly as the model emitted it.
///
/// Models are inconsistent about key names and types, so every field is
/// optional and the alias keys (`name`, `description`, `url`, `link`) are
/// kept alongside the canonical ones. Reconciliation into a
/// [`GrantRecord`](crate::GrantRecord) is the normalizer's job; this type
/// only pins the decode boundary.
///
/// `confidence` and `reasons` stay as [`Value`] because models emit them as
/// numbers, numeric strings, or junk - coercion is a normalization rule, not
/// a decode failure.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawGrantItem {
    /// Canonical title key
    pub title: Option<String>,
    /// Alias for `title`
    pub name: Option<String>,

    /// Canonical summary key
    pub summary: Option<String>,
    /// Alias for `summary`
    pub description: Option<String>,

    /// Canonical source URL key
    pub source_url: Option<String>,
    /// Alias for `source_url`
    pub url: Option<String>,
    /// Second alias for `source_url`
    pub link: Option<String>,

    /// Raw classification tag, if the model supplied one
    pub grant_type: Option<String>,

    /// Application deadline
    pub deadline: Option<String>,

    /// Maximum amount
    pub amount_max: Option<u64>,

    /// Maximum subsidy rate
    pub rate_max: Option<f64>,

    /// Prefecture-level area
    pub area: Option<String>,

    /// Municipality
    pub municipality: Option<String>,

    /// Target industry
    pub industry: Option<String>,

    /// Confidence, number or numeric string
    pub confidence: Option<Value>,

    /// Justifications, expected to be an array of strings
    pub reasons: Option<Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_alias_keys() {
        let raw: RawGrantItem = serde_json::from_value(json!({
            "name": "助成金A",
            "description": "要約",
            "link": "https://example.go.jp/"
        }))
        .unwrap();

        assert!(raw.title.is_none());
        assert_eq!(raw.name.as_deref(), Some("助成金A"));
        assert_eq!(raw.description.as_deref(), Some("要約"));
        assert_eq!(raw.link.as_deref(), Some("https://example.go.jp/"));
    }

    #[test]
    fn test_decode_tolerates_string_confidence() {
        let raw: RawGrantItem = serde_json::from_value(json!({
            "title": "補助金B",
            "confidence": "0.7"
        }))
        .unwrap();

        assert_eq!(raw.confidence, Some(Value::String("0.7".to_string())));
    }

    #[test]
    fn test_decode_empty_object() {
        let raw: RawGrantItem = serde_json::from_value(json!({})).unwrap();
        assert!(raw.title.is_none());
        assert!(raw.grant_type.is_none());
        assert!(raw.reasons.is_none());
    }
}
