//! Canonical grant record model

use serde::{Deserialize, Serialize};
use std::fmt;

/// Classification of a grant item into the two source-script tags.
///
/// The upstream data only ever distinguishes "補助金" (subsidy) from
/// "助成金" (grant); the serialized form is exactly one of those two tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GrantType {
    /// 補助金
    #[serde(rename = "補助金")]
    Subsidy,

    /// 助成金
    #[serde(rename = "助成金")]
    Grant,
}

impl GrantType {
    /// The serialized source-script tag for this classification
    pub fn as_str(&self) -> &'static str {
        match self {
            GrantType::Subsidy => "補助金",
            GrantType::Grant => "助成金",
        }
    }

    /// Parse an exact source-script tag. Anything else is `None`.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "補助金" => Some(GrantType::Subsidy),
            "助成金" => Some(GrantType::Grant),
            _ => None,
        }
    }

    /// Infer a classification from a raw title.
    ///
    /// The subsidy token wins when both appear; a title with neither token
    /// falls back to subsidy, matching the upstream defaulting rule.
    pub fn infer_from_title(title: &str) -> Self {
        if title.contains("補助金") {
            GrantType::Subsidy
        } else if title.contains("助成金") {
            GrantType::Grant
        } else {
            GrantType::Subsidy
        }
    }
}

impl Default for GrantType {
    fn default() -> Self {
        GrantType::Subsidy
    }
}

impl fmt::Display for GrantType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The canonical normalized unit of output.
///
/// Field names match the upstream search API item schema, so a transport
/// layer can re-serialize records without any mapping step.
///
/// Invariants established by normalization:
/// - `title`, `summary`, `source_url` are present (possibly empty strings)
/// - `grant_type` is one of the two tags
/// - `confidence` lies in (0, 1] - an exact 0.0 is raised to 0.2
/// - `reasons` holds at most 3 entries
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrantRecord {
    /// Grant title
    pub title: String,

    /// Short summary of the grant
    pub summary: String,

    /// Primary-source URL the item was taken from (may be empty)
    pub source_url: String,

    /// 補助金 / 助成金 classification
    pub grant_type: GrantType,

    /// Application deadline, verbatim from the source
    pub deadline: Option<String>,

    /// Maximum amount in yen
    pub amount_max: Option<u64>,

    /// Maximum subsidy rate in [0, 1]
    pub rate_max: Option<f64>,

    /// Prefecture-level area
    pub area: Option<String>,

    /// Municipality within the area
    pub municipality: Option<String>,

    /// Target industry
    pub industry: Option<String>,

    /// Confidence in the item, in (0, 1] after normalization
    pub confidence: f64,

    /// Up to 3 short justifications for the item
    pub reasons: Vec<String>,
}
