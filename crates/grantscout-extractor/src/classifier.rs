//! Heuristic classification of undecodable model output
//!
//! When no JSON can be pulled out of a response, the text may still be a
//! perfectly legitimate "nothing found" answer written in prose. This module
//! decides whether to surface an empty result or a hard decoding error.
//!
//! The phrase list is inherently fragile and language-specific, so the
//! decision sits behind a policy trait that callers can swap out without
//! touching the extraction control flow.

/// Outcome of classifying an undecodable response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyClassification {
    /// The source legitimately reports zero matches
    LegitimateEmpty,
    /// The source returned garbage; surface a decoding error
    Unrecoverable,
}

/// Policy deciding whether undecodable output means "zero matches".
///
/// Invoked only after extraction has already failed; implementations see the
/// full raw text and must not assume any JSON is present.
pub trait EmptyResponsePolicy {
    /// Classify the raw response text.
    fn classify(&self, text: &str) -> EmptyClassification;
}

/// Known "nothing found" phrasings, matched case-sensitively as substrings.
const NO_RESULT_PHRASES: &[&str] = &[
    "見つかりませんでした",
    "該当する補助金・助成金はありません",
    "該当する案件はありません",
    "該当なし",
    "検索結果はありません",
    "確認できませんでした",
    "No matching results",
    "no results were found",
];

/// Default classifier: a fixed phrase list plus a bare-URL check.
///
/// Either signal - a known no-result phrase, or a URL sitting in the text
/// (the model listed sources instead of structured items) - is taken as a
/// legitimate empty answer. Best-effort by design; it exists so stylistic
/// refusals do not all turn into service errors.
#[derive(Debug, Clone, Default)]
pub struct PhraseListClassifier {
    extra_phrases: Vec<String>,
}

impl PhraseListClassifier {
    /// Create a classifier with the built-in phrase list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Extend the built-in list with additional phrases.
    pub fn with_phrases(phrases: Vec<String>) -> Self {
        Self {
            extra_phrases: phrases,
        }
    }

    fn has_no_result_phrase(&self, text: &str) -> bool {
        NO_RESULT_PHRASES.iter().any(|p| text.contains(p))
            || self.extra_phrases.iter().any(|p| text.contains(p.as_str()))
    }

    fn has_bare_url(&self, text: &str) -> bool {
        text.contains("https://") || text.contains("http://")
    }
}

impl EmptyResponsePolicy for PhraseListClassifier {
    fn classify(&self, text: &str) -> EmptyClassification {
        if self.has_no_result_phrase(text) || self.has_bare_url(text) {
            EmptyClassification::LegitimateEmpty
        } else {
            EmptyClassification::Unrecoverable
        }
    }
}
