//! Error types for record extraction

use thiserror::Error;

/// Errors that can occur while recovering records from model output
#[derive(Error, Debug)]
pub enum ExtractError {
    /// No JSON could be decoded and the text is not a recognizable
    /// "no results" answer. Carries a bounded snippet, never the full text.
    #[error("model output contained no decodable JSON: {snippet}")]
    UndecodableOutput {
        /// Truncated prefix of the offending text
        snippet: String,
    },

    /// Decoding succeeded but the value is neither an items-bearing object
    /// nor a bare array
    #[error("unexpected payload shape (expected an items object or an array): {snippet}")]
    UnexpectedShape {
        /// Truncated prefix of the offending text
        snippet: String,
    },

    /// The requested record count is not a positive integer
    #[error("top_k must be greater than 0")]
    InvalidTopK,

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Take a bounded prefix of `text` for diagnostics, respecting char
/// boundaries. Logs and error messages must stay bounded no matter how much
/// the model produced.
pub(crate) fn snippet(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        text.chars().take(max_chars).collect()
    }
}
