//! Grantscout Extractor
//!
//! Recovers a bounded, well-typed list of grant records from free-form text
//! produced by a generative model.
//!
//! # Overview
//!
//! Model output is noisy: the JSON payload may be wrapped in markdown fences,
//! interleaved with prose, or replaced entirely by a natural-language "no
//! results" answer. This crate locates and decodes the payload, distinguishes
//! a legitimate empty answer from garbage, and reconciles the heterogeneous
//! item shapes onto the canonical [`GrantRecord`](grantscout_domain::GrantRecord)
//! schema.
//!
//! # Architecture
//!
//! ```text
//! raw text → extractor (balanced-span scanner) → decoded value → normalizer → records
//!                 └─ on failure → no-result classifier → empty result | error
//! ```
//!
//! Everything here is pure and synchronous; the network call that produces
//! the raw text lives in a separate transport layer.
//!
//! # Example
//!
//! ```
//! use grantscout_extractor::extract_records;
//!
//! let text = r#"検索結果は次のとおりです。
//! {"items": [{"title": "ものづくり補助金", "summary": "設備投資を支援",
//!             "source_url": "https://www.example.go.jp/", "confidence": 0.8}]}
//! ご確認ください。"#;
//!
//! let records = extract_records(text, 10).unwrap();
//! assert_eq!(records.len(), 1);
//! assert_eq!(records[0].title, "ものづくり補助金");
//! ```

#![warn(missing_docs)]

mod classifier;
mod config;
mod error;
mod extractor;
mod normalizer;
mod pipeline;
mod scanner;

#[cfg(test)]
mod tests;

pub use classifier::{EmptyClassification, EmptyResponsePolicy, PhraseListClassifier};
pub use config::ExtractConfig;
pub use error::ExtractError;
pub use pipeline::{extract_records, RecordPipeline};
