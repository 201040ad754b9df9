//! End-to-end record recovery pipeline

use crate::classifier::{EmptyClassification, EmptyResponsePolicy, PhraseListClassifier};
use crate::config::ExtractConfig;
use crate::error::{snippet, ExtractError};
use crate::extractor::{extract_value, resolve_items};
use crate::normalizer::normalize_items;
use grantscout_domain::GrantRecord;
use tracing::{debug, info};

/// Recovers a bounded list of canonical grant records from raw model text.
///
/// The pipeline is pure and synchronous: it never performs I/O and holds no
/// mutable state, so one instance can be shared freely across threads.
pub struct RecordPipeline<P = PhraseListClassifier> {
    config: ExtractConfig,
    policy: P,
}

impl RecordPipeline<PhraseListClassifier> {
    /// Create a pipeline with the default no-result classifier
    pub fn new(config: ExtractConfig) -> Result<Self, ExtractError> {
        Self::with_policy(config, PhraseListClassifier::new())
    }
}

impl<P: EmptyResponsePolicy> RecordPipeline<P> {
    /// Create a pipeline with a custom no-result policy
    pub fn with_policy(config: ExtractConfig, policy: P) -> Result<Self, ExtractError> {
        config.validate().map_err(ExtractError::Config)?;
        Ok(Self { config, policy })
    }

    /// The pipeline's configuration
    pub fn config(&self) -> &ExtractConfig {
        &self.config
    }

    /// Recover up to `top_k` records from raw model output.
    ///
    /// An `Ok` with an empty vec means the source legitimately reported zero
    /// matches; an `Err` means the output could not be decoded at all (the
    /// diagnostic carries a bounded snippet, never the full text).
    pub fn run(&self, text: &str, top_k: usize) -> Result<Vec<GrantRecord>, ExtractError> {
        if top_k == 0 {
            return Err(ExtractError::InvalidTopK);
        }
        let top_k = top_k.min(self.config.max_items);

        debug!("Extracting records from {} chars of model output", text.len());

        match extract_value(text) {
            Ok(value) => {
                let items = resolve_items(value).ok_or_else(|| ExtractError::UnexpectedShape {
                    snippet: snippet(text, self.config.snippet_chars),
                })?;

                info!("Decoded {} raw items", items.len());
                let records = normalize_items(items, top_k);
                info!("Normalized to {} records", records.len());
                Ok(records)
            }
            Err(failure) => {
                debug!("Extraction failed ({:?}), classifying raw text", failure);
                match self.policy.classify(text) {
                    EmptyClassification::LegitimateEmpty => {
                        info!("Model reported zero matches in prose, returning empty result");
                        Ok(Vec::new())
                    }
                    EmptyClassification::Unrecoverable => Err(ExtractError::UndecodableOutput {
                        snippet: snippet(text, self.config.snippet_chars),
                    }),
                }
            }
        }
    }

    /// [`run`](Self::run) with the configured default record count.
    pub fn run_with_default_top_k(&self, text: &str) -> Result<Vec<GrantRecord>, ExtractError> {
        self.run(text, self.config.default_top_k)
    }
}

/// One-shot convenience wrapper around a default-configured pipeline.
pub fn extract_records(text: &str, top_k: usize) -> Result<Vec<GrantRecord>, ExtractError> {
    // Default config always validates
    let pipeline = RecordPipeline::new(ExtractConfig::default())?;
    pipeline.run(text, top_k)
}
