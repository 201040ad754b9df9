//! Configuration for the extraction pipeline

use serde::{Deserialize, Serialize};

/// Configuration for the extraction pipeline
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractConfig {
    /// Hard ceiling on the number of records returned per call
    pub max_items: usize,

    /// Record count used when the caller does not specify one
    pub default_top_k: usize,

    /// Maximum diagnostic snippet length (characters)
    pub snippet_chars: usize,
}

impl ExtractConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.max_items == 0 {
            return Err("max_items must be greater than 0".to_string());
        }
        if self.default_top_k == 0 || self.default_top_k > self.max_items {
            return Err("default_top_k must be in 1..=max_items".to_string());
        }
        if self.snippet_chars == 0 {
            return Err("snippet_chars must be greater than 0".to_string());
        }
        Ok(())
    }

    /// Load configuration from a TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to a TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}

impl Default for ExtractConfig {
    /// Defaults matching the upstream search API limits
    fn default() -> Self {
        Self {
            max_items: 20,
            default_top_k: 10,
            snippet_chars: 1_000,
        }
    }
}
