//! Admission control configuration

use tracing::warn;

/// Default per-window capacity when the environment does not say otherwise
const DEFAULT_PER_WINDOW: usize = 60;

/// Configuration for the admission limiter.
///
/// Read once at process start; the capacity is fixed for the process
/// lifetime and no runtime reconfiguration is supported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdmissionConfig {
    /// Maximum admissions per window
    pub per_window: usize,
}

impl AdmissionConfig {
    /// Environment variable holding the per-window capacity
    pub const ENV_VAR: &'static str = "RATE_LIMIT_PER_MIN";

    /// Create a configuration with an explicit capacity
    pub fn new(per_window: usize) -> Self {
        Self { per_window }
    }

    /// Read the capacity from [`ENV_VAR`](Self::ENV_VAR), defaulting to 60.
    ///
    /// An unset or unparsable value falls back to the default with a warning
    /// rather than aborting startup.
    pub fn from_env() -> Self {
        let per_window = match std::env::var(Self::ENV_VAR) {
            Ok(raw) => raw.trim().parse().unwrap_or_else(|_| {
                warn!(
                    "Ignoring unparsable {}={:?}, using default {}",
                    Self::ENV_VAR,
                    raw,
                    DEFAULT_PER_WINDOW
                );
                DEFAULT_PER_WINDOW
            }),
            Err(_) => DEFAULT_PER_WINDOW,
        };
        Self { per_window }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.per_window == 0 {
            return Err("per_window must be greater than 0".to_string());
        }
        Ok(())
    }
}

impl Default for AdmissionConfig {
    fn default() -> Self {
        Self {
            per_window: DEFAULT_PER_WINDOW,
        }
    }
}
