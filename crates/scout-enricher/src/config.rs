//! Configuration for the Enricher

use crate::error::EnrichError;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for enrichment and batch pacing
///
/// # Examples
///
/// ```
/// use scout_enricher::EnricherConfig;
///
/// let config = EnricherConfig::default();
/// assert_eq!(config.max_attempts, 3);
/// assert_eq!(config.backoff_delay(2).as_millis(), 500);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnricherConfig {
    /// Model identifier passed to the search service
    pub model: String,

    /// Attempts per lead before giving up
    pub max_attempts: u32,

    /// Linear backoff step (milliseconds); attempt `n` waits `n * step`
    pub backoff_step_ms: u64,

    /// Pause between consecutive leads in a batch (milliseconds)
    pub batch_interval_ms: u64,

    /// Maximum time for a single search call (seconds)
    pub request_timeout_secs: u64,
}

impl EnricherConfig {
    /// Delay to wait after failed attempt number `attempt` (1-based)
    pub fn backoff_delay(&self, attempt: u32) -> Duration {
        Duration::from_millis(self.backoff_step_ms * u64::from(attempt))
    }

    /// Get the batch interval as a Duration
    pub fn batch_interval(&self) -> Duration {
        Duration::from_millis(self.batch_interval_ms)
    }

    /// Get the request timeout as a Duration
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), EnrichError> {
        if self.model.trim().is_empty() {
            return Err(EnrichError::Config("model must not be empty".to_string()));
        }
        if self.max_attempts == 0 {
            return Err(EnrichError::Config(
                "max_attempts must be greater than 0".to_string(),
            ));
        }
        if self.request_timeout_secs == 0 {
            return Err(EnrichError::Config(
                "request_timeout_secs must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, EnrichError> {
        toml::from_str(toml_str)
            .map_err(|e| EnrichError::Config(format!("Failed to parse TOML: {}", e)))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, EnrichError> {
        toml::to_string_pretty(self)
            .map_err(|e| EnrichError::Config(format!("Failed to serialize to TOML: {}", e)))
    }
}

impl Default for EnricherConfig {
    fn default() -> Self {
        Self {
            model: "gpt-4.1".to_string(),
            max_attempts: 3,
            backoff_step_ms: 250,
            batch_interval_ms: 5_000,
            request_timeout_secs: 120,
        }
    }
}
