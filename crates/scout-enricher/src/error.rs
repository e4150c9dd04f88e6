//! Error types for the Enricher

use thiserror::Error;

/// Errors surfaced by enrichment operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EnrichError {
    /// Every attempt failed; carries the last attempt's failure
    #[error("Enrichment failed after {attempts} attempts: {last_error}")]
    Exhausted {
        /// Number of attempts made
        attempts: u32,
        /// Message of the last attempt's failure
        last_error: String,
    },

    /// Recording a status transition failed
    #[error("Persistence error: {0}")]
    Persistence(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Why a single attempt failed
///
/// Attempt failures are retried and only reach callers folded into
/// [`EnrichError::Exhausted`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AttemptError {
    /// The search service returned an error
    #[error("{0}")]
    Provider(String),

    /// The search service answered without a structured payload
    #[error("Search service returned no parsed JSON payload")]
    MissingPayload,

    /// The payload did not match the output schema
    #[error("Invalid payload: {0}")]
    InvalidPayload(String),

    /// The attempt did not finish in time
    #[error("Search request timed out after {0}s")]
    Timeout(u64),
}

impl From<serde_json::Error> for AttemptError {
    fn from(e: serde_json::Error) -> Self {
        AttemptError::InvalidPayload(e.to_string())
    }
}
