//! Per-row batch outcomes

use crate::{EnrichmentResult, LeadId};

/// Outcome of one row in a batch run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchResult {
    /// Lead the outcome belongs to
    pub id: LeadId,

    /// The enrichment result, or the failure message
    pub outcome: Result<EnrichmentResult, String>,
}

impl BatchResult {
    /// Successful row
    pub fn ok(id: LeadId, result: EnrichmentResult) -> Self {
        Self {
            id,
            outcome: Ok(result),
        }
    }

    /// Failed row
    pub fn failed(id: LeadId, message: impl Into<String>) -> Self {
        Self {
            id,
            outcome: Err(message.into()),
        }
    }

    /// Whether the row succeeded
    pub fn is_ok(&self) -> bool {
        self.outcome.is_ok()
    }

    /// The result, if the row succeeded
    pub fn result(&self) -> Option<&EnrichmentResult> {
        self.outcome.as_ref().ok()
    }

    /// The failure message, if the row failed
    pub fn error(&self) -> Option<&str> {
        self.outcome.as_ref().err().map(String::as_str)
    }
}
