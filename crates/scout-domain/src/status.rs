//! Enrichment status lifecycle

use crate::LeadId;
use std::fmt;

/// Enrichment state of a lead
///
/// Each attempt moves a lead to `Running` before any work starts, then to
/// `Done` or `Error` once the attempt settles. `Pending` is only ever written
/// by whoever creates the lead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EnrichStatus {
    /// Not yet enriched
    Pending,

    /// Enrichment in flight
    Running,

    /// Enrichment succeeded
    Done,

    /// Enrichment failed terminally
    Error,
}

impl EnrichStatus {
    /// Get the status name as stored
    pub fn as_str(&self) -> &'static str {
        match self {
            EnrichStatus::Pending => "pending",
            EnrichStatus::Running => "running",
            EnrichStatus::Done => "done",
            EnrichStatus::Error => "error",
        }
    }

    /// Parse a status from its stored name
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "pending" => Some(EnrichStatus::Pending),
            "running" => Some(EnrichStatus::Running),
            "done" => Some(EnrichStatus::Done),
            "error" => Some(EnrichStatus::Error),
            _ => None,
        }
    }

    /// Whether the status ends an attempt
    pub fn is_terminal(&self) -> bool {
        matches!(self, EnrichStatus::Done | EnrichStatus::Error)
    }
}

impl fmt::Display for EnrichStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One status write for a lead
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusUpdate {
    /// Lead being updated
    pub id: LeadId,

    /// New status
    pub status: EnrichStatus,

    /// Failure message, set only for `Error`
    pub error: Option<String>,

    /// Completion time (unix seconds), set only for terminal statuses
    pub last_enriched_at: Option<u64>,
}

impl StatusUpdate {
    /// Attempt started: error cleared, no timestamp
    pub fn running(id: LeadId) -> Self {
        Self {
            id,
            status: EnrichStatus::Running,
            error: None,
            last_enriched_at: None,
        }
    }

    /// Attempt succeeded at `at`
    pub fn done(id: LeadId, at: u64) -> Self {
        Self {
            id,
            status: EnrichStatus::Done,
            error: None,
            last_enriched_at: Some(at),
        }
    }

    /// Attempt failed at `at` with a human-readable message
    pub fn failed(id: LeadId, message: impl Into<String>, at: u64) -> Self {
        Self {
            id,
            status: EnrichStatus::Error,
            error: Some(message.into()),
            last_enriched_at: Some(at),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_round_trip_names() {
        for status in [
            EnrichStatus::Pending,
            EnrichStatus::Running,
            EnrichStatus::Done,
            EnrichStatus::Error,
        ] {
            assert_eq!(EnrichStatus::parse(status.as_str()), Some(status));
        }
        assert_eq!(EnrichStatus::parse("DONE"), Some(EnrichStatus::Done));
        assert_eq!(EnrichStatus::parse("finished"), None);
    }

    #[test]
    fn test_terminal_statuses() {
        assert!(!EnrichStatus::Pending.is_terminal());
        assert!(!EnrichStatus::Running.is_terminal());
        assert!(EnrichStatus::Done.is_terminal());
        assert!(EnrichStatus::Error.is_terminal());
    }

    #[test]
    fn test_update_constructors() {
        let running = StatusUpdate::running(LeadId::Number(1));
        assert_eq!(running.status, EnrichStatus::Running);
        assert!(running.error.is_none());
        assert!(running.last_enriched_at.is_none());

        let done = StatusUpdate::done(LeadId::Number(1), 1_700_000_000);
        assert_eq!(done.status, EnrichStatus::Done);
        assert!(done.error.is_none());
        assert_eq!(done.last_enriched_at, Some(1_700_000_000));

        let failed = StatusUpdate::failed(LeadId::Number(1), "boom", 1_700_000_001);
        assert_eq!(failed.status, EnrichStatus::Error);
        assert_eq!(failed.error.as_deref(), Some("boom"));
        assert_eq!(failed.last_enriched_at, Some(1_700_000_001));
    }
}
