//! Status-recording wrapper around the Enricher

use crate::enricher::Enricher;
use crate::error::EnrichError;
use scout_domain::traits::{SearchProvider, StatusStore};
use scout_domain::{EnrichmentResult, LeadRow, StatusUpdate};
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::{debug, error, warn};

/// Enrich one lead, recording `running` before and `done`/`error` after
///
/// Engine failures are recorded and then returned unchanged. A failed status
/// write is returned as [`EnrichError::Persistence`]; if the `running` write
/// fails the engine is never invoked.
pub async fn enrich_with_persistence<P, S>(
    row: &LeadRow,
    enricher: &Enricher<P>,
    store: &S,
) -> Result<EnrichmentResult, EnrichError>
where
    P: SearchProvider,
    S: StatusStore,
{
    record(store, StatusUpdate::running(row.id.clone())).await?;

    match enricher.enrich(row).await {
        Ok(result) => {
            record(store, StatusUpdate::done(row.id.clone(), unix_now())).await?;
            Ok(result)
        }
        Err(e) => {
            error!(lead = %row.id, "Enrichment failed: {}", e);
            record(
                store,
                StatusUpdate::failed(row.id.clone(), e.to_string(), unix_now()),
            )
            .await?;
            Err(e)
        }
    }
}

async fn record<S: StatusStore>(store: &S, update: StatusUpdate) -> Result<(), EnrichError> {
    debug!(lead = %update.id, status = %update.status, "Recording status");
    store
        .set_status(update)
        .await
        .map_err(|e| EnrichError::Persistence(e.to_string()))
}

/// Current time in unix seconds
pub(crate) fn unix_now() -> u64 {
    unix_seconds(SystemTime::now())
}

/// Seconds since the unix epoch, 0 (with a warning) for earlier instants
fn unix_seconds(now: SystemTime) -> u64 {
    match now.duration_since(UNIX_EPOCH) {
        Ok(d) => d.as_secs(),
        Err(e) => {
            warn!("System clock is before the unix epoch ({}); recording 0", e);
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scout_domain::EnrichStatus;
    use scout_llm::MockProvider;
    use scout_store::MemoryStatusStore;

    const FOUND: &str = r#"{"official_website": "https://acme.example", "website_source_url": null,
        "instagram_url": null, "instagram_source": null, "decision_makers": []}"#;

    fn row() -> LeadRow {
        LeadRow::new("lead-1", "Acme", "Reno", "NV")
    }

    #[tokio::test(start_paused = true)]
    async fn test_success_records_running_then_done() {
        let enricher = Enricher::with_defaults(MockProvider::new(FOUND));
        let store = MemoryStatusStore::new();

        let result = enrich_with_persistence(&row(), &enricher, &store).await.unwrap();
        assert_eq!(result.confidence, 35);

        let updates = store.updates();
        assert_eq!(updates.len(), 2);

        assert_eq!(updates[0].status, EnrichStatus::Running);
        assert!(updates[0].error.is_none());
        assert!(updates[0].last_enriched_at.is_none());

        assert_eq!(updates[1].status, EnrichStatus::Done);
        assert!(updates[1].error.is_none());
        assert!(updates[1].last_enriched_at.is_some());
        assert!(updates.iter().all(|u| u.id == row().id));
    }

    #[tokio::test(start_paused = true)]
    async fn test_failure_records_error_and_reraises() {
        let enricher = Enricher::with_defaults(MockProvider::failing("quota exceeded"));
        let store = MemoryStatusStore::new();

        let err = enrich_with_persistence(&row(), &enricher, &store).await.unwrap_err();
        assert!(matches!(err, EnrichError::Exhausted { attempts: 3, .. }));

        let updates = store.updates();
        assert_eq!(updates.len(), 2);
        assert_eq!(updates[0].status, EnrichStatus::Running);
        assert_eq!(updates[1].status, EnrichStatus::Error);
        assert_eq!(updates[1].error.as_deref(), Some(err.to_string().as_str()));
        assert!(updates[1].last_enriched_at.is_some());
    }

    #[tokio::test(start_paused = true)]
    async fn test_running_write_failure_skips_engine() {
        let provider = MockProvider::new(FOUND);
        let enricher = Enricher::with_defaults(provider.clone());
        let store = MemoryStatusStore::new().fail_on(EnrichStatus::Running);

        let err = enrich_with_persistence(&row(), &enricher, &store).await.unwrap_err();

        assert!(matches!(err, EnrichError::Persistence(_)));
        assert_eq!(provider.call_count(), 0);
        assert!(store.updates().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_done_write_failure_propagates() {
        let enricher = Enricher::with_defaults(MockProvider::new(FOUND));
        let store = MemoryStatusStore::new().fail_on(EnrichStatus::Done);

        let err = enrich_with_persistence(&row(), &enricher, &store).await.unwrap_err();

        assert!(matches!(err, EnrichError::Persistence(_)));
        assert_eq!(store.statuses(), vec![EnrichStatus::Running]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_error_write_failure_replaces_engine_error() {
        let enricher = Enricher::with_defaults(MockProvider::failing("quota exceeded"));
        let store = MemoryStatusStore::new().fail_on(EnrichStatus::Error);

        let err = enrich_with_persistence(&row(), &enricher, &store).await.unwrap_err();

        assert!(matches!(err, EnrichError::Persistence(_)));
        assert_eq!(store.statuses(), vec![EnrichStatus::Running]);
    }

    #[test]
    fn test_pre_epoch_clock_records_zero() {
        let skewed = UNIX_EPOCH - std::time::Duration::from_secs(5);
        assert_eq!(unix_seconds(skewed), 0);
        assert_eq!(unix_seconds(UNIX_EPOCH + std::time::Duration::from_secs(7)), 7);
    }

    #[test]
    fn test_unix_now_is_recent() {
        // 2023-11-14, well before any plausible test run
        assert!(unix_now() > 1_700_000_000);
    }
}
