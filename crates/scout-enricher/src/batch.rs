//! Sequential batch enrichment

use crate::enricher::Enricher;
use crate::persistence::enrich_with_persistence;
use scout_domain::traits::{SearchProvider, StatusStore};
use scout_domain::{BatchResult, LeadRow};
use std::time::Duration;
use tokio::time::{sleep, Instant};
use uuid::Uuid;

/// Totals for one batch run
#[derive(Debug, Clone)]
pub struct BatchSummary {
    /// Identifier of the run, for correlating log lines
    pub run_id: Uuid,

    /// Rows processed
    pub total: usize,

    /// Rows enriched successfully
    pub succeeded: usize,

    /// Rows that failed
    pub failed: usize,

    /// Wall time of the run, pauses included
    pub elapsed: Duration,
}

impl BatchSummary {
    /// Get a human-readable summary
    pub fn summary(&self) -> String {
        format!(
            "Batch {}: {} rows, {} succeeded, {} failed in {:.1}s",
            self.run_id,
            self.total,
            self.succeeded,
            self.failed,
            self.elapsed.as_secs_f64()
        )
    }
}

/// Runs the persistence-aware enricher over many leads, one at a time
///
/// Rows are processed strictly in input order and never concurrently. The
/// runner pauses for `interval` between consecutive rows (not after the last)
/// to bound the request rate against the search service. A failing row is
/// recorded in its own [`BatchResult`] and never stops the batch.
///
/// # Examples
///
/// ```no_run
/// use scout_enricher::{BatchRunner, Enricher};
/// use scout_domain::LeadRow;
/// use scout_llm::MockProvider;
/// use scout_store::MemoryStatusStore;
///
/// # async fn example() {
/// let enricher = Enricher::with_defaults(MockProvider::default());
/// let store = MemoryStatusStore::new();
/// let rows = vec![LeadRow::new(1, "Acme", "Reno", "NV")];
///
/// let results = BatchRunner::new(&enricher, &store).run(&rows).await;
/// assert_eq!(results.len(), 1);
/// # }
/// ```
pub struct BatchRunner<'a, P, S>
where
    P: SearchProvider,
    S: StatusStore,
{
    enricher: &'a Enricher<P>,
    store: &'a S,
    interval: Duration,
}

impl<'a, P, S> BatchRunner<'a, P, S>
where
    P: SearchProvider,
    S: StatusStore,
{
    /// Create a runner using the enricher's configured batch interval
    pub fn new(enricher: &'a Enricher<P>, store: &'a S) -> Self {
        Self {
            interval: enricher.config().batch_interval(),
            enricher,
            store,
        }
    }

    /// Override the pause between rows
    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    /// The pause between rows
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Enrich every row, returning one outcome per row in input order
    pub async fn run(&self, rows: &[LeadRow]) -> Vec<BatchResult> {
        self.run_with_summary(rows).await.0
    }

    /// Like [`run`](Self::run), also returning run totals
    pub async fn run_with_summary(&self, rows: &[LeadRow]) -> (Vec<BatchResult>, BatchSummary) {
        let run_id = Uuid::now_v7();
        let started = Instant::now();
        let mut results = Vec::with_capacity(rows.len());

        tracing::info!(
            %run_id,
            "Batch started: {} rows (interval: {:?})",
            rows.len(),
            self.interval
        );

        for (index, row) in rows.iter().enumerate() {
            tracing::debug!(%run_id, lead = %row.id, "Row {}/{}", index + 1, rows.len());

            match enrich_with_persistence(row, self.enricher, self.store).await {
                Ok(result) => results.push(BatchResult::ok(row.id.clone(), result)),
                Err(e) => {
                    tracing::warn!(%run_id, lead = %row.id, "Row failed: {}", e);
                    results.push(BatchResult::failed(row.id.clone(), e.to_string()));
                }
            }

            if index + 1 < rows.len() {
                sleep(self.interval).await;
            }
        }

        let succeeded = results.iter().filter(|r| r.is_ok()).count();
        let summary = BatchSummary {
            run_id,
            total: results.len(),
            succeeded,
            failed: results.len() - succeeded,
            elapsed: started.elapsed(),
        };

        tracing::info!(%run_id, "{}", summary.summary());

        (results, summary)
    }
}
