//! Enrich-all command implementation.

use crate::cli::EnrichAllArgs;
use crate::error::Result;
use crate::output::Formatter;
use scout_domain::traits::SearchProvider;
use scout_domain::LeadRow;
use scout_enricher::{BatchRunner, BatchSummary, Enricher};
use scout_store::{LeadFilter, SqliteStore};
use std::time::Duration;

/// Execute the enrich-all command.
///
/// Leads are processed in insertion order. Failed leads are reported but do not
/// fail the command.
pub async fn execute_enrich_all<P: SearchProvider>(
    args: EnrichAllArgs,
    enricher: &Enricher<P>,
    store: &SqliteStore,
    formatter: &Formatter,
) -> Result<BatchSummary> {
    let filter = if args.include_done {
        LeadFilter::default()
    } else {
        LeadFilter::unfinished()
    };
    let rows: Vec<LeadRow> = store
        .list_leads(&filter)?
        .into_iter()
        .map(|record| record.lead)
        .collect();

    let mut runner = BatchRunner::new(enricher, store);
    if let Some(ms) = args.interval_ms {
        runner = runner.with_interval(Duration::from_millis(ms));
    }

    let (results, summary) = runner.run_with_summary(&rows).await;

    println!("{}", formatter.format_batch(&rows, &results)?);
    eprintln!("{}", formatter.batch_summary(&summary));

    Ok(summary)
}
