//! Enrich command implementation.

use crate::cli::EnrichArgs;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use scout_domain::traits::SearchProvider;
use scout_domain::LeadId;
use scout_enricher::{enrich_with_persistence, Enricher};
use scout_store::SqliteStore;

/// Execute the enrich command.
///
/// The lead's status is recorded in the store whether enrichment succeeds or not.
pub async fn execute_enrich<P: SearchProvider>(
    args: EnrichArgs,
    enricher: &Enricher<P>,
    store: &SqliteStore,
    formatter: &Formatter,
) -> Result<()> {
    let id = LeadId::parse(&args.id);
    let lead = store
        .get_lead(&id)?
        .ok_or_else(|| CliError::NotFound(id.to_string()))?;

    tracing::info!(lead = %lead.id, "Enriching {}", lead.location());

    let result = enrich_with_persistence(&lead, enricher, store).await?;

    println!("{}", formatter.format_result(&lead.id, &result)?);

    Ok(())
}
