//! Command implementations.

pub mod add;
pub mod enrich;
pub mod enrich_all;
pub mod status;

pub use self::add::execute_add;
pub use self::enrich::execute_enrich;
pub use self::enrich_all::execute_enrich_all;
pub use self::status::execute_status;

use crate::config::Config;
use crate::error::Result;
use scout_enricher::Enricher;
use scout_llm::OpenAiProvider;

/// Build the enricher for commands that call the search provider.
pub fn build_enricher(config: &Config) -> Result<Enricher<OpenAiProvider>> {
    let provider = OpenAiProvider::with_timeout(
        config.provider.endpoint.clone(),
        config.api_key()?,
        config.enrichment.request_timeout(),
    )?;
    Ok(Enricher::new(provider, config.enrichment.clone())?)
}
