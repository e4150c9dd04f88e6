//! Core Enricher implementation

use crate::config::EnricherConfig;
use crate::error::{AttemptError, EnrichError};
use crate::parser::{normalize, parse_payload};
use crate::prompt::PromptBuilder;
use crate::schema::{enrichment_schema, SCHEMA_NAME};
use scout_domain::traits::{SearchProvider, StructuredSearchRequest};
use scout_domain::{EnrichmentResult, LeadRow, SearchQueries};
use tokio::time::{sleep, timeout};
use tracing::{debug, info, warn};

/// The Enricher turns one lead into a normalized, scored result
///
/// Each call runs up to `max_attempts` schema-constrained searches with linear
/// backoff between them. The Enricher has no side effects beyond the search
/// calls themselves.
pub struct Enricher<P>
where
    P: SearchProvider,
{
    provider: P,
    config: EnricherConfig,
    schema: String,
}

impl<P> Enricher<P>
where
    P: SearchProvider,
{
    /// Create a new Enricher
    ///
    /// # Errors
    ///
    /// Returns [`EnrichError::Config`] if the configuration is invalid.
    pub fn new(provider: P, config: EnricherConfig) -> Result<Self, EnrichError> {
        config.validate()?;
        Ok(Self {
            provider,
            config,
            schema: enrichment_schema().to_string(),
        })
    }

    /// Create an Enricher with default configuration
    pub fn with_defaults(provider: P) -> Self {
        Self {
            provider,
            config: EnricherConfig::default(),
            schema: enrichment_schema().to_string(),
        }
    }

    /// The active configuration
    pub fn config(&self) -> &EnricherConfig {
        &self.config
    }

    /// The underlying search provider
    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Enrich one lead
    ///
    /// # Errors
    ///
    /// Returns [`EnrichError::Exhausted`] carrying the last attempt's failure
    /// once every attempt has failed.
    pub async fn enrich(&self, row: &LeadRow) -> Result<EnrichmentResult, EnrichError> {
        let builder = PromptBuilder::new(row);
        let request = StructuredSearchRequest {
            model: self.config.model.clone(),
            web_search: true,
            prompt: builder.build(),
            schema_name: SCHEMA_NAME.to_string(),
            schema: self.schema.clone(),
        };

        info!(lead = %row.id, "Starting enrichment for '{}'", row.location());

        let max_attempts = self.config.max_attempts;
        let mut last_error = None;

        for attempt in 1..=max_attempts {
            debug!(lead = %row.id, attempt, "Search attempt");

            match self.attempt(&request, builder.queries()).await {
                Ok(result) => {
                    info!(
                        lead = %row.id,
                        attempt,
                        confidence = result.confidence,
                        "Enrichment succeeded"
                    );
                    return Ok(result);
                }
                Err(e) => {
                    warn!(lead = %row.id, attempt, "Attempt failed: {}", e);
                    last_error = Some(e);
                }
            }

            if attempt < max_attempts {
                let delay = self.config.backoff_delay(attempt);
                debug!(lead = %row.id, "Backing off for {:?}", delay);
                sleep(delay).await;
            }
        }

        let last_error = last_error
            .map(|e| e.to_string())
            .unwrap_or_else(|| "no attempts were made".to_string());

        warn!(lead = %row.id, "Giving up after {} attempts", max_attempts);

        Err(EnrichError::Exhausted {
            attempts: max_attempts,
            last_error,
        })
    }

    /// Run one search call, then parse and normalize its payload
    async fn attempt(
        &self,
        request: &StructuredSearchRequest,
        queries: &SearchQueries,
    ) -> Result<EnrichmentResult, AttemptError> {
        let payload = timeout(
            self.config.request_timeout(),
            self.provider.search_structured(request),
        )
        .await
        .map_err(|_| AttemptError::Timeout(self.config.request_timeout_secs))?
        .map_err(|e| AttemptError::Provider(e.to_string()))?
        .ok_or(AttemptError::MissingPayload)?;

        debug!("Payload length: {} chars", payload.len());

        let raw = parse_payload(&payload)?;
        normalize(raw, queries.clone())
    }
}
