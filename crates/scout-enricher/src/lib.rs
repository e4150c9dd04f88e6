//! Scout Enricher
//!
//! Turns business leads into structured facts using a schema-constrained
//! search service.
//!
//! # Overview
//!
//! For each lead the Enricher derives deterministic search queries, renders a
//! fixed instruction prompt, and asks the search service for a payload that
//! matches a strict JSON schema. The payload is normalized and scored before
//! it is returned.
//!
//! # Architecture
//!
//! ```text
//! BatchRunner → enrich_with_persistence → Enricher → SearchProvider
//!                        ↓                    ↓
//!                   StatusStore      PromptBuilder / parser
//! ```
//!
//! # Key Features
//!
//! - **Retry with linear backoff**: up to 3 attempts, waiting 250ms then 500ms
//! - **Strict output schema**: no additional properties, at most 2 decision-makers
//! - **Status transitions**: `running` before work, `done`/`error` after
//! - **Paced batches**: sequential rows with a fixed pause between them
//!
//! # Example Usage
//!
//! ```no_run
//! use scout_enricher::{enrich_with_persistence, Enricher, EnricherConfig};
//! use scout_domain::LeadRow;
//! use scout_llm::OpenAiProvider;
//! use scout_store::SqliteStore;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let provider = OpenAiProvider::from_env("OPENAI_API_KEY")?;
//! let enricher = Enricher::new(provider, EnricherConfig::default())?;
//! let store = SqliteStore::new("scout.db")?;
//!
//! let row = LeadRow::new(1, "Acme Bakery", "Portland", "OR");
//! let result = enrich_with_persistence(&row, &enricher, &store).await?;
//!
//! println!("Website: {:?}", result.official_website);
//! println!("Confidence: {}", result.confidence);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod batch;
mod config;
mod enricher;
mod error;
mod parser;
mod persistence;
mod prompt;
mod schema;
mod types;

#[cfg(test)]
mod tests;

pub use batch::{BatchRunner, BatchSummary};
pub use config::EnricherConfig;
pub use enricher::Enricher;
pub use error::{AttemptError, EnrichError};
pub use persistence::enrich_with_persistence;
pub use prompt::PromptBuilder;
pub use schema::{enrichment_schema, SCHEMA_NAME};
