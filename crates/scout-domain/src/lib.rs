//! Scout Domain Layer
//!
//! This crate contains the core business logic and domain model for Scout.
//! It has ZERO external dependencies and defines the value objects, the pure
//! derivation rules, and the trait interfaces that all other layers depend upon.
//!
//! ## Key Concepts
//!
//! - **Lead**: A business record (name, city, state) targeted for enrichment
//! - **Search queries**: Deterministic strings derived from a lead's identifying fields
//! - **Enrichment result**: Website, Instagram, and decision-maker facts with provenance
//! - **Confidence**: An additive 0-100 score over the evidence found
//! - **Status**: Lifecycle of one lead (pending → running → done/error)
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture:
//! - No external crate dependencies
//! - Pure business logic only
//! - Infrastructure implementations live in other crates
//! - Trait definitions for all external interactions

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod batch;
pub mod confidence;
pub mod lead;
pub mod normalize;
pub mod queries;
pub mod result;
pub mod status;
pub mod traits;

// Re-exports for convenience
pub use batch::BatchResult;
pub use lead::{LeadId, LeadRow};
pub use queries::SearchQueries;
pub use result::{DecisionMaker, EnrichmentResult, InstagramSource};
pub use status::{EnrichStatus, StatusUpdate};
