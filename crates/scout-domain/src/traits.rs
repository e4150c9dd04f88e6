//! Trait definitions for external interactions
//!
//! These traits define the boundaries between domain logic and infrastructure.
//! Infrastructure implementations live in other crates.

use crate::StatusUpdate;
use std::future::Future;

/// A request for schema-constrained output from a search-capable model
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructuredSearchRequest {
    /// Model identifier
    pub model: String,

    /// Allow the service to use live web search
    pub web_search: bool,

    /// Instruction text
    pub prompt: String,

    /// Name of the output schema
    pub schema_name: String,

    /// JSON schema the output must conform to, as JSON text
    pub schema: String,
}

/// Trait for the reasoning/search service
///
/// Implemented by the infrastructure layer (scout-llm)
pub trait SearchProvider {
    /// Error type for service calls
    type Error: std::fmt::Display;

    /// Run a structured search
    ///
    /// Returns the raw JSON text of the structured payload, or `None` when
    /// the service answered without one.
    fn search_structured(
        &self,
        request: &StructuredSearchRequest,
    ) -> impl Future<Output = Result<Option<String>, Self::Error>> + Send;
}

/// Trait for recording enrichment status
///
/// Implemented by the infrastructure layer (scout-store)
pub trait StatusStore {
    /// Error type for store operations
    type Error: std::fmt::Display;

    /// Record a status transition for one lead
    fn set_status(
        &self,
        update: StatusUpdate,
    ) -> impl Future<Output = Result<(), Self::Error>> + Send;
}
