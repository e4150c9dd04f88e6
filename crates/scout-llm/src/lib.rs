//! Scout Search Provider Layer
//!
//! Pluggable implementations of the structured search service.
//!
//! # Architecture
//!
//! This crate provides implementations of the `SearchProvider` trait from `scout-domain`.
//! It supports multiple backends with a common interface.
//!
//! # Providers
//!
//! - `MockProvider`: Deterministic scripted fake for testing
//! - `OpenAiProvider`: OpenAI Responses API with the web search tool
//!
//! # Examples
//!
//! ```
//! use scout_llm::MockProvider;
//! use scout_domain::traits::{SearchProvider, StructuredSearchRequest};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let provider = MockProvider::new(r#"{"official_website": null}"#);
//! let request = StructuredSearchRequest {
//!     model: "test".to_string(),
//!     web_search: true,
//!     prompt: "find things".to_string(),
//!     schema_name: "lead_enrichment".to_string(),
//!     schema: "{}".to_string(),
//! };
//! let payload = provider.search_structured(&request).await.unwrap();
//! assert_eq!(payload.as_deref(), Some(r#"{"official_website": null}"#));
//! # }
//! ```

#![warn(missing_docs)]

pub mod openai;

use scout_domain::traits::{SearchProvider, StructuredSearchRequest};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use thiserror::Error;
use tokio::time::Instant;

pub use openai::OpenAiProvider;

/// Errors that can occur during search provider operations
#[derive(Error, Debug)]
pub enum LlmError {
    /// Network or API communication error
    #[error("Communication error: {0}")]
    Communication(String),

    /// Invalid response from the service
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Request could not be built
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    /// Model not available
    #[error("Model not available: {0}")]
    ModelNotAvailable(String),

    /// Generic error
    #[error("LLM error: {0}")]
    Other(String),
}

/// A scripted reply for [`MockProvider`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockReply {
    /// Return this JSON text as the structured payload
    Payload(String),

    /// Answer without a structured payload
    Empty,

    /// Fail with [`LlmError::Other`] carrying this message
    Error(String),
}

#[derive(Debug)]
struct MockState {
    script: VecDeque<MockReply>,
    requests: Vec<StructuredSearchRequest>,
    call_times: Vec<Instant>,
}

/// Mock search provider for deterministic testing
///
/// Replies are taken from a script in order; once the script runs out every
/// call gets the default reply. No network calls are made.
///
/// # Examples
///
/// ```
/// use scout_llm::MockProvider;
///
/// let provider = MockProvider::default()
///     .then_error("connection reset")
///     .then_empty()
///     .then_payload("{}");
/// assert_eq!(provider.call_count(), 0);
/// ```
#[derive(Debug, Clone)]
pub struct MockProvider {
    default_reply: MockReply,
    state: Arc<Mutex<MockState>>,
}

impl MockProvider {
    /// Create a MockProvider that returns `payload` for every call
    pub fn new(payload: impl Into<String>) -> Self {
        Self::with_default(MockReply::Payload(payload.into()))
    }

    /// Create a MockProvider whose every call fails with `message`
    pub fn failing(message: impl Into<String>) -> Self {
        Self::with_default(MockReply::Error(message.into()))
    }

    fn with_default(default_reply: MockReply) -> Self {
        Self {
            default_reply,
            state: Arc::new(Mutex::new(MockState {
                script: VecDeque::new(),
                requests: Vec::new(),
                call_times: Vec::new(),
            })),
        }
    }

    fn state(&self) -> MutexGuard<'_, MockState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Queue a reply
    pub fn push_reply(&self, reply: MockReply) {
        self.state().script.push_back(reply);
    }

    /// Queue a successful payload
    pub fn then_payload(self, payload: impl Into<String>) -> Self {
        self.push_reply(MockReply::Payload(payload.into()));
        self
    }

    /// Queue an answer without a payload
    pub fn then_empty(self) -> Self {
        self.push_reply(MockReply::Empty);
        self
    }

    /// Queue a failure
    pub fn then_error(self, message: impl Into<String>) -> Self {
        self.push_reply(MockReply::Error(message.into()));
        self
    }

    /// Get the number of times the provider was called
    pub fn call_count(&self) -> usize {
        self.state().requests.len()
    }

    /// Requests received so far, in call order
    pub fn requests(&self) -> Vec<StructuredSearchRequest> {
        self.state().requests.clone()
    }

    /// Instants at which each call arrived
    ///
    /// Taken from the tokio clock, so tests running with a paused clock can
    /// assert exact spacing between calls.
    pub fn call_times(&self) -> Vec<Instant> {
        self.state().call_times.clone()
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::with_default(MockReply::Empty)
    }
}

impl SearchProvider for MockProvider {
    type Error = LlmError;

    async fn search_structured(
        &self,
        request: &StructuredSearchRequest,
    ) -> Result<Option<String>, Self::Error> {
        let reply = {
            let mut state = self.state();
            state.requests.push(request.clone());
            state.call_times.push(Instant::now());
            state
                .script
                .pop_front()
                .unwrap_or_else(|| self.default_reply.clone())
        };

        match reply {
            MockReply::Payload(payload) => Ok(Some(payload)),
            MockReply::Empty => Ok(None),
            MockReply::Error(message) => Err(LlmError::Other(message)),
        }
    }
}
