//! OpenAI Provider Implementation
//!
//! Provides integration with the OpenAI Responses API, using the hosted
//! `web_search` tool and strict JSON-schema output.
//!
//! # Features
//!
//! - Async HTTP communication with the Responses API
//! - Configurable endpoint, API key, and request timeout
//! - Extraction of the structured payload from the response's output items
//!
//! The provider makes exactly one request per call. Retry and backoff belong
//! to the caller, which decides what counts as a retryable failure.
//!
//! # Examples
//!
//! ```no_run
//! use scout_llm::OpenAiProvider;
//!
//! let provider = OpenAiProvider::new("https://api.openai.com/v1", "sk-...").unwrap();
//! ```

use crate::LlmError;
use scout_domain::traits::{SearchProvider, StructuredSearchRequest};
use serde::Deserialize;
use serde_json::{json, Value};
use std::time::Duration;
use tracing::debug;

/// Default OpenAI API endpoint
pub const DEFAULT_ENDPOINT: &str = "https://api.openai.com/v1";

/// Default timeout for search requests (120 seconds)
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Environment variable holding the API key by default
pub const DEFAULT_API_KEY_ENV: &str = "OPENAI_API_KEY";

/// OpenAI Responses API provider
pub struct OpenAiProvider {
    endpoint: String,
    api_key: String,
    client: reqwest::Client,
    timeout: Duration,
}

/// Response body of the Responses API (only the fields we read)
#[derive(Debug, Deserialize)]
struct ResponsesBody {
    #[serde(default)]
    output: Vec<OutputItem>,
}

#[derive(Debug, Deserialize)]
struct OutputItem {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    content: Vec<ContentPart>,
}

#[derive(Debug, Deserialize)]
struct ContentPart {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    text: Option<String>,
}

impl OpenAiProvider {
    /// Create a new OpenAI provider
    ///
    /// # Parameters
    ///
    /// - `endpoint`: API base URL (e.g., "https://api.openai.com/v1")
    /// - `api_key`: Bearer token
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(endpoint: impl Into<String>, api_key: impl Into<String>) -> Result<Self, LlmError> {
        Self::with_timeout(endpoint, api_key, Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    /// Create a new OpenAI provider with a custom request timeout
    pub fn with_timeout(
        endpoint: impl Into<String>,
        api_key: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, LlmError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| LlmError::Communication(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            endpoint: endpoint.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            client,
            timeout,
        })
    }

    /// Create a provider for the public endpoint, reading the key from `env_var`
    pub fn from_env(env_var: &str) -> Result<Self, LlmError> {
        let api_key = std::env::var(env_var).map_err(|_| {
            LlmError::InvalidRequest(format!("Environment variable {} is not set", env_var))
        })?;
        Self::new(DEFAULT_ENDPOINT, api_key)
    }

    /// The configured request timeout
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Run one structured search against the Responses API
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - The schema is not valid JSON
    /// - Network communication fails
    /// - The API answers with a non-success status
    /// - The response body cannot be decoded
    pub async fn search(&self, request: &StructuredSearchRequest) -> Result<Option<String>, LlmError> {
        let url = format!("{}/responses", self.endpoint);
        let body = build_request_body(request)?;

        debug!(model = %request.model, prompt_len = request.prompt.len(), "Sending structured search");

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| LlmError::Communication(format!("Request failed: {}", e)))?;

        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(LlmError::RateLimitExceeded);
        }
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(LlmError::ModelNotAvailable(request.model.clone()));
        }
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(LlmError::Communication(format!("HTTP {}: {}", status, error_text)));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| LlmError::InvalidResponse(format!("Failed to parse response: {}", e)))?;

        extract_output_text(body)
    }
}

impl SearchProvider for OpenAiProvider {
    type Error = LlmError;

    async fn search_structured(
        &self,
        request: &StructuredSearchRequest,
    ) -> Result<Option<String>, Self::Error> {
        self.search(request).await
    }
}

/// Build the Responses API request body
fn build_request_body(request: &StructuredSearchRequest) -> Result<Value, LlmError> {
    let schema: Value = serde_json::from_str(&request.schema)
        .map_err(|e| LlmError::InvalidRequest(format!("Schema is not valid JSON: {}", e)))?;

    let tools = if request.web_search {
        json!([{ "type": "web_search" }])
    } else {
        json!([])
    };

    Ok(json!({
        "model": request.model,
        "tools": tools,
        "input": request.prompt,
        "text": {
            "format": {
                "type": "json_schema",
                "name": request.schema_name,
                "strict": true,
                "schema": schema,
            }
        }
    }))
}

/// Concatenate the `output_text` parts of every message item
///
/// Returns `None` when the response carries no text (e.g., the model only
/// ran tool calls or refused).
fn extract_output_text(body: Value) -> Result<Option<String>, LlmError> {
    let body: ResponsesBody = serde_json::from_value(body)
        .map_err(|e| LlmError::InvalidResponse(format!("Unexpected response shape: {}", e)))?;

    let text: String = body
        .output
        .iter()
        .filter(|item| item.kind == "message")
        .flat_map(|item| item.content.iter())
        .filter(|part| part.kind == "output_text")
        .filter_map(|part| part.text.as_deref())
        .collect();

    if text.trim().is_empty() {
        Ok(None)
    } else {
        Ok(Some(text))
    }
}
