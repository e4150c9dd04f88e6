//! Parse search service output into normalized enrichment results

use crate::error::AttemptError;
use crate::types::RawEnrichment;
use scout_domain::confidence::compute_confidence;
use scout_domain::normalize::{clean_optional, normalize_decision_makers};
use scout_domain::{EnrichmentResult, InstagramSource, SearchQueries};
use tracing::warn;

/// Parse the JSON payload returned by the search service
pub(crate) fn parse_payload(payload: &str) -> Result<RawEnrichment, AttemptError> {
    let json_str = extract_json(payload)?;
    let raw: RawEnrichment = serde_json::from_str(&json_str)?;
    Ok(raw)
}

/// Clean a raw payload, score it, and attach the queries it came from
pub(crate) fn normalize(
    mut raw: RawEnrichment,
    queries: SearchQueries,
) -> Result<EnrichmentResult, AttemptError> {
    let instagram_source = match raw.instagram_source.as_deref() {
        None => None,
        Some(value) => Some(InstagramSource::parse(value).ok_or_else(|| {
            AttemptError::InvalidPayload(format!("unknown instagram_source '{}'", value))
        })?),
    };

    let candidates = raw.decision_maker_candidates();
    let incomplete = candidates.iter().filter(|dm| !dm.is_valid()).count();
    if incomplete > 0 {
        warn!("Dropped {} incomplete decision-maker entries", incomplete);
    }
    let decision_makers = normalize_decision_makers(&candidates);

    let official_website = clean_optional(raw.official_website.as_deref());
    let confidence = compute_confidence(
        official_website.is_some(),
        instagram_source,
        &decision_makers,
    );

    Ok(EnrichmentResult {
        official_website,
        website_source_url: clean_optional(raw.website_source_url.as_deref()),
        instagram_url: clean_optional(raw.instagram_url.as_deref()),
        instagram_source,
        decision_makers,
        confidence,
        search_queries: queries,
    })
}

/// Extract JSON from a payload, handling markdown code blocks
fn extract_json(payload: &str) -> Result<String, AttemptError> {
    let trimmed = payload.trim();

    if trimmed.starts_with("```") {
        let lines: Vec<&str> = trimmed.lines().collect();
        if lines.len() < 2 {
            return Err(AttemptError::InvalidPayload("Empty code block".to_string()));
        }

        // Skip first line (```json or ```) and last line (```)
        let json_lines = &lines[1..lines.len().saturating_sub(1)];
        Ok(json_lines.join("\n"))
    } else {
        Ok(trimmed.to_string())
    }
}
