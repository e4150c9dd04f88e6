//! Wire types for the search service payload

use scout_domain::DecisionMaker;
use serde::Deserialize;

/// Payload as returned by the search service, before normalization
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct RawEnrichment {
    pub official_website: Option<String>,
    pub website_source_url: Option<String>,
    pub instagram_url: Option<String>,
    pub instagram_source: Option<String>,
    /// `null` list and `null` entries are tolerated and treated as empty
    #[serde(default)]
    pub decision_makers: Option<Vec<Option<RawDecisionMaker>>>,
}

impl RawEnrichment {
    /// Decision-maker candidates, with `null` entries kept as empty (invalid) ones
    pub fn decision_maker_candidates(&mut self) -> Vec<DecisionMaker> {
        self.decision_makers
            .take()
            .unwrap_or_default()
            .into_iter()
            .map(|entry| entry.map(Into::into).unwrap_or_else(|| DecisionMaker::new("", "", "")))
            .collect()
    }
}

/// Decision-maker entry as returned by the search service
///
/// Missing or `null` fields become empty so that an incomplete entry is
/// dropped during normalization instead of failing the whole payload.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct RawDecisionMaker {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub source_url: Option<String>,
}

impl From<RawDecisionMaker> for DecisionMaker {
    fn from(raw: RawDecisionMaker) -> Self {
        DecisionMaker::new(
            raw.name.unwrap_or_default(),
            raw.title.unwrap_or_default(),
            raw.source_url.unwrap_or_default(),
        )
    }
}
