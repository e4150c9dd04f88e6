//! Enrichment output types

use crate::SearchQueries;

/// Where an Instagram profile claim came from
///
/// On-site evidence (a link on the business's own homepage) is self-reported
/// and outranks a profile found through generic search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InstagramSource {
    /// Link found in the official website's HTML
    WebsiteHtml,

    /// Profile found through search
    Search,
}

impl InstagramSource {
    /// Wire name used in the output schema
    pub fn as_str(&self) -> &'static str {
        match self {
            InstagramSource::WebsiteHtml => "website_html",
            InstagramSource::Search => "search",
        }
    }

    /// Parse a wire name
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "website_html" => Some(InstagramSource::WebsiteHtml),
            "search" => Some(InstagramSource::Search),
            _ => None,
        }
    }
}

/// A named person in an ownership or leadership role
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecisionMaker {
    /// Full name
    pub name: String,

    /// Role title (e.g., "Owner", "CEO")
    pub title: String,

    /// Page the person was found on
    pub source_url: String,
}

impl DecisionMaker {
    /// Create a new decision-maker entry
    pub fn new(
        name: impl Into<String>,
        title: impl Into<String>,
        source_url: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            title: title.into(),
            source_url: source_url.into(),
        }
    }

    /// An entry is usable only when every field has content after trimming
    pub fn is_valid(&self) -> bool {
        !self.name.trim().is_empty()
            && !self.title.trim().is_empty()
            && !self.source_url.trim().is_empty()
    }

    /// Copy with every field trimmed
    pub fn trimmed(&self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            title: self.title.trim().to_string(),
            source_url: self.source_url.trim().to_string(),
        }
    }
}

/// Normalized, scored facts about one lead
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnrichmentResult {
    /// Official website URL
    pub official_website: Option<String>,

    /// Page that backs the website claim
    pub website_source_url: Option<String>,

    /// Instagram profile URL
    pub instagram_url: Option<String>,

    /// Provenance of the Instagram claim
    pub instagram_source: Option<InstagramSource>,

    /// At most two valid, trimmed decision-makers in the order they were returned
    pub decision_makers: Vec<DecisionMaker>,

    /// Heuristic evidence score in [0, 100]
    pub confidence: u8,

    /// Queries the result was derived from
    pub search_queries: SearchQueries,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instagram_source_wire_names() {
        assert_eq!(InstagramSource::WebsiteHtml.as_str(), "website_html");
        assert_eq!(InstagramSource::Search.as_str(), "search");
        assert_eq!(InstagramSource::parse("website_html"), Some(InstagramSource::WebsiteHtml));
        assert_eq!(InstagramSource::parse("search"), Some(InstagramSource::Search));
        assert_eq!(InstagramSource::parse("Search"), None);
    }

    #[test]
    fn test_decision_maker_validity() {
        assert!(DecisionMaker::new("Ana", "Owner", "https://a.example").is_valid());
        assert!(!DecisionMaker::new("  ", "Owner", "https://a.example").is_valid());
        assert!(!DecisionMaker::new("Ana", "", "https://a.example").is_valid());
        assert!(!DecisionMaker::new("Ana", "Owner", "\t").is_valid());
    }

    #[test]
    fn test_decision_maker_trimmed() {
        let dm = DecisionMaker::new(" Ana Ruiz ", "Owner\n", " https://a.example ");
        assert_eq!(dm.trimmed(), DecisionMaker::new("Ana Ruiz", "Owner", "https://a.example"));
    }
}
