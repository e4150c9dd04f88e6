//! Prompt construction for lead enrichment
//!
//! The prompt is a fixed document with the lead's queries substituted in. The
//! step order encodes the lookup policy: Instagram is read off the official
//! homepage first, and searched for only when no website was found.

use scout_domain::{LeadRow, SearchQueries};

/// Builds the enrichment prompt for one lead
pub struct PromptBuilder {
    queries: SearchQueries,
}

impl PromptBuilder {
    /// Create a new prompt builder
    pub fn new(row: &LeadRow) -> Self {
        Self {
            queries: SearchQueries::for_lead(row),
        }
    }

    /// The queries embedded in the prompt
    pub fn queries(&self) -> &SearchQueries {
        &self.queries
    }

    /// Build the complete enrichment prompt
    pub fn build(&self) -> String {
        [
            "You are enriching CRM leads.".to_string(),
            "Follow these deterministic steps exactly:".to_string(),
            format!(
                "1) Find the official website for: \"{}\". Prefer an official domain and avoid directory/listing sites when possible.",
                self.queries.website
            ),
            "2) Instagram lookup:".to_string(),
            "   - If website is found: open homepage HTML and extract instagram.com links first."
                .to_string(),
            format!(
                "   - If no website is found: search \"{}\".",
                self.queries.instagram
            ),
            "3) Find decision makers by searching for owner/founder/president/CEO.".to_string(),
            "4) Return up to 2 people with name, title, and source URL.".to_string(),
            "Return only fields required by the schema.".to_string(),
        ]
        .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn builder() -> PromptBuilder {
        PromptBuilder::new(&LeadRow::new(1, "Acme Bakery", "Portland", "OR"))
    }

    #[test]
    fn test_prompt_exact_text() {
        let expected = "You are enriching CRM leads.\n\
Follow these deterministic steps exactly:\n\
1) Find the official website for: \"Acme Bakery Portland OR official website\". Prefer an official domain and avoid directory/listing sites when possible.\n\
2) Instagram lookup:\n   - If website is found: open homepage HTML and extract instagram.com links first.\n   - If no website is found: search \"Acme Bakery Portland OR instagram\".\n\
3) Find decision makers by searching for owner/founder/president/CEO.\n\
4) Return up to 2 people with name, title, and source URL.\n\
Return only fields required by the schema.";
        assert_eq!(builder().build(), expected);
    }

    #[test]
    fn test_website_html_step_precedes_search_fallback() {
        let prompt = builder().build();
        let html = prompt.find("extract instagram.com links first").unwrap();
        let search = prompt.find("If no website is found").unwrap();
        assert!(html < search);
    }

    #[test]
    fn test_prompt_is_deterministic() {
        assert_eq!(builder().build(), builder().build());
    }

    #[test]
    fn test_queries_exposed() {
        let b = builder();
        assert_eq!(b.queries().instagram, "Acme Bakery Portland OR instagram");
        assert_eq!(b.queries().decision_makers.len(), 4);
    }
}
