//! Search query derivation
//!
//! Queries are a pure function of a lead's identifying fields. The same lead
//! always yields the same strings, so they can be recorded next to a result
//! for auditing and reused as cache keys.

use crate::LeadRow;

/// Roles searched for when looking up decision-makers, in query order
pub const DECISION_MAKER_ROLES: [&str; 4] = ["owner", "founder", "president", "CEO"];

/// The exact search queries used to enrich one lead
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQueries {
    /// Query used to find the official website
    pub website: String,

    /// Fallback query used to find the Instagram profile
    pub instagram: String,

    /// One query per role in [`DECISION_MAKER_ROLES`]
    pub decision_makers: Vec<String>,
}

impl SearchQueries {
    /// Derive the queries for a lead
    ///
    /// # Examples
    ///
    /// ```
    /// use scout_domain::{LeadRow, SearchQueries};
    ///
    /// let row = LeadRow::new(1, "Acme Bakery", "Portland", "OR");
    /// let queries = SearchQueries::for_lead(&row);
    /// assert_eq!(queries.website, "Acme Bakery Portland OR official website");
    /// assert_eq!(queries.instagram, "Acme Bakery Portland OR instagram");
    /// assert_eq!(queries.decision_makers[3], "Acme Bakery Portland OR CEO");
    /// ```
    pub fn for_lead(row: &LeadRow) -> Self {
        let location = row.location();

        Self {
            website: format!("{} official website", location),
            instagram: format!("{} instagram", location),
            decision_makers: DECISION_MAKER_ROLES
                .iter()
                .map(|role| format!("{} {}", location, role))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_queries_for_lead() {
        let row = LeadRow::new("a1", "Joe's Pizza", "Brooklyn", "NY");
        let queries = SearchQueries::for_lead(&row);

        assert_eq!(queries.website, "Joe's Pizza Brooklyn NY official website");
        assert_eq!(queries.instagram, "Joe's Pizza Brooklyn NY instagram");
        assert_eq!(
            queries.decision_makers,
            vec![
                "Joe's Pizza Brooklyn NY owner",
                "Joe's Pizza Brooklyn NY founder",
                "Joe's Pizza Brooklyn NY president",
                "Joe's Pizza Brooklyn NY CEO",
            ]
        );
    }

    #[test]
    fn test_queries_ignore_id() {
        let a = LeadRow::new(1, "Acme", "Reno", "NV");
        let b = LeadRow::new("other", "Acme", "Reno", "NV");
        assert_eq!(SearchQueries::for_lead(&a), SearchQueries::for_lead(&b));
    }

    #[test]
    fn test_queries_with_blank_location() {
        let row = LeadRow::new(1, "Acme", "", "");
        let queries = SearchQueries::for_lead(&row);
        assert_eq!(queries.website, "Acme official website");
    }
}
