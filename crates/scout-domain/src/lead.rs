//! Lead module - the business record targeted for enrichment

use std::fmt;

/// Caller-assigned identity of a lead
///
/// Leads arrive from spreadsheets and CRMs where the key is sometimes a
/// numeric row id and sometimes an opaque string. Both forms are kept as-is
/// so status writes go back to the caller under the exact key they supplied.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LeadId {
    /// Integer key (e.g., a database row id)
    Number(i64),

    /// Opaque string key
    Text(String),
}

impl LeadId {
    /// Whether this id is numeric
    pub fn is_numeric(&self) -> bool {
        matches!(self, LeadId::Number(_))
    }

    /// Parse an id from user input
    ///
    /// Anything that parses as an `i64` becomes [`LeadId::Number`], everything
    /// else is kept verbatim as [`LeadId::Text`].
    ///
    /// # Examples
    ///
    /// ```
    /// use scout_domain::LeadId;
    ///
    /// assert_eq!(LeadId::parse("42"), LeadId::Number(42));
    /// assert_eq!(LeadId::parse("acme-01"), LeadId::Text("acme-01".to_string()));
    /// ```
    pub fn parse(s: &str) -> Self {
        match s.trim().parse::<i64>() {
            Ok(n) => LeadId::Number(n),
            Err(_) => LeadId::Text(s.to_string()),
        }
    }
}

impl fmt::Display for LeadId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LeadId::Number(n) => write!(f, "{}", n),
            LeadId::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<i64> for LeadId {
    fn from(n: i64) -> Self {
        LeadId::Number(n)
    }
}

impl From<i32> for LeadId {
    fn from(n: i32) -> Self {
        LeadId::Number(i64::from(n))
    }
}

impl From<&str> for LeadId {
    fn from(s: &str) -> Self {
        LeadId::Text(s.to_string())
    }
}

impl From<String> for LeadId {
    fn from(s: String) -> Self {
        LeadId::Text(s)
    }
}

/// A business record to enrich
///
/// Input only: the pipeline reads it and never mutates it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeadRow {
    /// Stable caller-assigned identity
    pub id: LeadId,

    /// Business name as entered
    pub business_name: String,

    /// City as entered
    pub city: String,

    /// State or region as entered
    pub state: String,
}

impl LeadRow {
    /// Create a new lead row
    pub fn new(
        id: impl Into<LeadId>,
        business_name: impl Into<String>,
        city: impl Into<String>,
        state: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            business_name: business_name.into(),
            city: city.into(),
            state: state.into(),
        }
    }

    /// The identifying fields joined by single spaces, trimmed at both ends
    ///
    /// This is the stable key every search query is derived from.
    pub fn location(&self) -> String {
        format!("{} {} {}", self.business_name, self.city, self.state)
            .trim()
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_joins_fields() {
        let row = LeadRow::new(1, "Blue Bottle Coffee", "Oakland", "CA");
        assert_eq!(row.location(), "Blue Bottle Coffee Oakland CA");
    }

    #[test]
    fn test_location_trims_outer_whitespace_only() {
        let row = LeadRow::new(1, "  Acme ", "Austin", "TX  ");
        // Inner spacing is kept verbatim, only the ends are trimmed
        assert_eq!(row.location(), "Acme  Austin TX");
    }

    #[test]
    fn test_location_with_missing_fields() {
        let row = LeadRow::new(1, "Acme", "", "");
        assert_eq!(row.location(), "Acme");
    }

    #[test]
    fn test_lead_id_display() {
        assert_eq!(LeadId::Number(7).to_string(), "7");
        assert_eq!(LeadId::from("row-7").to_string(), "row-7");
    }

    #[test]
    fn test_lead_id_parse() {
        assert_eq!(LeadId::parse("-3"), LeadId::Number(-3));
        assert!(LeadId::parse("12").is_numeric());
        assert!(!LeadId::parse("12a").is_numeric());
    }
}
