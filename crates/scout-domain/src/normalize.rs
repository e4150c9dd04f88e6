//! Cleanup of raw service output

use crate::DecisionMaker;

/// Maximum number of decision-makers kept per lead
pub const MAX_DECISION_MAKERS: usize = 2;

/// Trim an optional string, treating empty-after-trim as absent
///
/// # Examples
///
/// ```
/// use scout_domain::normalize::clean_optional;
///
/// assert_eq!(clean_optional(Some(" https://acme.com ")), Some("https://acme.com".to_string()));
/// assert_eq!(clean_optional(Some("   ")), None);
/// assert_eq!(clean_optional(None), None);
/// ```
pub fn clean_optional(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// Keep valid entries only, cap at [`MAX_DECISION_MAKERS`], trim what survives
///
/// Filtering happens before the cap, so an invalid first entry does not use
/// up one of the two slots.
pub fn normalize_decision_makers(input: &[DecisionMaker]) -> Vec<DecisionMaker> {
    input
        .iter()
        .filter(|dm| dm.is_valid())
        .take(MAX_DECISION_MAKERS)
        .map(DecisionMaker::trimmed)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dm(name: &str, title: &str, url: &str) -> DecisionMaker {
        DecisionMaker::new(name, title, url)
    }

    #[test]
    fn test_drops_invalid_entries() {
        let input = vec![
            dm("", "Owner", "https://a.example"),
            dm("Bo", "Founder", "https://b.example"),
        ];
        let out = normalize_decision_makers(&input);
        assert_eq!(out, vec![dm("Bo", "Founder", "https://b.example")]);
    }

    #[test]
    fn test_caps_after_filtering() {
        let input = vec![
            dm("  ", "Owner", "https://a.example"),
            dm("Bo", "Founder", "https://b.example"),
            dm("Cy", "CEO", "https://c.example"),
            dm("Di", "President", "https://d.example"),
        ];
        let out = normalize_decision_makers(&input);
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].name, "Bo");
        assert_eq!(out[1].name, "Cy");
    }

    #[test]
    fn test_trims_kept_entries() {
        let input = vec![dm(" Bo ", " Founder ", " https://b.example\n")];
        let out = normalize_decision_makers(&input);
        assert_eq!(out, vec![dm("Bo", "Founder", "https://b.example")]);
    }

    #[test]
    fn test_empty_input() {
        assert!(normalize_decision_makers(&[]).is_empty());
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn arb_decision_maker() -> impl Strategy<Value = DecisionMaker> {
        ("[ a-z]{0,6}", "[ A-Z]{0,6}", "[ a-z:/.]{0,10}")
            .prop_map(|(name, title, url)| DecisionMaker::new(name, title, url))
    }

    proptest! {
        /// Property: output never exceeds the cap and never holds an empty field
        #[test]
        fn test_normalized_entries_are_bounded_and_valid(
            input in prop::collection::vec(arb_decision_maker(), 0..8)
        ) {
            let out = normalize_decision_makers(&input);
            prop_assert!(out.len() <= MAX_DECISION_MAKERS);
            for entry in &out {
                prop_assert!(!entry.name.is_empty());
                prop_assert!(!entry.title.is_empty());
                prop_assert!(!entry.source_url.is_empty());
                prop_assert_eq!(entry.name.trim(), entry.name.as_str());
            }
        }
    }
}
