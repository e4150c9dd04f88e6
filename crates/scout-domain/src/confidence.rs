//! Confidence scoring
//!
//! Confidence is additive over three independent pieces of evidence:
//!
//! | Evidence | Points |
//! |----------|--------|
//! | Official website found | 35 |
//! | Instagram link found on the website's own HTML | 25 |
//! | Each valid decision-maker (max 2) | 20 |
//!
//! Search-derived Instagram evidence earns nothing. The sum is clamped to 100.

use crate::normalize::normalize_decision_makers;
use crate::{DecisionMaker, InstagramSource};

/// Points for a found website
pub const WEBSITE_WEIGHT: u32 = 35;

/// Points for an on-site Instagram link
pub const INSTAGRAM_HTML_WEIGHT: u32 = 25;

/// Points per valid decision-maker
pub const DECISION_MAKER_WEIGHT: u32 = 20;

/// Upper bound of the score
pub const MAX_CONFIDENCE: u8 = 100;

/// Compute the confidence score for a set of findings
///
/// `decision_makers` is re-normalized here, so passing raw service output
/// scores the same as passing already-cleaned entries.
///
/// # Examples
///
/// ```
/// use scout_domain::confidence::compute_confidence;
/// use scout_domain::InstagramSource;
///
/// assert_eq!(compute_confidence(false, None, &[]), 0);
/// assert_eq!(compute_confidence(true, Some(InstagramSource::Search), &[]), 35);
/// assert_eq!(compute_confidence(true, Some(InstagramSource::WebsiteHtml), &[]), 60);
/// ```
pub fn compute_confidence(
    has_website: bool,
    instagram_source: Option<InstagramSource>,
    decision_makers: &[DecisionMaker],
) -> u8 {
    let mut score = 0u32;

    if has_website {
        score += WEBSITE_WEIGHT;
    }

    if instagram_source == Some(InstagramSource::WebsiteHtml) {
        score += INSTAGRAM_HTML_WEIGHT;
    }

    score += normalize_decision_makers(decision_makers).len() as u32 * DECISION_MAKER_WEIGHT;

    score.min(u32::from(MAX_CONFIDENCE)) as u8
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn arb_source() -> impl Strategy<Value = Option<InstagramSource>> {
        prop_oneof![
            Just(None),
            Just(Some(InstagramSource::WebsiteHtml)),
            Just(Some(InstagramSource::Search)),
        ]
    }

    proptest! {
        /// Property: confidence always lands in [0, 100]
        #[test]
        fn test_confidence_in_range(
            has_website: bool,
            source in arb_source(),
            names in prop::collection::vec("[ a-z]{0,5}", 0..6),
        ) {
            let dms: Vec<_> = names
                .into_iter()
                .map(|n| DecisionMaker::new(n, "Owner", "https://x.example"))
                .collect();
            let score = compute_confidence(has_website, source, &dms);
            prop_assert!(score <= MAX_CONFIDENCE);
        }
    }
}
