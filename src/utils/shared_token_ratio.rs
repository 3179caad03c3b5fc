use crate::constants::{EMPTY_LINES_SIMILARITY, MAX_SIMILARITY, ONE_EMPTY_LINE_SIMILARITY};
use crate::types::{SimilarityScore, TokenSet};
use log::debug;

/// Percentage of the larger set's tokens that are shared with the other set.
///
/// Unlike a Jaccard index, the denominator is `max(|set1|, |set2|)` rather than the size of the
/// union.
pub fn shared_token_ratio(set1: &TokenSet, set2: &TokenSet) -> SimilarityScore {
    match (set1.is_empty(), set2.is_empty()) {
        (true, true) => return EMPTY_LINES_SIMILARITY,
        (true, false) | (false, true) => return ONE_EMPTY_LINE_SIMILARITY,
        (false, false) => {}
    }

    let intersection_size = set1.intersection(set2).count();
    let denominator = set1.len().max(set2.len());

    debug!(
        "Shared tokens: {} of max({}, {})",
        intersection_size,
        set1.len(),
        set2.len()
    );

    if denominator == 0 {
        return ONE_EMPTY_LINE_SIMILARITY;
    }

    (intersection_size as f64 / denominator as f64) * MAX_SIMILARITY
}
