use crate::constants::{MAX_SIMILARITY, MIN_SIMILARITY};
use crate::types::SimilarityScore;

/// Clamps a score into `0.0..=100.0`. `NaN` maps to `0.0`.
pub fn clamp_similarity(score: SimilarityScore) -> SimilarityScore {
    if score.is_nan() {
        return MIN_SIMILARITY;
    }

    score.clamp(MIN_SIMILARITY, MAX_SIMILARITY)
}
