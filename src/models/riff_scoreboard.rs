use crate::compute_similarity;
use crate::types::SimilarityScore;
use crate::utils::clamp_similarity;
use log::{debug, warn};

/// Running total of similarity scores across the rounds of a riff-off game.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RiffScoreboard {
    total_score: SimilarityScore,
    rounds_played: usize,
}

impl RiffScoreboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scores the pair of lines and adds the result to the total.
    pub fn record_round(&mut self, line1: &str, line2: &str) -> SimilarityScore {
        let score = compute_similarity(line1, line2);
        self.record_score(score)
    }

    /// Adds an already computed score. Out-of-range values are clamped.
    pub fn record_score(&mut self, score: SimilarityScore) -> SimilarityScore {
        let clamped = clamp_similarity(score);
        if clamped != score {
            warn!("Clamped out-of-range similarity score {} to {}", score, clamped);
        }

        self.total_score += clamped;
        self.rounds_played += 1;

        debug!(
            "Round {} scored {:.2} (total {:.2})",
            self.rounds_played, clamped, self.total_score
        );

        clamped
    }

    pub fn total_score(&self) -> SimilarityScore {
        self.total_score
    }

    pub fn rounds_played(&self) -> usize {
        self.rounds_played
    }

    /// `None` until at least one round has been recorded.
    pub fn average_score(&self) -> Option<SimilarityScore> {
        if self.rounds_played == 0 {
            return None;
        }

        Some(self.total_score / self.rounds_played as f64)
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
