use crate::config::DEFAULT_SIMILARITY_COLOR_THRESHOLDS;
use crate::types::SimilarityScore;
use std::fmt;

/// Upper bounds (inclusive) for each color band. Anything above `yellow_max` is green.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SimilarityColorThresholds {
    pub red_max: SimilarityScore,
    pub orange_max: SimilarityScore,
    pub yellow_max: SimilarityScore,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SimilarityColor {
    /// No score is available yet (e.g. only one line selected).
    Neutral,
    Red,
    Orange,
    Yellow,
    Green,
}

impl SimilarityColor {
    pub fn as_str(&self) -> &'static str {
        match self {
            SimilarityColor::Neutral => "neutral",
            SimilarityColor::Red => "red",
            SimilarityColor::Orange => "orange",
            SimilarityColor::Yellow => "yellow",
            SimilarityColor::Green => "green",
        }
    }
}

impl fmt::Display for SimilarityColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

pub fn classify_similarity(similarity: Option<SimilarityScore>) -> SimilarityColor {
    classify_similarity_with_custom_config(DEFAULT_SIMILARITY_COLOR_THRESHOLDS, similarity)
}

pub fn classify_similarity_with_custom_config(
    thresholds: &SimilarityColorThresholds,
    similarity: Option<SimilarityScore>,
) -> SimilarityColor {
    match similarity {
        None => SimilarityColor::Neutral,
        Some(score) if score <= thresholds.red_max => SimilarityColor::Red,
        Some(score) if score <= thresholds.orange_max => SimilarityColor::Orange,
        Some(score) if score <= thresholds.yellow_max => SimilarityColor::Yellow,
        Some(_) => SimilarityColor::Green,
    }
}
