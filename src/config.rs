use crate::models::SimilarityColorThresholds;

pub const DEFAULT_SIMILARITY_COLOR_THRESHOLDS: &SimilarityColorThresholds =
    &SimilarityColorThresholds {
        red_max: 25.0,
        orange_max: 50.0,
        yellow_max: 75.0,
    };
