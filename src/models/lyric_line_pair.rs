use crate::compute_similarity;
use crate::types::{LyricLine, SimilarityScore};

/// Two lyric lines to be compared, e.g. one row of a batch file.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LyricLinePair {
    pub line1: LyricLine,
    pub line2: LyricLine,
}

impl LyricLinePair {
    pub fn new(line1: &str, line2: &str) -> Self {
        Self {
            line1: line1.to_string(),
            line2: line2.to_string(),
        }
    }

    pub fn similarity(&self) -> SimilarityScore {
        compute_similarity(&self.line1, &self.line2)
    }
}
