#[cfg(doctest)]
doc_comment::doctest!("../README.md");

mod config;
pub use config::DEFAULT_SIMILARITY_COLOR_THRESHOLDS;
mod constants;
pub mod models;
pub use models::{
    classify_similarity, classify_similarity_with_custom_config, Error, LyricLinePair,
    RiffScoreboard, SimilarityColor, SimilarityColorThresholds, Tokenizer,
};
pub mod types;
mod utils;
pub use types::{LyricLine, SimilarityScore, Token, TokenRef, TokenSet};
pub use utils::{read_lyric_line_pairs_from_path, read_lyric_line_pairs_from_string};

/// Computes the percentage of shared words between two lines.
///
/// Both lines are tokenized and reduced to sets of distinct tokens. The score is the size of
/// the intersection divided by the size of the larger set, times 100. Two lines without any
/// tokens score `100.0`; a line without tokens scored against one with tokens scores `0.0`.
///
/// ```
/// use lyric_similarity::compute_similarity;
///
/// assert_eq!(compute_similarity("cat cat cat", "cat dog"), 50.0);
/// ```
pub fn compute_similarity(line1: &str, line2: &str) -> SimilarityScore {
    let tokenizer = Tokenizer::lyric_line_parser();

    let set1 = tokenizer.tokenize_to_set(line1);
    let set2 = tokenizer.tokenize_to_set(line2);

    utils::shared_token_ratio(&set1, &set2)
}

/// Same as `compute_similarity`, treating an absent line as the empty string.
pub fn compute_similarity_optional(line1: Option<&str>, line2: Option<&str>) -> SimilarityScore {
    compute_similarity(line1.unwrap_or_default(), line2.unwrap_or_default())
}

/// Scores each pair, preserving input order.
pub fn score_lyric_line_pairs(pairs: &[LyricLinePair]) -> Vec<SimilarityScore> {
    pairs.iter().map(LyricLinePair::similarity).collect()
}
