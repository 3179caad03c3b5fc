use crate::types::SimilarityScore;

/// Score for two lines that both contain no tokens.
pub const EMPTY_LINES_SIMILARITY: SimilarityScore = 100.0;

/// Score when exactly one of the lines contains no tokens.
pub const ONE_EMPTY_LINE_SIMILARITY: SimilarityScore = 0.0;

pub const MIN_SIMILARITY: SimilarityScore = 0.0;
pub const MAX_SIMILARITY: SimilarityScore = 100.0;

/// The only non-alphanumeric character allowed inside a token.
pub const TOKEN_APOSTROPHE: char = '\'';

pub const CSV_LINE_1_HEADER: &str = "Line 1";
pub const CSV_LINE_2_HEADER: &str = "Line 2";
