pub mod error;
pub use error::Error;

pub mod lyric_line_pair;
pub use lyric_line_pair::LyricLinePair;

pub mod riff_scoreboard;
pub use riff_scoreboard::RiffScoreboard;

pub mod similarity_color;
pub use similarity_color::{
    classify_similarity, classify_similarity_with_custom_config, SimilarityColor,
    SimilarityColorThresholds,
};

pub mod tokenizer;
pub use tokenizer::Tokenizer;
