pub mod clamp_similarity;
pub use clamp_similarity::clamp_similarity;

pub mod read_lyric_line_pairs;
pub use read_lyric_line_pairs::{
    read_lyric_line_pairs_from_path, read_lyric_line_pairs_from_string,
};

pub mod shared_token_ratio;
pub use shared_token_ratio::shared_token_ratio;
