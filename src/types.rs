use std::collections::HashSet;

// Types listed here are either shared across multiple files and/or exposed via the library.

/// Represents a token as an owned `String`. Tokens are lowercased runs of ASCII letters,
/// digits and apostrophes extracted from a lyric line.
pub type Token = String;

/// Represents a borrowed view of a token as a `str`. This is used when ownership is not required.
pub type TokenRef = str;

/// The distinct tokens of a single line. Duplicates collapse; order is irrelevant.
pub type TokenSet = HashSet<Token>;

/// A percentage in the inclusive range `0.0..=100.0`. No rounding is applied.
pub type SimilarityScore = f64;

/// A single lyric line, as read from user input or a batch file.
pub type LyricLine = String;
