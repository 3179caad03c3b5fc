use crate::constants::TOKEN_APOSTROPHE;
use crate::types::{Token, TokenSet};
use log::trace;

#[derive(Copy, Clone, Debug, Default)]
pub struct Tokenizer;

impl Tokenizer {
    /// Configuration for lyric line parsing
    pub fn lyric_line_parser() -> Self {
        Self
    }

    /// Splits the text into lowercased tokens.
    ///
    /// A token is a maximal run of ASCII letters, ASCII digits and apostrophes. Every other
    /// character, including all non-ASCII characters, acts as a separator and is discarded.
    pub fn tokenize(self, text: &str) -> Vec<Token> {
        let mut tokens = Vec::new();
        let mut current = String::new();

        for ch in text.chars() {
            if Self::is_token_char(ch) {
                current.push(ch.to_ascii_lowercase());
            } else if !current.is_empty() {
                tokens.push(std::mem::take(&mut current));
            }
        }

        if !current.is_empty() {
            tokens.push(current);
        }

        trace!("Tokenized {:?} into {:?}", text, tokens);

        tokens
    }

    /// Same as `tokenize`, with an absent line treated as the empty string.
    pub fn tokenize_optional(self, text: Option<&str>) -> Vec<Token> {
        self.tokenize(text.unwrap_or_default())
    }

    /// Collects the distinct tokens of the text.
    pub fn tokenize_to_set(self, text: &str) -> TokenSet {
        self.tokenize(text).into_iter().collect()
    }

    fn is_token_char(ch: char) -> bool {
        ch.is_ascii_alphanumeric() || ch == TOKEN_APOSTROPHE
    }
}
