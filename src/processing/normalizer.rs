//! Text normalization into comparable tokens

/// A lowercase, whitespace-delimited word unit
pub type Token = String;

/// Lowercases and splits text on whitespace.
///
/// Punctuation is left attached to its word, so `python,` and `python` are
/// different tokens. No stemming is applied. This is stricter than a
/// CountVectorizer-style word pattern, which would strip punctuation and drop
/// one-character words; resumes listing `Python,` score lower here.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextNormalizer;

impl TextNormalizer {
    pub fn new() -> Self {
        Self
    }

    /// Tokenize text into an ordered sequence of lowercase tokens
    pub fn tokenize(&self, text: &str) -> Vec<Token> {
        text.to_lowercase()
            .split_whitespace()
            .map(str::to_string)
            .collect()
    }
}
