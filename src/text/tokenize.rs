//! Tokenization strategies for text preprocessing.
//!
//! Two tokenizers are provided:
//! - [`WhitespaceTokenizer`]: splits on Unicode whitespace, keeps punctuation
//! - [`WordTokenizer`]: splits on non-alphanumeric boundaries, drops punctuation
//!
//! Both implement the [`Tokenizer`] trait.

use crate::error::RecomendarError;
use crate::text::Tokenizer;

/// Whitespace tokenizer that splits text on Unicode whitespace characters.
///
/// The simplest tokenizer; punctuation stays attached to words.
///
/// # Examples
///
/// ```
/// use recomendar::text::{Tokenizer, WhitespaceTokenizer};
///
/// let tokenizer = WhitespaceTokenizer::new();
/// let tokens = tokenizer.tokenize("Hello, world!").expect("tokenize should succeed");
/// assert_eq!(tokens, vec!["Hello,", "world!"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct WhitespaceTokenizer;

impl WhitespaceTokenizer {
    /// Create a new whitespace tokenizer.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Tokenizer for WhitespaceTokenizer {
    fn tokenize(&self, text: &str) -> Result<Vec<String>, RecomendarError> {
        let tokens: Vec<String> = text.split_whitespace().map(ToString::to_string).collect();
        Ok(tokens)
    }
}

/// Word tokenizer that splits on non-alphanumeric boundaries.
///
/// Punctuation and other separators are dropped entirely, so `"beach, sunny"`
/// and `"beach sunny"` tokenize identically. This is the tokenizer used for
/// catalog item text and queries.
///
/// # Examples
///
/// ```
/// use recomendar::text::{Tokenizer, WordTokenizer};
///
/// let tokenizer = WordTokenizer::new();
///
/// let tokens = tokenizer.tokenize("surf & sand (family-friendly)").expect("tokenize should succeed");
/// assert_eq!(tokens, vec!["surf", "sand", "family", "friendly"]);
///
/// // Empty and whitespace-only input yields no tokens, never an error
/// let tokens = tokenizer.tokenize("   ").expect("tokenize should succeed");
/// assert!(tokens.is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct WordTokenizer;

impl WordTokenizer {
    /// Create a new word tokenizer.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Tokenizer for WordTokenizer {
    fn tokenize(&self, text: &str) -> Result<Vec<String>, RecomendarError> {
        let tokens: Vec<String> = text
            .split(|c: char| !c.is_alphanumeric())
            .filter(|s| !s.is_empty())
            .map(ToString::to_string)
            .collect();
        Ok(tokens)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whitespace_basic() {
        let tokenizer = WhitespaceTokenizer::new();
        let tokens = tokenizer.tokenize("foo   bar\nbaz").expect("tokenize");
        assert_eq!(tokens, vec!["foo", "bar", "baz"]);
    }

    #[test]
    fn test_whitespace_empty() {
        let tokenizer = WhitespaceTokenizer::new();
        let tokens = tokenizer.tokenize("").expect("tokenize");
        assert!(tokens.is_empty());
    }

    #[test]
    fn test_word_drops_punctuation() {
        let tokenizer = WordTokenizer::new();
        let tokens = tokenizer.tokenize("beach, sunny; surf!").expect("tokenize");
        assert_eq!(tokens, vec!["beach", "sunny", "surf"]);
    }

    #[test]
    fn test_word_keeps_alphanumerics() {
        let tokenizer = WordTokenizer::new();
        let tokens = tokenizer.tokenize("route66 motel").expect("tokenize");
        assert_eq!(tokens, vec!["route66", "motel"]);
    }

    #[test]
    fn test_word_whitespace_only() {
        let tokenizer = WordTokenizer::new();
        let tokens = tokenizer.tokenize(" \t \n ").expect("tokenize");
        assert!(tokens.is_empty());
    }
}
