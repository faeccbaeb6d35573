//! Text processing for content-based recommendation.
//!
//! This module provides the pipeline that turns item text into comparable
//! feature vectors:
//! - Tokenization ([`tokenize`])
//! - Stop word filtering ([`stopwords`])
//! - TF-IDF vectorization with n-gram support ([`vectorize`])
//! - Similarity kernels ([`similarity`])

pub mod similarity;
pub mod stopwords;
pub mod tokenize;
pub mod vectorize;

pub use similarity::{cosine_similarity, linear_kernel};
pub use stopwords::{StopWordsFilter, ENGLISH_STOP_WORDS};
pub use tokenize::{WhitespaceTokenizer, WordTokenizer};
pub use vectorize::{CountVectorizer, TfidfVectorizer};

use crate::error::RecomendarError;

/// Trait for tokenizers that split text into tokens.
///
/// # Examples
///
/// ```
/// use recomendar::text::{Tokenizer, WordTokenizer};
///
/// let tokenizer = WordTokenizer::new();
/// let tokens = tokenizer.tokenize("beach, sunny!").expect("tokenize should succeed");
/// assert_eq!(tokens, vec!["beach", "sunny"]);
/// ```
pub trait Tokenizer {
    /// Split text into tokens.
    ///
    /// # Errors
    ///
    /// Returns an error if tokenization fails.
    fn tokenize(&self, text: &str) -> Result<Vec<String>, RecomendarError>;
}
