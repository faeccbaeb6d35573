//! Text vectorization: counts and TF-IDF weighting.
//!
//! [`CountVectorizer`] learns a vocabulary (optionally with n-grams and stop
//! word removal) and produces term-count matrices. [`TfidfVectorizer`] layers
//! smoothed inverse-document-frequency weighting and L2 row normalization on
//! top, so dot products between its output rows are cosine similarities.

use crate::error::RecomendarError;
use crate::primitives::Matrix;
use crate::text::stopwords::StopWordsFilter;
use crate::text::Tokenizer;
use std::collections::HashMap;

/// Count vectorizer that converts text documents to a term-count matrix.
///
/// # Examples
///
/// ```
/// use recomendar::text::vectorize::CountVectorizer;
/// use recomendar::text::tokenize::WordTokenizer;
///
/// let docs = vec!["hello world", "hello rust"];
///
/// let mut vectorizer = CountVectorizer::new()
///     .with_tokenizer(Box::new(WordTokenizer::new()));
///
/// let matrix = vectorizer.fit_transform(&docs).expect("fit_transform should succeed");
/// assert_eq!(matrix.n_rows(), 2);
/// ```
#[allow(missing_debug_implementations)]
pub struct CountVectorizer {
    /// Tokenizer used to split documents
    tokenizer: Option<Box<dyn Tokenizer>>,
    /// Learned term -> column mapping
    vocabulary: HashMap<String, usize>,
    /// Convert tokens to lowercase before counting
    lowercase: bool,
    /// (min_n, max_n) n-gram sizes; adjacent tokens are joined with '_'
    ngram_range: (usize, usize),
    /// Optional stop word filter applied before n-gram generation
    stop_words: Option<StopWordsFilter>,
}

impl CountVectorizer {
    /// Create a new `CountVectorizer`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            tokenizer: None,
            vocabulary: HashMap::new(),
            lowercase: true,
            ngram_range: (1, 1),
            stop_words: None,
        }
    }

    /// Set the tokenizer to use.
    #[must_use]
    pub fn with_tokenizer(mut self, tokenizer: Box<dyn Tokenizer>) -> Self {
        self.tokenizer = Some(tokenizer);
        self
    }

    /// Set whether to convert to lowercase (default true).
    #[must_use]
    pub fn with_lowercase(mut self, lowercase: bool) -> Self {
        self.lowercase = lowercase;
        self
    }

    /// Set n-gram range for feature extraction.
    ///
    /// # Examples
    ///
    /// ```
    /// use recomendar::text::vectorize::CountVectorizer;
    ///
    /// // Extract unigrams and bigrams
    /// let vectorizer = CountVectorizer::new().with_ngram_range(1, 2);
    /// ```
    #[must_use]
    pub fn with_ngram_range(mut self, min_n: usize, max_n: usize) -> Self {
        self.ngram_range = (min_n.max(1), max_n.max(1));
        self
    }

    /// Use English stop words (removes common words like "the", "and", "is").
    #[must_use]
    pub fn with_stop_words_english(mut self) -> Self {
        self.stop_words = Some(StopWordsFilter::english());
        self
    }

    /// Use custom stop words.
    #[must_use]
    pub fn with_stop_words(mut self, words: &[&str]) -> Self {
        self.stop_words = Some(StopWordsFilter::new(words));
        self
    }

    /// Tokenize one document: lowercase and drop stop words.
    fn preprocess(&self, tokenizer: &dyn Tokenizer, text: &str) -> Result<Vec<String>, RecomendarError> {
        let tokens = tokenizer.tokenize(text)?;
        let tokens: Vec<String> = tokens
            .into_iter()
            .map(|t| if self.lowercase { t.to_lowercase() } else { t })
            .filter(|t| {
                self.stop_words
                    .as_ref()
                    .map_or(true, |sw| !sw.is_stop_word(t))
            })
            .collect();
        Ok(tokens)
    }

    /// Learn vocabulary from documents.
    ///
    /// # Errors
    ///
    /// Returns an error if `documents` is empty or no tokenizer is set.
    pub fn fit<S: AsRef<str>>(&mut self, documents: &[S]) -> Result<(), RecomendarError> {
        if documents.is_empty() {
            return Err(RecomendarError::Other(
                "Cannot fit on empty documents".to_string(),
            ));
        }

        let tokenizer = self.tokenizer.as_ref().ok_or_else(|| {
            RecomendarError::Other("Tokenizer not set. Use with_tokenizer()".to_string())
        })?;

        let mut term_freq: HashMap<String, usize> = HashMap::new();

        for doc in documents {
            let tokens = self.preprocess(tokenizer.as_ref(), doc.as_ref())?;

            for n in self.ngram_range.0..=self.ngram_range.1 {
                for ngram in tokens.windows(n) {
                    let term = ngram.join("_");
                    *term_freq.entry(term).or_insert(0) += 1;
                }
            }
        }

        // Deterministic column order: frequency descending, then term ascending
        let mut sorted_terms: Vec<(String, usize)> = term_freq.into_iter().collect();
        sorted_terms.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

        self.vocabulary = sorted_terms
            .into_iter()
            .enumerate()
            .map(|(idx, (term, _))| (term, idx))
            .collect();

        Ok(())
    }

    /// Transform documents to a count matrix using the learned vocabulary.
    ///
    /// Out-of-vocabulary terms contribute nothing; a document with no known
    /// terms produces an all-zero row.
    ///
    /// # Errors
    ///
    /// Returns an error if `documents` is empty, no tokenizer is set, or the
    /// vocabulary is empty (not fitted).
    pub fn transform<S: AsRef<str>>(&self, documents: &[S]) -> Result<Matrix<f64>, RecomendarError> {
        if documents.is_empty() {
            return Err(RecomendarError::Other(
                "Cannot transform empty documents".to_string(),
            ));
        }

        if self.vocabulary.is_empty() {
            return Err(RecomendarError::Other(
                "Vocabulary is empty. Call fit() first".to_string(),
            ));
        }

        let tokenizer = self
            .tokenizer
            .as_ref()
            .ok_or_else(|| RecomendarError::Other("Tokenizer not set".to_string()))?;

        let n_docs = documents.len();
        let vocab_size = self.vocabulary.len();
        let mut data = vec![0.0; n_docs * vocab_size];

        for (doc_idx, doc) in documents.iter().enumerate() {
            let tokens = self.preprocess(tokenizer.as_ref(), doc.as_ref())?;

            for n in self.ngram_range.0..=self.ngram_range.1 {
                for ngram in tokens.windows(n) {
                    let term = ngram.join("_");
                    if let Some(&term_idx) = self.vocabulary.get(&term) {
                        data[doc_idx * vocab_size + term_idx] += 1.0;
                    }
                }
            }
        }

        Matrix::from_vec(n_docs, vocab_size, data)
            .map_err(|e: &str| RecomendarError::Other(e.to_string()))
    }

    /// Learn vocabulary from documents and transform to a count matrix.
    ///
    /// # Errors
    ///
    /// Returns an error if vectorization fails.
    pub fn fit_transform<S: AsRef<str>>(
        &mut self,
        documents: &[S],
    ) -> Result<Matrix<f64>, RecomendarError> {
        self.fit(documents)?;
        self.transform(documents)
    }

    /// Get the learned vocabulary.
    #[must_use]
    pub fn vocabulary(&self) -> &HashMap<String, usize> {
        &self.vocabulary
    }

    /// Get the vocabulary size.
    #[must_use]
    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }
}

impl Default for CountVectorizer {
    fn default() -> Self {
        Self::new()
    }
}

/// TF-IDF vectorizer that converts text to a TF-IDF weighted matrix.
///
/// **Formula:**
/// ```text
/// tfidf(t, d) = tf(t, d) × idf(t)
/// tf(t, d)    = count of term t in document d
/// idf(t)      = ln((1 + N) / (1 + df(t))) + 1       (smoothed)
/// ```
/// where N = total documents and df(t) = documents containing term t. Each
/// output row is L2-normalized, so the linear kernel between rows equals
/// cosine similarity.
///
/// # Examples
///
/// ```
/// use recomendar::text::vectorize::TfidfVectorizer;
/// use recomendar::text::tokenize::WordTokenizer;
///
/// let docs = vec![
///     "the cat sat on the mat",
///     "the dog sat on the log",
/// ];
///
/// let mut vectorizer = TfidfVectorizer::new()
///     .with_tokenizer(Box::new(WordTokenizer::new()));
///
/// let matrix = vectorizer.fit_transform(&docs).expect("fit_transform should succeed");
/// assert_eq!(matrix.n_rows(), 2);
/// ```
#[allow(missing_debug_implementations)]
pub struct TfidfVectorizer {
    /// Count vectorizer for term frequencies
    count_vectorizer: CountVectorizer,
    /// Inverse document frequencies, indexed by vocabulary column
    idf_values: Vec<f64>,
}

impl TfidfVectorizer {
    /// Create a new `TfidfVectorizer`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            count_vectorizer: CountVectorizer::new(),
            idf_values: Vec::new(),
        }
    }

    /// Set the tokenizer to use.
    #[must_use]
    pub fn with_tokenizer(mut self, tokenizer: Box<dyn Tokenizer>) -> Self {
        self.count_vectorizer = self.count_vectorizer.with_tokenizer(tokenizer);
        self
    }

    /// Set n-gram range for feature extraction.
    #[must_use]
    pub fn with_ngram_range(mut self, min_n: usize, max_n: usize) -> Self {
        self.count_vectorizer = self.count_vectorizer.with_ngram_range(min_n, max_n);
        self
    }

    /// Use English stop words.
    #[must_use]
    pub fn with_stop_words_english(mut self) -> Self {
        self.count_vectorizer = self.count_vectorizer.with_stop_words_english();
        self
    }

    /// Learn vocabulary and IDF weights from documents.
    ///
    /// A corpus whose every term is filtered out (empty vocabulary) is not an
    /// error; `vocabulary_size()` is 0 and the content signal is simply
    /// unavailable downstream.
    ///
    /// # Errors
    ///
    /// Returns an error if `documents` is empty or no tokenizer is set.
    pub fn fit<S: AsRef<str>>(&mut self, documents: &[S]) -> Result<(), RecomendarError> {
        self.count_vectorizer.fit(documents)?;

        if self.count_vectorizer.vocabulary_size() == 0 {
            self.idf_values.clear();
            return Ok(());
        }

        let counts = self.count_vectorizer.transform(documents)?;
        let (n_docs, vocab_size) = counts.shape();

        let mut doc_freq = vec![0usize; vocab_size];
        for i in 0..n_docs {
            for (j, df) in doc_freq.iter_mut().enumerate() {
                if counts.get(i, j) > 0.0 {
                    *df += 1;
                }
            }
        }

        self.idf_values = doc_freq
            .iter()
            .map(|&df| ((1 + n_docs) as f64 / (1 + df) as f64).ln() + 1.0)
            .collect();

        Ok(())
    }

    /// Transform documents into the fitted TF-IDF space.
    ///
    /// Out-of-vocabulary terms contribute zero weight; an empty or
    /// whitespace-only document yields an all-zero row, never an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the vectorizer is not fitted or `documents` is
    /// empty.
    pub fn transform<S: AsRef<str>>(&self, documents: &[S]) -> Result<Matrix<f64>, RecomendarError> {
        let mut tfidf = self.count_vectorizer.transform(documents)?;
        let (n_docs, vocab_size) = tfidf.shape();

        for i in 0..n_docs {
            for j in 0..vocab_size {
                tfidf.set(i, j, tfidf.get(i, j) * self.idf_values[j]);
            }

            // L2-normalize the row; zero rows stay zero
            let norm: f64 = (0..vocab_size)
                .map(|j| tfidf.get(i, j) * tfidf.get(i, j))
                .sum::<f64>()
                .sqrt();
            if norm > 0.0 {
                for j in 0..vocab_size {
                    tfidf.set(i, j, tfidf.get(i, j) / norm);
                }
            }
        }

        Ok(tfidf)
    }

    /// Learn vocabulary and IDF weights, then transform in one step.
    ///
    /// # Errors
    ///
    /// Returns an error if vectorization fails.
    pub fn fit_transform<S: AsRef<str>>(
        &mut self,
        documents: &[S],
    ) -> Result<Matrix<f64>, RecomendarError> {
        self.fit(documents)?;
        self.transform(documents)
    }

    /// Get the learned vocabulary.
    #[must_use]
    pub fn vocabulary(&self) -> &HashMap<String, usize> {
        self.count_vectorizer.vocabulary()
    }

    /// Get the vocabulary size.
    #[must_use]
    pub fn vocabulary_size(&self) -> usize {
        self.count_vectorizer.vocabulary_size()
    }

    /// Get the learned IDF values.
    #[must_use]
    pub fn idf_values(&self) -> &[f64] {
        &self.idf_values
    }
}

impl Default for TfidfVectorizer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "vectorize_tests.rs"]
mod tests;
