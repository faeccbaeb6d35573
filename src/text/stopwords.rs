//! Stop words filtering for text preprocessing.
//!
//! Stop words are common words ("the", "is", "at") that carry little semantic
//! meaning; removing them keeps the TF-IDF vocabulary focused on content
//! terms. Matching is case-insensitive.

use std::collections::HashSet;

/// Stop words filter backed by a `HashSet` for O(1) lookup.
///
/// # Examples
///
/// ```
/// use recomendar::text::stopwords::StopWordsFilter;
///
/// let filter = StopWordsFilter::english();
/// assert!(filter.is_stop_word("the"));
/// assert!(filter.is_stop_word("THE"));
/// assert!(!filter.is_stop_word("beach"));
/// ```
#[derive(Debug, Clone)]
pub struct StopWordsFilter {
    /// Set of stop words (stored in lowercase for case-insensitive matching)
    stop_words: HashSet<String>,
}

impl StopWordsFilter {
    /// Create a new stop words filter with custom stop words.
    ///
    /// Words are converted to lowercase.
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let stop_words = words
            .into_iter()
            .map(|s| s.as_ref().to_lowercase())
            .collect();

        Self { stop_words }
    }

    /// Create a filter with the default English stop words.
    ///
    /// # Examples
    ///
    /// ```
    /// use recomendar::text::stopwords::StopWordsFilter;
    ///
    /// let filter = StopWordsFilter::english();
    /// let tokens = vec!["the", "alpine", "trails", "are", "scenic"];
    /// let filtered = filter.filter(&tokens);
    /// assert_eq!(filtered, vec!["alpine", "trails", "scenic"]);
    /// ```
    #[must_use]
    pub fn english() -> Self {
        Self::new(ENGLISH_STOP_WORDS)
    }

    /// Filter stop words from a list of tokens, preserving original case.
    pub fn filter<S: AsRef<str>>(&self, tokens: &[S]) -> Vec<String> {
        tokens
            .iter()
            .map(|t| t.as_ref().to_string())
            .filter(|t| !self.is_stop_word(t))
            .collect()
    }

    /// Check if a word is a stop word (case-insensitive).
    #[must_use]
    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(&word.to_lowercase())
    }

    /// Get the number of stop words in the filter.
    #[must_use]
    pub fn len(&self) -> usize {
        self.stop_words.len()
    }

    /// Check if the filter is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stop_words.is_empty()
    }
}

/// Default English stop words.
///
/// Based on the NLTK and scikit-learn stop word lists: articles, pronouns,
/// prepositions, conjunctions, common verbs and adverbs, question words.
pub const ENGLISH_STOP_WORDS: &[&str] = &build_stop_words();

/// Category-based stop word definitions. Each tuple: (category, words).
const STOP_WORD_CATEGORIES: &[(&str, &[&str])] = &[
    ("articles", &["a", "an", "the"]),
    ("pronouns", &[
        "i", "me", "my", "myself", "we", "our", "ours", "ourselves",
        "you", "your", "yours", "yourself", "yourselves",
        "he", "him", "his", "himself", "she", "her", "hers", "herself",
        "it", "its", "itself", "they", "them", "their", "theirs", "themselves",
    ]),
    ("questions", &["what", "which", "who", "whom", "whose", "why", "when", "where", "how"]),
    ("prepositions", &[
        "about", "above", "across", "after", "against", "along", "among", "around",
        "at", "before", "behind", "below", "beneath", "beside", "between", "beyond",
        "by", "down", "during", "for", "from", "in", "inside", "into", "near",
        "of", "off", "on", "onto", "out", "outside", "over", "through", "throughout",
        "to", "toward", "under", "underneath", "until", "up", "upon",
        "with", "within", "without",
    ]),
    ("conjunctions", &[
        "and", "as", "because", "but", "if", "or", "since", "so",
        "than", "that", "though", "unless", "while",
    ]),
    ("verbs", &[
        "am", "is", "are", "was", "were", "be", "been", "being",
        "have", "has", "had", "having", "do", "does", "did", "doing",
        "would", "should", "could", "ought", "can", "may", "might", "must", "will", "shall",
    ]),
    ("adverbs_adjectives", &[
        "all", "any", "both", "each", "every", "few", "more", "most", "much",
        "neither", "no", "none", "not", "one", "other", "same", "several",
        "some", "such", "very", "too", "only", "own", "then", "there",
        "these", "this", "those", "just", "now", "here",
    ]),
    ("common", &[
        "again", "also", "another", "back", "even", "ever",
        "get", "give", "go", "got", "made", "make", "say", "see", "take", "way",
    ]),
];

/// Total number of stop words across all categories.
const TOTAL_STOP_WORDS: usize = count_total_stop_words();

/// Count total stop words at compile time.
const fn count_total_stop_words() -> usize {
    let mut total = 0;
    let mut i = 0;
    while i < STOP_WORD_CATEGORIES.len() {
        total += STOP_WORD_CATEGORIES[i].1.len();
        i += 1;
    }
    total
}

/// Flatten all category words into a single array at compile time.
const fn build_stop_words() -> [&'static str; TOTAL_STOP_WORDS] {
    let mut result = [""; TOTAL_STOP_WORDS];
    let mut idx = 0;
    let mut cat = 0;
    while cat < STOP_WORD_CATEGORIES.len() {
        let words = STOP_WORD_CATEGORIES[cat].1;
        let mut w = 0;
        while w < words.len() {
            result[idx] = words[w];
            idx += 1;
            w += 1;
        }
        cat += 1;
    }
    result
}

#[cfg(test)]
#[path = "stopwords_tests.rs"]
mod tests;
