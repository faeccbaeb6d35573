//! Content-based recommendation from free-text queries.

use crate::error::Result;
use crate::features::FeatureSet;
use crate::recommend::ScoredItem;
use crate::text::similarity::linear_kernel;
use std::cmp::Ordering;

/// Content-based recommender over the fitted TF-IDF space.
///
/// Projects a query into the item vector space and ranks items by the linear
/// kernel (equal to cosine similarity on the L2-normalized vectors). Items
/// with zero similarity are dropped, so a query with no vocabulary overlap
/// yields an empty result, the "content signal unavailable" outcome.
///
/// # Examples
///
/// ```
/// use recomendar::catalog::{Catalog, Item};
/// use recomendar::features::FeatureSet;
/// use recomendar::recommend::ContentRecommender;
///
/// let items = vec![
///     Item {
///         item_id: 1,
///         category: "beach".to_string(),
///         tags: "sunny surf".to_string(),
///         description: String::new(),
///         count: 10,
///         p_rating: 4.0,
///     },
///     Item {
///         item_id: 2,
///         category: "mountain".to_string(),
///         tags: "alpine hiking".to_string(),
///         description: String::new(),
///         count: 10,
///         p_rating: 4.0,
///     },
/// ];
/// let catalog = Catalog::new(items, Vec::new(), Vec::new()).expect("valid catalog");
/// let features = FeatureSet::build(&catalog).expect("build");
///
/// let recommender = ContentRecommender::new();
/// let results = recommender.recommend(&features, "sunny beach", 5).expect("recommend");
/// assert_eq!(results[0].item_id, 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ContentRecommender;

impl ContentRecommender {
    /// Creates a content recommender.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Recommends up to `n` items matching the query text.
    ///
    /// Out-of-vocabulary query terms contribute zero weight; an empty or
    /// whitespace-only query yields an empty result, never an error. Ties
    /// keep catalog item order (stable sort).
    ///
    /// # Errors
    ///
    /// Returns an error only for structural failures inside the vectorizer;
    /// "no matching items" is an empty `Vec`.
    pub fn recommend(
        &self,
        features: &FeatureSet,
        query: &str,
        n: usize,
    ) -> Result<Vec<ScoredItem>> {
        // No usable text features at all: the signal is unavailable.
        if features.vocabulary_size() == 0 {
            return Ok(Vec::new());
        }

        let query_vec = features.vectorizer().transform(&[query])?.row(0);
        let similarities = linear_kernel(&query_vec, features.item_vectors())?;

        let mut scored: Vec<ScoredItem> = similarities
            .iter()
            .enumerate()
            .filter(|&(_, &sim)| sim > 0.0)
            .map(|(idx, &sim)| ScoredItem {
                item_id: features.item_ids()[idx],
                score: sim as f32,
            })
            .collect();

        scored.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
        scored.truncate(n);
        Ok(scored)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, Item};

    fn item(item_id: u32, category: &str, tags: &str) -> Item {
        Item {
            item_id,
            category: category.to_string(),
            tags: tags.to_string(),
            description: String::new(),
            count: 10,
            p_rating: 4.0,
        }
    }

    fn sample_features() -> FeatureSet {
        let items = vec![
            item(1, "beach", "sunny surf sand"),
            item(2, "mountain", "alpine hiking trails"),
            item(3, "city", "museum nightlife food"),
        ];
        let catalog = Catalog::new(items, Vec::new(), Vec::new()).expect("valid catalog");
        FeatureSet::build(&catalog).expect("build")
    }

    #[test]
    fn test_query_matches_most_similar_item() {
        let features = sample_features();
        let recommender = ContentRecommender::new();

        let results = recommender
            .recommend(&features, "sunny beach surf", 5)
            .expect("recommend");
        assert!(!results.is_empty());
        assert_eq!(results[0].item_id, 1);
    }

    #[test]
    fn test_scores_sorted_descending() {
        let features = sample_features();
        let recommender = ContentRecommender::new();

        let results = recommender
            .recommend(&features, "alpine hiking museum", 5)
            .expect("recommend");
        for pair in results.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
    }

    #[test]
    fn test_no_vocabulary_overlap_yields_empty() {
        let features = sample_features();
        let recommender = ContentRecommender::new();

        let results = recommender
            .recommend(&features, "zzzz999", 5)
            .expect("recommend");
        assert!(results.is_empty());
    }

    #[test]
    fn test_empty_query_yields_empty_not_error() {
        let features = sample_features();
        let recommender = ContentRecommender::new();

        assert!(recommender.recommend(&features, "", 5).expect("recommend").is_empty());
        assert!(recommender
            .recommend(&features, "   \t", 5)
            .expect("recommend")
            .is_empty());
    }

    #[test]
    fn test_respects_n() {
        let features = sample_features();
        let recommender = ContentRecommender::new();

        let results = recommender
            .recommend(&features, "beach mountain city", 2)
            .expect("recommend");
        assert!(results.len() <= 2);
    }

    #[test]
    fn test_deterministic_for_identical_query() {
        let features = sample_features();
        let recommender = ContentRecommender::new();

        let a = recommender
            .recommend(&features, "sunny trails", 5)
            .expect("recommend");
        let b = recommender
            .recommend(&features, "sunny trails", 5)
            .expect("recommend");
        assert_eq!(a, b);
    }

    #[test]
    fn test_empty_vocabulary_yields_empty() {
        // All item text is stop words.
        let items = vec![item(1, "the", "and of"), item(2, "a", "is are")];
        let catalog = Catalog::new(items, Vec::new(), Vec::new()).expect("valid catalog");
        let features = FeatureSet::build(&catalog).expect("build");
        let recommender = ContentRecommender::new();

        let results = recommender
            .recommend(&features, "anything", 5)
            .expect("recommend");
        assert!(results.is_empty());
    }
}
