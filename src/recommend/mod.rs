//! Recommendation engine.
//!
//! Three cooperating recommenders over the precomputed [`crate::features`]
//! artifacts:
//!
//! - [`CollaborativeRecommender`]: nearest-neighbor search over the rating
//!   matrix (what similar users liked)
//! - [`ContentRecommender`]: TF-IDF similarity between a free-text query and
//!   item text
//! - [`HybridRecommender`]: branches on cold-start vs warm-start, blends the
//!   available signals, and falls back to popularity ranking when a signal is
//!   missing
//!
//! # Quick Start
//!
//! ```
//! use recomendar::catalog::{Catalog, Item, Rating};
//! use recomendar::recommend::HybridRecommender;
//!
//! let items = vec![
//!     Item {
//!         item_id: 1,
//!         category: "beach".to_string(),
//!         tags: "sunny surf".to_string(),
//!         description: "white sand and warm water".to_string(),
//!         count: 120,
//!         p_rating: 4.5,
//!     },
//!     Item {
//!         item_id: 2,
//!         category: "mountain".to_string(),
//!         tags: "alpine hiking".to_string(),
//!         description: "quiet trails".to_string(),
//!         count: 40,
//!         p_rating: 4.8,
//!     },
//! ];
//! let ratings = vec![Rating { user_id: 7, item_id: 1, rating: 5.0 }];
//!
//! let catalog = Catalog::new(items, ratings, Vec::new()).expect("valid catalog");
//! let engine = HybridRecommender::new(catalog).expect("engine should build");
//!
//! // Cold-start user with a query: content similarity blended with popularity.
//! let recs = engine.recommend(99, Some("sunny beach"), 5).expect("recommend should succeed");
//! assert_eq!(recs[0].item.item_id, 1);
//! ```

mod collaborative;
mod content_based;
mod hybrid;

pub use collaborative::CollaborativeRecommender;
pub use content_based::ContentRecommender;
pub use hybrid::{HybridRecommender, Recommendation};

/// One recommended item with its score at the current pipeline stage.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredItem {
    /// Item identifier
    pub item_id: u32,
    /// Stage-specific score (neighbor mean, similarity, or blended)
    pub score: f32,
}

/// Outcome of a single recommender, with lookup misses as explicit values.
///
/// `Unavailable` means the signal cannot be computed at all (e.g. the user
/// has no row in the rating matrix); `Ranked` with an empty list means the
/// signal ran but produced nothing. Both degrade to a weaker signal in the
/// orchestrator; neither is an error.
#[derive(Debug, Clone, PartialEq)]
pub enum Signal {
    /// Ranked recommendations, best first
    Ranked(Vec<ScoredItem>),
    /// The signal cannot be computed for this input
    Unavailable,
}

#[cfg(test)]
#[path = "tests_hybrid_contract.rs"]
mod tests_hybrid_contract;
