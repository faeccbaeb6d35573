//! Collaborative filtering via user nearest-neighbor search.

use crate::features::RatingMatrix;
use crate::recommend::{ScoredItem, Signal};
use std::cmp::Ordering;

/// Default number of neighbor users consulted per recommendation.
const DEFAULT_NEIGHBORS: usize = 5;

/// Nearest-neighbor collaborative recommender.
///
/// Treats each rating-matrix row as a point in item-rating space, finds the
/// nearest other users by cosine distance (brute force), and scores candidate
/// items by the mean rating those neighbors gave them.
///
/// # Examples
///
/// ```
/// use recomendar::catalog::Rating;
/// use recomendar::features::RatingMatrix;
/// use recomendar::recommend::{CollaborativeRecommender, Signal};
///
/// let ratings = vec![
///     Rating { user_id: 1, item_id: 10, rating: 5.0 },
///     Rating { user_id: 2, item_id: 10, rating: 5.0 },
///     Rating { user_id: 2, item_id: 20, rating: 4.0 },
/// ];
/// let matrix = RatingMatrix::from_ratings(&ratings);
///
/// let recommender = CollaborativeRecommender::new();
/// match recommender.recommend(&matrix, 1, 5) {
///     Signal::Ranked(items) => assert_eq!(items[0].item_id, 20),
///     Signal::Unavailable => unreachable!("user 1 is in the matrix"),
/// }
/// ```
#[derive(Debug, Clone)]
pub struct CollaborativeRecommender {
    /// Number of neighbor users to consult
    n_neighbors: usize,
}

impl Default for CollaborativeRecommender {
    fn default() -> Self {
        Self::new()
    }
}

impl CollaborativeRecommender {
    /// Creates a recommender consulting 5 neighbors.
    #[must_use]
    pub fn new() -> Self {
        Self {
            n_neighbors: DEFAULT_NEIGHBORS,
        }
    }

    /// Sets the number of neighbors to consult.
    #[must_use]
    pub fn with_neighbors(mut self, n_neighbors: usize) -> Self {
        self.n_neighbors = n_neighbors.max(1);
        self
    }

    /// Recommends up to `k` items for a user.
    ///
    /// Returns [`Signal::Unavailable`] when the user has no row in the
    /// matrix; this is the expected cold-start outcome, not an error. Items the
    /// user already rated above zero are never returned. Ties keep
    /// ascending-item-id column order (stable sort).
    #[must_use]
    pub fn recommend(&self, ratings: &RatingMatrix, user_id: u32, k: usize) -> Signal {
        let Some(target) = ratings.row_index(user_id) else {
            return Signal::Unavailable;
        };
        let target_row = ratings.row_slice(target);

        // Cosine distance to every other row; stable ascending sort keeps
        // row order on ties.
        let mut distances: Vec<(usize, f32)> = (0..ratings.n_users())
            .filter(|&row| row != target)
            .map(|row| (row, cosine_distance(target_row, ratings.row_slice(row))))
            .collect();
        distances.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(Ordering::Equal));

        let neighbors: Vec<usize> = distances
            .iter()
            .take(self.n_neighbors)
            .map(|&(row, _)| row)
            .collect();
        if neighbors.is_empty() {
            return Signal::Ranked(Vec::new());
        }

        let rated = ratings.rated_items(user_id);

        let mut scored: Vec<ScoredItem> = ratings
            .item_ids()
            .iter()
            .enumerate()
            .filter(|&(_, &item_id)| !rated.contains(&item_id))
            .map(|(col, &item_id)| {
                let sum: f32 = neighbors.iter().map(|&row| ratings.get(row, col)).sum();
                ScoredItem {
                    item_id,
                    score: sum / neighbors.len() as f32,
                }
            })
            .collect();

        scored.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
        scored.truncate(k);
        Signal::Ranked(scored)
    }
}

/// Cosine distance between two rating rows.
///
/// A zero row is orthogonal to everything by convention, giving the maximum
/// distance of 1.
fn cosine_distance(a: &[f32], b: &[f32]) -> f32 {
    let dot: f32 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        return 1.0;
    }
    1.0 - dot / (norm_a * norm_b)
}
