//! Feature builder: derived artifacts computed once at engine startup.
//!
//! From the catalog snapshot this module derives:
//! - the user × item [`RatingMatrix`],
//! - one TF-IDF vector per item over `category + tags + description`
//!   (unigrams + bigrams, English stop words removed),
//! - a popularity-damped weighted rating per item.
//!
//! All three are immutable after [`FeatureSet::build`]; a catalog change
//! requires a full rebuild, never an incremental update.

use crate::catalog::{Catalog, Item, Rating};
use crate::error::{RecomendarError, Result};
use crate::primitives::{Matrix, Vector};
use crate::stats::DescriptiveStats;
use crate::text::tokenize::WordTokenizer;
use crate::text::vectorize::TfidfVectorizer;
use std::collections::{HashMap, HashSet};

/// Popularity percentile used as the weighted-rating threshold `m`.
const POPULARITY_QUANTILE: f64 = 0.85;

/// Dense user × item rating matrix.
///
/// Rows are distinct user ids (ascending), columns are distinct item ids
/// (ascending), both taken from the ratings table; a cell holds the rating or
/// 0.0 when absent. Ascending id order makes construction deterministic.
#[derive(Debug, Clone)]
pub struct RatingMatrix {
    matrix: Matrix<f32>,
    user_ids: Vec<u32>,
    item_ids: Vec<u32>,
    user_index: HashMap<u32, usize>,
    item_index: HashMap<u32, usize>,
}

impl RatingMatrix {
    /// Builds the matrix from rating records.
    ///
    /// Duplicate (user, item) pairs are assumed pre-cleaned; when present the
    /// last record wins.
    #[must_use]
    pub fn from_ratings(ratings: &[Rating]) -> Self {
        let mut user_ids: Vec<u32> = ratings
            .iter()
            .map(|r| r.user_id)
            .collect::<HashSet<_>>()
            .into_iter()
            .collect();
        user_ids.sort_unstable();

        let mut item_ids: Vec<u32> = ratings
            .iter()
            .map(|r| r.item_id)
            .collect::<HashSet<_>>()
            .into_iter()
            .collect();
        item_ids.sort_unstable();

        let user_index: HashMap<u32, usize> = user_ids
            .iter()
            .enumerate()
            .map(|(idx, &id)| (id, idx))
            .collect();
        let item_index: HashMap<u32, usize> = item_ids
            .iter()
            .enumerate()
            .map(|(idx, &id)| (id, idx))
            .collect();

        let mut matrix = Matrix::<f32>::zeros(user_ids.len(), item_ids.len());
        for r in ratings {
            matrix.set(user_index[&r.user_id], item_index[&r.item_id], r.rating);
        }

        Self {
            matrix,
            user_ids,
            item_ids,
            user_index,
            item_index,
        }
    }

    /// Number of matrix rows (distinct users).
    #[must_use]
    pub fn n_users(&self) -> usize {
        self.user_ids.len()
    }

    /// Number of matrix columns (distinct items).
    #[must_use]
    pub fn n_items(&self) -> usize {
        self.item_ids.len()
    }

    /// Distinct user ids, ascending (row order).
    #[must_use]
    pub fn user_ids(&self) -> &[u32] {
        &self.user_ids
    }

    /// Distinct item ids, ascending (column order).
    #[must_use]
    pub fn item_ids(&self) -> &[u32] {
        &self.item_ids
    }

    /// Whether the user has a row in the matrix.
    #[must_use]
    pub fn contains_user(&self, user_id: u32) -> bool {
        self.user_index.contains_key(&user_id)
    }

    /// Row index of a user, if present.
    #[must_use]
    pub fn row_index(&self, user_id: u32) -> Option<usize> {
        self.user_index.get(&user_id).copied()
    }

    /// A user's rating row as a borrowed slice.
    ///
    /// # Panics
    ///
    /// Panics if the row index is out of bounds.
    #[must_use]
    pub fn row_slice(&self, row_idx: usize) -> &[f32] {
        self.matrix.row_slice(row_idx)
    }

    /// Rating at (row, column).
    ///
    /// # Panics
    ///
    /// Panics if indices are out of bounds.
    #[must_use]
    pub fn get(&self, row_idx: usize, col_idx: usize) -> f32 {
        self.matrix.get(row_idx, col_idx)
    }

    /// Item ids the user has rated above zero. Empty for unknown users.
    #[must_use]
    pub fn rated_items(&self, user_id: u32) -> HashSet<u32> {
        let Some(row_idx) = self.row_index(user_id) else {
            return HashSet::new();
        };
        self.row_slice(row_idx)
            .iter()
            .enumerate()
            .filter(|&(_, &rating)| rating > 0.0)
            .map(|(col, _)| self.item_ids[col])
            .collect()
    }
}

/// Popularity-damped weighted rating.
///
/// `w = (count / (count + m)) * p_rating + (m / (m + count)) * C`
///
/// A convex combination of the item's own mean and the global mean `C`:
/// as `count -> inf` it approaches `p_rating`, as `count -> 0` it approaches
/// `C`. When `count + m == 0` the item has no popularity evidence at all and
/// `w = C`.
fn weighted_rating(count: f32, p_rating: f32, m: f32, global_mean: f32) -> f32 {
    let denom = count + m;
    if denom <= 0.0 {
        return global_mean;
    }
    (count / denom) * p_rating + (m / denom) * global_mean
}

/// All derived artifacts, built once from a catalog snapshot.
#[allow(missing_debug_implementations)]
pub struct FeatureSet {
    rating_matrix: RatingMatrix,
    vectorizer: TfidfVectorizer,
    /// Item ids in catalog order, parallel to `item_vectors` rows and
    /// `weighted` entries
    item_ids: Vec<u32>,
    item_vectors: Matrix<f64>,
    weighted: Vec<f32>,
    global_mean: f32,
    popularity_threshold: f32,
}

impl FeatureSet {
    /// Derives the rating matrix, TF-IDF item vectors and weighted ratings.
    ///
    /// Deterministic given identical input tables. If stop-word filtering
    /// leaves an empty vocabulary the item vectors are an n×0 matrix and the
    /// content signal is simply unavailable downstream.
    ///
    /// # Errors
    ///
    /// Returns an error if vectorization fails structurally; an empty
    /// catalog is rejected earlier by [`Catalog::new`].
    pub fn build(catalog: &Catalog) -> Result<Self> {
        let rating_matrix = RatingMatrix::from_ratings(catalog.ratings());

        let documents: Vec<String> = catalog
            .items()
            .iter()
            .map(Item::feature_text)
            .collect();

        let mut vectorizer = TfidfVectorizer::new()
            .with_tokenizer(Box::new(WordTokenizer::new()))
            .with_stop_words_english()
            .with_ngram_range(1, 2);
        vectorizer.fit(&documents)?;

        let item_vectors = if vectorizer.vocabulary_size() == 0 {
            Matrix::<f64>::zeros(documents.len(), 0)
        } else {
            vectorizer.transform(&documents)?
        };

        let p_ratings =
            Vector::from_vec(catalog.items().iter().map(|it| it.p_rating).collect());
        let global_mean = DescriptiveStats::new(&p_ratings)
            .mean()
            .map_err(RecomendarError::from)?;

        let counts =
            Vector::from_vec(catalog.items().iter().map(|it| it.count as f32).collect());
        let popularity_threshold = DescriptiveStats::new(&counts)
            .quantile(POPULARITY_QUANTILE)
            .map_err(RecomendarError::from)?;

        let weighted = catalog
            .items()
            .iter()
            .map(|it| {
                weighted_rating(it.count as f32, it.p_rating, popularity_threshold, global_mean)
            })
            .collect();

        let item_ids = catalog.items().iter().map(|it| it.item_id).collect();

        Ok(Self {
            rating_matrix,
            vectorizer,
            item_ids,
            item_vectors,
            weighted,
            global_mean,
            popularity_threshold,
        })
    }

    /// The user × item rating matrix.
    #[must_use]
    pub fn rating_matrix(&self) -> &RatingMatrix {
        &self.rating_matrix
    }

    /// The fitted TF-IDF vectorizer (for projecting queries).
    #[must_use]
    pub fn vectorizer(&self) -> &TfidfVectorizer {
        &self.vectorizer
    }

    /// TF-IDF vectors, one row per catalog item.
    #[must_use]
    pub fn item_vectors(&self) -> &Matrix<f64> {
        &self.item_vectors
    }

    /// Item ids in catalog order, parallel to the vector rows.
    #[must_use]
    pub fn item_ids(&self) -> &[u32] {
        &self.item_ids
    }

    /// Weighted ratings in catalog order.
    #[must_use]
    pub fn weighted_ratings(&self) -> &[f32] {
        &self.weighted
    }

    /// TF-IDF vocabulary size (0 means no usable text features).
    #[must_use]
    pub fn vocabulary_size(&self) -> usize {
        self.vectorizer.vocabulary_size()
    }

    /// Global mean prior rating `C`.
    #[must_use]
    pub fn global_mean(&self) -> f32 {
        self.global_mean
    }

    /// Popularity threshold `m` (85th percentile of counts).
    #[must_use]
    pub fn popularity_threshold(&self) -> f32 {
        self.popularity_threshold
    }
}

#[cfg(test)]
#[path = "features_tests.rs"]
mod tests;
