//! Hybrid orchestrator: cold-start branching, score blending, fallback.

use crate::catalog::{Catalog, Item};
use crate::error::{RecomendarError, Result};
use crate::features::FeatureSet;
use crate::preprocessing::MinMaxScaler;
use crate::primitives::Matrix;
use crate::recommend::{CollaborativeRecommender, ContentRecommender, Signal};
use crate::traits::Transformer;
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::HashMap;

/// Over-fetch factor for content candidates, so blending has enough mass.
const CANDIDATE_OVERFETCH: usize = 2;

/// Blend weights for a cold-start user with a query.
const QUERY_SIMILARITY_WEIGHT: f32 = 0.7;
const QUERY_POPULARITY_WEIGHT: f32 = 0.3;

/// Blend weights for a known user with a query (applied after min-max
/// normalization of each score column).
const COLLAB_WEIGHT: f32 = 0.5;
const CONTENT_WEIGHT: f32 = 0.3;
const POPULARITY_WEIGHT: f32 = 0.2;

/// A catalog item augmented with its final recommendation score.
#[derive(Debug, Clone, Serialize)]
pub struct Recommendation {
    /// The recommended item record
    pub item: Item,
    /// Final score for the branch that produced it
    pub score: f32,
}

/// Candidate row during warm-user blending. A score a recommender did not
/// produce stays absent until normalization, where it becomes 0.
struct Candidate {
    /// Position in the catalog items table
    idx: usize,
    collab: Option<f32>,
    content: f32,
}

/// The hybrid recommendation engine.
///
/// Owns an immutable catalog snapshot and the artifacts derived from it;
/// every recommendation call is a pure read, so one engine instance can
/// serve concurrent requests without locking. Rebuild the engine to pick up
/// catalog changes.
///
/// Branching over (user known?, query present?):
///
/// | user    | query | strategy                                            |
/// |---------|-------|-----------------------------------------------------|
/// | unknown | no    | weighted-rating (popularity) ranking                |
/// | unknown | yes   | content similarity blended with weighted rating     |
/// | known   | no    | collaborative neighbors, popularity fallback        |
/// | known   | yes   | collaborative + content + popularity, normalized    |
///
/// Every missing signal degrades to the next weaker one; only invalid
/// arguments produce errors.
#[allow(missing_debug_implementations)]
pub struct HybridRecommender {
    catalog: Catalog,
    features: FeatureSet,
    collaborative: CollaborativeRecommender,
    content: ContentRecommender,
}

impl HybridRecommender {
    /// Builds the engine from a catalog snapshot, deriving all features.
    ///
    /// # Errors
    ///
    /// Returns an error if feature construction fails.
    pub fn new(catalog: Catalog) -> Result<Self> {
        let features = FeatureSet::build(&catalog)?;
        Ok(Self {
            catalog,
            features,
            collaborative: CollaborativeRecommender::new(),
            content: ContentRecommender::new(),
        })
    }

    /// The derived feature artifacts.
    #[must_use]
    pub fn features(&self) -> &FeatureSet {
        &self.features
    }

    /// The underlying catalog snapshot.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Returns up to `k` recommendations for a user and optional query.
    ///
    /// Any user id without a row in the rating matrix is a cold-start user;
    /// a whitespace-only query counts as absent. "No data matched" is never
    /// an error; the engine falls back to the next weaker signal, ending at
    /// the popularity ranking.
    ///
    /// # Errors
    ///
    /// Returns [`RecomendarError::InvalidHyperparameter`] if `k` is 0.
    pub fn recommend(
        &self,
        user_id: u32,
        query: Option<&str>,
        k: usize,
    ) -> Result<Vec<Recommendation>> {
        if k == 0 {
            return Err(RecomendarError::InvalidHyperparameter {
                param: "k".to_string(),
                value: "0".to_string(),
                constraint: ">= 1".to_string(),
            });
        }

        let query = query.map(str::trim).filter(|q| !q.is_empty());
        let known = self.features.rating_matrix().contains_user(user_id);

        match (known, query) {
            (false, None) => Ok(self.popularity_ranking(k)),
            (false, Some(q)) => self.content_with_popularity(q, k),
            (true, None) => self.collaborative_only(user_id, k),
            (true, Some(q)) => self.blend_all_signals(user_id, q, k),
        }
    }

    /// Pure popularity fallback: items by weighted rating, descending.
    fn popularity_ranking(&self, k: usize) -> Vec<Recommendation> {
        let mut ranked: Vec<(usize, f32)> = self
            .features
            .weighted_ratings()
            .iter()
            .copied()
            .enumerate()
            .collect();
        ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
        ranked.truncate(k);

        ranked
            .into_iter()
            .map(|(idx, weighted)| Recommendation {
                item: self.catalog.items()[idx].clone(),
                score: weighted,
            })
            .collect()
    }

    /// Cold-start user with a query: raw similarity blended with the
    /// weighted rating. Similarity is already in [0, 1], so no
    /// normalization pass is needed here.
    fn content_with_popularity(&self, query: &str, k: usize) -> Result<Vec<Recommendation>> {
        let candidates = self
            .content
            .recommend(&self.features, query, CANDIDATE_OVERFETCH * k)?;
        if candidates.is_empty() {
            return Ok(self.popularity_ranking(k));
        }

        let mut blended: Vec<Recommendation> = candidates
            .iter()
            .filter_map(|c| {
                let idx = self.catalog.position(c.item_id)?;
                let weighted = self.features.weighted_ratings()[idx];
                Some(Recommendation {
                    item: self.catalog.items()[idx].clone(),
                    score: QUERY_SIMILARITY_WEIGHT * c.score + QUERY_POPULARITY_WEIGHT * weighted,
                })
            })
            .collect();

        blended.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
        blended.truncate(k);
        Ok(blended)
    }

    /// Known user, no query: collaborative signal with popularity fallback.
    fn collaborative_only(&self, user_id: u32, k: usize) -> Result<Vec<Recommendation>> {
        let items = match self
            .collaborative
            .recommend(self.features.rating_matrix(), user_id, k)
        {
            Signal::Unavailable => return Ok(self.popularity_ranking(k)),
            Signal::Ranked(items) => items,
        };

        // Candidate ids come from the ratings table and may have no catalog
        // row; those are dropped.
        let resolved: Vec<Recommendation> = items
            .iter()
            .filter_map(|c| {
                let idx = self.catalog.position(c.item_id)?;
                Some(Recommendation {
                    item: self.catalog.items()[idx].clone(),
                    score: c.score,
                })
            })
            .collect();

        if resolved.is_empty() {
            return Ok(self.popularity_ranking(k));
        }
        Ok(resolved)
    }

    /// Known user with a query: union of collaborative and content
    /// candidates, per-column min-max normalization, weighted blend.
    fn blend_all_signals(&self, user_id: u32, query: &str, k: usize) -> Result<Vec<Recommendation>> {
        let matrix = self.features.rating_matrix();

        let collab_items = match self.collaborative.recommend(matrix, user_id, k) {
            Signal::Ranked(items) => items,
            Signal::Unavailable => Vec::new(),
        };
        let content_items = self
            .content
            .recommend(&self.features, query, CANDIDATE_OVERFETCH * k)?;
        let rated = matrix.rated_items(user_id);

        // Ordered union: collaborative candidates first, then content-only
        // ones. Already-rated items and ids with no catalog row are dropped.
        let mut candidates: Vec<Candidate> = Vec::new();
        let mut by_id: HashMap<u32, usize> = HashMap::new();

        for c in &collab_items {
            if let Some(idx) = self.catalog.position(c.item_id) {
                by_id.insert(c.item_id, candidates.len());
                candidates.push(Candidate {
                    idx,
                    collab: Some(c.score),
                    content: 0.0,
                });
            }
        }
        for c in &content_items {
            if rated.contains(&c.item_id) {
                continue;
            }
            if let Some(&pos) = by_id.get(&c.item_id) {
                candidates[pos].content = c.score;
            } else if let Some(idx) = self.catalog.position(c.item_id) {
                by_id.insert(c.item_id, candidates.len());
                candidates.push(Candidate {
                    idx,
                    collab: None,
                    content: c.score,
                });
            }
        }

        if candidates.is_empty() {
            return Ok(self.popularity_ranking(k));
        }

        // Score columns: collaborative (absent -> 0), content, weighted.
        let mut data = Vec::with_capacity(candidates.len() * 3);
        for c in &candidates {
            data.push(c.collab.unwrap_or(0.0));
            data.push(c.content);
            data.push(self.features.weighted_ratings()[c.idx]);
        }
        let score_matrix = Matrix::from_vec(candidates.len(), 3, data)
            .map_err(RecomendarError::from)?;

        let mut scaler = MinMaxScaler::new();
        let normalized = scaler.fit_transform(&score_matrix)?;

        let mut blended: Vec<Recommendation> = candidates
            .iter()
            .enumerate()
            .map(|(row, c)| {
                let score = COLLAB_WEIGHT * normalized.get(row, 0)
                    + CONTENT_WEIGHT * normalized.get(row, 1)
                    + POPULARITY_WEIGHT * normalized.get(row, 2);
                Recommendation {
                    item: self.catalog.items()[c.idx].clone(),
                    score,
                }
            })
            .collect();

        blended.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
        blended.truncate(k);
        Ok(blended)
    }
}

#[cfg(test)]
#[path = "hybrid_tests.rs"]
mod tests;
