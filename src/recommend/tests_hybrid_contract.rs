//! Property-based contracts for the recommendation pipeline: weighted-rating
//! convexity, normalization bounds, seen-item exclusion, and k limits hold
//! for arbitrary inputs, not just the hand-picked fixtures.

use crate::catalog::{Catalog, Item, Rating};
use crate::features::{FeatureSet, RatingMatrix};
use crate::preprocessing::MinMaxScaler;
use crate::primitives::Matrix;
use crate::recommend::{CollaborativeRecommender, HybridRecommender, Signal};
use crate::traits::Transformer;
use proptest::prelude::*;

fn build_items(specs: &[(u32, f32)]) -> Vec<Item> {
    specs
        .iter()
        .enumerate()
        .map(|(i, &(count, p_rating))| Item {
            item_id: i as u32 + 1,
            category: format!("category{i}"),
            tags: String::new(),
            description: String::new(),
            count,
            p_rating,
        })
        .collect()
}

proptest! {
    #[test]
    fn weighted_rating_stays_between_own_mean_and_global_mean(
        specs in proptest::collection::vec((0u32..10_000, 0.5f32..5.0), 1..20)
    ) {
        let items = build_items(&specs);
        let catalog = Catalog::new(items.clone(), Vec::new(), Vec::new()).expect("valid catalog");
        let features = FeatureSet::build(&catalog).expect("build");

        let c = features.global_mean();
        for (it, &w) in items.iter().zip(features.weighted_ratings()) {
            let lo = it.p_rating.min(c) - 1e-3;
            let hi = it.p_rating.max(c) + 1e-3;
            prop_assert!(
                (lo..=hi).contains(&w),
                "weighted {} outside convex hull [{}, {}]", w, lo, hi
            );
        }
    }

    #[test]
    fn minmax_output_spans_unit_interval(
        values in proptest::collection::vec(-1e3f32..1e3, 2..50)
    ) {
        let n = values.len();
        let column = Matrix::from_vec(n, 1, values.clone()).expect("valid matrix");
        let mut scaler = MinMaxScaler::new();
        let scaled = scaler.fit_transform(&column).expect("fit_transform");

        let mut lo = f32::INFINITY;
        let mut hi = f32::NEG_INFINITY;
        for i in 0..n {
            let v = scaled.get(i, 0);
            prop_assert!((0.0..=1.0).contains(&v), "scaled value {} out of range", v);
            lo = lo.min(v);
            hi = hi.max(v);
        }

        let input_min = values.iter().copied().fold(f32::INFINITY, f32::min);
        let input_max = values.iter().copied().fold(f32::NEG_INFINITY, f32::max);
        if (input_max - input_min).abs() > 1e-10 {
            prop_assert!(lo.abs() < 1e-6, "minimum maps to {}, not 0", lo);
            prop_assert!((hi - 1.0).abs() < 1e-6, "maximum maps to {}, not 1", hi);
        } else {
            prop_assert!(hi.abs() < 1e-6, "constant column maps to {}, not 0", hi);
        }
    }

    #[test]
    fn collaborative_never_returns_rated_items(
        rating_specs in proptest::collection::vec((1u32..6, 1u32..9, 0.5f32..5.0), 1..40),
        k in 1usize..10
    ) {
        let ratings: Vec<Rating> = rating_specs
            .iter()
            .map(|&(user_id, item_id, rating)| Rating { user_id, item_id, rating })
            .collect();
        let matrix = RatingMatrix::from_ratings(&ratings);
        let recommender = CollaborativeRecommender::new();

        for &user_id in matrix.user_ids() {
            let rated = matrix.rated_items(user_id);
            match recommender.recommend(&matrix, user_id, k) {
                Signal::Unavailable => prop_assert!(false, "user {} has a row", user_id),
                Signal::Ranked(items) => {
                    prop_assert!(items.len() <= k);
                    for item in &items {
                        prop_assert!(
                            !rated.contains(&item.item_id),
                            "user {} got already-rated item {}", user_id, item.item_id
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn engine_never_exceeds_k(
        specs in proptest::collection::vec((0u32..500, 1.0f32..5.0), 1..8),
        user_id in 0u32..8,
        k in 1usize..12,
        with_query in any::<bool>()
    ) {
        let items = build_items(&specs);
        let n_items = items.len();
        let ratings = vec![
            Rating { user_id: 1, item_id: 1, rating: 4.0 },
            Rating { user_id: 2, item_id: 1, rating: 5.0 },
        ];
        let catalog = Catalog::new(items, ratings, Vec::new()).expect("valid catalog");
        let engine = HybridRecommender::new(catalog).expect("engine");

        let query = if with_query { Some("category1 category2") } else { None };
        let recs = engine.recommend(user_id, query, k).expect("recommend");

        prop_assert!(recs.len() <= k);
        prop_assert!(recs.len() <= n_items);
        for r in &recs {
            prop_assert!(r.score.is_finite(), "non-finite score {}", r.score);
        }
    }
}
