use super::*;
use crate::catalog::Rating;

fn item(item_id: u32, category: &str, tags: &str, count: u32, p_rating: f32) -> Item {
    Item {
        item_id,
        category: category.to_string(),
        tags: tags.to_string(),
        description: String::new(),
        count,
        p_rating,
    }
}

fn rating(user_id: u32, item_id: u32, value: f32) -> Rating {
    Rating {
        user_id,
        item_id,
        rating: value,
    }
}

/// Three items with distinct text; weighted ratings order them 1 > 2 > 3
/// (item 2's low count pulls its 5.0 own mean toward the 4.17 global mean).
fn sample_engine() -> HybridRecommender {
    let items = vec![
        item(1, "beach", "sunny surf sand", 100, 4.5),
        item(2, "mountain", "alpine hiking trails", 5, 5.0),
        item(3, "city", "museum nightlife", 50, 3.0),
    ];
    let ratings = vec![
        rating(10, 1, 5.0),
        rating(10, 2, 4.0),
        rating(20, 1, 5.0),
        rating(20, 2, 4.0),
        rating(20, 3, 5.0),
        rating(30, 3, 1.0),
    ];
    let catalog = Catalog::new(items, ratings, Vec::new()).expect("valid catalog");
    HybridRecommender::new(catalog).expect("engine should build")
}

fn ids(recs: &[Recommendation]) -> Vec<u32> {
    recs.iter().map(|r| r.item.item_id).collect()
}

#[test]
fn test_new_user_no_query_ranks_by_weighted_rating() {
    let engine = sample_engine();
    let recs = engine.recommend(99, None, 5).expect("recommend");

    assert_eq!(ids(&recs), vec![1, 2, 3]);
    // Scores are the weighted ratings themselves, descending.
    assert!(recs[0].score > recs[1].score);
    assert!(recs[1].score > recs[2].score);
}

#[test]
fn test_new_user_no_query_respects_k() {
    let engine = sample_engine();
    let recs = engine.recommend(99, None, 2).expect("recommend");
    assert_eq!(ids(&recs), vec![1, 2]);
}

#[test]
fn test_new_user_with_query_blends_similarity_and_popularity() {
    let engine = sample_engine();
    let recs = engine.recommend(99, Some("alpine hiking"), 5).expect("recommend");

    // Only item 2 overlaps the query vocabulary.
    assert_eq!(ids(&recs), vec![2]);
    let weighted = engine.features().weighted_ratings()[1];
    // combined = 0.7 * similarity + 0.3 * weighted, similarity in (0, 1]
    assert!(recs[0].score > 0.3 * weighted);
    assert!(recs[0].score <= 0.7 + 0.3 * weighted + 1e-5);
}

#[test]
fn test_new_user_query_without_overlap_falls_back_to_popularity() {
    let engine = sample_engine();
    let recs = engine.recommend(99, Some("zzzz999"), 5).expect("recommend");
    assert_eq!(ids(&recs), vec![1, 2, 3]);
}

#[test]
fn test_whitespace_query_treated_as_absent() {
    let engine = sample_engine();
    let with_blank = engine.recommend(99, Some("   "), 3).expect("recommend");
    let without = engine.recommend(99, None, 3).expect("recommend");
    assert_eq!(ids(&with_blank), ids(&without));
}

#[test]
fn test_known_user_no_query_uses_collaborative_signal() {
    let engine = sample_engine();
    let recs = engine.recommend(10, None, 5).expect("recommend");

    // User 10's neighbors (20, 30) rated item 3 at 5.0 and 1.0.
    assert_eq!(ids(&recs), vec![3]);
    assert!((recs[0].score - 3.0).abs() < 1e-6);
}

#[test]
fn test_known_user_who_rated_everything_falls_back_to_popularity() {
    let engine = sample_engine();
    let recs = engine.recommend(20, None, 5).expect("recommend");
    assert_eq!(ids(&recs), vec![1, 2, 3]);
}

#[test]
fn test_known_user_with_query_blends_all_three_signals() {
    let engine = sample_engine();
    let recs = engine.recommend(30, Some("sunny surf"), 5).expect("recommend");

    // Candidates: item 1 (top collaborative + content match) and item 2
    // (collaborative only). Item 1 maxes every normalized column.
    assert_eq!(ids(&recs), vec![1, 2]);
    assert!((recs[0].score - 1.0).abs() < 1e-6);
    assert!(recs[1].score.abs() < 1e-6);
}

#[test]
fn test_known_user_with_query_never_returns_rated_items() {
    let engine = sample_engine();
    let recs = engine.recommend(30, Some("museum nightlife"), 5).expect("recommend");

    // User 30 already rated item 3; the content match on it must be
    // excluded, leaving the collaborative candidates.
    assert!(!ids(&recs).contains(&3));
}

#[test]
fn test_known_user_single_candidate_normalizes_to_zero() {
    let engine = sample_engine();
    let recs = engine.recommend(10, Some("museum nightlife"), 5).expect("recommend");

    // One candidate means every score column is constant and maps to 0.
    assert_eq!(ids(&recs), vec![3]);
    assert!(recs[0].score.abs() < 1e-6);
}

#[test]
fn test_blended_scores_sorted_descending_within_unit_interval() {
    let engine = sample_engine();
    let recs = engine.recommend(30, Some("sunny surf museum"), 5).expect("recommend");

    for pair in recs.windows(2) {
        assert!(pair[0].score >= pair[1].score);
    }
    for r in &recs {
        assert!((0.0..=1.0).contains(&r.score), "score {} out of range", r.score);
    }
}

#[test]
fn test_k_zero_is_rejected() {
    let engine = sample_engine();
    let result = engine.recommend(10, None, 0);
    assert!(matches!(
        result,
        Err(RecomendarError::InvalidHyperparameter { .. })
    ));
}

#[test]
fn test_never_returns_more_than_k() {
    let engine = sample_engine();
    for k in 1..=4 {
        for (user_id, query) in [(99, None), (99, Some("sunny beach city")), (10, None), (30, Some("sunny surf"))] {
            let recs = engine.recommend(user_id, query, k).expect("recommend");
            assert!(recs.len() <= k, "k={k} returned {}", recs.len());
        }
    }
}

#[test]
fn test_k_larger_than_catalog_returns_all() {
    let engine = sample_engine();
    let recs = engine.recommend(99, None, 10).expect("recommend");
    assert_eq!(recs.len(), 3);
}

#[test]
fn test_collaborative_candidate_without_catalog_row_is_dropped() {
    // Item 77 exists only in the ratings table; the collaborative signal
    // surfaces it but the catalog join drops it, leaving popularity.
    let items = vec![
        item(1, "beach", "sunny surf", 100, 4.5),
        item(2, "mountain", "alpine hiking", 50, 4.0),
    ];
    let ratings = vec![
        rating(10, 1, 5.0),
        rating(20, 1, 5.0),
        rating(20, 77, 4.0),
    ];
    let catalog = Catalog::new(items, ratings, Vec::new()).expect("valid catalog");
    let engine = HybridRecommender::new(catalog).expect("engine");

    let recs = engine.recommend(10, None, 5).expect("recommend");
    assert_eq!(ids(&recs), vec![1, 2]);
}

#[test]
fn test_engine_is_deterministic() {
    let engine = sample_engine();
    let a = engine.recommend(30, Some("sunny surf"), 5).expect("recommend");
    let b = engine.recommend(30, Some("sunny surf"), 5).expect("recommend");
    assert_eq!(ids(&a), ids(&b));
    for (x, y) in a.iter().zip(&b) {
        assert_eq!(x.score, y.score);
    }
}
