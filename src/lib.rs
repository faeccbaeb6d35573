//! Recomendar: hybrid recommendation engine in pure Rust.
//!
//! Recomendar blends three signals into one ranked list: collaborative
//! filtering (what similar users liked), content-based filtering (TF-IDF
//! similarity to a free-text query), and a popularity-damped weighted rating
//! that serves as the universal fallback for cold-start users and unmatched
//! queries.
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
//!         description: "white sand".to_string(),
//!         count: 120,
//!         p_rating: 4.5,
//!     },
//!     Item {
//!         item_id: 2,
//!         category: "mountain".to_string(),
//!         tags: "alpine hiking".to_string(),
//!         description: "quiet trails".to_string(),
//!         count: 8,
//!         p_rating: 4.9,
//!     },
//! ];
//! let ratings = vec![Rating { user_id: 1, item_id: 1, rating: 5.0 }];
//!
//! let catalog = Catalog::new(items, ratings, Vec::new()).expect("valid catalog");
//! let engine = HybridRecommender::new(catalog).expect("engine should build");
//!
//! // A user id with no rating history is a cold-start user; with a query,
//! // content similarity is blended with the weighted rating.
//! let recs = engine.recommend(99, Some("sunny beach"), 5).expect("recommend should succeed");
//! assert_eq!(recs[0].item.item_id, 1);
//! ```
//!
//! # Modules
//!
//! - [`catalog`]: typed item/rating/user tables and the JSON loader
//! - [`features`]: rating matrix, TF-IDF item vectors, weighted ratings
//! - [`recommend`]: collaborative, content-based, and hybrid recommenders
//! - [`text`]: tokenization, stop words, vectorization, similarity kernels
//! - [`preprocessing`]: min-max score normalization
//! - [`stats`]: mean and R-7 quantiles
//! - [`primitives`]: core Vector and Matrix types
//!
//! # Concurrency
//!
//! An engine instance is immutable after construction; recommendation calls
//! take `&self` and may run concurrently without locking. To pick up catalog
//! changes, build a fresh engine and swap it in.

pub mod catalog;
pub mod error;
pub mod features;
pub mod prelude;
pub mod preprocessing;
pub mod primitives;
pub mod recommend;
pub mod stats;
pub mod text;
pub mod traits;

pub use error::{RecomendarError, Result};
pub use primitives::{Matrix, Vector};
pub use traits::Transformer;
