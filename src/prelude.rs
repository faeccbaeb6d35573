//! Convenience re-exports for common usage.
//!
//! # Usage
//!
//! ```
//! use recomendar::prelude::*;
//! ```

pub use crate::catalog::{Catalog, Item, Rating, User};
pub use crate::error::{RecomendarError, Result};
pub use crate::features::{FeatureSet, RatingMatrix};
pub use crate::primitives::{Matrix, Vector};
pub use crate::recommend::{
    CollaborativeRecommender, ContentRecommender, HybridRecommender, Recommendation,
};
pub use crate::traits::Transformer;
