//! Catalog store: typed item, rating, and user tables.
//!
//! Loads the three input tables into an immutable in-memory snapshot. No
//! transformation logic lives here; derived artifacts (rating matrix, text
//! vectors, weighted ratings) are built by [`crate::features`].
//!
//! # Examples
//!
//! ```
//! use recomendar::catalog::{Catalog, Item, Rating};
//!
//! let items = vec![Item {
//!     item_id: 1,
//!     category: "beach".to_string(),
//!     tags: "sunny surf".to_string(),
//!     description: String::new(),
//!     count: 120,
//!     p_rating: 4.5,
//! }];
//! let ratings = vec![Rating { user_id: 7, item_id: 1, rating: 5.0 }];
//!
//! let catalog = Catalog::new(items, ratings, Vec::new()).expect("valid catalog");
//! assert_eq!(catalog.n_items(), 1);
//! ```

use crate::error::{RecomendarError, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// One catalog entry. Immutable after load.
///
/// `tags` and `description` are optional in the input and default to empty
/// strings; their absence is never an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    /// Unique, stable identifier
    #[serde(rename = "itemId")]
    pub item_id: u32,
    /// Category label, e.g. "beach"
    pub category: String,
    /// Free-text tags
    #[serde(default)]
    pub tags: String,
    /// Free-text description
    #[serde(default)]
    pub description: String,
    /// Popularity count (number of prior interactions)
    pub count: u32,
    /// Mean prior rating
    pub p_rating: f32,
}

impl Item {
    /// Concatenated text used for content-based features.
    #[must_use]
    pub fn feature_text(&self) -> String {
        format!("{} {} {}", self.category, self.tags, self.description)
    }
}

/// A single (user, item, rating) record.
///
/// Duplicates for the same pair are assumed pre-cleaned by the loader; when
/// present, the last record wins during matrix construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Rating {
    /// Rating author
    #[serde(rename = "userId")]
    pub user_id: u32,
    /// Rated item
    #[serde(rename = "itemId")]
    pub item_id: u32,
    /// Rating value; 0 means "not rated" in the derived matrix
    pub rating: f32,
}

/// A user record. Only the identifier is consumed by the engine; any other
/// profile attributes are carried through opaquely.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier
    #[serde(rename = "userId")]
    pub user_id: u32,
    /// Opaque profile attributes, passed through untouched
    #[serde(flatten)]
    pub profile: serde_json::Map<String, serde_json::Value>,
}

/// Immutable snapshot of the three input tables.
///
/// Constructed once and handed to the engine; a catalog change means
/// building a fresh snapshot and a fresh engine.
#[derive(Debug, Clone)]
pub struct Catalog {
    items: Vec<Item>,
    ratings: Vec<Rating>,
    users: Vec<User>,
    /// item_id -> position in `items`
    item_index: HashMap<u32, usize>,
}

impl Catalog {
    /// Builds a catalog snapshot, validating table structure.
    ///
    /// # Errors
    ///
    /// Returns [`RecomendarError::DataLoad`] if the items table is empty or
    /// contains duplicate identifiers.
    pub fn new(items: Vec<Item>, ratings: Vec<Rating>, users: Vec<User>) -> Result<Self> {
        if items.is_empty() {
            return Err(RecomendarError::data_load("items table is empty"));
        }

        let mut item_index = HashMap::with_capacity(items.len());
        for (idx, item) in items.iter().enumerate() {
            if item_index.insert(item.item_id, idx).is_some() {
                return Err(RecomendarError::data_load(format!(
                    "duplicate item id {} in items table",
                    item.item_id
                )));
            }
        }

        Ok(Self {
            items,
            ratings,
            users,
            item_index,
        })
    }

    /// All catalog items, in load order.
    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// All rating records.
    #[must_use]
    pub fn ratings(&self) -> &[Rating] {
        &self.ratings
    }

    /// All user records.
    #[must_use]
    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// Number of catalog items.
    #[must_use]
    pub fn n_items(&self) -> usize {
        self.items.len()
    }

    /// Look up an item by identifier.
    #[must_use]
    pub fn item(&self, item_id: u32) -> Option<&Item> {
        self.item_index.get(&item_id).map(|&idx| &self.items[idx])
    }

    /// Position of an item in `items()`, if present.
    #[must_use]
    pub fn position(&self, item_id: u32) -> Option<usize> {
        self.item_index.get(&item_id).copied()
    }

    /// Distinct user ids appearing in the ratings table.
    #[must_use]
    pub fn rating_user_ids(&self) -> HashSet<u32> {
        self.ratings.iter().map(|r| r.user_id).collect()
    }
}

/// Reads one JSON array file into typed records.
fn read_table<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let file = File::open(path).map_err(|e| {
        RecomendarError::data_load(format!("{}: {e}", path.display()))
    })?;
    serde_json::from_reader(BufReader::new(file)).map_err(|e| {
        RecomendarError::data_load(format!("{}: {e}", path.display()))
    })
}

/// Loads a catalog from three JSON array files (items, ratings, users).
///
/// Each file holds a JSON array of records. A missing required field (an
/// absent column) or malformed value fails the whole load; no partial
/// catalog is returned.
///
/// # Errors
///
/// Returns [`RecomendarError::DataLoad`] naming the offending file.
pub fn load_json(
    items_path: impl AsRef<Path>,
    ratings_path: impl AsRef<Path>,
    users_path: impl AsRef<Path>,
) -> Result<Catalog> {
    let items = read_table(items_path.as_ref())?;
    let ratings = read_table(ratings_path.as_ref())?;
    let users = read_table(users_path.as_ref())?;
    Catalog::new(items, ratings, users)
}

#[cfg(test)]
#[path = "catalog_tests.rs"]
mod tests;
