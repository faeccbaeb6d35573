//! Similarity kernels for comparing feature vectors.
//!
//! Provides cosine similarity between vectors and the linear kernel between a
//! query vector and every row of a document matrix. On L2-normalized TF-IDF
//! rows the two coincide.
//!
//! # Quick Start
//!
//! ```
//! use recomendar::text::similarity::cosine_similarity;
//! use recomendar::primitives::Vector;
//!
//! let v1 = Vector::from_slice(&[1.0, 2.0, 3.0]);
//! let v2 = Vector::from_slice(&[2.0, 3.0, 4.0]);
//!
//! let similarity = cosine_similarity(&v1, &v2).expect("cosine similarity should succeed");
//! assert!(similarity > 0.9);
//! ```

use crate::error::RecomendarError;
use crate::primitives::{Matrix, Vector};

/// Compute cosine similarity between two vectors.
///
/// Measures the angle between two vectors in n-dimensional space:
/// - 1 = identical direction (very similar)
/// - 0 = orthogonal (unrelated)
/// - -1 = opposite direction
///
/// # Formula
/// ```text
/// cosine_sim(A, B) = (A · B) / (||A|| * ||B||)
/// ```
///
/// A zero vector is orthogonal to everything by convention (similarity 0).
///
/// # Errors
///
/// Returns an error if the vectors have different lengths or are empty.
pub fn cosine_similarity(a: &Vector<f64>, b: &Vector<f64>) -> Result<f64, RecomendarError> {
    if a.len() != b.len() {
        return Err(RecomendarError::Other(
            "Vectors must have same length".to_string(),
        ));
    }

    if a.is_empty() {
        return Err(RecomendarError::Other("Vectors cannot be empty".to_string()));
    }

    let dot_product = a.dot(b);
    let norm_a = a.norm();
    let norm_b = b.norm();

    if norm_a == 0.0 || norm_b == 0.0 {
        return Ok(0.0);
    }

    Ok(dot_product / (norm_a * norm_b))
}

/// Compute the linear kernel (dot product) between a query vector and every
/// row of a document matrix.
///
/// Returns one score per row, in row order. With L2-normalized rows and
/// query this is exactly cosine similarity.
///
/// # Errors
///
/// Returns an error if the query length doesn't match the matrix column
/// count.
///
/// # Examples
///
/// ```
/// use recomendar::text::similarity::linear_kernel;
/// use recomendar::primitives::{Matrix, Vector};
///
/// let docs = Matrix::from_vec(2, 3, vec![
///     1.0, 0.0, 0.0,
///     0.0, 1.0, 0.0,
/// ]).expect("valid matrix dimensions");
/// let query = Vector::from_slice(&[1.0, 0.0, 0.0]);
///
/// let scores = linear_kernel(&query, &docs).expect("linear kernel should succeed");
/// assert_eq!(scores, vec![1.0, 0.0]);
/// ```
pub fn linear_kernel(query: &Vector<f64>, docs: &Matrix<f64>) -> Result<Vec<f64>, RecomendarError> {
    if query.len() != docs.n_cols() {
        return Err(RecomendarError::Other(
            "Query length must match matrix column count".to_string(),
        ));
    }

    let scores = (0..docs.n_rows())
        .map(|i| {
            docs.row_slice(i)
                .iter()
                .zip(query.as_slice())
                .map(|(d, q)| d * q)
                .sum()
        })
        .collect();

    Ok(scores)
}

#[cfg(test)]
#[path = "similarity_tests.rs"]
mod tests;
