//! Preprocessing transformers for score normalization.
//!
//! # Example
//!
//! ```
//! use recomendar::preprocessing::MinMaxScaler;
//! use recomendar::primitives::Matrix;
//! use recomendar::traits::Transformer;
//!
//! let data = Matrix::from_vec(3, 2, vec![
//!     0.0, 0.0,
//!     5.0, 10.0,
//!     10.0, 20.0,
//! ]).expect("valid matrix dimensions");
//!
//! let mut scaler = MinMaxScaler::new();
//! let scaled = scaler.fit_transform(&data).expect("fit_transform should succeed");
//!
//! assert!((scaled.get(0, 0) - 0.0).abs() < 1e-6);
//! assert!((scaled.get(1, 0) - 0.5).abs() < 1e-6);
//! assert!((scaled.get(2, 0) - 1.0).abs() < 1e-6);
//! ```

use crate::error::{RecomendarError, Result};
use crate::primitives::Matrix;
use crate::traits::Transformer;
use serde::{Deserialize, Serialize};

/// Scales each feature column to the [0, 1] range.
///
/// The transformation is: `X_scaled = (X - X_min) / (X_max - X_min)`.
///
/// A constant column (zero range) maps to 0 rather than dividing by zero, so
/// the column-wise minimum always maps to 0 and the maximum to 1 (or the
/// whole column to 0 when min == max).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MinMaxScaler {
    /// Minimum value of each feature (computed during fit).
    data_min: Option<Vec<f32>>,
    /// Maximum value of each feature (computed during fit).
    data_max: Option<Vec<f32>>,
}

impl Default for MinMaxScaler {
    fn default() -> Self {
        Self::new()
    }
}

impl MinMaxScaler {
    /// Creates a new `MinMaxScaler`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            data_min: None,
            data_max: None,
        }
    }

    /// Returns true if the scaler has been fitted.
    #[must_use]
    pub fn is_fitted(&self) -> bool {
        self.data_min.is_some()
    }
}

impl Transformer for MinMaxScaler {
    /// Computes the min and max of each feature column.
    fn fit(&mut self, x: &Matrix<f32>) -> Result<()> {
        let (n_samples, n_features) = x.shape();

        if n_samples == 0 {
            return Err("Cannot fit with zero samples".into());
        }

        let mut data_min = vec![f32::INFINITY; n_features];
        let mut data_max = vec![f32::NEG_INFINITY; n_features];

        for i in 0..n_samples {
            for j in 0..n_features {
                let val = x.get(i, j);
                if val < data_min[j] {
                    data_min[j] = val;
                }
                if val > data_max[j] {
                    data_max[j] = val;
                }
            }
        }

        self.data_min = Some(data_min);
        self.data_max = Some(data_max);

        Ok(())
    }

    /// Scales the data to [0, 1] per column.
    fn transform(&self, x: &Matrix<f32>) -> Result<Matrix<f32>> {
        let data_min = self
            .data_min
            .as_ref()
            .ok_or_else(|| RecomendarError::from("Scaler not fitted"))?;
        let data_max = self
            .data_max
            .as_ref()
            .ok_or_else(|| RecomendarError::from("Scaler not fitted"))?;

        let (n_samples, n_features) = x.shape();
        if n_features != data_min.len() {
            return Err("Feature dimension mismatch".into());
        }

        let mut result = vec![0.0; n_samples * n_features];

        for i in 0..n_samples {
            for j in 0..n_features {
                let val = x.get(i, j);
                let range = data_max[j] - data_min[j];

                let scaled = if range.abs() > 1e-10 {
                    (val - data_min[j]) / range
                } else {
                    0.0
                };

                result[i * n_features + j] = scaled;
            }
        }

        Matrix::from_vec(n_samples, n_features, result).map_err(Into::into)
    }
}
