//! Core traits shared across the engine.
//!
//! These traits define the API contracts for reusable computation stages.

use crate::error::Result;
use crate::primitives::Matrix;

/// Trait for data transformers (scalers, encoders, etc.).
///
/// Transformers learn parameters from data in `fit` and apply them in
/// `transform`, following the fit/transform convention.
///
/// # Examples
///
/// ```
/// use recomendar::preprocessing::MinMaxScaler;
/// use recomendar::primitives::Matrix;
/// use recomendar::traits::Transformer;
///
/// let x = Matrix::from_vec(3, 1, vec![0.0, 5.0, 10.0]).expect("valid matrix dimensions");
/// let mut scaler = MinMaxScaler::new();
/// let scaled = scaler.fit_transform(&x).expect("fit_transform should succeed");
/// assert!((scaled.get(2, 0) - 1.0).abs() < 1e-6);
/// ```
pub trait Transformer {
    /// Fits the transformer to data.
    ///
    /// # Errors
    ///
    /// Returns an error if fitting fails.
    fn fit(&mut self, x: &Matrix<f32>) -> Result<()>;

    /// Transforms data using fitted parameters.
    ///
    /// # Errors
    ///
    /// Returns an error if the transformer is not fitted.
    fn transform(&self, x: &Matrix<f32>) -> Result<Matrix<f32>>;

    /// Fits and transforms in one step.
    ///
    /// # Errors
    ///
    /// Returns an error if fitting fails.
    fn fit_transform(&mut self, x: &Matrix<f32>) -> Result<Matrix<f32>> {
        self.fit(x)?;
        self.transform(x)
    }
}
