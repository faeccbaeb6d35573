//! Descriptive statistics for vector data.
//!
//! Provides the quantile machinery behind the popularity threshold: linear
//! interpolation with the R-7 method (Hyndman & Fan 1996), the same rule used
//! by R, `NumPy` and Pandas, so percentile thresholds match those ecosystems
//! exactly.
//!
//! # Examples
//!
//! ```
//! use recomendar::stats::DescriptiveStats;
//! use recomendar::primitives::Vector;
//!
//! let data = Vector::from_slice(&[1.0, 2.0, 3.0, 4.0, 5.0]);
//! let stats = DescriptiveStats::new(&data);
//!
//! assert_eq!(stats.quantile(0.5).expect("median should be computable for valid data"), 3.0);
//! assert_eq!(stats.quantile(1.0).expect("max quantile should be computable for valid data"), 5.0);
//! ```

use crate::primitives::Vector;

/// Descriptive statistics computed on a vector of f32 values.
///
/// Holds a reference to the data vector to avoid unnecessary copying.
#[derive(Debug)]
pub struct DescriptiveStats<'a> {
    data: &'a Vector<f32>,
}

impl<'a> DescriptiveStats<'a> {
    /// Create a new `DescriptiveStats` instance from a data vector.
    #[must_use]
    pub fn new(data: &'a Vector<f32>) -> Self {
        Self { data }
    }

    /// Arithmetic mean of the data.
    ///
    /// # Errors
    ///
    /// Returns an error if the data vector is empty.
    pub fn mean(&self) -> Result<f32, String> {
        if self.data.is_empty() {
            return Err("Cannot compute mean of empty vector".to_string());
        }
        Ok(self.data.mean())
    }

    /// Compute quantile using linear interpolation (R-7 method).
    ///
    /// # Arguments
    /// * `q` - Quantile value in [0, 1]
    ///
    /// # Errors
    /// Returns error if:
    /// - Data vector is empty
    /// - Quantile q is not in [0, 1]
    ///
    /// # Examples
    /// ```
    /// use recomendar::stats::DescriptiveStats;
    /// use recomendar::primitives::Vector;
    ///
    /// let data = Vector::from_slice(&[5.0, 50.0, 100.0]);
    /// let stats = DescriptiveStats::new(&data);
    /// assert_eq!(stats.quantile(0.85).expect("quantile should be computable for valid data"), 85.0);
    /// ```
    pub fn quantile(&self, q: f64) -> Result<f32, String> {
        if self.data.is_empty() {
            return Err("Cannot compute quantile of empty vector".to_string());
        }
        if !(0.0..=1.0).contains(&q) {
            return Err(format!("Quantile must be in [0, 1], got {q}"));
        }

        let n = self.data.len();
        if n == 1 {
            return Ok(self.data.as_slice()[0]);
        }

        let mut sorted = self.data.as_slice().to_vec();
        sorted.sort_by(|a, b| {
            a.partial_cmp(b)
                .expect("f32 values should be comparable (not NaN)")
        });

        // R-7 method: h = (n - 1) * q, interpolate between floor and ceil
        let h = (n - 1) as f64 * q;
        let h_floor = h.floor() as usize;
        let h_ceil = h.ceil() as usize;

        if h_floor == h_ceil {
            return Ok(sorted[h_floor]);
        }

        let fraction = h - h_floor as f64;
        Ok(sorted[h_floor] + (fraction as f32) * (sorted[h_ceil] - sorted[h_floor]))
    }
}
