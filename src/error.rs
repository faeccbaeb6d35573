//! Error types for Recomendar operations.
//!
//! Provides rich error context for library consumers.

use std::fmt;

/// Main error type for Recomendar operations.
///
/// Initialization failures (missing tables, malformed columns) surface as
/// [`RecomendarError::DataLoad`]; invalid call-time arguments surface as
/// [`RecomendarError::InvalidHyperparameter`]. A lookup that merely finds no
/// data (unknown user, no matching items) is never an error; the engine
/// degrades to a weaker signal instead.
///
/// # Examples
///
/// ```
/// use recomendar::error::RecomendarError;
///
/// let err = RecomendarError::DataLoad {
///     message: "items table is empty".to_string(),
/// };
/// assert!(err.to_string().contains("items table"));
/// ```
#[derive(Debug)]
pub enum RecomendarError {
    /// Malformed or missing input table/column, fatal at initialization.
    DataLoad {
        /// What was missing or malformed
        message: String,
    },

    /// Invalid hyperparameter or call-time argument value.
    InvalidHyperparameter {
        /// Parameter name
        param: String,
        /// Provided value
        value: String,
        /// Constraint description
        constraint: String,
    },

    /// Generic error with string message.
    Other(String),
}

impl fmt::Display for RecomendarError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecomendarError::DataLoad { message } => {
                write!(f, "Data load failed: {message}")
            }
            RecomendarError::InvalidHyperparameter {
                param,
                value,
                constraint,
            } => {
                write!(
                    f,
                    "Invalid hyperparameter: {param} = {value}, expected {constraint}"
                )
            }
            RecomendarError::Other(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for RecomendarError {}

impl From<&str> for RecomendarError {
    fn from(msg: &str) -> Self {
        RecomendarError::Other(msg.to_string())
    }
}

impl From<String> for RecomendarError {
    fn from(msg: String) -> Self {
        RecomendarError::Other(msg)
    }
}

impl RecomendarError {
    /// Create a data-load error with descriptive context.
    #[must_use]
    pub fn data_load(context: impl Into<String>) -> Self {
        Self::DataLoad {
            message: context.into(),
        }
    }
}

/// Convenience type alias for Results.
pub type Result<T> = std::result::Result<T, RecomendarError>;
