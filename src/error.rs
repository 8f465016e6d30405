//! Error types.
use thiserror::Error;

use crate::Label;

/// Errors returned by the library.
#[derive(Debug, Error)]
pub enum Error {
    /// There is no training data to predict from.
    #[error("insufficient data: at least one training example is required")]
    InsufficientData,

    /// Feature vectors have an inconsistent number of dimensions.
    #[error("dimension mismatch: expected {expected} features, found {found}")]
    DimensionMismatch { expected: usize, found: usize },

    /// Two sequences that should be paired have different lengths.
    #[error("length mismatch: expected {expected} elements, found {found}")]
    LengthMismatch { expected: usize, found: usize },

    /// A label outside of {0, 1}.
    #[error("invalid label {0}: labels must be 0 or 1")]
    InvalidLabel(Label),

    /// Unreadable or malformed CSV data.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("unknown month: {0:?}")]
    UnknownMonth(String),

    /// The test fraction of a split is not in (0, 1).
    #[error("invalid test size {0}: must be in (0, 1)")]
    InvalidTestSize(f64),

    #[error("shape error: {0}")]
    Shape(#[from] ndarray::ShapeError),
}

pub type Result<T> = std::result::Result<T, Error>;
