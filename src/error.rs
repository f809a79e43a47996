//! Error type for the offset node.
//!
//! The transform itself is total: malformed colors fall back to a default and
//! out-of-range offsets are clamped. Errors only surface where host data is
//! read into the crate's array layout (bindings, enumerated parameters).

use thiserror::Error;

/// Offset node error type
#[derive(Error, Debug)]
pub enum OffsetError {
    /// Fill color string could not be parsed
    #[error("invalid fill color: {0:?}")]
    InvalidColor(String),

    /// Enumerated parameter received an unknown value
    #[error("invalid value for {param}: {value:?}")]
    InvalidChoice { param: &'static str, value: String },

    /// Array rank cannot be read as an image or mask batch
    #[error("unsupported {input} rank: {rank}")]
    UnsupportedRank { input: &'static str, rank: usize },

    /// Buffer does not match the declared shape
    #[error("shape error: {0}")]
    Shape(#[from] ndarray::ShapeError),
}

/// Result alias used across the crate
pub type Result<T> = std::result::Result<T, OffsetError>;

#[cfg(feature = "python")]
impl From<OffsetError> for pyo3::PyErr {
    fn from(err: OffsetError) -> Self {
        pyo3::exceptions::PyValueError::new_err(err.to_string())
    }
}
