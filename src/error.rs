//! Error taxonomy for feature extraction and training-data formatting.
//!
//! Every error indicates a caller bug (wrong array shape or an unusable
//! filter parameter); nothing is retried and no partial result is returned.

use thiserror::Error;

/// Main error type for the pixel_features library.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// An array does not have the dimensionality (or extent) an operation requires.
    #[error("invalid shape {shape:?}: {reason}")]
    InvalidShape { shape: Vec<usize>, reason: String },

    /// The feature stack's pixel count disagrees with the annotation element count.
    #[error("shape mismatch: feature stack has {pixels} pixels, annotation has {annotations} elements")]
    ShapeMismatch { pixels: usize, annotations: usize },

    /// A filter parameter is outside its valid range.
    #[error("invalid parameter {name}: {reason}")]
    InvalidParameter { name: String, reason: String },
}

impl Error {
    pub(crate) fn invalid_shape(shape: &[usize], reason: impl Into<String>) -> Self {
        Self::InvalidShape {
            shape: shape.to_vec(),
            reason: reason.into(),
        }
    }

    pub(crate) fn invalid_parameter(name: &str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name: name.to_string(),
            reason: reason.into(),
        }
    }
}

/// Result type alias for pixel_features operations.
pub type Result<T> = std::result::Result<T, Error>;
