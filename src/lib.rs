#![doc = include_str!("../README.md")]

pub mod diagnostics;
pub mod error;
pub mod features;
pub mod filters;
pub mod image;
pub mod training;

// --- High-level re-exports -------------------------------------------------

pub use crate::error::{Error, Result};
pub use crate::features::{extract_features, Channel, FeatureExtractor, FeatureOptions};
pub use crate::training::{format_data, TrainingData};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```
/// use ndarray::Array2;
/// use pixel_features::prelude::*;
///
/// let image = Array2::<f32>::from_shape_fn((20, 30), |(y, x)| (x + y) as f32);
/// let mut annotation = Array2::<u8>::zeros((20, 30));
/// annotation[[2, 3]] = 1;
/// annotation[[15, 25]] = 2;
///
/// let stack = extract_features(&image).unwrap();
/// let data = format_data(&stack, &annotation).unwrap();
/// assert_eq!(data.features.dim(), (2, Channel::COUNT));
/// assert_eq!(data.labels.to_vec(), vec![1, 2]);
/// ```
pub mod prelude {
    pub use crate::filters::{BorderMode, EdgeKernel};
    pub use crate::image::Intensity;
    pub use crate::{extract_features, format_data, Channel, FeatureExtractor, FeatureOptions};
    pub use crate::{Error, TrainingData};
}
