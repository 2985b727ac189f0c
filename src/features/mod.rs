//! Per-pixel feature stacks.
//!
//! ```
//! use ndarray::Array2;
//! use pixel_features::features::{Channel, FeatureExtractor, FeatureOptions};
//!
//! let image = Array2::<f32>::from_elem((32, 48), 0.5);
//! let extractor = FeatureExtractor::new(FeatureOptions::default().with_sigma(1.0)).unwrap();
//! let stack = extractor.extract(&image).unwrap();
//! assert_eq!(stack.dim(), (Channel::COUNT, 32 * 48));
//! ```

pub mod channel;
pub mod extractor;
pub mod options;

pub use channel::Channel;
pub use extractor::{extract_features, ExtractionReport, FeatureExtractor};
pub use options::{FeatureOptions, DEFAULT_SIGMA};
