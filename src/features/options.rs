use crate::filters::{BorderMode, EdgeKernel, DEFAULT_TRUNCATE};
use serde::{Deserialize, Serialize};

/// Standard deviation of the smoothing channel, in pixels.
pub const DEFAULT_SIGMA: f32 = 3.0;

/// Explicit filter parameters for feature extraction.
///
/// Every field has a default, so a partial JSON/TOML table deserializes into
/// the standard configuration with only the named fields overridden.
///
/// Pixel values are never rescaled: a `u8` image is smoothed in `[0, 255]`,
/// so all three channels share the input's units. scikit-image's
/// `filters.gaussian` instead maps integer images to `[0, 1]` before
/// smoothing; divide the input by the type's maximum first to reproduce that.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeatureOptions {
    /// Gaussian standard deviation (pixels). `0` disables smoothing.
    pub sigma: f32,
    /// Kernel half-width in units of `sigma`.
    pub truncate: f32,
    /// Border policy of the smoothing pass.
    pub smoothing_border: BorderMode,
    /// Gradient operator for the edge channel.
    pub edge_kernel: EdgeKernel,
    /// Border policy of the gradient pass.
    pub edge_border: BorderMode,
}

impl Default for FeatureOptions {
    fn default() -> Self {
        Self {
            sigma: DEFAULT_SIGMA,
            truncate: DEFAULT_TRUNCATE,
            smoothing_border: BorderMode::Nearest,
            edge_kernel: EdgeKernel::Sobel,
            edge_border: BorderMode::Reflect,
        }
    }
}

impl FeatureOptions {
    pub fn with_sigma(mut self, sigma: f32) -> Self {
        self.sigma = sigma;
        self
    }

    pub fn with_truncate(mut self, truncate: f32) -> Self {
        self.truncate = truncate;
        self
    }

    pub fn with_smoothing_border(mut self, border: BorderMode) -> Self {
        self.smoothing_border = border;
        self
    }

    pub fn with_edge_kernel(mut self, kernel: EdgeKernel) -> Self {
        self.edge_kernel = kernel;
        self
    }

    pub fn with_edge_border(mut self, border: BorderMode) -> Self {
        self.edge_border = border;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_remaining_defaults() {
        let opts: FeatureOptions =
            serde_json::from_str(r#"{"sigma": 1.5, "edge_kernel": "scharr"}"#).unwrap();
        assert_eq!(opts.sigma, 1.5);
        assert_eq!(opts.edge_kernel, EdgeKernel::Scharr);
        assert_eq!(opts.truncate, DEFAULT_TRUNCATE);
        assert_eq!(opts.smoothing_border, BorderMode::Nearest);
        assert_eq!(opts.edge_border, BorderMode::Reflect);
    }

    #[test]
    fn constant_border_round_trips_through_json() {
        let opts = FeatureOptions::default().with_smoothing_border(BorderMode::Constant(0.5));
        let json = serde_json::to_string(&opts).unwrap();
        assert!(json.contains(r#""smoothing_border":{"constant":0.5}"#), "{json}");
        let back: FeatureOptions = serde_json::from_str(&json).unwrap();
        assert_eq!(back, opts);
    }
}
