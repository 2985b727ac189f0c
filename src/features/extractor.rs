//! Feature stack construction: original, smoothed and edge channels.
//!
//! The stack is a `(3, H·W)` float array. Row order follows [`Channel`] and
//! every row is flattened row-major through `crate::image::layout`, so
//! column `i` of each row is the same pixel.
use super::channel::Channel;
use super::options::FeatureOptions;
use crate::diagnostics::{elapsed_ms, TimingBreakdown};
use crate::error::{Error, Result};
use crate::filters::{EdgeFilter, GaussianFilter, GradientMagnitude, Smoother};
use crate::image::{ImageF32, Intensity};
use log::debug;
use ndarray::{Array2, ArrayBase, ArrayView1, Data, Dimension};
use std::time::Instant;

/// Feature stack together with the time spent in each stage.
#[derive(Clone, Debug)]
pub struct ExtractionReport {
    pub stack: Array2<f32>,
    pub timing: TimingBreakdown,
}

/// Builds feature stacks with a fixed pair of filter providers.
#[derive(Clone, Debug)]
pub struct FeatureExtractor<S = GaussianFilter, E = GradientMagnitude> {
    smoother: S,
    edge_filter: E,
}

impl FeatureExtractor {
    /// Built-in Gaussian and gradient-magnitude filters configured from `options`.
    pub fn new(options: FeatureOptions) -> Result<Self> {
        let smoother =
            GaussianFilter::with_params(options.sigma, options.truncate, options.smoothing_border)?;
        let edge_filter = GradientMagnitude::new(options.edge_kernel, options.edge_border);
        Ok(Self::with_filters(smoother, edge_filter))
    }
}

impl<S: Smoother, E: EdgeFilter> FeatureExtractor<S, E> {
    pub fn with_filters(smoother: S, edge_filter: E) -> Self {
        Self {
            smoother,
            edge_filter,
        }
    }

    pub fn smoother(&self) -> &S {
        &self.smoother
    }

    pub fn edge_filter(&self) -> &E {
        &self.edge_filter
    }

    /// Build the `(3, H·W)` feature stack of a 2D image.
    ///
    /// Fails with `InvalidShape` for anything but a non-empty 2D array, or if
    /// a filter provider returns an image of a different size.
    pub fn extract<A, Sd, D>(&self, image: &ArrayBase<Sd, D>) -> Result<Array2<f32>>
    where
        A: Intensity,
        Sd: Data<Elem = A>,
        D: Dimension,
    {
        self.extract_with_timing(image).map(|report| report.stack)
    }

    /// Same as [`extract`](Self::extract), also reporting per-stage timings
    /// (`smooth`, `edges`, `stack`).
    pub fn extract_with_timing<A, Sd, D>(
        &self,
        image: &ArrayBase<Sd, D>,
    ) -> Result<ExtractionReport>
    where
        A: Intensity,
        Sd: Data<Elem = A>,
        D: Dimension,
    {
        let total_start = Instant::now();
        let original = ImageF32::from_array(image)?;

        let smooth_start = Instant::now();
        let smoothed = self.smoother.smooth(&original);
        ensure_same_shape(&original, &smoothed, "smoother")?;
        let smooth_ms = elapsed_ms(smooth_start);

        let edges_start = Instant::now();
        let edges = self.edge_filter.edges(&smoothed);
        ensure_same_shape(&original, &edges, "edge filter")?;
        let edges_ms = elapsed_ms(edges_start);

        let stack_start = Instant::now();
        let pixels = original.data.len();
        let mut stack = Array2::<f32>::zeros((Channel::COUNT, pixels));
        for (channel, img) in Channel::ALL.iter().zip([&original, &smoothed, &edges]) {
            stack
                .row_mut(channel.index())
                .assign(&ArrayView1::from(img.data.as_slice()));
        }
        let stack_ms = elapsed_ms(stack_start);

        let mut timing = TimingBreakdown::with_total(elapsed_ms(total_start));
        timing.push("smooth", smooth_ms);
        timing.push("edges", edges_ms);
        timing.push("stack", stack_ms);
        debug!(
            "FeatureExtractor {}x{} smooth={:.3}ms edges={:.3}ms total={:.3}ms",
            original.w, original.h, smooth_ms, edges_ms, timing.total_ms
        );

        Ok(ExtractionReport { stack, timing })
    }
}

fn ensure_same_shape(expected: &ImageF32, actual: &ImageF32, provider: &str) -> Result<()> {
    if actual.shape() != expected.shape() || actual.data.len() != expected.data.len() {
        return Err(Error::invalid_shape(
            &actual.shape(),
            format!(
                "{provider} returned {} values for a {:?} image, expected {:?}",
                actual.data.len(),
                actual.shape(),
                expected.shape()
            ),
        ));
    }
    Ok(())
}

/// Feature stack of `image` with the default filters (σ = 3 Gaussian with
/// nearest-value borders, Sobel magnitude with reflected borders).
pub fn extract_features<A, S, D>(image: &ArrayBase<S, D>) -> Result<Array2<f32>>
where
    A: Intensity,
    S: Data<Elem = A>,
    D: Dimension,
{
    FeatureExtractor::new(FeatureOptions::default())?.extract(image)
}
