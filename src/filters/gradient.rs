//! Image gradients (Sobel/Scharr/Prewitt) and their magnitude.
//!
//! - Each kernel is the outer product of a central difference `[-1, 0, 1]`
//!   and a normalised 3-tap smoothing row across the other axis.
//! - Outputs per-pixel `gx`, `gy` and `mag = sqrt((gx² + gy²) / 2)`, the
//!   root-mean-square of the two directional responses.
//! - Border samples go through a `BorderMode` (`Reflect` by default; for a
//!   3×3 kernel it reads the same samples as `Nearest`).
//!
//! Complexity: O(W·H) per pass; memory: three float buffers.
use super::border::BorderMode;
use super::separable::correlate_separable;
use super::EdgeFilter;
use crate::image::ImageF32;
use serde::{Deserialize, Serialize};

const DERIVATIVE_TAPS: [f32; 3] = [-1.0, 0.0, 1.0];

const SOBEL_SMOOTH: [f32; 3] = [0.25, 0.5, 0.25];
const SCHARR_SMOOTH: [f32; 3] = [3.0 / 16.0, 10.0 / 16.0, 3.0 / 16.0];
const PREWITT_SMOOTH: [f32; 3] = [1.0 / 3.0, 1.0 / 3.0, 1.0 / 3.0];

/// 3×3 gradient operator family.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeKernel {
    #[default]
    Sobel,
    /// Better rotational symmetry than Sobel.
    Scharr,
    Prewitt,
}

impl EdgeKernel {
    /// Smoothing taps applied perpendicular to the derivative direction.
    pub fn smoothing_taps(self) -> &'static [f32; 3] {
        match self {
            EdgeKernel::Sobel => &SOBEL_SMOOTH,
            EdgeKernel::Scharr => &SCHARR_SMOOTH,
            EdgeKernel::Prewitt => &PREWITT_SMOOTH,
        }
    }
}

/// Per-pixel gradient buffers.
#[derive(Clone, Debug)]
pub struct Grad {
    /// Horizontal derivative (increasing x)
    pub gx: ImageF32,
    /// Vertical derivative (increasing y)
    pub gy: ImageF32,
    /// Root-mean-square magnitude per pixel: `sqrt((gx^2 + gy^2) / 2)`
    pub mag: ImageF32,
}

/// Gradient-magnitude edge filter.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GradientMagnitude {
    pub kernel: EdgeKernel,
    pub border: BorderMode,
}

impl Default for GradientMagnitude {
    fn default() -> Self {
        Self {
            kernel: EdgeKernel::Sobel,
            border: BorderMode::Reflect,
        }
    }
}

impl GradientMagnitude {
    pub fn new(kernel: EdgeKernel, border: BorderMode) -> Self {
        Self { kernel, border }
    }

    fn derivatives(&self, l: &ImageF32) -> (ImageF32, ImageF32) {
        let smooth = self.kernel.smoothing_taps();
        let gx = correlate_separable(l, &DERIVATIVE_TAPS, smooth, self.border);
        let gy = correlate_separable(l, smooth, &DERIVATIVE_TAPS, self.border);
        (gx, gy)
    }

    /// Compute both derivatives and the combined magnitude.
    pub fn gradients(&self, l: &ImageF32) -> Grad {
        let (gx, gy) = self.derivatives(l);
        let mut mag = ImageF32::new(l.w, l.h);
        for ((m, &dx), &dy) in mag.data.iter_mut().zip(&gx.data).zip(&gy.data) {
            *m = rms(dx, dy);
        }
        Grad { gx, gy, mag }
    }

    /// Magnitude only; the `gx` buffer is reused for the result.
    pub fn magnitude(&self, l: &ImageF32) -> ImageF32 {
        let (mut gx, gy) = self.derivatives(l);
        for (m, &dy) in gx.data.iter_mut().zip(&gy.data) {
            *m = rms(*m, dy);
        }
        gx
    }
}

#[inline]
fn rms(dx: f32, dy: f32) -> f32 {
    ((dx * dx + dy * dy) * 0.5).sqrt()
}

impl EdgeFilter for GradientMagnitude {
    fn edges(&self, image: &ImageF32) -> ImageF32 {
        self.magnitude(image)
    }
}
