//! Gaussian smoothing with an explicit sigma, truncation and border policy.
//!
//! The kernel radius is `floor(truncate * sigma + 0.5)` and the taps are
//! `exp(-x² / 2σ²)` normalised to unit sum, applied separably. With the
//! defaults (`truncate = 4`, `BorderMode::Nearest`) a σ = 3 blur uses a
//! 25-tap kernel whose out-of-range samples replicate the edge pixel.
use super::border::BorderMode;
use super::separable::{apply, SeparableFilter};
use super::Smoother;
use crate::error::{Error, Result};
use crate::image::ImageF32;
use log::debug;

/// Default number of standard deviations covered on each side of the kernel.
pub const DEFAULT_TRUNCATE: f32 = 4.0;

/// Largest accepted kernel radius (taps on each side of the centre).
pub const MAX_KERNEL_RADIUS: usize = 1 << 20;

#[derive(Clone, Debug, PartialEq)]
pub struct GaussianFilter {
    sigma: f32,
    truncate: f32,
    border: BorderMode,
    taps: Vec<f32>,
}

impl GaussianFilter {
    /// Gaussian with the default truncation and nearest-value borders.
    pub fn new(sigma: f32) -> Result<Self> {
        Self::with_params(sigma, DEFAULT_TRUNCATE, BorderMode::Nearest)
    }

    pub fn with_params(sigma: f32, truncate: f32, border: BorderMode) -> Result<Self> {
        let taps = gaussian_taps(sigma, truncate)?;
        debug!(
            "GaussianFilter sigma={sigma} truncate={truncate} radius={} border={border:?}",
            taps.len() / 2
        );
        Ok(Self {
            sigma,
            truncate,
            border,
            taps,
        })
    }

    pub fn sigma(&self) -> f32 {
        self.sigma
    }

    pub fn truncate(&self) -> f32 {
        self.truncate
    }

    /// Number of taps on each side of the centre.
    pub fn radius(&self) -> usize {
        self.taps.len() / 2
    }
}

impl SeparableFilter for GaussianFilter {
    #[inline]
    fn taps(&self) -> &[f32] {
        &self.taps
    }

    fn border(&self) -> BorderMode {
        self.border
    }
}

impl Smoother for GaussianFilter {
    fn smooth(&self, image: &ImageF32) -> ImageF32 {
        apply(self, image)
    }
}

/// Kernel radius `floor(truncate * sigma + 0.5)`.
///
/// Fails with `InvalidParameter` for negative or non-finite inputs and for
/// radii above [`MAX_KERNEL_RADIUS`].
pub fn kernel_radius(sigma: f32, truncate: f32) -> Result<usize> {
    if !sigma.is_finite() || sigma < 0.0 {
        return Err(Error::invalid_parameter(
            "sigma",
            format!("must be finite and non-negative, got {sigma}"),
        ));
    }
    if !truncate.is_finite() || truncate < 0.0 {
        return Err(Error::invalid_parameter(
            "truncate",
            format!("must be finite and non-negative, got {truncate}"),
        ));
    }
    let radius = (f64::from(truncate) * f64::from(sigma) + 0.5).floor();
    if radius > MAX_KERNEL_RADIUS as f64 {
        return Err(Error::invalid_parameter(
            "sigma",
            format!(
                "kernel radius {radius} (sigma={sigma}, truncate={truncate}) exceeds {MAX_KERNEL_RADIUS}"
            ),
        ));
    }
    Ok(radius as usize)
}

/// Normalised 1D Gaussian taps of length `2 * radius + 1`.
///
/// `sigma == 0` (or a radius of zero) degenerates to the identity `[1]`.
pub fn gaussian_taps(sigma: f32, truncate: f32) -> Result<Vec<f32>> {
    let radius = kernel_radius(sigma, truncate)?;
    if sigma == 0.0 || radius == 0 {
        return Ok(vec![1.0]);
    }
    let denom = 2.0 * f64::from(sigma) * f64::from(sigma);
    let weights: Vec<f64> = (0..=2 * radius)
        .map(|i| {
            let x = i as f64 - radius as f64;
            (-x * x / denom).exp()
        })
        .collect();
    let sum: f64 = weights.iter().sum();
    Ok(weights.iter().map(|w| (w / sum) as f32).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::ImageView;

    #[test]
    fn taps_are_normalised_and_symmetric() {
        let taps = gaussian_taps(3.0, 4.0).unwrap();
        assert_eq!(taps.len(), 25);
        let sum: f32 = taps.iter().sum();
        assert!((sum - 1.0).abs() < 1e-5, "sum={sum}");
        for i in 0..taps.len() / 2 {
            assert_eq!(taps[i], taps[taps.len() - 1 - i]);
        }
        assert!(taps[12] > taps[11]);
    }

    #[test]
    fn zero_sigma_is_identity() {
        assert_eq!(gaussian_taps(0.0, 4.0).unwrap(), vec![1.0]);
        let filter = GaussianFilter::new(0.0).unwrap();
        let mut img = ImageF32::new(4, 3);
        img.set(2, 1, 5.0);
        assert_eq!(filter.smooth(&img), img);
    }

    #[test]
    fn rejects_unusable_parameters() {
        for sigma in [-1.0, f32::NAN, f32::INFINITY] {
            assert!(matches!(
                GaussianFilter::new(sigma),
                Err(Error::InvalidParameter { .. })
            ));
        }
        assert!(matches!(
            GaussianFilter::with_params(1.0, -2.0, BorderMode::Nearest),
            Err(Error::InvalidParameter { .. })
        ));
    }

    #[test]
    fn oversized_kernels_are_rejected() {
        for sigma in [1e20, 1e9, f32::MAX] {
            assert!(matches!(
                GaussianFilter::new(sigma),
                Err(Error::InvalidParameter { .. })
            ));
        }
        let at_cap = (MAX_KERNEL_RADIUS / 4) as f32;
        assert_eq!(kernel_radius(at_cap, 4.0).unwrap(), MAX_KERNEL_RADIUS);
        assert!(kernel_radius(at_cap + 1.0, 4.0).is_err());
    }

    #[test]
    fn constant_image_is_unchanged_and_mass_is_spread() {
        let filter = GaussianFilter::new(3.0).unwrap();
        assert_eq!(filter.radius(), 12);

        let mut flat = ImageF32::new(7, 5);
        flat.data.iter_mut().for_each(|v| *v = 0.25);
        for v in &filter.smooth(&flat).data {
            assert!((v - 0.25).abs() < 1e-6);
        }

        let mut impulse = ImageF32::new(41, 41);
        impulse.set(20, 20, 1.0);
        let out = filter.smooth(&impulse);
        let total: f32 = out.data.iter().sum();
        assert!((total - 1.0).abs() < 1e-4, "total={total}");
        assert!(out.get(20, 20) < 0.05);
        assert!(out.get(20, 20) > out.get(23, 20));
        assert!(out.row(20).iter().all(|v| *v >= 0.0));
    }
}
