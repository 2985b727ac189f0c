//! Smoothing and edge filters used to derive feature channels.
//!
//! Both filter roles are traits so callers can plug in their own providers;
//! the built-in ones are a separable Gaussian (`GaussianFilter`) and a 3×3
//! gradient-magnitude operator (`GradientMagnitude`). All parameters,
//! including the border policy, are carried by the filter values themselves.
//!
//! Providers must return an image of the same size as their input.

pub mod border;
pub mod gaussian;
pub mod gradient;
pub mod separable;

use crate::image::ImageF32;

pub use border::BorderMode;
pub use gaussian::{gaussian_taps, kernel_radius, GaussianFilter, DEFAULT_TRUNCATE, MAX_KERNEL_RADIUS};
pub use gradient::{EdgeKernel, Grad, GradientMagnitude};
pub use separable::{correlate_separable, SeparableFilter};

/// Produces a same-shape smoothed copy of an image.
pub trait Smoother {
    fn smooth(&self, image: &ImageF32) -> ImageF32;
}

/// Produces a same-shape edge-magnitude image.
pub trait EdgeFilter {
    fn edges(&self, image: &ImageF32) -> ImageF32;
}

impl<F> Smoother for F
where
    F: Fn(&ImageF32) -> ImageF32,
{
    fn smooth(&self, image: &ImageF32) -> ImageF32 {
        self(image)
    }
}

impl<F> EdgeFilter for F
where
    F: Fn(&ImageF32) -> ImageF32,
{
    fn edges(&self, image: &ImageF32) -> ImageF32 {
        self(image)
    }
}
