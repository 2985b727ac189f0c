//! Owned single-channel f32 image in row-major layout (stride == width).
//!
//! Working buffer for the smoothing and edge filters. Built from an
//! n-dimensional array through the shared row-major layout helpers, so its
//! `data` is already the flattened channel the feature stack needs.
use super::intensity::Intensity;
use super::layout::{flatten_row_major_map, image_dims, row_major_index};
use super::traits::{ImageView, ImageViewMut};
use crate::error::Result;
use ndarray::{ArrayBase, Data, Dimension};

#[derive(Clone, Debug, PartialEq)]
pub struct ImageF32 {
    /// Image width in pixels
    pub w: usize,
    /// Image height in pixels
    pub h: usize,
    /// Number of f32 elements between consecutive rows (equals `w`)
    pub stride: usize,
    /// Backing storage in row-major order
    pub data: Vec<f32>,
}

impl ImageF32 {
    /// Construct a zero-initialized buffer of size `w × h`.
    pub fn new(w: usize, h: usize) -> Self {
        Self {
            w,
            h,
            stride: w,
            data: vec![0.0; w * h],
        }
    }

    /// Copy a 2D array into a float image, converting each element.
    ///
    /// Fails with `InvalidShape` unless the array is 2-dimensional with at
    /// least one pixel.
    pub fn from_array<A, S, D>(array: &ArrayBase<S, D>) -> Result<Self>
    where
        A: Intensity,
        S: Data<Elem = A>,
        D: Dimension,
    {
        let (h, w) = image_dims(array.shape())?;
        Ok(Self {
            w,
            h,
            stride: w,
            data: flatten_row_major_map(array, |&v| v.to_f32()),
        })
    }

    /// `[height, width]`, the same convention as `ndarray` shapes.
    pub fn shape(&self) -> [usize; 2] {
        [self.h, self.w]
    }

    #[inline]
    /// Convert (x, y) to a linear index into `data`.
    pub fn idx(&self, x: usize, y: usize) -> usize {
        row_major_index(x, y, self.stride)
    }
    #[inline]
    /// Get the pixel value at (x, y).
    pub fn get(&self, x: usize, y: usize) -> f32 {
        self.data[self.idx(x, y)]
    }
    #[inline]
    /// Set the pixel value at (x, y).
    pub fn set(&mut self, x: usize, y: usize, v: f32) {
        let i = self.idx(x, y);
        self.data[i] = v;
    }
}

impl ImageView for ImageF32 {
    type Pixel = f32;

    #[inline]
    fn width(&self) -> usize {
        self.w
    }
    #[inline]
    fn height(&self) -> usize {
        self.h
    }
    #[inline]
    fn row(&self, y: usize) -> &[f32] {
        let start = y * self.stride;
        &self.data[start..start + self.w]
    }
}

impl ImageViewMut for ImageF32 {
    #[inline]
    fn row_mut(&mut self, y: usize) -> &mut [f32] {
        let start = y * self.stride;
        &mut self.data[start..start + self.w]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use ndarray::{array, Array1, Array3};

    #[test]
    fn from_array_keeps_row_major_order_and_converts() {
        let a = array![[1u8, 2, 3], [4, 5, 6]];
        let img = ImageF32::from_array(&a).unwrap();
        assert_eq!((img.w, img.h), (3, 2));
        assert_eq!(img.shape(), [2, 3]);
        assert_eq!(img.data, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        assert_eq!(img.get(0, 1), 4.0);
        let rows: Vec<&[f32]> = img.rows().collect();
        assert_eq!(rows, vec![&[1.0, 2.0, 3.0][..], &[4.0, 5.0, 6.0][..]]);
    }

    #[test]
    fn from_array_rejects_other_dimensionalities() {
        let line = Array1::<f32>::zeros(8);
        assert!(matches!(
            ImageF32::from_array(&line),
            Err(Error::InvalidShape { .. })
        ));
        let cube = Array3::<f32>::zeros((2, 2, 2));
        assert!(matches!(
            ImageF32::from_array(&cube),
            Err(Error::InvalidShape { .. })
        ));
    }
}
