//! The single row-major pixel ordering shared by every flattening step.
//!
//! Pixel `(y, x)` of an `H × W` image lands at index `y * W + x`. The feature
//! extractor flattens the original image through these helpers and builds its
//! `ImageF32` buffers from them, and the training-data formatter flattens the
//! annotation map through the same helpers, so row `i` of a feature stack and
//! entry `i` of a flattened annotation always describe the same pixel.
//!
//! Iteration follows the logical (C) index order of the array, not its memory
//! layout: transposed views and Fortran-ordered arrays flatten the same way
//! as their standard-layout copies.
use crate::error::{Error, Result};
use ndarray::{Array1, ArrayBase, Data, Dimension};

/// Flatten an array of any dimensionality into row-major order.
pub fn flatten_row_major<A, S, D>(array: &ArrayBase<S, D>) -> Array1<A>
where
    A: Clone,
    S: Data<Elem = A>,
    D: Dimension,
{
    array.iter().cloned().collect()
}

/// Flatten in row-major order while converting each element.
pub fn flatten_row_major_map<A, B, S, D, F>(array: &ArrayBase<S, D>, f: F) -> Vec<B>
where
    S: Data<Elem = A>,
    D: Dimension,
    F: FnMut(&A) -> B,
{
    array.iter().map(f).collect()
}

/// Linear index of pixel `(x, y)` in a row-major buffer of the given width.
#[inline]
pub fn row_major_index(x: usize, y: usize, width: usize) -> usize {
    y * width + x
}

/// Validate that `shape` describes a non-empty 2D image and return `(height, width)`.
pub fn image_dims(shape: &[usize]) -> Result<(usize, usize)> {
    match *shape {
        [h, w] if h > 0 && w > 0 => Ok((h, w)),
        [_, _] => Err(Error::invalid_shape(shape, "image has no pixels")),
        _ => Err(Error::invalid_shape(
            shape,
            format!("expected a 2-dimensional image, got {} dimensions", shape.len()),
        )),
    }
}
