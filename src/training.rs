//! Conversion of a feature stack and a sparse annotation map into the
//! `(X, y)` pair a pixel classifier trains on.
//!
//! The annotation map is flattened with the same row-major helper the
//! feature extractor uses; callers only have to pass a map whose logical
//! shape matches the image the stack was built from.
use crate::error::{Error, Result};
use crate::image::flatten_row_major;
use log::debug;
use ndarray::{Array1, Array2, ArrayBase, Data, Dimension, Ix2};
use std::cmp::Ordering;

/// Annotated pixels only: one feature row and one label per pixel.
#[derive(Clone, Debug, PartialEq)]
pub struct TrainingData<L> {
    /// `(k, C)` matrix, columns in feature-stack channel order.
    pub features: Array2<f32>,
    /// `(k,)` labels; `labels[i]` belongs to `features.row(i)`.
    pub labels: Array1<L>,
}

impl<L> TrainingData<L> {
    /// Number of retained pixels.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Number of feature columns.
    pub fn n_features(&self) -> usize {
        self.features.ncols()
    }
}

impl<L: Copy + PartialOrd> TrainingData<L> {
    /// Pixel count per label, sorted by label.
    pub fn class_counts(&self) -> Vec<(L, usize)> {
        let mut sorted = self.labels.to_vec();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
        let mut counts: Vec<(L, usize)> = Vec::new();
        for label in sorted {
            if let Some((last, n)) = counts.last_mut() {
                if *last == label {
                    *n += 1;
                    continue;
                }
            }
            counts.push((label, 1));
        }
        counts
    }
}

/// Transpose a `(C, N)` feature stack and keep the pixels whose annotation is
/// strictly positive.
///
/// `annotation` may have any shape with `N` elements; it is flattened
/// row-major. Relative pixel order is preserved. A map without positive
/// labels yields empty `(0, C)` / `(0,)` outputs.
///
/// Fails with `ShapeMismatch` if `N` differs from the annotation element
/// count, and with `InvalidShape` for a stack without channels.
pub fn format_data<S, SL, D, L>(
    feature_stack: &ArrayBase<S, Ix2>,
    annotation: &ArrayBase<SL, D>,
) -> Result<TrainingData<L>>
where
    S: Data<Elem = f32>,
    SL: Data<Elem = L>,
    D: Dimension,
    L: Copy + PartialOrd + Default,
{
    let (channels, pixels) = feature_stack.dim();
    if channels == 0 {
        return Err(Error::invalid_shape(
            feature_stack.shape(),
            "feature stack has no channels",
        ));
    }
    if pixels != annotation.len() {
        return Err(Error::ShapeMismatch {
            pixels,
            annotations: annotation.len(),
        });
    }

    let flat = flatten_row_major(annotation);
    let unlabeled = L::default();
    let keep: Vec<usize> = flat
        .iter()
        .enumerate()
        .filter(|(_, label)| **label > unlabeled)
        .map(|(i, _)| i)
        .collect();

    let per_pixel = feature_stack.t();
    let mut features = Array2::<f32>::zeros((keep.len(), channels));
    for (mut row, &i) in features.rows_mut().into_iter().zip(&keep) {
        row.assign(&per_pixel.row(i));
    }
    let labels: Array1<L> = keep.iter().map(|&i| flat[i]).collect();

    debug!(
        "format_data kept {} of {} pixels across {} channels",
        keep.len(),
        pixels,
        channels
    );
    Ok(TrainingData { features, labels })
}
