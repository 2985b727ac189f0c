use ndarray::Array2;

/// Generates a simple high-contrast checkerboard image.
pub fn checkerboard_f32(height: usize, width: usize, cell: usize) -> Array2<f32> {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    assert!(cell > 0, "cell size must be positive");

    Array2::from_shape_fn((height, width), |(y, x)| {
        if ((x / cell) + (y / cell)) & 1 == 0 {
            32.0
        } else {
            220.0
        }
    })
}

/// Dark left half, bright right half, split at column `split_x`.
pub fn vertical_step(height: usize, width: usize, split_x: usize) -> Array2<f32> {
    Array2::from_shape_fn((height, width), |(_, x)| if x < split_x { 0.0 } else { 1.0 })
}

/// Sparse scribble annotation: label 1 on a horizontal stroke in the left
/// half, label 2 on one in the right half, everything else unannotated.
pub fn two_class_scribbles(height: usize, width: usize, split_x: usize) -> Array2<u8> {
    let mut annotation = Array2::<u8>::zeros((height, width));
    let y = height / 2;
    for x in 1..split_x.saturating_sub(1) {
        annotation[[y, x]] = 1;
    }
    for x in split_x + 1..width - 1 {
        annotation[[y, x]] = 2;
    }
    annotation
}
