mod common;

use common::synthetic_image::checkerboard_f32;
use ndarray::{Array2, Axis};
use pixel_features::filters::BorderMode;
use pixel_features::{
    extract_features, format_data, Channel, Error, FeatureExtractor, FeatureOptions,
};

const SIZES: [(usize, usize); 5] = [(1, 1), (1, 7), (5, 1), (3, 4), (17, 23)];

fn textured(h: usize, w: usize) -> Array2<f32> {
    Array2::from_shape_fn((h, w), |(y, x)| ((x * 7 + y * 13) % 11) as f32 * 0.1)
}

/// Deterministic pseudo-random annotation with roughly one labelled pixel in three.
fn annotation(h: usize, w: usize, seed: usize) -> Array2<i32> {
    Array2::from_shape_fn((h, w), |(y, x)| {
        let v = (x * 31 + y * 17 + seed * 7) % 9;
        if v < 3 {
            v as i32 + 1
        } else if v == 4 {
            -1
        } else {
            0
        }
    })
}

#[test]
fn stack_shape_is_three_by_pixel_count() {
    for (h, w) in SIZES {
        let stack = extract_features(&textured(h, w)).unwrap();
        assert_eq!(stack.dim(), (3, h * w), "image {h}x{w}");
    }
}

#[test]
fn original_channel_is_identity() {
    for (h, w) in SIZES {
        let image = textured(h, w);
        let stack = extract_features(&image).unwrap();
        let flat: Vec<f32> = image.iter().copied().collect();
        assert_eq!(stack.row(Channel::Original.index()).to_vec(), flat);
    }
}

#[test]
fn extraction_is_deterministic() {
    let image = checkerboard_f32(20, 30, 5);
    for border in [BorderMode::Nearest, BorderMode::Reflect, BorderMode::Wrap] {
        let extractor =
            FeatureExtractor::new(FeatureOptions::default().with_smoothing_border(border)).unwrap();
        let a = extractor.extract(&image).unwrap();
        let b = extractor.extract(&image).unwrap();
        assert_eq!(a, b, "{border:?}");
    }
}

#[test]
fn formatter_keeps_exactly_the_positive_labels() {
    for (seed, (h, w)) in SIZES.into_iter().enumerate() {
        let image = textured(h, w);
        let labels = annotation(h, w, seed);
        let k = labels.iter().filter(|&&l| l > 0).count();

        let stack = extract_features(&image).unwrap();
        let data = format_data(&stack, &labels).unwrap();
        assert_eq!(data.features.dim(), (k, 3));
        assert_eq!(data.labels.len(), k);

        // Order preservation: row i comes from the i-th annotated pixel.
        let positions: Vec<(usize, usize)> = labels
            .indexed_iter()
            .filter(|(_, &l)| l > 0)
            .map(|(pos, _)| pos)
            .collect();
        for (i, &(y, x)) in positions.iter().enumerate() {
            assert_eq!(data.features[[i, Channel::Original.index()]], image[[y, x]]);
            assert_eq!(data.labels[i], labels[[y, x]]);
        }
    }
}

#[test]
fn all_zero_annotation_is_not_an_error() {
    let stack = extract_features(&textured(4, 6)).unwrap();
    let data = format_data(&stack, &Array2::<u16>::zeros((4, 6))).unwrap();
    assert!(data.is_empty());
    assert_eq!(data.features.len_of(Axis(1)), 3);
}

#[test]
fn annotation_may_have_any_shape_with_matching_size() {
    let stack = extract_features(&textured(4, 6)).unwrap();
    let reshaped = annotation(4, 6, 1).into_shape_with_order((3, 8)).unwrap();
    let data = format_data(&stack, &reshaped).unwrap();
    assert_eq!(data.len(), reshaped.iter().filter(|&&l| l > 0).count());
}

#[test]
fn mismatched_annotation_is_rejected() {
    let stack = extract_features(&textured(4, 6)).unwrap();
    let err = format_data(&stack, &Array2::<u8>::ones((4, 5))).unwrap_err();
    assert_eq!(
        err,
        Error::ShapeMismatch {
            pixels: 24,
            annotations: 20
        }
    );
}
