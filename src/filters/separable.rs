//! Separable 2D correlation: a horizontal 1D pass followed by a vertical one.
use super::border::BorderMode;
use crate::image::{ImageF32, ImageView, ImageViewMut};

/// Trait implemented by separable 1D filters.
pub trait SeparableFilter {
    /// Return the 1D taps (in left-to-right order, odd length, centred). The
    /// same taps are used for the horizontal and the vertical pass.
    fn taps(&self) -> &[f32];

    /// Border policy used by both passes.
    fn border(&self) -> BorderMode {
        BorderMode::Nearest
    }
}

/// Apply a separable filter with identical row and column taps.
pub fn apply<F: SeparableFilter + ?Sized>(filter: &F, src: &ImageF32) -> ImageF32 {
    correlate_separable(src, filter.taps(), filter.taps(), filter.border())
}

/// Correlate `src` with `row_taps` along x, then with `col_taps` along y.
///
/// Both tap slices must have odd length; the centre tap sits on the output
/// pixel. Out-of-range samples are resolved through `border`.
pub fn correlate_separable(
    src: &ImageF32,
    row_taps: &[f32],
    col_taps: &[f32],
    border: BorderMode,
) -> ImageF32 {
    debug_assert!(row_taps.len() % 2 == 1 && col_taps.len() % 2 == 1);
    let (w, h) = (src.width(), src.height());
    if w == 0 || h == 0 {
        return ImageF32::new(w, h);
    }
    let fill = border.fill_value();

    let rx = row_taps.len() / 2;
    let x_table = border.index_table(w, rx);
    let mut tmp = ImageF32::new(w, h);
    for (y, src_row) in src.rows().enumerate() {
        let dst_row = tmp.row_mut(y);
        for (x, dst_px) in dst_row.iter_mut().enumerate() {
            let window = &x_table[x..x + row_taps.len()];
            let mut acc = 0.0f32;
            for (&tap, &sx) in row_taps.iter().zip(window) {
                acc += tap * sx.map_or(fill, |sx| src_row[sx]);
            }
            *dst_px = acc;
        }
    }

    let ry = col_taps.len() / 2;
    let y_table = border.index_table(h, ry);
    let mut out = ImageF32::new(w, h);
    for y in 0..h {
        let window = &y_table[y..y + col_taps.len()];
        let dst_row = out.row_mut(y);
        for (&tap, &sy) in col_taps.iter().zip(window) {
            match sy {
                Some(sy) => {
                    for (dst_px, &v) in dst_row.iter_mut().zip(tmp.row(sy)) {
                        *dst_px += tap * v;
                    }
                }
                None => {
                    for dst_px in dst_row.iter_mut() {
                        *dst_px += tap * fill;
                    }
                }
            }
        }
    }
    out
}
