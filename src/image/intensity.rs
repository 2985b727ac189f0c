//! Numeric pixel types accepted as image input.

/// A scalar pixel intensity that can be read as `f32`.
///
/// Conversion is a plain numeric cast: no rescaling to `[0, 1]`, and wide
/// integer or `f64` values round to the nearest representable `f32`.
pub trait Intensity: Copy {
    fn to_f32(self) -> f32;
}

macro_rules! impl_intensity {
    ($($t:ty),*) => {
        $(
            impl Intensity for $t {
                #[inline]
                fn to_f32(self) -> f32 {
                    self as f32
                }
            }
        )*
    };
}

impl_intensity!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize, f32, f64);
