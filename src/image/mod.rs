pub mod f32;
pub mod intensity;
pub mod layout;
pub mod traits;

pub use self::f32::ImageF32;
pub use self::intensity::Intensity;
pub use self::layout::{flatten_row_major, flatten_row_major_map, image_dims};
pub use self::traits::{ImageView, ImageViewMut, Rows};
