pub mod f32;
pub mod mask;
pub mod traits;

pub use self::f32::ImageF32;
pub use self::mask::{EdgeMask, EdgeSource};
pub use self::traits::{ImageView, ImageViewMut, Rows};
