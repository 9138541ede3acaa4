//! Single-channel image buffers shared by every transform.
//!
//! - `GrayImage`: owned 8-bit samples, the input and output type of all
//!   transforms.
//! - `ImageF32`: owned float samples for unclamped intermediates (gradients).
//! - `Rect`: sub-rectangle used by region-wise processing.
//! - `io`: thin adapters to decode/encode files through the `image` crate.
pub mod f32;
pub mod io;
pub mod rect;
pub mod traits;
pub mod u8;

pub use self::f32::ImageF32;
pub use self::rect::Rect;
pub use self::traits::{ImageView, ImageViewMut, Rows};
pub use self::u8::GrayImage;

/// Round to nearest and saturate into `[0, 255]`. NaN maps to 0.
#[inline]
pub fn saturate_u8(v: f32) -> u8 {
    if v.is_nan() {
        return 0;
    }
    v.round().clamp(0.0, 255.0) as u8
}
