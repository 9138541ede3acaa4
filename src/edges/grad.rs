//! Sobel gradients on an 8-bit image.
//!
//! - Correlates the 3×3 Sobel pair with the shared convolution engine
//!   (replicated borders).
//! - Keeps signed responses in `ImageF32`; they are not clamped here so the
//!   magnitude combiner sees both polarities.
use crate::filters::{convolve_f32, Kernel};
use crate::image::{GrayImage, ImageF32};

/// Horizontal and vertical gradient buffers for one image.
#[derive(Clone, Debug)]
pub struct Grad {
    /// Horizontal derivative (Sobel X)
    pub gx: ImageF32,
    /// Vertical derivative (Sobel Y)
    pub gy: ImageF32,
}

/// Compute Sobel gradients of a grayscale image.
pub fn sobel_gradients(img: &GrayImage) -> Grad {
    Grad {
        gx: convolve_f32(img, &Kernel::sobel_x()),
        gy: convolve_f32(img, &Kernel::sobel_y()),
    }
}
