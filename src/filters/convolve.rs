//! Neighborhood convolution with replicated borders.
//!
//! `convolve_f32` returns the raw weighted sums (negative values and values
//! above 255 survive), which is what gradient kernels need. `convolve_u8`
//! rounds and saturates the same sums back into an 8-bit image.
//!
//! Complexity: O(W·H·k²) for a k×k kernel; memory: one padded copy of the
//! input plus the output buffer.
use super::border::Padded;
use super::kernel::Kernel;
use crate::image::{GrayImage, ImageF32, ImageViewMut};

/// Correlate `kernel` over `img`, keeping unclamped float responses.
pub fn convolve_f32(img: &GrayImage, kernel: &Kernel) -> ImageF32 {
    let (w, h) = (img.width(), img.height());
    let mut out = ImageF32::new(w, h);
    if img.is_empty() {
        return out;
    }

    let size = kernel.size();
    let padded = Padded::replicate(img, kernel.radius());
    for y in 0..h {
        let dst = out.row_mut(y);
        for (x, dst_px) in dst.iter_mut().enumerate() {
            let mut acc = 0.0f32;
            for ky in 0..size {
                let window = &padded.row(y + ky)[x..x + size];
                for (&sample, &weight) in window.iter().zip(kernel.row(ky)) {
                    acc += sample as f32 * weight;
                }
            }
            *dst_px = acc;
        }
    }
    out
}

/// Correlate `kernel` over `img`, rounding and clamping into `[0, 255]`.
pub fn convolve_u8(img: &GrayImage, kernel: &Kernel) -> GrayImage {
    convolve_f32(img, kernel).to_gray_saturated()
}

/// Sharpen with the centre-weighted 3×3 Laplacian kernel.
pub fn sharpen(img: &GrayImage) -> GrayImage {
    convolve_u8(img, &Kernel::sharpen())
}

/// Uniform 3×3 averaging blur.
pub fn blur(img: &GrayImage) -> GrayImage {
    convolve_u8(img, &Kernel::box_blur())
}
