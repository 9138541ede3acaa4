use super::grad::{sobel_gradients, Grad};
use crate::error::{Error, Result};
use crate::image::{saturate_u8, GrayImage, ImageF32, ImageView};

/// Fuse two gradient buffers into `255 · sqrt((gx/255)² + (gy/255)²)`,
/// rounded and clamped to `[0, 255]`.
pub fn combine_magnitude(gx: &ImageF32, gy: &ImageF32) -> Result<GrayImage> {
    if gx.dimensions() != gy.dimensions() {
        return Err(Error::DimensionMismatch {
            expected: gx.dimensions(),
            actual: gy.dimensions(),
        });
    }
    Ok(magnitude(gx, gy))
}

/// Sobel edge map of `img`.
pub fn detect_edges(img: &GrayImage) -> GrayImage {
    let Grad { gx, gy } = sobel_gradients(img);
    magnitude(&gx, &gy)
}

// Callers guarantee equal dimensions.
fn magnitude(gx: &ImageF32, gy: &ImageF32) -> GrayImage {
    GrayImage::from_fn(gx.w, gx.h, |x, y| {
        let nx = gx.get(x, y) / 255.0;
        let ny = gy.get(x, y) / 255.0;
        saturate_u8(255.0 * nx.hypot(ny))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flat_image_has_no_edges() {
        let img = GrayImage::filled(8, 6, 140);
        assert_eq!(detect_edges(&img), GrayImage::new(8, 6));
    }

    #[test]
    fn vertical_step_lights_up_boundary_columns() {
        let img = GrayImage::from_fn(8, 5, |x, _| if x < 4 { 20 } else { 60 });
        let edges = detect_edges(&img);
        for y in 0..5 {
            // |gx| = 4 * 40 = 160 at the two columns adjacent to the step
            assert_eq!(edges.get(3, y), 160);
            assert_eq!(edges.get(4, y), 160);
            assert_eq!(edges.get(0, y), 0);
            assert_eq!(edges.get(7, y), 0);
        }
    }

    #[test]
    fn strong_opposing_gradients_saturate_instead_of_wrapping() {
        let mut gx = ImageF32::new(2, 1);
        let mut gy = ImageF32::new(2, 1);
        gx.set(0, 0, -255.0);
        gy.set(0, 0, 255.0);
        gx.set(1, 0, 30.0);
        gy.set(1, 0, -40.0);
        let mag = combine_magnitude(&gx, &gy).unwrap();
        assert_eq!(mag.get(0, 0), 255);
        assert_eq!(mag.get(1, 0), 50);
    }

    #[test]
    fn mismatched_gradients_are_rejected() {
        let gx = ImageF32::new(3, 3);
        let gy = ImageF32::new(3, 2);
        assert!(matches!(
            combine_magnitude(&gx, &gy),
            Err(Error::DimensionMismatch { .. })
        ));
    }
}
