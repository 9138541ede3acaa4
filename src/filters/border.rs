//! Border replication used by the neighborhood filters.
//!
//! The padded copy lives only for the duration of one filter call.
use crate::image::{GrayImage, ImageView};

/// Copy of an image extended by `radius` replicated pixels on every side.
pub(crate) struct Padded {
    pub(crate) w: usize,
    data: Vec<u8>,
}

impl Padded {
    /// Replicate the outermost rows/columns outward. `src` must be non-empty.
    pub(crate) fn replicate(src: &GrayImage, radius: usize) -> Self {
        debug_assert!(!src.is_empty(), "cannot pad an empty image");
        let sw = src.width();
        let sh = src.height();
        let w = sw + 2 * radius;
        let h = sh + 2 * radius;
        let mut data = Vec::with_capacity(w * h);
        for py in 0..h {
            let sy = py.saturating_sub(radius).min(sh - 1);
            let row = src.row(sy);
            let left = row[0];
            let right = row[sw - 1];
            data.extend(std::iter::repeat(left).take(radius));
            data.extend_from_slice(row);
            data.extend(std::iter::repeat(right).take(radius));
        }
        Self { w, data }
    }

    /// Row of the padded buffer; `py` is in padded coordinates.
    #[inline]
    pub(crate) fn row(&self, py: usize) -> &[u8] {
        &self.data[py * self.w..(py + 1) * self.w]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replicates_corners_and_edges() {
        let src = GrayImage::from_raw(2, 2, vec![1, 2, 3, 4]).unwrap();
        let p = Padded::replicate(&src, 1);
        assert_eq!((p.w, p.data.len()), (4, 16));
        assert_eq!(p.row(0), &[1, 1, 2, 2]);
        assert_eq!(p.row(1), &[1, 1, 2, 2]);
        assert_eq!(p.row(2), &[3, 3, 4, 4]);
        assert_eq!(p.row(3), &[3, 3, 4, 4]);
    }

    #[test]
    fn radius_larger_than_image_still_replicates() {
        let src = GrayImage::from_raw(1, 1, vec![9]).unwrap();
        let p = Padded::replicate(&src, 3);
        assert_eq!((p.w, p.data.len()), (7, 49));
        assert!((0..7).all(|y| p.row(y).iter().all(|&v| v == 9)));
    }
}
