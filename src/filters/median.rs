//! Median (order-statistic) filter over an `n × n` window.
//!
//! Borders are extended by `(n − 1) / 2` replicated pixels, every window
//! contributes exactly `n²` samples, and the output is the element at index
//! `⌊n² / 2⌋` after sorting. Complexity O(W·H·n² log n²).
use super::border::Padded;
use crate::error::{Error, Result};
use crate::image::{GrayImage, ImageViewMut};

/// Apply a median filter with an odd, positive window size.
pub fn median_filter(img: &GrayImage, window: usize) -> Result<GrayImage> {
    validate_window(window)?;
    if img.is_empty() || window == 1 {
        return Ok(img.clone());
    }

    let mut out = GrayImage::new(img.width(), img.height());
    let padded = Padded::replicate(img, window / 2);
    let mut samples = Vec::with_capacity(window * window);
    for y in 0..img.height() {
        let dst = out.row_mut(y);
        for (x, dst_px) in dst.iter_mut().enumerate() {
            samples.clear();
            for ky in 0..window {
                samples.extend_from_slice(&padded.row(y + ky)[x..x + window]);
            }
            debug_assert_eq!(samples.len(), window * window);
            let mid = samples.len() / 2;
            let (_, median, _) = samples.select_nth_unstable(mid);
            *dst_px = *median;
        }
    }
    Ok(out)
}

pub fn validate_window(window: usize) -> Result<()> {
    if window == 0 || window % 2 == 0 {
        return Err(Error::InvalidWindow(window));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_of_one_is_identity() {
        let img = GrayImage::from_fn(6, 4, |x, y| (x * 37 + y * 11) as u8);
        assert_eq!(median_filter(&img, 1).unwrap(), img);
    }

    #[test]
    fn rejects_even_and_zero_windows() {
        let img = GrayImage::new(4, 4);
        assert!(matches!(median_filter(&img, 0), Err(Error::InvalidWindow(0))));
        assert!(matches!(median_filter(&img, 4), Err(Error::InvalidWindow(4))));
    }

    #[test]
    fn removes_isolated_impulse() {
        let mut img = GrayImage::filled(7, 7, 50);
        img.set(3, 3, 255);
        img.set(0, 0, 0);
        let out = median_filter(&img, 3).unwrap();
        assert_eq!(out, GrayImage::filled(7, 7, 50));
    }

    #[test]
    fn uses_full_window_not_a_truncated_one() {
        // Left half dark, right half bright; a truncated window would bias
        // the boundary column toward whichever samples were gathered first.
        let img = GrayImage::from_fn(6, 6, |x, _| if x < 3 { 10 } else { 200 });
        let out = median_filter(&img, 5).unwrap();
        // Column 2 window spans x in 0..=4: 3 dark columns, 2 bright.
        assert!((0..6).all(|y| out.get(2, y) == 10));
        // Column 3 window spans x in 1..=5: 2 dark columns, 3 bright.
        assert!((0..6).all(|y| out.get(3, y) == 200));
    }

    #[test]
    fn larger_window_matches_sorted_reference() {
        let img = GrayImage::from_fn(5, 5, |x, y| ((x * 53 + y * 97) % 251) as u8);
        let out = median_filter(&img, 3).unwrap();
        let mut window: Vec<u8> = Vec::new();
        for dy in 1..=3 {
            for dx in 1..=3 {
                window.push(img.get(dx, dy));
            }
        }
        window.sort_unstable();
        assert_eq!(out.get(2, 2), window[4]);
    }
}
