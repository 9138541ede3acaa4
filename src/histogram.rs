//! 256-bin intensity histograms and histogram equalization.
//!
//! Equalization maps level `v` to `round(255 · Σ_{i<v} p(i))`, where `p` is
//! the normalized frequency. The exclusive cumulative distribution is built
//! once per image (O(256)) and applied through a lookup table.
use crate::error::Result;
use crate::image::{GrayImage, ImageView};
use crate::remap::LookupTable;
use serde::Serialize;

pub const LEVELS: usize = 256;

/// Raw per-level pixel counts of one image.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Histogram {
    counts: [u64; LEVELS],
    total: u64,
}

impl Default for Histogram {
    fn default() -> Self {
        Self {
            counts: [0; LEVELS],
            total: 0,
        }
    }
}

impl Histogram {
    pub fn from_image(img: &GrayImage) -> Self {
        let mut hist = Self::default();
        for row in img.rows() {
            for &v in row {
                hist.accumulate(v);
            }
        }
        hist
    }

    #[inline]
    pub fn accumulate(&mut self, v: u8) {
        self.counts[v as usize] += 1;
        self.total += 1;
    }

    #[inline]
    pub fn count(&self, level: u8) -> u64 {
        self.counts[level as usize]
    }

    pub fn counts(&self) -> &[u64; LEVELS] {
        &self.counts
    }

    #[inline]
    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn max_count(&self) -> u64 {
        self.counts.iter().copied().max().unwrap_or(0)
    }

    /// `count / total` per level; all zeros for an empty image.
    pub fn frequencies(&self) -> [f64; LEVELS] {
        let mut freqs = [0.0; LEVELS];
        if self.total == 0 {
            return freqs;
        }
        let inv = 1.0 / self.total as f64;
        for (f, &c) in freqs.iter_mut().zip(self.counts.iter()) {
            *f = c as f64 * inv;
        }
        freqs
    }

    /// Exclusive cumulative distribution: entry `v` sums frequencies of all
    /// levels strictly below `v`.
    pub fn cumulative(&self) -> [f64; LEVELS] {
        let freqs = self.frequencies();
        let mut cdf = [0.0; LEVELS];
        let mut running = 0.0;
        for (c, &f) in cdf.iter_mut().zip(freqs.iter()) {
            *c = running;
            running += f;
        }
        cdf
    }

    /// Mean intensity, `None` for an empty histogram.
    pub fn mean(&self) -> Option<f64> {
        if self.total == 0 {
            return None;
        }
        let sum: u64 = self
            .counts
            .iter()
            .enumerate()
            .map(|(level, &c)| level as u64 * c)
            .sum();
        Some(sum as f64 / self.total as f64)
    }

    /// Sum and count of samples whose level satisfies `pred`.
    pub(crate) fn partial_moments(&self, mut pred: impl FnMut(usize) -> bool) -> (u64, u64) {
        self.counts
            .iter()
            .enumerate()
            .filter(|&(level, _)| pred(level))
            .fold((0, 0), |(sum, n), (level, &c)| {
                (sum + level as u64 * c, n + c)
            })
    }

    pub fn equalization_table(&self) -> LookupTable {
        let cdf = self.cumulative();
        LookupTable::from_fn(|v| (255.0 * cdf[v as usize]).round().clamp(0.0, 255.0) as u8)
    }
}

/// Histogram equalization.
pub fn equalize(img: &GrayImage) -> GrayImage {
    Histogram::from_image(img).equalization_table().apply(img)
}

/// Paired histograms of an original and an edited image, the input a
/// side-by-side histogram chart needs.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistogramComparison {
    pub original_counts: Vec<u64>,
    pub edited_counts: Vec<u64>,
    pub original_frequencies: Vec<f64>,
    pub edited_frequencies: Vec<f64>,
    /// Largest count across both histograms, for a shared chart scale.
    pub max_count: u64,
}

impl HistogramComparison {
    pub fn new(original: &GrayImage, edited: &GrayImage) -> Result<Self> {
        original.ensure_same_size(edited)?;
        let a = Histogram::from_image(original);
        let b = Histogram::from_image(edited);
        Ok(Self {
            original_counts: a.counts.to_vec(),
            edited_counts: b.counts.to_vec(),
            original_frequencies: a.frequencies().to_vec(),
            edited_frequencies: b.frequencies().to_vec(),
            max_count: a.max_count().max(b.max_count()),
        })
    }

    /// Levels whose frequency differs between the two images.
    pub fn changed_levels(&self) -> usize {
        self.original_counts
            .iter()
            .zip(&self.edited_counts)
            .filter(|(a, b)| a != b)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn frequencies_sum_to_one() {
        let img = GrayImage::from_fn(10, 7, |x, y| (x * 25 + y) as u8);
        let hist = Histogram::from_image(&img);
        assert_eq!(hist.total(), 70);
        let sum: f64 = hist.frequencies().iter().sum();
        assert!((sum - 1.0).abs() < 1e-12);
    }

    #[test]
    fn cumulative_is_exclusive() {
        let img = GrayImage::from_raw(4, 1, vec![0, 0, 1, 3]).unwrap();
        let cdf = Histogram::from_image(&img).cumulative();
        assert_eq!(cdf[0], 0.0);
        assert_eq!(cdf[1], 0.5);
        assert_eq!(cdf[2], 0.75);
        assert_eq!(cdf[3], 0.75);
        assert_eq!(cdf[4], 1.0);
    }

    #[test]
    fn equalizing_a_constant_image_stays_constant() {
        for v in [0u8, 1, 128, 255] {
            let img = GrayImage::filled(9, 5, v);
            let out = equalize(&img);
            let first = out.get(0, 0);
            assert!(out.pixels().iter().all(|&p| p == first), "fill={v}");
        }
    }

    #[test]
    fn equalization_spreads_two_clusters() {
        let img = GrayImage::from_fn(4, 4, |x, _| if x < 2 { 100 } else { 110 });
        let out = equalize(&img);
        assert_eq!(out.get(0, 0), 0);
        // half of the pixels lie strictly below 110
        assert_eq!(out.get(3, 0), 128);
    }

    #[test]
    fn mean_and_partial_moments() {
        let img = GrayImage::from_raw(4, 1, vec![10, 10, 200, 200]).unwrap();
        let hist = Histogram::from_image(&img);
        assert_eq!(hist.mean(), Some(105.0));
        assert_eq!(hist.partial_moments(|l| l <= 127), (20, 2));
        assert_eq!(hist.partial_moments(|l| l > 127), (400, 2));
        assert_eq!(Histogram::default().mean(), None);
    }

    #[test]
    fn comparison_pairs_counts() {
        let a = GrayImage::filled(3, 3, 10);
        let b = GrayImage::from_fn(3, 3, |x, _| if x == 0 { 10 } else { 20 });
        let cmp = HistogramComparison::new(&a, &b).unwrap();
        assert_eq!(cmp.original_counts.len(), LEVELS);
        assert_eq!(cmp.original_counts[10], 9);
        assert_eq!(cmp.edited_counts[10], 3);
        assert_eq!(cmp.edited_counts[20], 6);
        assert_eq!(cmp.max_count, 9);
        assert_eq!(cmp.changed_levels(), 2);

        let c = GrayImage::new(2, 3);
        assert!(matches!(
            HistogramComparison::new(&a, &c),
            Err(Error::DimensionMismatch { .. })
        ));
    }
}
