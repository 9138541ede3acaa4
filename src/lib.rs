#![doc = include_str!("../README.md")]

// Image buffers and the crate error type.
pub mod error;
pub mod image;

// Transforms.
pub mod edges;
pub mod filters;
pub mod histogram;
pub mod noise;
pub mod remap;
pub mod threshold;

// Tool surface: transform catalogue, configuration, run reports.
pub mod config;
pub mod report;
pub mod transform;

// --- High-level re-exports -------------------------------------------------

pub use crate::error::{Error, Result};
pub use crate::image::GrayImage;
pub use crate::transform::{Pipeline, Transform};

pub use crate::edges::detect_edges;
pub use crate::filters::{blur, median_filter, sharpen};
pub use crate::histogram::{equalize, Histogram, HistogramComparison};
pub use crate::noise::{additive_white_noise, salt_and_pepper, speckle_noise, SaltPepperKind};
pub use crate::remap::{
    contrast_stretch, gamma_correction, quantize, threshold_fixed, ContrastStretch,
};
pub use crate::threshold::{adaptive_threshold, segmented_threshold, AdaptiveOptions, SegmentGrid};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```
/// use gray_ops::prelude::*;
///
/// let img = GrayImage::from_fn(32, 32, |x, y| (x * 8 + y) as u8);
/// let sharp = sharpen(&img);
/// let (binary, outcome) = adaptive_threshold(&sharp, &AdaptiveOptions::default()).unwrap();
/// assert_eq!(binary.width(), 32);
/// assert!(outcome.iterations >= 1);
/// ```
pub mod prelude {
    pub use crate::image::{GrayImage, ImageView};
    pub use crate::{
        adaptive_threshold, additive_white_noise, blur, contrast_stretch, detect_edges, equalize,
        gamma_correction, median_filter, quantize, salt_and_pepper, segmented_threshold, sharpen,
        speckle_noise, threshold_fixed, AdaptiveOptions, ContrastStretch, Error, Pipeline, Result,
        SaltPepperKind, SegmentGrid, Transform,
    };
}
