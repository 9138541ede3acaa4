//! Binary thresholding driven by the intensity histogram.
//!
//! - `adaptive`: iterative class-mean threshold with a bounded loop.
//! - `segmented`: the same search run independently on each cell of a grid.
//!
//! Fixed-limit thresholding is a plain lookup and lives in `remap`.

pub mod adaptive;
pub mod segmented;

pub use crate::remap::threshold_fixed;
pub use adaptive::{adaptive_threshold, find_threshold, AdaptiveOptions, ThresholdOutcome};
pub use segmented::{segmented_threshold, RegionThreshold, SegmentGrid};
