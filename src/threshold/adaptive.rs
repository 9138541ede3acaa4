//! Iterative (isodata-style) threshold selection.
//!
//! Starting from `initial`, split the histogram into `{≤ T}` and `{> T}`,
//! set `T` to the average of the two class means, and repeat until the
//! relative change `|T − T_prev| / T` drops below `tolerance`. The loop is
//! capped at `max_iterations`; on hitting the cap the latest estimate is used.
//!
//! An empty class borrows the whole-image mean, so the update is always
//! defined. Working on the 256-bin histogram keeps each iteration O(256).
use crate::error::{Error, Result};
use crate::histogram::Histogram;
use crate::image::GrayImage;
use crate::remap::LookupTable;
use log::{debug, warn};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdaptiveOptions {
    /// Starting estimate of the threshold.
    pub initial: f64,
    /// Stop once the relative change falls below this value.
    pub tolerance: f64,
    /// Hard cap on refinement steps.
    pub max_iterations: usize,
}

impl Default for AdaptiveOptions {
    fn default() -> Self {
        Self {
            initial: 127.0,
            tolerance: 0.1,
            max_iterations: 100,
        }
    }
}

impl AdaptiveOptions {
    pub fn validate(&self) -> Result<()> {
        if !(self.tolerance.is_finite() && self.tolerance > 0.0) {
            return Err(Error::InvalidTolerance(self.tolerance));
        }
        if !self.initial.is_finite() {
            return Err(Error::InvalidInitialThreshold(self.initial));
        }
        if self.max_iterations == 0 {
            return Err(Error::ZeroIterations);
        }
        Ok(())
    }
}

/// Result of one threshold search.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThresholdOutcome {
    /// Final threshold; samples `<= threshold` become 0.
    pub threshold: f64,
    pub iterations: usize,
    /// False when the iteration cap was reached first.
    pub converged: bool,
}

/// Find the iterative threshold of a histogram.
pub fn find_threshold(hist: &Histogram, opts: &AdaptiveOptions) -> Result<ThresholdOutcome> {
    opts.validate()?;
    let Some(global_mean) = hist.mean() else {
        return Ok(ThresholdOutcome {
            threshold: opts.initial,
            iterations: 0,
            converged: true,
        });
    };

    let mut t = opts.initial;
    for iteration in 1..=opts.max_iterations {
        let below = class_mean(hist.partial_moments(|l| l as f64 <= t), global_mean);
        let above = class_mean(hist.partial_moments(|l| l as f64 > t), global_mean);
        let next = 0.5 * (below + above);
        let change = relative_change(t, next);
        debug!(
            "adaptive threshold iter={iteration} t_prev={t:.3} t={next:.3} change={change:.4}"
        );
        t = next;
        if change < opts.tolerance {
            return Ok(ThresholdOutcome {
                threshold: t,
                iterations: iteration,
                converged: true,
            });
        }
    }

    warn!(
        "adaptive threshold did not converge within {} iterations, using t={t:.3}",
        opts.max_iterations
    );
    Ok(ThresholdOutcome {
        threshold: t,
        iterations: opts.max_iterations,
        converged: false,
    })
}

/// Binarize `img` on its iteratively derived threshold.
pub fn adaptive_threshold(
    img: &GrayImage,
    opts: &AdaptiveOptions,
) -> Result<(GrayImage, ThresholdOutcome)> {
    let outcome = find_threshold(&Histogram::from_image(img), opts)?;
    let table = binarize_table(outcome.threshold);
    Ok((table.apply(img), outcome))
}

pub(crate) fn binarize_table(threshold: f64) -> LookupTable {
    LookupTable::from_fn(|v| if v as f64 <= threshold { 0 } else { 255 })
}

fn class_mean((sum, n): (u64, u64), fallback: f64) -> f64 {
    if n == 0 {
        fallback
    } else {
        sum as f64 / n as f64
    }
}

fn relative_change(prev: f64, next: f64) -> f64 {
    let delta = (next - prev).abs();
    if next.abs() > f64::EPSILON {
        delta / next.abs()
    } else {
        delta
    }
}
