//! Serializable catalogue of every transform plus an ordered pipeline.
//!
//! A `Transform` names one operation with its parameters; defaults follow the
//! interactive tool this crate backs (gamma 1, 3×3 median, 2 % salt and
//! pepper, speckle σ 1, white noise σ 50, limit 127, 3×3 segments, 255
//! quantization levels). Tools deserialize these from JSON:
//!
//! ```json
//! { "seed": 7, "steps": [ { "op": "median", "window": 5 }, { "op": "equalize" } ] }
//! ```
use crate::edges::detect_edges;
use crate::error::Result;
use crate::filters::{blur, convolve_u8, median_filter, sharpen, Kernel};
use crate::histogram::equalize;
use crate::image::GrayImage;
use crate::noise::{
    additive_white_noise, salt_and_pepper, speckle_noise, validate_sigma, SaltPepperKind,
};
use crate::remap::{contrast_stretch, gamma_table, quantize_table, threshold_fixed, ContrastStretch};
use crate::report::StepReport;
use crate::threshold::{adaptive_threshold, segmented_threshold, AdaptiveOptions, SegmentGrid};
use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::time::Instant;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Transform {
    Sharpen,
    Blur,
    Median {
        #[serde(default = "default_window")]
        window: usize,
    },
    Gamma {
        #[serde(default = "default_gamma")]
        gamma: f32,
    },
    Equalize,
    ContrastStretch(ContrastStretch),
    Quantize {
        #[serde(default = "default_levels")]
        levels: u32,
    },
    Threshold {
        #[serde(default = "default_limit")]
        limit: u8,
    },
    AdaptiveThreshold {
        #[serde(default)]
        options: AdaptiveOptions,
    },
    SegmentedThreshold {
        #[serde(default = "default_rows")]
        rows: usize,
        #[serde(default = "default_cols")]
        cols: usize,
        #[serde(default)]
        options: AdaptiveOptions,
    },
    Edges,
    /// Arbitrary square kernel, weights in row-major order.
    Convolve { size: usize, weights: Vec<f32> },
    SaltPepper {
        #[serde(default = "default_intensity")]
        intensity: f64,
        #[serde(default)]
        kind: SaltPepperKind,
    },
    Speckle {
        #[serde(default = "default_speckle_sigma")]
        sigma: f64,
    },
    WhiteNoise {
        #[serde(default = "default_white_sigma")]
        sigma: f64,
    },
}

fn default_window() -> usize {
    3
}
fn default_gamma() -> f32 {
    1.0
}
fn default_levels() -> u32 {
    255
}
fn default_limit() -> u8 {
    127
}
fn default_rows() -> usize {
    SegmentGrid::default().rows
}
fn default_cols() -> usize {
    SegmentGrid::default().cols
}
fn default_intensity() -> f64 {
    0.02
}
fn default_speckle_sigma() -> f64 {
    1.0
}
fn default_white_sigma() -> f64 {
    50.0
}

/// Output of one transform application.
#[derive(Clone, Debug)]
pub struct Applied {
    pub image: GrayImage,
    /// Per-step details worth reporting (thresholds found, grid cells).
    pub report: StepReport,
}

impl Transform {
    pub fn name(&self) -> &'static str {
        match self {
            Transform::Sharpen => "sharpen",
            Transform::Blur => "blur",
            Transform::Median { .. } => "median",
            Transform::Gamma { .. } => "gamma",
            Transform::Equalize => "equalize",
            Transform::ContrastStretch(_) => "contrast_stretch",
            Transform::Quantize { .. } => "quantize",
            Transform::Threshold { .. } => "threshold",
            Transform::AdaptiveThreshold { .. } => "adaptive_threshold",
            Transform::SegmentedThreshold { .. } => "segmented_threshold",
            Transform::Edges => "edges",
            Transform::Convolve { .. } => "convolve",
            Transform::SaltPepper { .. } => "salt_pepper",
            Transform::Speckle { .. } => "speckle",
            Transform::WhiteNoise { .. } => "white_noise",
        }
    }

    /// True for the noise generators, which draw from the random source.
    pub fn is_random(&self) -> bool {
        matches!(
            self,
            Transform::SaltPepper { .. } | Transform::Speckle { .. } | Transform::WhiteNoise { .. }
        )
    }

    /// Check parameters that do not depend on the image.
    pub fn validate(&self) -> Result<()> {
        match self {
            Transform::Median { window } => crate::filters::median::validate_window(*window),
            Transform::Gamma { gamma } => gamma_table(*gamma).map(|_| ()),
            Transform::ContrastStretch(stretch) => stretch.validate(),
            Transform::Quantize { levels } => quantize_table(*levels).map(|_| ()),
            Transform::AdaptiveThreshold { options } => options.validate(),
            Transform::SegmentedThreshold { options, .. } => options.validate(),
            Transform::Convolve { size, weights } => {
                Kernel::new(*size, weights.clone()).map(|_| ())
            }
            Transform::Speckle { sigma } | Transform::WhiteNoise { sigma } => {
                validate_sigma(*sigma)
            }
            Transform::Sharpen
            | Transform::Blur
            | Transform::Equalize
            | Transform::Threshold { .. }
            | Transform::Edges
            | Transform::SaltPepper { .. } => Ok(()),
        }
    }

    /// Apply to `img`, discarding step details.
    pub fn apply<R: Rng + ?Sized>(&self, img: &GrayImage, rng: &mut R) -> Result<GrayImage> {
        self.apply_traced(img, rng).map(|applied| applied.image)
    }

    /// Apply to `img` and collect step details (elapsed time, thresholds).
    pub fn apply_traced<R: Rng + ?Sized>(&self, img: &GrayImage, rng: &mut R) -> Result<Applied> {
        let start = Instant::now();
        let mut report = StepReport::new(self.name());
        let image = match self {
            Transform::Sharpen => sharpen(img),
            Transform::Blur => blur(img),
            Transform::Median { window } => median_filter(img, *window)?,
            Transform::Gamma { gamma } => gamma_table(*gamma)?.apply(img),
            Transform::Equalize => equalize(img),
            Transform::ContrastStretch(stretch) => contrast_stretch(img, stretch)?,
            Transform::Quantize { levels } => quantize_table(*levels)?.apply(img),
            Transform::Threshold { limit } => threshold_fixed(img, *limit),
            Transform::AdaptiveThreshold { options } => {
                let (out, outcome) = adaptive_threshold(img, options)?;
                report.threshold = Some(outcome);
                out
            }
            Transform::SegmentedThreshold {
                rows,
                cols,
                options,
            } => {
                let grid = SegmentGrid::new(*rows, *cols);
                let (out, cells) = segmented_threshold(img, grid, options)?;
                report.regions = cells;
                out
            }
            Transform::Edges => detect_edges(img),
            Transform::Convolve { size, weights } => {
                convolve_u8(img, &Kernel::new(*size, weights.clone())?)
            }
            Transform::SaltPepper { intensity, kind } => {
                salt_and_pepper(img, *intensity, *kind, rng)
            }
            Transform::Speckle { sigma } => speckle_noise(img, *sigma, rng)?,
            Transform::WhiteNoise { sigma } => additive_white_noise(img, *sigma, rng)?,
        };
        report.elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;
        Ok(Applied { image, report })
    }
}

/// Ordered list of transforms sharing one random source.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Pipeline {
    /// Seed for the noise generators; `None` draws one from the OS.
    #[serde(default)]
    pub seed: Option<u64>,
    pub steps: Vec<Transform>,
}

impl Pipeline {
    pub fn new(steps: Vec<Transform>) -> Self {
        Self { seed: None, steps }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validate every step before any of them runs.
    pub fn validate(&self) -> Result<()> {
        self.steps.iter().try_for_each(Transform::validate)
    }

    /// Run with a generator seeded from `seed` (or OS entropy).
    pub fn run(&self, img: &GrayImage) -> Result<(GrayImage, Vec<StepReport>)> {
        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        self.run_with_rng(img, &mut rng)
    }

    pub fn run_with_rng<R: Rng + ?Sized>(
        &self,
        img: &GrayImage,
        rng: &mut R,
    ) -> Result<(GrayImage, Vec<StepReport>)> {
        self.validate()?;
        let mut current = img.clone();
        let mut reports = Vec::with_capacity(self.steps.len());
        for (idx, step) in self.steps.iter().enumerate() {
            let applied = step.apply_traced(&current, rng)?;
            debug!(
                "pipeline step {idx} {} took {:.3} ms",
                step.name(),
                applied.report.elapsed_ms
            );
            current = applied.image;
            reports.push(applied.report);
        }
        Ok((current, reports))
    }
}
