//! Pointwise intensity remapping.
//!
//! Every operation here is a function of the input sample alone, so each one
//! is evaluated once per intensity level into a 256-entry `LookupTable` and
//! then applied across the image. Rule outputs are rounded and saturated into
//! `[0, 255]` when the table is built.
//!
//! - `gamma_correction`: `255 · (v / 255)^γ`.
//! - `contrast_stretch`: three-segment piecewise-linear map through
//!   `(r1, s1)` and `(r2, s2)`.
//! - `quantize`: snap to the nearest of `levels` evenly spaced intensities.
//! - `threshold_fixed`: `v <= limit → 0`, otherwise `255`.
use crate::error::{Error, Result};
use crate::image::{saturate_u8, GrayImage};
use serde::{Deserialize, Serialize};

/// Precomputed per-intensity mapping.
#[derive(Clone, PartialEq, Eq)]
pub struct LookupTable {
    table: [u8; 256],
}

impl LookupTable {
    /// Tabulate an integer-valued rule.
    pub fn from_fn(mut f: impl FnMut(u8) -> u8) -> Self {
        let mut table = [0u8; 256];
        for (level, slot) in table.iter_mut().enumerate() {
            *slot = f(level as u8);
        }
        Self { table }
    }

    /// Tabulate a real-valued rule, rounding and saturating each entry.
    pub fn from_real_fn(mut f: impl FnMut(f32) -> f32) -> Self {
        Self::from_fn(|v| saturate_u8(f(v as f32)))
    }

    #[inline]
    pub fn get(&self, v: u8) -> u8 {
        self.table[v as usize]
    }

    pub fn as_array(&self) -> &[u8; 256] {
        &self.table
    }

    /// Produce a new image with every sample passed through the table.
    pub fn apply(&self, img: &GrayImage) -> GrayImage {
        img.map(|v| self.table[v as usize])
    }
}

impl std::fmt::Debug for LookupTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let changed = self
            .table
            .iter()
            .enumerate()
            .filter(|&(i, &v)| i != v as usize)
            .count();
        f.debug_struct("LookupTable")
            .field("changed_levels", &changed)
            .finish()
    }
}

/// Gamma correction: `round(255 · (v / 255)^γ)`. `γ` must be finite and `> 0`.
pub fn gamma_correction(img: &GrayImage, gamma: f32) -> Result<GrayImage> {
    Ok(gamma_table(gamma)?.apply(img))
}

pub fn gamma_table(gamma: f32) -> Result<LookupTable> {
    if !(gamma.is_finite() && gamma > 0.0) {
        return Err(Error::InvalidGamma(gamma));
    }
    Ok(LookupTable::from_real_fn(|v| {
        255.0 * (v / 255.0).powf(gamma)
    }))
}

/// Breakpoints of a three-segment piecewise-linear contrast stretch.
///
/// The segments are `[0, r1]`, `(r1, r2]`, `(r2, 255]` with slopes
/// `α = s1 / r1`, `β = (s2 − s1) / (r2 − r1)` and `γ = (255 − s2) / (255 − r2)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContrastStretch {
    pub r1: u8,
    pub r2: u8,
    pub s1: u8,
    pub s2: u8,
}

impl ContrastStretch {
    /// Validated constructor; requires `0 < r1 < r2 < 255`.
    pub fn new(r1: u8, r2: u8, s1: u8, s2: u8) -> Result<Self> {
        let stretch = Self { r1, r2, s1, s2 };
        stretch.validate()?;
        Ok(stretch)
    }

    pub fn validate(&self) -> Result<()> {
        if self.r1 == 0 || self.r1 >= self.r2 || self.r2 == 255 {
            return Err(Error::DegenerateBreakpoints {
                r1: self.r1,
                r2: self.r2,
            });
        }
        Ok(())
    }

    /// Slopes `(α, β, γ)` of the three segments.
    pub fn slopes(&self) -> (f32, f32, f32) {
        let (r1, r2) = (self.r1 as f32, self.r2 as f32);
        let (s1, s2) = (self.s1 as f32, self.s2 as f32);
        (
            s1 / r1,
            (s2 - s1) / (r2 - r1),
            (255.0 - s2) / (255.0 - r2),
        )
    }

    /// Unrounded output for input level `v`. Call only after `validate`.
    pub fn eval(&self, v: f32) -> f32 {
        let (alpha, beta, gamma) = self.slopes();
        let (r1, r2) = (self.r1 as f32, self.r2 as f32);
        if v <= r1 {
            alpha * v
        } else if v <= r2 {
            beta * (v - r1) + self.s1 as f32
        } else {
            gamma * (v - r2) + self.s2 as f32
        }
    }

    pub fn table(&self) -> Result<LookupTable> {
        self.validate()?;
        Ok(LookupTable::from_real_fn(|v| self.eval(v)))
    }
}

pub fn contrast_stretch(img: &GrayImage, stretch: &ContrastStretch) -> Result<GrayImage> {
    Ok(stretch.table()?.apply(img))
}

/// Snap every sample to the nearest of `levels` evenly spaced intensities
/// spanning `[0, 255]`.
pub fn quantize(img: &GrayImage, levels: u32) -> Result<GrayImage> {
    Ok(quantize_table(levels)?.apply(img))
}

pub fn quantize_table(levels: u32) -> Result<LookupTable> {
    if levels < 2 {
        return Err(Error::TooFewLevels(levels));
    }
    let steps = (levels - 1) as f32;
    Ok(LookupTable::from_real_fn(|v| {
        (255.0 / steps) * (steps * v / 255.0).round()
    }))
}

/// Binarize with a single partition: `v <= limit → 0`, `v > limit → 255`.
pub fn threshold_fixed(img: &GrayImage, limit: u8) -> GrayImage {
    threshold_table(limit).apply(img)
}

pub fn threshold_table(limit: u8) -> LookupTable {
    LookupTable::from_fn(|v| if v <= limit { 0 } else { 255 })
}
