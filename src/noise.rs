//! Synthetic degradations used to exercise the restoration filters.
//!
//! Every generator takes the random source explicitly so a seeded
//! `StdRng` reproduces the same noise field.
//!
//! - `salt_and_pepper`: replace a random fraction of pixels by 0 and/or 255.
//! - `speckle_noise`: multiplicative noise, `v · (1 + n)` with
//!   `n ~ N(0, σ / 255)`.
//! - `additive_white_noise`: `v + n` with `n ~ N(0, σ)`.
use crate::error::{Error, Result};
use crate::image::{saturate_u8, GrayImage};
use rand::Rng;
use rand_distr::{Distribution, Normal};
use serde::{Deserialize, Serialize};

/// Which impulse values salt-and-pepper noise writes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SaltPepperKind {
    /// Force affected pixels to 0.
    Pepper,
    /// Force affected pixels to 255.
    Salt,
    /// Fair coin flip between 0 and 255 per affected pixel.
    #[default]
    Both,
}

/// Replace each pixel with probability `intensity`.
///
/// `intensity <= 0` (or NaN) leaves the image untouched and `intensity >= 1`
/// replaces every pixel.
pub fn salt_and_pepper<R: Rng + ?Sized>(
    img: &GrayImage,
    intensity: f64,
    kind: SaltPepperKind,
    rng: &mut R,
) -> GrayImage {
    img.map(|v| {
        let draw: f64 = rng.gen();
        if draw >= intensity || intensity.is_nan() {
            return v;
        }
        match kind {
            SaltPepperKind::Pepper => 0,
            SaltPepperKind::Salt => 255,
            SaltPepperKind::Both => {
                if rng.gen_bool(0.5) {
                    0
                } else {
                    255
                }
            }
        }
    })
}

/// Multiplicative speckle: `v + v · n` with `n ~ N(0, sigma / 255)`.
///
/// `sigma` is on the 0..255 intensity scale, the same as for
/// `additive_white_noise`; the noise is applied in normalized space.
pub fn speckle_noise<R: Rng + ?Sized>(
    img: &GrayImage,
    sigma: f64,
    rng: &mut R,
) -> Result<GrayImage> {
    let normal = gaussian(sigma / 255.0, sigma)?;
    Ok(img.map(|v| {
        let n = normal.sample(rng);
        let level = v as f64 / 255.0;
        saturate_u8((255.0 * (level + level * n)) as f32)
    }))
}

/// Additive Gaussian noise: `v + n` with `n ~ N(0, sigma)`.
pub fn additive_white_noise<R: Rng + ?Sized>(
    img: &GrayImage,
    sigma: f64,
    rng: &mut R,
) -> Result<GrayImage> {
    let normal = gaussian(sigma, sigma)?;
    Ok(img.map(|v| saturate_u8((v as f64 + normal.sample(rng)) as f32)))
}

pub fn validate_sigma(sigma: f64) -> Result<()> {
    if !(sigma.is_finite() && sigma >= 0.0) {
        return Err(Error::InvalidSigma(sigma));
    }
    Ok(())
}

fn gaussian(std_dev: f64, sigma: f64) -> Result<Normal<f64>> {
    validate_sigma(sigma)?;
    Normal::new(0.0, std_dev).map_err(|_| Error::InvalidSigma(sigma))
}
