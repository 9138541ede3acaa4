use crate::error::{Error, Result};
use serde::Serialize;

pub type Kernel3 = [[f32; 3]; 3];

/// Laplacian-style sharpening: 5 at the centre, −1 at the four neighbours.
pub const SHARPEN_3X3: Kernel3 = [[0.0, -1.0, 0.0], [-1.0, 5.0, -1.0], [0.0, -1.0, 0.0]];

const NINTH: f32 = 1.0 / 9.0;
/// Uniform 3×3 average.
pub const BOX_BLUR_3X3: Kernel3 = [[NINTH; 3]; 3];

pub const SOBEL_X_3X3: Kernel3 = [[-1.0, 0.0, 1.0], [-2.0, 0.0, 2.0], [-1.0, 0.0, 1.0]];
pub const SOBEL_Y_3X3: Kernel3 = [[-1.0, -2.0, -1.0], [0.0, 0.0, 0.0], [1.0, 2.0, 1.0]];

/// Square correlation kernel with odd side length, weights in row-major order.
///
/// Weights are applied as written (correlation, no flip), so `weights[0]`
/// multiplies the top-left neighbour.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Kernel {
    size: usize,
    weights: Vec<f32>,
}

impl Kernel {
    pub fn new(size: usize, weights: Vec<f32>) -> Result<Self> {
        if size == 0 || size % 2 == 0 || weights.len() != size * size {
            return Err(Error::InvalidKernel {
                size,
                len: weights.len(),
            });
        }
        Ok(Self { size, weights })
    }

    pub fn from_3x3(rows: &Kernel3) -> Self {
        Self {
            size: 3,
            weights: rows.iter().flatten().copied().collect(),
        }
    }

    pub fn sharpen() -> Self {
        Self::from_3x3(&SHARPEN_3X3)
    }

    pub fn box_blur() -> Self {
        Self::from_3x3(&BOX_BLUR_3X3)
    }

    pub fn sobel_x() -> Self {
        Self::from_3x3(&SOBEL_X_3X3)
    }

    pub fn sobel_y() -> Self {
        Self::from_3x3(&SOBEL_Y_3X3)
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Half extent: number of border pixels needed on each side.
    #[inline]
    pub fn radius(&self) -> usize {
        self.size / 2
    }

    #[inline]
    pub fn row(&self, ky: usize) -> &[f32] {
        &self.weights[ky * self.size..(ky + 1) * self.size]
    }

    pub fn sum(&self) -> f32 {
        self.weights.iter().sum()
    }
}
