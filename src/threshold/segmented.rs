//! Region-wise thresholding over a `rows × cols` grid.
//!
//! Each cell is binarized on its own adaptive threshold. Cells are
//! `⌊H / rows⌋ × ⌊W / cols⌋`; the last row and column absorb the remainder so
//! the grid tiles the image exactly once. The grid is walked with a plain
//! loop, one level deep.
use super::adaptive::{adaptive_threshold, AdaptiveOptions, ThresholdOutcome};
use crate::error::{Error, Result};
use crate::image::{GrayImage, Rect};
use log::debug;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SegmentGrid {
    pub rows: usize,
    pub cols: usize,
}

impl Default for SegmentGrid {
    fn default() -> Self {
        Self { rows: 3, cols: 3 }
    }
}

impl SegmentGrid {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    /// Reject grids that would leave a cell without pixels.
    pub fn validate(&self, width: usize, height: usize) -> Result<()> {
        if self.rows == 0 || self.cols == 0 || self.rows > height || self.cols > width {
            return Err(Error::InvalidGrid {
                rows: self.rows,
                cols: self.cols,
                width,
                height,
            });
        }
        Ok(())
    }

    /// Cell rectangles in row-major order.
    pub fn regions(&self, width: usize, height: usize) -> Result<Vec<Rect>> {
        self.validate(width, height)?;
        let cell_h = height / self.rows;
        let cell_w = width / self.cols;
        let mut cells = Vec::with_capacity(self.rows * self.cols);
        for r in 0..self.rows {
            let y = r * cell_h;
            let h = if r + 1 == self.rows { height - y } else { cell_h };
            for c in 0..self.cols {
                let x = c * cell_w;
                let w = if c + 1 == self.cols { width - x } else { cell_w };
                cells.push(Rect::new(x, y, w, h));
            }
        }
        Ok(cells)
    }
}

/// Threshold chosen for one grid cell.
#[derive(Clone, Copy, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionThreshold {
    pub region: Rect,
    pub outcome: ThresholdOutcome,
}

/// Binarize every grid cell on its own adaptive threshold.
pub fn segmented_threshold(
    img: &GrayImage,
    grid: SegmentGrid,
    opts: &AdaptiveOptions,
) -> Result<(GrayImage, Vec<RegionThreshold>)> {
    opts.validate()?;
    if grid.rows == 0 || grid.cols == 0 {
        return Err(Error::InvalidGrid {
            rows: grid.rows,
            cols: grid.cols,
            width: img.width(),
            height: img.height(),
        });
    }
    if img.is_empty() {
        return Ok((img.clone(), Vec::new()));
    }
    let regions = grid.regions(img.width(), img.height())?;
    debug!(
        "segmented threshold: {}x{} grid over {}x{} image",
        grid.rows,
        grid.cols,
        img.width(),
        img.height()
    );

    let mut out = GrayImage::new(img.width(), img.height());
    let mut report = Vec::with_capacity(regions.len());
    for region in regions {
        let cell = img.crop(region)?;
        let (binary, outcome) = adaptive_threshold(&cell, opts)?;
        out.paste(&binary, region.x, region.y)?;
        report.push(RegionThreshold { region, outcome });
    }
    Ok((out, report))
}
