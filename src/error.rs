//! Crate-wide error type.
//!
//! Parameter validation runs before any pixel is touched, so a returned error
//! always means no output image was produced.
use crate::image::Rect;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("gamma must be a finite positive number, got {0}")]
    InvalidGamma(f32),

    #[error("window size must be odd and positive, got {0}")]
    InvalidWindow(usize),

    #[error("a {size}x{size} kernel cannot be built from {len} weights (size must be odd)")]
    InvalidKernel { size: usize, len: usize },

    #[error("quantization needs at least 2 levels, got {0}")]
    TooFewLevels(u32),

    #[error(
        "contrast stretching breakpoints must satisfy 0 < r1 < r2 < 255, got r1={r1} r2={r2}"
    )]
    DegenerateBreakpoints { r1: u8, r2: u8 },

    #[error("noise sigma must be finite and non-negative, got {0}")]
    InvalidSigma(f64),

    #[error("threshold tolerance must be finite and positive, got {0}")]
    InvalidTolerance(f64),

    #[error("initial threshold estimate must be finite, got {0}")]
    InvalidInitialThreshold(f64),

    #[error("threshold search needs at least one iteration")]
    ZeroIterations,

    #[error("cannot split a {width}x{height} image into {rows} rows and {cols} columns")]
    InvalidGrid {
        rows: usize,
        cols: usize,
        width: usize,
        height: usize,
    },

    #[error("image dimensions differ: expected {expected:?}, got {actual:?}")]
    DimensionMismatch {
        expected: (usize, usize),
        actual: (usize, usize),
    },

    #[error("buffer of {len} samples does not match a {width}x{height} image")]
    BufferSize {
        width: usize,
        height: usize,
        len: usize,
    },

    #[error("region {rect:?} exceeds the {width}x{height} image")]
    RegionOutOfBounds {
        rect: Rect,
        width: usize,
        height: usize,
    },

    #[error("failed to load image {}: {source}", path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("failed to save image {}: {source}", path.display())]
    Save {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error for {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
