//! Edge detection: Sobel gradients fused into a single magnitude image.
//!
//! - `grad`: signed horizontal/vertical Sobel responses from the shared
//!   convolution engine.
//! - `magnitude`: per-pixel `255 · sqrt((gx/255)² + (gy/255)²)`, normalized
//!   before combining so two near-saturated gradients cannot overflow.

pub mod grad;
pub mod magnitude;

pub use grad::{sobel_gradients, Grad};
pub use magnitude::{combine_magnitude, detect_edges};
