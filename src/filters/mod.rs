//! Neighborhood filters over replicated-border windows.
//!
//! - `convolve`: weighted sums of a square kernel (sharpen, blur, gradients).
//! - `median`: order-statistic filter taking the window median.
//! - `kernel`: kernel type and the built-in 3×3 weights.

mod border;
pub mod convolve;
pub mod kernel;
pub mod median;

pub use convolve::{blur, convolve_f32, convolve_u8, sharpen};
pub use kernel::{Kernel, Kernel3};
pub use median::median_filter;
