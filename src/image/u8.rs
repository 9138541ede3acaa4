//! Owned 8-bit grayscale image in row-major layout (stride == width).
//!
//! Every transform in the crate consumes a `&GrayImage` and returns a fresh
//! `GrayImage` of the same dimensions; nothing is mutated in place.
use super::traits::{ImageView, ImageViewMut};
use super::Rect;
use crate::error::{Error, Result};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GrayImage {
    w: usize,
    h: usize,
    stride: usize,
    data: Vec<u8>,
}

impl GrayImage {
    /// Zero-filled (black) image of size `w × h`.
    pub fn new(w: usize, h: usize) -> Self {
        Self::filled(w, h, 0)
    }

    /// Image of size `w × h` where every sample equals `value`.
    pub fn filled(w: usize, h: usize, value: u8) -> Self {
        Self {
            w,
            h,
            stride: w,
            data: vec![value; w * h],
        }
    }

    /// Wrap raw row-major bytes; `data.len()` must equal `w * h`.
    pub fn from_raw(w: usize, h: usize, data: Vec<u8>) -> Result<Self> {
        if data.len() != w * h {
            return Err(Error::BufferSize {
                width: w,
                height: h,
                len: data.len(),
            });
        }
        Ok(Self {
            w,
            h,
            stride: w,
            data,
        })
    }

    /// Build an image by evaluating `f(x, y)` for every pixel.
    pub fn from_fn(w: usize, h: usize, mut f: impl FnMut(usize, usize) -> u8) -> Self {
        let mut data = Vec::with_capacity(w * h);
        for y in 0..h {
            for x in 0..w {
                data.push(f(x, y));
            }
        }
        Self {
            w,
            h,
            stride: w,
            data,
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.w
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.h
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline]
    /// Convert (x, y) to a linear index into the backing buffer.
    pub fn idx(&self, x: usize, y: usize) -> usize {
        y * self.stride + x
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> u8 {
        self.data[self.idx(x, y)]
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, v: u8) {
        let i = self.idx(x, y);
        self.data[i] = v;
    }

    pub fn pixels(&self) -> &[u8] {
        &self.data
    }

    /// Apply `f` to every sample, producing a new image of equal size.
    pub fn map(&self, mut f: impl FnMut(u8) -> u8) -> Self {
        Self {
            w: self.w,
            h: self.h,
            stride: self.stride,
            data: self.data.iter().map(|&v| f(v)).collect(),
        }
    }

    /// Copy the pixels covered by `rect` into a new image.
    pub fn crop(&self, rect: Rect) -> Result<Self> {
        if !rect.fits_within(self.w, self.h) {
            return Err(Error::RegionOutOfBounds {
                rect,
                width: self.w,
                height: self.h,
            });
        }
        let mut data = Vec::with_capacity(rect.area());
        for y in rect.y..rect.bottom() {
            data.extend_from_slice(&self.row(y)[rect.x..rect.right()]);
        }
        Ok(Self {
            w: rect.w,
            h: rect.h,
            stride: rect.w,
            data,
        })
    }

    /// Write `patch` into this image with its top-left corner at `(x, y)`.
    pub fn paste(&mut self, patch: &GrayImage, x: usize, y: usize) -> Result<()> {
        let rect = Rect::new(x, y, patch.w, patch.h);
        if !rect.fits_within(self.w, self.h) {
            return Err(Error::RegionOutOfBounds {
                rect,
                width: self.w,
                height: self.h,
            });
        }
        for (py, src) in patch.rows().enumerate() {
            self.row_mut(y + py)[x..x + patch.w].copy_from_slice(src);
        }
        Ok(())
    }

    /// Error unless `other` has the same dimensions as `self`.
    pub fn ensure_same_size(&self, other: &GrayImage) -> Result<()> {
        if self.dimensions() != other.dimensions() {
            return Err(Error::DimensionMismatch {
                expected: self.dimensions(),
                actual: other.dimensions(),
            });
        }
        Ok(())
    }
}

impl ImageView for GrayImage {
    type Pixel = u8;

    #[inline]
    fn width(&self) -> usize {
        self.w
    }
    #[inline]
    fn height(&self) -> usize {
        self.h
    }
    #[inline]
    fn row(&self, y: usize) -> &[u8] {
        let start = y * self.stride;
        &self.data[start..start + self.w]
    }
}

impl ImageViewMut for GrayImage {
    #[inline]
    fn row_mut(&mut self, y: usize) -> &mut [u8] {
        let start = y * self.stride;
        let end = start + self.w;
        &mut self.data[start..end]
    }
}
