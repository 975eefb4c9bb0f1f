//! Borrowed 8-bit RGB image view.
//!
//! The caller owns the pixel storage; the pipeline only ever reads from it.
use crate::error::NonogramError;
use serde::{Deserialize, Serialize};

/// Single RGB sample, one byte per channel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const fn gray(v: u8) -> Self {
        Self::new(v, v, v)
    }

    #[inline]
    pub fn to_f32(self) -> [f32; 3] {
        [self.r as f32, self.g as f32, self.b as f32]
    }

    /// Round and saturate float channels back to bytes.
    #[inline]
    pub fn from_f32(c: [f32; 3]) -> Self {
        let q = |v: f32| v.round().clamp(0.0, 255.0) as u8;
        Self::new(q(c[0]), q(c[1]), q(c[2]))
    }
}

impl From<[u8; 3]> for Rgb {
    fn from(c: [u8; 3]) -> Self {
        Self::new(c[0], c[1], c[2])
    }
}

#[derive(Clone, Debug)]
pub struct ImageRgb8<'a> {
    pub w: usize,
    pub h: usize,
    /// Pixels between the starts of consecutive rows.
    pub stride: usize,
    pub data: &'a [Rgb],
}

impl<'a> ImageRgb8<'a> {
    /// Tightly packed view (`stride == w`).
    pub fn new(w: usize, h: usize, data: &'a [Rgb]) -> Self {
        Self {
            w,
            h,
            stride: w,
            data,
        }
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Rgb {
        self.data[y * self.stride + x]
    }

    /// Reject views that cannot be sampled: zero extent, a stride shorter
    /// than a row, or a buffer too small for the declared size.
    pub fn validate(&self) -> Result<(), NonogramError> {
        let degenerate = NonogramError::DegenerateImage {
            width: self.w,
            height: self.h,
        };
        if self.w == 0 || self.h == 0 || self.stride < self.w {
            return Err(degenerate);
        }
        let needed = (self.h - 1)
            .checked_mul(self.stride)
            .and_then(|n| n.checked_add(self.w));
        match needed {
            Some(n) if n <= self.data.len() => Ok(()),
            _ => Err(degenerate),
        }
    }
}

impl<'a> crate::image::traits::ImageView for ImageRgb8<'a> {
    type Pixel = Rgb;

    #[inline]
    fn width(&self) -> usize {
        self.w
    }
    #[inline]
    fn height(&self) -> usize {
        self.h
    }
    #[inline]
    fn row(&self, y: usize) -> &[Rgb] {
        let start = y * self.stride;
        &self.data[start..start + self.w]
    }
    #[inline]
    fn as_slice(&self) -> Option<&[Rgb]> {
        if self.stride != self.w {
            return None;
        }
        self.data.get(..self.w * self.h)
    }
}
