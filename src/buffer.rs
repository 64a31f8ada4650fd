//! Fixed-length pixel buffer
//!
//! The buffer length is picked at runtime but never exceeds the compile-time
//! capacity `MAX_LEDS`, so no allocation is needed.

use core::ops::{Bound, Range, RangeBounds};

use heapless::Vec;

use crate::color::Color;
use crate::error::{ConfigError, Error, Result};

/// Ordered, fixed-length sequence of colors, one per LED
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer<const MAX_LEDS: usize> {
    pixels: Vec<Color, MAX_LEDS>,
}

impl<const MAX_LEDS: usize> PixelBuffer<MAX_LEDS> {
    /// Create a buffer of `length` pixels, all off
    pub fn new(length: usize) -> Result<Self> {
        let mut pixels = Vec::new();
        pixels
            .resize(length, Color::OFF)
            .map_err(|()| ConfigError::TooManyLeds {
                length,
                capacity: MAX_LEDS,
            })?;
        Ok(Self { pixels })
    }

    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Read the color at `index`
    pub fn get(&self, index: usize) -> Result<Color> {
        self.pixels
            .get(index)
            .copied()
            .ok_or(self.out_of_range(index))
    }

    /// Store `color` at `index`
    ///
    /// Only the buffer is touched; nothing is displayed until the owning
    /// strip is shown.
    pub fn set(&mut self, index: usize, color: impl Into<Color>) -> Result<()> {
        let error = self.out_of_range(index);
        let slot = self.pixels.get_mut(index).ok_or(error)?;
        *slot = color.into();
        Ok(())
    }

    /// Set every pixel to `color`
    pub fn fill(&mut self, color: impl Into<Color>) {
        self.pixels.fill(color.into());
    }

    /// Set the pixels in `range` to `color`
    ///
    /// The range is clamped to the buffer: an end past the last pixel stops
    /// at the last pixel and a start past it changes nothing.
    pub fn fill_range(&mut self, color: impl Into<Color>, range: impl RangeBounds<usize>) {
        let range = self.clamp_range(&range);
        self.pixels[range].fill(color.into());
    }

    /// Set pixel `i` to `color_at(i)` for every pixel
    pub fn fill_with<C: Into<Color>>(&mut self, color_at: impl FnMut(usize) -> C) {
        self.fill_range_with(.., color_at);
    }

    /// Set pixel `i` to `color_at(i)` for every `i` in `range`
    ///
    /// `i` is the buffer index, not the offset into the range. The range is
    /// clamped the same way as in [`PixelBuffer::fill_range`].
    pub fn fill_range_with<C: Into<Color>>(
        &mut self,
        range: impl RangeBounds<usize>,
        mut color_at: impl FnMut(usize) -> C,
    ) {
        let range = self.clamp_range(&range);
        let start = range.start;
        for (offset, pixel) in self.pixels[range].iter_mut().enumerate() {
            *pixel = color_at(start + offset).into();
        }
    }

    /// Copy `colors` into the buffer starting at pixel 0
    ///
    /// Extra input colors are ignored; pixels past the end of the input keep
    /// their current value.
    pub fn replace<I>(&mut self, colors: I)
    where
        I: IntoIterator,
        I::Item: Into<Color>,
    {
        for (pixel, color) in self.pixels.iter_mut().zip(colors) {
            *pixel = color.into();
        }
    }

    /// Copy of the current contents
    pub fn snapshot(&self) -> Vec<Color, MAX_LEDS> {
        self.pixels.clone()
    }

    pub fn as_slice(&self) -> &[Color] {
        &self.pixels
    }

    /// Turn every pixel off
    pub fn clear(&mut self) {
        self.fill(Color::OFF);
    }

    /// Reverse the order of the pixels
    pub fn reverse(&mut self) {
        self.pixels.reverse();
    }

    /// Rotate pixels so that the one at `count` comes first
    ///
    /// A negative `count` rotates the other way, `-1` brings the last pixel
    /// to the front.
    #[allow(
        clippy::cast_possible_wrap,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss
    )]
    pub fn rotate(&mut self, count: isize) {
        let len = self.len();
        if len == 0 {
            return;
        }
        let shift = count.rem_euclid(len as isize) as usize;
        self.pixels.rotate_left(shift);
    }

    fn clamp_range(&self, range: &impl RangeBounds<usize>) -> Range<usize> {
        let len = self.len();
        let start = match range.start_bound() {
            Bound::Included(start) => *start,
            Bound::Excluded(start) => start.saturating_add(1),
            Bound::Unbounded => 0,
        };
        let end = match range.end_bound() {
            Bound::Included(end) => end.saturating_add(1),
            Bound::Excluded(end) => *end,
            Bound::Unbounded => len,
        }
        .min(len);

        start.min(end)..end
    }

    fn out_of_range(&self, index: usize) -> Error {
        Error::OutOfRange {
            index,
            length: self.pixels.len(),
        }
    }
}
