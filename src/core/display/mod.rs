// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 itsakeyfut
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Packed 1-bit framebuffer
//!
//! This module wraps the host-owned display memory. The display is a
//! monochrome surface with one bit per pixel:
//! - 400×240 visible pixels
//! - 52 bytes per row (416 bits, padded to 13 32-bit words)
//!
//! # Pixel Packing
//!
//! Rows are processed as 32-bit words. Pixel `x` lives in word `x / 32` at bit
//! `31 - x % 32`, and every word is stored big-endian, so the leftmost pixel of
//! a row is the most significant bit of its first byte:
//!
//! ```text
//! byte:   0        1        2        3
//! bits:   76543210 76543210 76543210 76543210
//! pixel:  0......7 8.....15 16....23 24....31
//! ```
//!
//! Loading a word with [`u32::from_be_bytes`] gives the same result as the
//! byte swap a little-endian device needs after a native 32-bit load.
//!
//! # Ownership
//!
//! The host owns the bytes. A [`Framebuffer`] only borrows them for the duration
//! of a draw call, so the core never allocates display memory itself.

use crate::core::error::FramebufferError;

mod pbm;
mod span;
#[cfg(test)]
mod tests;

pub use span::FULL_MASK;

/// Dimensions and row pitch of a packed framebuffer
///
/// # Examples
///
/// ```
/// use polyspin::core::display::FrameGeometry;
///
/// let geometry = FrameGeometry::DISPLAY;
/// assert_eq!(geometry.words_per_row(), 13);
/// assert_eq!(geometry.buffer_len(), 52 * 240);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameGeometry {
    /// Visible pixels per row
    pub width: usize,
    /// Number of rows
    pub height: usize,
    /// Bytes per row (multiple of 4)
    pub stride: usize,
}

impl FrameGeometry {
    /// Display width in pixels
    pub const DISPLAY_WIDTH: usize = 400;

    /// Display height in pixels
    pub const DISPLAY_HEIGHT: usize = 240;

    /// Display row stride in bytes
    pub const DISPLAY_STRIDE: usize = 52;

    /// Geometry of the device display
    pub const DISPLAY: FrameGeometry = FrameGeometry {
        width: Self::DISPLAY_WIDTH,
        height: Self::DISPLAY_HEIGHT,
        stride: Self::DISPLAY_STRIDE,
    };

    /// Create a validated geometry
    ///
    /// # Arguments
    ///
    /// * `width` - Visible pixels per row
    /// * `height` - Number of rows
    /// * `stride` - Bytes per row
    ///
    /// # Returns
    ///
    /// - `Ok(FrameGeometry)` if all sizes are non-zero, the stride is word-aligned
    ///   and a row holds at least `width` bits
    /// - `Err(FramebufferError::InvalidGeometry)` otherwise
    pub fn new(width: usize, height: usize, stride: usize) -> Result<Self, FramebufferError> {
        let geometry = Self {
            width,
            height,
            stride,
        };
        geometry.validate()?;
        Ok(geometry)
    }

    /// Check the invariants a [`Framebuffer`] relies on
    pub fn validate(&self) -> Result<(), FramebufferError> {
        let valid = self.width > 0
            && self.height > 0
            && self.stride > 0
            && self.stride % 4 == 0
            && self.stride * 8 >= self.width
            && self.width <= i32::MAX as usize
            && self.height <= i32::MAX as usize;

        if valid {
            Ok(())
        } else {
            Err(FramebufferError::InvalidGeometry {
                width: self.width,
                height: self.height,
                stride: self.stride,
            })
        }
    }

    /// Number of 32-bit words per row
    #[inline]
    pub fn words_per_row(&self) -> usize {
        self.stride / 4
    }

    /// Minimum number of bytes backing a framebuffer of this geometry
    #[inline]
    pub fn buffer_len(&self) -> usize {
        self.stride * self.height
    }
}

impl Default for FrameGeometry {
    fn default() -> Self {
        Self::DISPLAY
    }
}

/// Borrowed view over a packed 1-bit framebuffer
///
/// All coordinate checks happen here so the rasterizer can hand over spans
/// that touch or cross the frame edges.
///
/// # Examples
///
/// ```
/// use polyspin::core::display::{FrameGeometry, Framebuffer, FULL_MASK};
///
/// let mut bytes = vec![0u8; FrameGeometry::DISPLAY.buffer_len()];
/// let mut fb = Framebuffer::new(&mut bytes, FrameGeometry::DISPLAY).unwrap();
///
/// fb.draw_span(10, 4, 12, FULL_MASK);
/// assert!(fb.pixel(4, 10));
/// assert!(!fb.pixel(12, 10));
/// assert_eq!(fb.count_row(10), 8);
/// ```
pub struct Framebuffer<'a> {
    data: &'a mut [u8],
    geometry: FrameGeometry,
}

impl<'a> Framebuffer<'a> {
    /// Wrap host-owned display memory
    ///
    /// # Returns
    ///
    /// - `Err(FramebufferError::InvalidGeometry)` if the geometry is invalid
    /// - `Err(FramebufferError::BufferTooSmall)` if `data` is shorter than
    ///   `stride * height`
    pub fn new(data: &'a mut [u8], geometry: FrameGeometry) -> Result<Self, FramebufferError> {
        geometry.validate()?;

        let expected = geometry.buffer_len();
        if data.len() < expected {
            return Err(FramebufferError::BufferTooSmall {
                expected,
                got: data.len(),
            });
        }

        Ok(Self { data, geometry })
    }

    /// Geometry of this framebuffer
    #[inline(always)]
    pub fn geometry(&self) -> FrameGeometry {
        self.geometry
    }

    /// Visible width in pixels
    #[inline(always)]
    pub fn width(&self) -> usize {
        self.geometry.width
    }

    /// Number of rows
    #[inline(always)]
    pub fn height(&self) -> usize {
        self.geometry.height
    }

    /// Raw bytes, rows laid out `stride` apart
    pub fn as_bytes(&self) -> &[u8] {
        &self.data[..self.geometry.buffer_len()]
    }

    /// Fill every row with `value` (`true` sets all pixels)
    ///
    /// Padding bits beyond `width` are written too.
    pub fn clear(&mut self, value: bool) {
        let byte = if value { 0xFF } else { 0x00 };
        let len = self.geometry.buffer_len();
        self.data[..len].fill(byte);
    }

    /// Read one pixel
    ///
    /// Returns `false` for coordinates outside the visible area.
    pub fn pixel(&self, x: usize, y: usize) -> bool {
        if x >= self.geometry.width || y >= self.geometry.height {
            return false;
        }

        let byte = self.data[y * self.geometry.stride + x / 8];
        byte & (0x80 >> (x % 8)) != 0
    }

    /// Set or clear one pixel
    ///
    /// Coordinates outside the visible area are ignored.
    pub fn set_pixel(&mut self, x: usize, y: usize, value: bool) {
        if x >= self.geometry.width || y >= self.geometry.height {
            return;
        }

        let index = y * self.geometry.stride + x / 8;
        let bit = 0x80 >> (x % 8);
        if value {
            self.data[index] |= bit;
        } else {
            self.data[index] &= !bit;
        }
    }

    /// Number of set pixels in one row (visible area only)
    pub fn count_row(&self, y: usize) -> usize {
        (0..self.geometry.width)
            .filter(|&x| self.pixel(x, y))
            .count()
    }

    /// Number of set pixels in the whole visible area
    pub fn count_set(&self) -> usize {
        (0..self.geometry.height).map(|y| self.count_row(y)).sum()
    }

    /// Horizontal extent of the set pixels in one row
    ///
    /// # Returns
    ///
    /// `Some((first, end))` where `first` is the leftmost set pixel and `end` is
    /// one past the rightmost, or `None` for an empty row.
    pub fn row_extent(&self, y: usize) -> Option<(usize, usize)> {
        let first = (0..self.geometry.width).find(|&x| self.pixel(x, y))?;
        let last = (0..self.geometry.width).rev().find(|&x| self.pixel(x, y))?;
        Some((first, last + 1))
    }

    /// Load the 32-bit word `word` of row `y` in pixel order
    #[inline(always)]
    pub(in crate::core::display) fn load_word(&self, y: usize, word: usize) -> u32 {
        let offset = y * self.geometry.stride + word * 4;
        let bytes = &self.data[offset..offset + 4];
        u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])
    }

    /// Store the 32-bit word `word` of row `y` in pixel order
    #[inline(always)]
    pub(in crate::core::display) fn store_word(&mut self, y: usize, word: usize, value: u32) {
        let offset = y * self.geometry.stride + word * 4;
        self.data[offset..offset + 4].copy_from_slice(&value.to_be_bytes());
    }
}
