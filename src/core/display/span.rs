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

//! Span writer
//!
//! Writes horizontal runs of pixels into one packed row, 32 pixels at a time.
//! Boundary words are merged through a bit mask; words fully covered by the
//! span are stored directly.

use super::Framebuffer;

/// Mask covering every pixel of a word
pub const FULL_MASK: u32 = 0xFFFF_FFFF;

/// Mask of the pixels from `bit` to the end of the word
///
/// `bit` is the pixel index inside the word (0-31). Pixel 0 is the MSB.
#[inline(always)]
fn start_mask(bit: usize) -> u32 {
    FULL_MASK >> bit
}

/// Mask of the first `count` pixels of the word (`count` in 1..=32)
#[inline(always)]
fn end_mask(count: usize) -> u32 {
    FULL_MASK << (32 - count)
}

impl Framebuffer<'_> {
    /// Fill the pixels `[x1, x2)` of row `y` with `color`
    ///
    /// `color` is a full 32-bit fill word; bits set in it become set pixels.
    /// The span is clipped to `[0, width)`. Spans that end up empty or
    /// inverted, and rows outside `[0, height)`, are ignored.
    ///
    /// # Arguments
    ///
    /// * `y` - Row index
    /// * `x1` - First pixel (inclusive)
    /// * `x2` - Last pixel (exclusive)
    /// * `color` - Fill word
    pub fn draw_span(&mut self, y: i32, x1: i32, x2: i32, color: u32) {
        let width = self.geometry.width as i32;

        if y < 0 || y as usize >= self.geometry.height {
            return;
        }

        if x2 < 0 || x1 >= width {
            return;
        }

        let x1 = x1.max(0) as usize;
        let x2 = x2.min(width) as usize;

        if x1 >= x2 {
            return;
        }

        let y = y as usize;
        let first = x1 / 32;
        let last = (x2 - 1) / 32;
        let head = start_mask(x1 % 32);
        let tail = end_mask((x2 - 1) % 32 + 1);

        if first == last {
            self.write_masked(y, first, head & tail, color);
            return;
        }

        self.write_masked(y, first, head, color);

        for word in first + 1..last {
            self.store_word(y, word, color);
        }

        self.write_masked(y, last, tail, color);
    }

    /// Merge `color` into one word under `mask`
    #[inline(always)]
    fn write_masked(&mut self, y: usize, word: usize, mask: u32, color: u32) {
        if mask == FULL_MASK {
            self.store_word(y, word, color);
        } else {
            let old = self.load_word(y, word);
            self.store_word(y, word, (old & !mask) | (color & mask));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_mask() {
        assert_eq!(start_mask(0), FULL_MASK);
        assert_eq!(start_mask(1), 0x7FFF_FFFF);
        assert_eq!(start_mask(31), 0x0000_0001);
    }

    #[test]
    fn test_end_mask() {
        assert_eq!(end_mask(32), FULL_MASK);
        assert_eq!(end_mask(1), 0x8000_0000);
        assert_eq!(end_mask(8), 0xFF00_0000);
    }

    #[test]
    fn test_intersected_masks() {
        // Pixels 4..12 of one word
        assert_eq!(start_mask(4) & end_mask(12), 0x0FF0_0000);
    }
}
