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

//! PBM export
//!
//! Dumps the visible area as a binary PBM (P4) image so frames rendered off
//! device can be inspected with any image viewer.
//!
//! P4 rows are MSB-first like the display, but PBM treats a set bit as black.
//! Set pixels are lit on the display, so every byte is inverted on output.

use std::io::Write;

use super::Framebuffer;

impl Framebuffer<'_> {
    /// Write the visible area as a binary PBM image
    ///
    /// Padding bits after `width` are cleared in every row.
    pub fn write_pbm<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        let geometry = self.geometry;
        let row_bytes = geometry.width.div_ceil(8);
        let spare_bits = row_bytes * 8 - geometry.width;
        let padding_mask: u8 = !(((1u16 << spare_bits) - 1) as u8);

        write!(out, "P4\n{} {}\n", geometry.width, geometry.height)?;

        let mut row = vec![0u8; row_bytes];
        for y in 0..geometry.height {
            let start = y * geometry.stride;
            for (dst, src) in row.iter_mut().zip(&self.data[start..start + row_bytes]) {
                *dst = !src;
            }
            if let Some(last) = row.last_mut() {
                *last &= padding_mask;
            }
            out.write_all(&row)?;
        }

        log::debug!(
            "Wrote {}x{} PBM ({} bytes of pixels)",
            geometry.width,
            geometry.height,
            row_bytes * geometry.height
        );

        Ok(())
    }
}
