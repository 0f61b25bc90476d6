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

//! Custom assertions for framebuffer testing

use polyspin::core::display::Framebuffer;

/// Assert a row's set pixels form exactly `[first, end)`
#[allow(dead_code)]
pub fn assert_row_span(fb: &Framebuffer<'_>, y: usize, first: usize, end: usize) {
    let actual = fb.row_extent(y);
    assert_eq!(
        actual,
        Some((first, end)),
        "Row {} extent mismatch: expected [{}, {}), got {:?}",
        y,
        first,
        end,
        actual
    );
    assert_eq!(
        fb.count_row(y),
        end - first,
        "Row {} has holes inside [{}, {})",
        y,
        first,
        end
    );
}

/// Assert a row has no set pixels
#[allow(dead_code)]
pub fn assert_row_empty(fb: &Framebuffer<'_>, y: usize) {
    assert_eq!(
        fb.count_row(y),
        0,
        "Row {} should be empty, extent {:?}",
        y,
        fb.row_extent(y)
    );
}

/// Assert a set-pixel count is within `tolerance` of `expected`
#[allow(dead_code)]
pub fn assert_count_near(actual: usize, expected: f32, tolerance: f32) {
    assert!(
        (actual as f32 - expected).abs() <= tolerance,
        "Pixel count {} not within {} of {}",
        actual,
        tolerance,
        expected
    );
}
