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

//! Test fixtures for common test scenarios

use polyspin::core::display::FrameGeometry;
use polyspin::core::polygon::{Point, Polygon};

/// Zeroed display memory for the default 400×240 geometry
#[allow(dead_code)]
pub fn display_memory() -> Vec<u8> {
    vec![0u8; FrameGeometry::DISPLAY.buffer_len()]
}

/// Build a polygon from integer-ish coordinates
#[allow(dead_code)]
pub fn polygon(points: &[(f32, f32)]) -> Polygon {
    Polygon::from_points(points.iter().map(|&(x, y)| Point::new(x, y)))
        .expect("fixture polygon must be valid")
}

/// Triangle with a flat bottom, wound for the rasterizer
#[allow(dead_code)]
pub fn flat_bottom_triangle(apex: (f32, f32), bottom: f32, left: f32, right: f32) -> Polygon {
    polygon(&[apex, (left, bottom), (right, bottom)])
}

/// True if every vertex of `polygon` lies inside the display
#[allow(dead_code)]
pub fn fits_display(polygon: &Polygon) -> bool {
    polygon.bounds().is_some_and(|(lo, hi)| {
        lo.x >= 0.0
            && lo.y >= 0.0
            && hi.x <= FrameGeometry::DISPLAY_WIDTH as f32
            && hi.y <= FrameGeometry::DISPLAY_HEIGHT as f32
    })
}
