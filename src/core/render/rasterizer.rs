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

//! Scanline polygon rasterizer
//!
//! This module fills one simple polygon by walking its outline from the
//! topmost vertex down to the bottommost vertex along two edge chains.
//!
//! # Algorithm
//!
//! 1. Find the topmost and bottommost vertices
//! 2. Start a left chain walking forward through the vertex list and a right
//!    chain walking backward, both from the top vertex
//! 3. Advance whichever chain reaches its next vertex first, filling the
//!    horizontal band between the current y and that vertex
//! 4. Inside a band, step one scanline at a time and add each chain's slope
//!    to its x, so no division happens per row
//! 5. Stop once either chain arrives at the bottom vertex
//!
//! The forward chain is the left boundary only when the vertices wind the
//! right way (negative [`Polygon::signed_area`] in screen coordinates). With
//! the opposite winding every span comes out inverted and nothing is drawn.
//!
//! # Robustness
//!
//! Nothing in here can fail. Scanlines outside the framebuffer are skipped
//! while the slope accumulators keep advancing, spans are clipped by
//! [`Framebuffer::draw_span`], and zero-height edges get a slope of 0 since
//! their band never contains a scanline.

use crate::core::display::{Framebuffer, FULL_MASK};
use crate::core::polygon::{Point, Polygon};

/// Scanline rasterizer for filled polygons
///
/// # Examples
///
/// ```
/// use polyspin::core::display::{FrameGeometry, Framebuffer};
/// use polyspin::core::polygon::{Point, Polygon};
/// use polyspin::core::render::Rasterizer;
///
/// let mut bytes = vec![0u8; FrameGeometry::DISPLAY.buffer_len()];
/// let mut fb = Framebuffer::new(&mut bytes, FrameGeometry::DISPLAY).unwrap();
///
/// let triangle = Polygon::from_points([
///     Point::new(100.0, 50.0),
///     Point::new(50.0, 150.0),
///     Point::new(150.0, 150.0),
/// ])
/// .unwrap();
///
/// Rasterizer::new().fill_polygon(&mut fb, &triangle);
///
/// assert!(fb.pixel(100, 100));
/// assert!(!fb.pixel(60, 60));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rasterizer {
    /// Fill word written into every span
    color: u32,
}

impl Rasterizer {
    /// Create a rasterizer that sets every covered pixel
    pub fn new() -> Self {
        Self { color: FULL_MASK }
    }

    /// Create a rasterizer with a custom fill word
    pub fn with_color(color: u32) -> Self {
        Self { color }
    }

    /// Current fill word
    pub fn color(&self) -> u32 {
        self.color
    }

    /// Change the fill word
    pub fn set_color(&mut self, color: u32) {
        self.color = color;
    }

    /// Fill the interior of `polygon`
    ///
    /// # Arguments
    ///
    /// * `fb` - Target framebuffer
    /// * `polygon` - Simple polygon with at least 3 vertices
    ///
    /// Polygons with fewer than 3 vertices or no vertical extent draw nothing.
    /// Self-intersecting or wrongly wound polygons produce an undefined picture
    /// but never a panic.
    pub fn fill_polygon(&self, fb: &mut Framebuffer<'_>, polygon: &Polygon) {
        let points = polygon.points();

        if points.len() < 3 {
            log::debug!(
                "Skipping polygon with {} points (need at least 3)",
                points.len()
            );
            return;
        }

        let Some((top, bottom)) = polygon.top_bottom() else {
            return;
        };

        // Also rejects NaN extents
        if points[bottom].y.partial_cmp(&points[top].y) != Some(std::cmp::Ordering::Greater) {
            log::debug!("Skipping polygon without vertical extent");
            return;
        }

        log::trace!(
            "Filling {}-gon: top #{} ({}, {}), bottom #{} ({}, {})",
            points.len(),
            top,
            points[top].x,
            points[top].y,
            bottom,
            points[bottom].x,
            points[bottom].y
        );

        let mut left = Chain::new(points, top, Walk::Forward);
        let mut right = Chain::new(points, top, Walk::Backward);
        let mut y = points[top].y;

        // Each pass moves one chain by one vertex and the left chain alone
        // reaches the bottom within len() steps, so this terminates.
        loop {
            let left_next_y = left.next_y(points);
            let right_next_y = right.next_y(points);

            if left_next_y <= right_next_y {
                self.fill_band(fb, &mut left, &mut right, y, left_next_y);
                y = left_next_y;
                left.advance(points);
            } else {
                self.fill_band(fb, &mut left, &mut right, y, right_next_y);
                y = right_next_y;
                right.advance(points);
            }

            if left.index == bottom || right.index == bottom {
                break;
            }
        }
    }

    /// Fill the scanlines from `y_start` up to (not including) `y_end`
    ///
    /// Both chains' x positions are advanced by one slope per scanline,
    /// including scanlines that fall above the framebuffer.
    fn fill_band(
        &self,
        fb: &mut Framebuffer<'_>,
        left: &mut Chain,
        right: &mut Chain,
        y_start: f32,
        y_end: f32,
    ) {
        let height = fb.height() as f32;
        let mut y = y_start;

        if y < 0.0 {
            let mut skipped = (-y).ceil();
            let band_rows = (y_end - y).ceil();
            if band_rows < skipped {
                skipped = band_rows.max(0.0);
            }

            y += skipped;
            left.x += left.slope * skipped;
            right.x += right.slope * skipped;
        }

        while y < y_end && y < height {
            if y >= 0.0 {
                fb.draw_span(y as i32, round(left.x), round(right.x), self.color);
            }

            y += 1.0;
            left.x += left.slope;
            right.x += right.slope;
        }
    }
}

impl Default for Rasterizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Round half up to a pixel column, saturating at the `i32` range
#[inline(always)]
fn round(x: f32) -> i32 {
    (x + 0.5) as i32
}

/// Horizontal change per scanline along the edge `from -> to`
///
/// Zero-height edges never cover a scanline, so their slope is irrelevant
/// and set to 0 instead of dividing by zero.
#[inline]
fn slope(from: Point, to: Point) -> f32 {
    let dy = to.y - from.y;
    if dy == 0.0 {
        0.0
    } else {
        (to.x - from.x) / dy
    }
}

/// Direction a chain walks through the vertex list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Walk {
    Forward,
    Backward,
}

impl Walk {
    #[inline]
    fn step(self, index: usize, count: usize) -> usize {
        match self {
            Walk::Forward => {
                if index + 1 >= count {
                    0
                } else {
                    index + 1
                }
            }
            Walk::Backward => {
                if index == 0 {
                    count - 1
                } else {
                    index - 1
                }
            }
        }
    }
}

/// One boundary chain of the polygon, walked from the top vertex down
#[derive(Debug, Clone, Copy)]
struct Chain {
    walk: Walk,
    /// Vertex the current edge starts at
    index: usize,
    /// Vertex the current edge ends at
    next: usize,
    /// X position at the current scanline
    x: f32,
    /// X change per scanline on the current edge
    slope: f32,
}

impl Chain {
    fn new(points: &[Point], start: usize, walk: Walk) -> Self {
        let next = walk.step(start, points.len());
        Self {
            walk,
            index: start,
            next,
            x: points[start].x,
            slope: slope(points[start], points[next]),
        }
    }

    #[inline]
    fn next_y(&self, points: &[Point]) -> f32 {
        points[self.next].y
    }

    /// Move onto the next edge, restarting x at its first vertex
    fn advance(&mut self, points: &[Point]) {
        self.index = self.next;
        self.next = self.walk.step(self.index, points.len());
        self.x = points[self.index].x;
        self.slope = slope(points[self.index], points[self.next]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::display::FrameGeometry;

    fn display() -> Vec<u8> {
        vec![0u8; FrameGeometry::DISPLAY.buffer_len()]
    }

    fn polygon(points: &[(f32, f32)]) -> Polygon {
        let mut polygon = Polygon::new(points.len());
        for (i, &(x, y)) in points.iter().enumerate() {
            polygon.set_point(i, Point::new(x, y));
        }
        polygon
    }

    fn pentagon() -> Polygon {
        polygon(&[
            (200.0, 120.0),
            (100.0, 150.0),
            (100.0, 170.0),
            (250.0, 220.0),
            (300.0, 200.0),
        ])
    }

    #[test]
    fn test_chain_walk_wraps() {
        assert_eq!(Walk::Forward.step(3, 5), 4);
        assert_eq!(Walk::Forward.step(4, 5), 0);
        assert_eq!(Walk::Backward.step(1, 5), 0);
        assert_eq!(Walk::Backward.step(0, 5), 4);
    }

    #[test]
    fn test_slope() {
        let a = Point::new(200.0, 120.0);
        assert_eq!(slope(a, Point::new(300.0, 200.0)), 1.25);
        assert_eq!(slope(a, Point::new(100.0, 120.0)), 0.0);
        assert!(slope(a, Point::new(100.0, 150.0)) < -3.3);
    }

    #[test]
    fn test_round() {
        assert_eq!(round(196.67), 197);
        assert_eq!(round(236.25), 236);
        assert_eq!(round(237.5), 238);
        assert_eq!(round(-0.7), 0);
        assert_eq!(round(f32::MAX), i32::MAX);
        assert_eq!(round(f32::NAN), 0);
    }

    #[test]
    fn test_pentagon_chain_walk() {
        let mut bytes = display();
        let mut fb = Framebuffer::new(&mut bytes, FrameGeometry::DISPLAY).unwrap();

        Rasterizer::new().fill_polygon(&mut fb, &pentagon());

        // Apex row has a zero-width span, last band ends before y = 220
        assert_eq!(fb.row_extent(119), None);
        assert_eq!(fb.row_extent(120), None);
        assert_eq!(fb.row_extent(220), None);

        // Band 1: left -10/3 per row from 200, right +1.25 per row from 200
        assert_eq!(fb.row_extent(121), Some((197, 201)));
        assert_eq!(fb.row_extent(149), Some((103, 236)));
        // Band 2: left is the vertical edge x = 100
        assert_eq!(fb.row_extent(150), Some((100, 238)));
        assert_eq!(fb.row_extent(160), Some((100, 250)));
        // Band 3: left +3 per row from 100
        assert_eq!(fb.row_extent(170), Some((100, 263)));
        assert_eq!(fb.row_extent(185), Some((145, 281)));
        // Band 4: right -2.5 per row from 300
        assert_eq!(fb.row_extent(200), Some((190, 300)));
        assert_eq!(fb.row_extent(210), Some((220, 275)));
        assert_eq!(fb.row_extent(219), Some((247, 253)));

        for y in 121..220 {
            let (first, end) = fb.row_extent(y).unwrap();
            // Filled rows are solid
            assert_eq!(fb.count_row(y), end - first, "row {}", y);
        }
    }

    #[test]
    fn test_triangle_row_widths() {
        let mut bytes = display();
        let mut fb = Framebuffer::new(&mut bytes, FrameGeometry::DISPLAY).unwrap();

        Rasterizer::new().fill_polygon(
            &mut fb,
            &polygon(&[(100.0, 50.0), (50.0, 150.0), (150.0, 150.0)]),
        );

        for k in 0..100 {
            assert_eq!(fb.count_row(50 + k), k, "row {}", 50 + k);
        }
        assert_eq!(fb.count_row(150), 0);
        assert_eq!(fb.count_row(49), 0);
    }

    #[test]
    fn test_rectangle_with_flat_edges() {
        let mut bytes = display();
        let mut fb = Framebuffer::new(&mut bytes, FrameGeometry::DISPLAY).unwrap();

        Rasterizer::new().fill_polygon(
            &mut fb,
            &polygon(&[(10.0, 10.0), (10.0, 30.0), (50.0, 30.0), (50.0, 10.0)]),
        );

        for y in 10..30 {
            assert_eq!(fb.row_extent(y), Some((10, 50)));
        }
        assert_eq!(fb.count_set(), 40 * 20);
    }

    #[test]
    fn test_reversed_winding_draws_nothing() {
        let mut bytes = display();
        let mut fb = Framebuffer::new(&mut bytes, FrameGeometry::DISPLAY).unwrap();

        Rasterizer::new().fill_polygon(
            &mut fb,
            &polygon(&[(10.0, 10.0), (50.0, 10.0), (50.0, 30.0), (10.0, 30.0)]),
        );

        assert_eq!(fb.count_set(), 0);
    }

    #[test]
    fn test_clipped_above_frame() {
        let mut bytes = display();
        let mut fb = Framebuffer::new(&mut bytes, FrameGeometry::DISPLAY).unwrap();

        Rasterizer::new().fill_polygon(
            &mut fb,
            &polygon(&[(100.0, -100.0), (0.0, 100.0), (200.0, 100.0)]),
        );

        // Accumulators kept moving through the hidden rows
        assert_eq!(fb.row_extent(0), Some((50, 150)));
        assert_eq!(fb.row_extent(99), Some((1, 200)));
        assert_eq!(fb.row_extent(100), None);
    }

    #[test]
    fn test_clipped_sides_and_bottom() {
        let mut bytes = display();
        let mut fb = Framebuffer::new(&mut bytes, FrameGeometry::DISPLAY).unwrap();

        Rasterizer::new().fill_polygon(
            &mut fb,
            &polygon(&[(200.0, 200.0), (-2000.0, 400.0), (2400.0, 400.0)]),
        );

        assert_eq!(fb.row_extent(200), None);
        assert_eq!(fb.row_extent(201), Some((189, 211)));
        assert_eq!(fb.row_extent(239), Some((0, 400)));
    }

    #[test]
    fn test_fully_offscreen() {
        let mut bytes = display();
        let mut fb = Framebuffer::new(&mut bytes, FrameGeometry::DISPLAY).unwrap();
        let rasterizer = Rasterizer::new();

        rasterizer.fill_polygon(
            &mut fb,
            &polygon(&[(100.0, -50.0), (50.0, -10.0), (150.0, -10.0)]),
        );
        rasterizer.fill_polygon(
            &mut fb,
            &polygon(&[(100.0, 300.0), (50.0, 400.0), (150.0, 400.0)]),
        );
        rasterizer.fill_polygon(
            &mut fb,
            &polygon(&[(-100.0, 50.0), (-150.0, 100.0), (-50.0, 100.0)]),
        );

        assert_eq!(fb.count_set(), 0);
    }

    #[test]
    fn test_degenerate_polygons() {
        let mut bytes = display();
        let mut fb = Framebuffer::new(&mut bytes, FrameGeometry::DISPLAY).unwrap();
        let rasterizer = Rasterizer::new();

        // Too few points
        rasterizer.fill_polygon(&mut fb, &Polygon::new(0));
        rasterizer.fill_polygon(&mut fb, &polygon(&[(1.0, 1.0), (5.0, 9.0)]));
        // All on one scanline
        rasterizer.fill_polygon(
            &mut fb,
            &polygon(&[(10.0, 10.0), (20.0, 10.0), (15.0, 10.0)]),
        );
        // All vertices identical
        rasterizer.fill_polygon(&mut fb, &Polygon::new(4));

        assert_eq!(fb.count_set(), 0);
    }

    #[test]
    fn test_extreme_coordinates_terminate() {
        let mut bytes = display();
        let mut fb = Framebuffer::new(&mut bytes, FrameGeometry::DISPLAY).unwrap();
        let rasterizer = Rasterizer::new();

        rasterizer.fill_polygon(
            &mut fb,
            &polygon(&[(0.0, -1e30), (-1e30, 1e30), (1e30, 1e30)]),
        );
        assert_eq!(fb.row_extent(120), Some((0, 400)));

        // Non-finite input must not hang or panic either
        rasterizer.fill_polygon(
            &mut fb,
            &polygon(&[(0.0, f32::NEG_INFINITY), (f32::NAN, 5.0), (3.0, f32::INFINITY)]),
        );
        rasterizer.fill_polygon(
            &mut fb,
            &polygon(&[(f32::NAN, f32::NAN), (1.0, 2.0), (3.0, 4.0)]),
        );
    }

    #[test]
    fn test_fill_color() {
        let mut bytes = display();
        let mut fb = Framebuffer::new(&mut bytes, FrameGeometry::DISPLAY).unwrap();
        fb.clear(true);

        let mut rasterizer = Rasterizer::with_color(0);
        assert_eq!(rasterizer.color(), 0);

        rasterizer.fill_polygon(
            &mut fb,
            &polygon(&[(10.0, 10.0), (10.0, 30.0), (50.0, 30.0), (50.0, 10.0)]),
        );
        assert_eq!(fb.count_set(), 400 * 240 - 40 * 20);

        rasterizer.set_color(FULL_MASK);
        assert_eq!(rasterizer, Rasterizer::default());
    }
}
