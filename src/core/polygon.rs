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

//! Polygon model
//!
//! Vertex storage for the shapes fed to the rasterizer. A polygon is an
//! ordered, implicitly closed list of points whose length is fixed when it is
//! created, so a scratch polygon can be rewritten every frame without
//! reallocating.

use crate::core::error::PolygonError;

/// A 2D point in screen space (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    /// X coordinate in pixels
    pub x: f32,
    /// Y coordinate in pixels
    pub y: f32,
}

impl Point {
    /// Create a point
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// True if both coordinates are finite
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Rotate this point about `pivot`
    ///
    /// Takes a precomputed `cos`/`sin` pair so a whole polygon can be rotated
    /// with a single trigonometric evaluation. The rotation is applied as an
    /// offset from the point itself, so `cos = 1, sin = 0` returns the point
    /// bit for bit.
    ///
    /// # Examples
    ///
    /// ```
    /// use polyspin::core::polygon::Point;
    ///
    /// let p = Point::new(10.0, 0.0);
    /// let angle = std::f32::consts::FRAC_PI_2;
    /// let r = p.rotated_about(Point::new(0.0, 0.0), angle.cos(), angle.sin());
    ///
    /// assert!(r.x.abs() < 1e-5);
    /// assert!((r.y - 10.0).abs() < 1e-5);
    /// ```
    #[inline]
    pub fn rotated_about(&self, pivot: Point, cos: f32, sin: f32) -> Point {
        let dx = self.x - pivot.x;
        let dy = self.y - pivot.y;
        Point {
            x: self.x + (dx * cos - dy * sin - dx),
            y: self.y + (dx * sin + dy * cos - dy),
        }
    }
}

impl From<(f32, f32)> for Point {
    fn from((x, y): (f32, f32)) -> Self {
        Self { x, y }
    }
}

impl From<[f32; 2]> for Point {
    fn from([x, y]: [f32; 2]) -> Self {
        Self { x, y }
    }
}

/// An ordered, implicitly closed sequence of points
///
/// The vertex count is fixed at creation. The last point connects back to the
/// first. For correct rasterization the vertices must describe a simple
/// (non-self-intersecting) polygon; this is not checked.
///
/// # Examples
///
/// ```
/// use polyspin::core::polygon::{Point, Polygon};
///
/// let mut triangle = Polygon::new(3);
/// triangle.set_point(0, Point::new(10.0, 10.0));
/// triangle.set_point(1, Point::new(50.0, 40.0));
/// triangle.set_point(2, Point::new(10.0, 40.0));
///
/// assert_eq!(triangle.len(), 3);
/// assert_eq!(triangle.top_bottom(), Some((0, 1)));
///
/// triangle.destroy();
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    points: Box<[Point]>,
}

impl Polygon {
    /// Allocate a polygon of `count` points at the origin
    ///
    /// The caller is expected to fill in the coordinates.
    pub fn new(count: usize) -> Self {
        Self {
            points: vec![Point::default(); count].into_boxed_slice(),
        }
    }

    /// Build a polygon from a list of vertices
    ///
    /// # Returns
    ///
    /// - `Err(PolygonError::TooFewPoints)` for fewer than 3 vertices
    /// - `Err(PolygonError::NonFinitePoint)` if any coordinate is NaN or infinite
    pub fn from_points<I, P>(points: I) -> Result<Self, PolygonError>
    where
        I: IntoIterator<Item = P>,
        P: Into<Point>,
    {
        let points: Box<[Point]> = points.into_iter().map(Into::into).collect();

        if points.len() < 3 {
            return Err(PolygonError::TooFewPoints { got: points.len() });
        }

        if let Some(index) = points.iter().position(|p| !p.is_finite()) {
            return Err(PolygonError::NonFinitePoint { index });
        }

        Ok(Self { points })
    }

    /// Release the vertex storage
    ///
    /// Consumes the polygon, so the handle cannot be used afterwards.
    pub fn destroy(self) {
        log::trace!("Destroying polygon with {} points", self.points.len());
        drop(self);
    }

    /// Number of vertices
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True if the polygon has no vertices
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// All vertices in order
    #[inline(always)]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// All vertices in order, mutable
    ///
    /// The slice length cannot change, only the coordinates.
    #[inline(always)]
    pub fn points_mut(&mut self) -> &mut [Point] {
        &mut self.points
    }

    /// Vertex at `index`
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    #[inline(always)]
    pub fn point(&self, index: usize) -> Point {
        self.points[index]
    }

    /// Overwrite the vertex at `index`
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    #[inline(always)]
    pub fn set_point(&mut self, index: usize, point: Point) {
        self.points[index] = point;
    }

    /// Indices of the topmost and bottommost vertices
    ///
    /// Ties go to the vertex that comes first. Returns `None` for an empty
    /// polygon.
    pub fn top_bottom(&self) -> Option<(usize, usize)> {
        let first = self.points.first()?;

        let mut top = 0;
        let mut bottom = 0;
        let mut top_y = first.y;
        let mut bottom_y = first.y;

        for (i, p) in self.points.iter().enumerate().skip(1) {
            if p.y < top_y {
                top_y = p.y;
                top = i;
            }
            if p.y > bottom_y {
                bottom_y = p.y;
                bottom = i;
            }
        }

        Some((top, bottom))
    }

    /// Axis-aligned bounding box as `(min, max)` corners
    pub fn bounds(&self) -> Option<(Point, Point)> {
        let first = *self.points.first()?;

        Some(self.points.iter().skip(1).fold((first, first), |(lo, hi), p| {
            (
                Point::new(lo.x.min(p.x), lo.y.min(p.y)),
                Point::new(hi.x.max(p.x), hi.y.max(p.y)),
            )
        }))
    }

    /// Shoelace area in screen coordinates (y down)
    ///
    /// Negative when the vertex order walks down the left side of the shape
    /// first, which is the order the rasterizer expects.
    pub fn signed_area(&self) -> f32 {
        let n = self.points.len();
        let twice: f32 = (0..n)
            .map(|i| {
                let a = self.points[i];
                let b = self.points[(i + 1) % n];
                a.x * b.y - b.x * a.y
            })
            .sum();
        twice / 2.0
    }

    /// Average of the vertices
    ///
    /// This is the vertex centroid, not the area centroid.
    pub fn centroid(&self) -> Option<Point> {
        if self.points.is_empty() {
            return None;
        }

        let n = self.points.len() as f32;
        let (sx, sy) = self
            .points
            .iter()
            .fold((0.0f32, 0.0f32), |(sx, sy), p| (sx + p.x, sy + p.y));

        Some(Point::new(sx / n, sy / n))
    }
}
