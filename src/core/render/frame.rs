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

//! Per-frame driver
//!
//! Rotates the source polygon by the crank angle into a scratch polygon and
//! rasterizes the result. Both polygons are allocated once, when the context
//! is built, so rendering a frame never touches the heap.

use crate::core::config::Config;
use crate::core::display::Framebuffer;
use crate::core::error::Result;
use crate::core::polygon::{Point, Polygon};

use super::Rasterizer;

/// Point the shape rotates about, the centre of the 400×240 display
pub const DEFAULT_PIVOT: Point = Point::new(200.0, 120.0);

/// The built-in five-sided shape
pub fn default_shape() -> Polygon {
    let mut shape = Polygon::new(5);
    shape.set_point(0, Point::new(200.0, 120.0));
    shape.set_point(1, Point::new(100.0, 150.0));
    shape.set_point(2, Point::new(100.0, 170.0));
    shape.set_point(3, Point::new(250.0, 220.0));
    shape.set_point(4, Point::new(300.0, 200.0));
    shape
}

/// Drawing state owned by the host
///
/// Holds the authoritative source shape, the scratch polygon it is rotated
/// into every frame, the rotation pivot and the rasterizer.
///
/// # Examples
///
/// ```
/// use polyspin::core::display::{FrameGeometry, Framebuffer};
/// use polyspin::core::render::RenderContext;
///
/// let mut bytes = vec![0u8; FrameGeometry::DISPLAY.buffer_len()];
/// let mut ctx = RenderContext::default();
///
/// for frame in 0..4 {
///     let mut fb = Framebuffer::new(&mut bytes, FrameGeometry::DISPLAY).unwrap();
///     fb.clear(false);
///     ctx.render_crank(frame as f32 * 90.0, &mut fb);
///     assert!(fb.count_set() > 0);
/// }
///
/// ctx.destroy();
/// ```
#[derive(Debug, Clone)]
pub struct RenderContext {
    /// Authoritative shape, never modified by rendering
    source: Polygon,
    /// Scratch polygon rewritten every frame
    working: Polygon,
    /// Rotation centre
    pivot: Point,
    rasterizer: Rasterizer,
}

impl RenderContext {
    /// Create a context for `source` with the default pivot
    pub fn new(source: Polygon) -> Self {
        let working = Polygon::new(source.len());

        log::debug!(
            "Render context: {} points, signed area {}",
            source.len(),
            source.signed_area()
        );

        Self {
            source,
            working,
            pivot: DEFAULT_PIVOT,
            rasterizer: Rasterizer::new(),
        }
    }

    /// Build a context from a validated configuration
    ///
    /// Uses the configured shape, pivot and fill word.
    pub fn from_config(config: &Config) -> Result<Self> {
        config.validate()?;

        let source = config.source_polygon()?;
        let mut ctx = Self::new(source).with_pivot(config.pivot());
        ctx.rasterizer.set_color(config.render.color);

        Ok(ctx)
    }

    /// Replace the rotation pivot
    pub fn with_pivot(mut self, pivot: Point) -> Self {
        self.pivot = pivot;
        self
    }

    /// Rotation pivot
    pub fn pivot(&self) -> Point {
        self.pivot
    }

    /// Change the rotation pivot
    pub fn set_pivot(&mut self, pivot: Point) {
        self.pivot = pivot;
    }

    /// Source shape
    pub fn source(&self) -> &Polygon {
        &self.source
    }

    /// Shape as rotated for the last frame
    pub fn working(&self) -> &Polygon {
        &self.working
    }

    /// Rasterizer used for every frame
    pub fn rasterizer_mut(&mut self) -> &mut Rasterizer {
        &mut self.rasterizer
    }

    /// Rotate the source shape by `angle` radians into the working polygon
    ///
    /// ```text
    /// x' = (x - cx)·cos a - (y - cy)·sin a + cx
    /// y' = (x - cx)·sin a + (y - cy)·cos a + cy
    /// ```
    pub fn rotate(&mut self, angle: f32) -> &Polygon {
        let (sin, cos) = angle.sin_cos();
        let pivot = self.pivot;

        for (dst, src) in self
            .working
            .points_mut()
            .iter_mut()
            .zip(self.source.points())
        {
            *dst = src.rotated_about(pivot, cos, sin);
        }

        &self.working
    }

    /// Render one frame at `angle` radians
    ///
    /// The framebuffer is drawn over, not cleared; clearing is up to the host.
    pub fn render_frame(&mut self, angle: f32, fb: &mut Framebuffer<'_>) {
        log::trace!("Rendering frame at {} rad", angle);

        self.rotate(angle);
        self.rasterizer.fill_polygon(fb, &self.working);
    }

    /// Render one frame at a crank position given in degrees
    pub fn render_crank(&mut self, degrees: f32, fb: &mut Framebuffer<'_>) {
        self.render_frame(degrees.to_radians(), fb);
    }

    /// Release both polygon buffers
    pub fn destroy(self) {
        log::debug!("Destroying render context");
        self.source.destroy();
        self.working.destroy();
    }
}

impl Default for RenderContext {
    fn default() -> Self {
        Self::new(default_shape())
    }
}
