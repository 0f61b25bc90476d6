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

//! Render configuration
//!
//! Settings are read from a TOML file. Every field has a default, so an empty
//! file (or no file at all) gives the stock display and shape:
//!
//! ```toml
//! [display]
//! width = 400
//! height = 240
//! stride = 52
//! refresh_rate = 50.0
//!
//! [render]
//! pivot = [200.0, 120.0]
//! color = 0xFFFFFFFF
//! points = [[200.0, 120.0], [100.0, 150.0], [100.0, 170.0], [250.0, 220.0], [300.0, 200.0]]
//! ```

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::core::display::{FrameGeometry, FULL_MASK};
use crate::core::error::{ConfigError, PolygonError, Result};
use crate::core::polygon::{Point, Polygon};
use crate::core::render::{default_shape, DEFAULT_PIVOT};

/// Top-level configuration
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub display: DisplayConfig,
    pub render: RenderConfig,
}

/// Framebuffer layout and refresh rate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Visible pixels per row
    pub width: usize,
    /// Number of rows
    pub height: usize,
    /// Bytes per row
    pub stride: usize,
    /// Frames per second the host drives the renderer at
    pub refresh_rate: f32,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            width: FrameGeometry::DISPLAY_WIDTH,
            height: FrameGeometry::DISPLAY_HEIGHT,
            stride: FrameGeometry::DISPLAY_STRIDE,
            refresh_rate: 50.0,
        }
    }
}

/// Shape, rotation pivot and fill word
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Rotation centre `[x, y]`
    pub pivot: [f32; 2],
    /// Fill word; set bits become set pixels
    pub color: u32,
    /// Source polygon vertices `[x, y]`
    pub points: Vec<[f32; 2]>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            pivot: [DEFAULT_PIVOT.x, DEFAULT_PIVOT.y],
            color: FULL_MASK,
            points: default_shape().points().iter().map(|p| [p.x, p.y]).collect(),
        }
    }
}

impl Config {
    /// Parse and validate a TOML document
    pub fn from_toml_str(text: &str) -> std::result::Result<Self, ConfigError> {
        let config: Config = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a TOML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        log::debug!("Loading config from {}", path.display());

        let text = std::fs::read_to_string(path)?;
        Ok(Self::from_toml_str(&text)?)
    }

    /// Serialize back to TOML
    pub fn to_toml_string(&self) -> std::result::Result<String, ConfigError> {
        Ok(toml::to_string(self)?)
    }

    /// Check every setting
    ///
    /// A shape wound the opposite way to what the rasterizer expects is
    /// accepted with a warning, since it still renders without faults.
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        self.geometry()?;

        let rate = self.display.refresh_rate;
        if !rate.is_finite() || rate <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "refresh_rate must be a positive number, got {}",
                rate
            )));
        }

        if !self.pivot().is_finite() {
            return Err(ConfigError::Invalid(format!(
                "pivot must be finite, got {:?}",
                self.render.pivot
            )));
        }

        let shape = self
            .source_polygon()
            .map_err(|e| ConfigError::Invalid(e.to_string()))?;

        if shape.signed_area() > 0.0 {
            log::warn!(
                "Shape vertices are wound the wrong way; list them so the walk from the top vertex goes down the left side first"
            );
        }

        Ok(())
    }

    /// Framebuffer geometry
    pub fn geometry(&self) -> std::result::Result<FrameGeometry, ConfigError> {
        FrameGeometry::new(
            self.display.width,
            self.display.height,
            self.display.stride,
        )
        .map_err(|e| ConfigError::Invalid(e.to_string()))
    }

    /// Time available for one frame at the configured refresh rate
    pub fn frame_budget(&self) -> Duration {
        Duration::from_secs_f64(1.0 / f64::from(self.display.refresh_rate))
    }

    /// Rotation pivot
    pub fn pivot(&self) -> Point {
        Point::from(self.render.pivot)
    }

    /// Source polygon built from the configured vertices
    pub fn source_polygon(&self) -> std::result::Result<Polygon, PolygonError> {
        Polygon::from_points(self.render.points.iter().copied())
    }
}
