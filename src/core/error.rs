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

/// Error types
use thiserror::Error;

/// Result type for polyspin operations
pub type Result<T> = std::result::Result<T, PolyspinError>;

/// Main error type
///
/// Only construction and I/O can fail. Drawing itself never returns an error:
/// out-of-range spans and rows are clipped instead.
#[derive(Error, Debug)]
pub enum PolyspinError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("Framebuffer error: {0}")]
    Framebuffer(#[from] FramebufferError),

    #[error("Polygon error: {0}")]
    Polygon(#[from] PolygonError),
}

/// Framebuffer-specific error types
#[derive(Error, Debug, PartialEq, Eq)]
pub enum FramebufferError {
    #[error("Invalid framebuffer geometry: {width}x{height}, stride {stride} bytes")]
    InvalidGeometry {
        width: usize,
        height: usize,
        stride: usize,
    },

    #[error("Framebuffer too small: {got} bytes (expected at least {expected})")]
    BufferTooSmall { expected: usize, got: usize },
}

/// Polygon-specific error types
#[derive(Error, Debug, PartialEq, Eq)]
pub enum PolygonError {
    #[error("Polygon needs at least 3 points, got {got}")]
    TooFewPoints { got: usize },

    #[error("Point {index} has a non-finite coordinate")]
    NonFinitePoint { index: usize },
}

/// Config-specific error types
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Invalid value: {0}")]
    Invalid(String),
}
