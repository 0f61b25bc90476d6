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

//! Core rendering components
//!
//! This module contains the drawing pipeline:
//! - Display (packed 1-bit framebuffer and span writer)
//! - Polygon model (vertex storage)
//! - Render (scanline rasterizer and per-frame driver)
//! - Config (TOML render configuration)

pub mod config;
pub mod display;
pub mod error;
pub mod polygon;
pub mod render;

// Re-export commonly used types
pub use config::Config;
pub use display::{FrameGeometry, Framebuffer};
pub use error::{PolyspinError, Result};
pub use polygon::{Point, Polygon};
pub use render::{Rasterizer, RenderContext};
