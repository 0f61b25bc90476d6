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

//! Polygon rendering
//!
//! This module turns polygons into pixels:
//! - `rasterizer`: scanline fill of one polygon via left/right edge chains
//! - `frame`: per-frame driver that rotates the source shape and fills it
//!
//! # Pipeline
//!
//! ```text
//! crank angle ──> RenderContext::render_frame
//!                   │ rotate source polygon into working polygon
//!                   ▼
//!                 Rasterizer::fill_polygon
//!                   │ one span per scanline
//!                   ▼
//!                 Framebuffer::draw_span
//! ```

mod frame;
mod rasterizer;

pub use frame::{default_shape, RenderContext, DEFAULT_PIVOT};
pub use rasterizer::Rasterizer;
