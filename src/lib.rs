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

//! Crank-driven polygon rasterizer for 1-bit framebuffers
//!
//! This library rotates a single filled polygon by a rotary input angle and
//! scan-converts it into a packed monochrome framebuffer every frame.
//!
//! # Example
//!
//! ```
//! use polyspin::core::display::{FrameGeometry, Framebuffer};
//! use polyspin::core::render::RenderContext;
//!
//! let geometry = FrameGeometry::DISPLAY;
//! let mut bytes = vec![0u8; geometry.buffer_len()];
//! let mut fb = Framebuffer::new(&mut bytes, geometry).unwrap();
//!
//! let mut ctx = RenderContext::default();
//! ctx.render_crank(90.0, &mut fb);
//!
//! assert!(fb.count_set() > 0);
//! ```

pub mod core;
