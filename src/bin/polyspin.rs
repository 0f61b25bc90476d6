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

//! Off-device host for the polygon renderer
//!
//! Plays the part of the device's update loop: clears the framebuffer, renders
//! the shape at the current crank angle and checks the frame time against the
//! refresh-rate budget. The last frame can be written out as a PBM image.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use std::time::{Duration, Instant};

use clap::Parser;
use log::{error, info, warn};
use polyspin::core::config::Config;
use polyspin::core::display::Framebuffer;
use polyspin::core::error::Result;
use polyspin::core::render::RenderContext;

/// Crank-driven polygon rasterizer
#[derive(Parser)]
#[command(name = "polyspin")]
#[command(about = "Rotate and rasterize a polygon onto a 1-bit framebuffer", long_about = None)]
struct Args {
    /// Path to a TOML config file (defaults are used when omitted)
    #[arg(short = 'c', long)]
    config: Option<PathBuf>,

    /// Crank angle of the first frame, in degrees
    #[arg(short = 'a', long, default_value = "0", allow_negative_numbers = true)]
    angle: f32,

    /// Crank movement per frame, in degrees
    #[arg(short = 's', long, default_value = "6", allow_negative_numbers = true)]
    step: f32,

    /// Number of frames to render
    #[arg(short = 'n', long, default_value = "60")]
    frames: u32,

    /// Write the last frame to this PBM file
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Print the effective config as TOML and exit
    #[arg(long)]
    print_config: bool,
}

fn main() -> Result<()> {
    // Optional .env for development settings such as RUST_LOG
    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            eprintln!("Warning: Failed to load .env file: {}", e);
        }
    }

    // Initialize logger with default level INFO
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    info!("polyspin v{}", env!("CARGO_PKG_VERSION"));

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => {
            info!("Loading config from: {}", path.display());
            Config::load(path).inspect_err(|e| error!("Failed to load config: {}", e))?
        }
        None => Config::default(),
    };

    if args.print_config {
        print!("{}", config.to_toml_string()?);
        return Ok(());
    }

    let geometry = config.geometry()?;
    let budget = config.frame_budget();
    let mut ctx = RenderContext::from_config(&config)?;

    info!(
        "Display {}x{} (stride {} bytes), {} Hz, {}-point shape",
        geometry.width,
        geometry.height,
        geometry.stride,
        config.display.refresh_rate,
        ctx.source().len()
    );

    // Host-owned display memory, borrowed by the renderer every frame
    let mut memory = vec![0u8; geometry.buffer_len()];
    let mut fb = Framebuffer::new(&mut memory, geometry)?;

    let log_interval = (args.frames / 10).max(1);
    let mut total = Duration::ZERO;
    let mut slowest = Duration::ZERO;
    let mut over_budget = 0u32;
    let mut angle = args.angle;

    for frame in 0..args.frames {
        let start = Instant::now();

        fb.clear(false);
        ctx.render_crank(angle, &mut fb);

        let elapsed = start.elapsed();
        total += elapsed;
        slowest = slowest.max(elapsed);

        if elapsed > budget {
            over_budget += 1;
            warn!("Frame {} took {:?} (budget {:?})", frame, elapsed, budget);
        }

        if frame % log_interval == 0 {
            info!(
                "Frame {}/{} | crank {:.1}° | {} pixels set | {:?}",
                frame,
                args.frames,
                angle,
                fb.count_set(),
                elapsed
            );
        }

        angle = (angle + args.step).rem_euclid(360.0);
    }

    if args.frames > 0 {
        info!(
            "Rendered {} frames: mean {:?}, slowest {:?}, {} over budget",
            args.frames,
            total / args.frames,
            slowest,
            over_budget
        );
    }

    if let Some(path) = &args.output {
        let mut out = BufWriter::new(File::create(path)?);
        fb.write_pbm(&mut out)?;
        out.flush()?;
        info!("Wrote last frame to {}", path.display());
    }

    ctx.destroy();

    Ok(())
}
